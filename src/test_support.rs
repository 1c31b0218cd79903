use crate::classifier::interface::Classifier;
use crate::label_registry::LabelRegistry;
use crate::logger::impl_console::LoggerConsole;
use crate::pipeline::Pipeline;
use crate::reference_dataset::ReferenceDataset;
use std::io::Cursor;
use std::sync::Arc;

pub const REFERENCE_CSV: &str = "\
Medicine_Name ,Drug_Class,Primary_Use,Description
Amoxicillin,Antibiotic,Infection,Broad-spectrum penicillin
Ibuprofen,NSAID,Pain relief,Non-steroidal anti-inflammatory
";

pub fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let mut img = image::ImageBuffer::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = image::Rgb(color);
    }

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

pub fn pipeline_with(
    labels: &str,
    reference_csv: &str,
    classifier: Option<Arc<dyn Classifier + Send + Sync>>,
) -> Pipeline {
    let labels = Arc::new(LabelRegistry::from_reader(labels.as_bytes()).unwrap());
    let reference = Arc::new(ReferenceDataset::from_reader(reference_csv.as_bytes()).unwrap());
    let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));

    Pipeline::new(labels, reference, classifier, logger)
}
