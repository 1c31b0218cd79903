use crate::error::PredictError;
use image::imageops::{self, FilterType};
use image::ImageReader;
use std::io::Cursor;
use tract_onnx::prelude::*;

pub const IMAGE_WIDTH: u32 = 126;
pub const IMAGE_HEIGHT: u32 = 126;

/// Cheap corruption check: decodes only enough of the stream to read the
/// image header. The input slice is untouched and fully re-readable.
pub fn validate(image_bytes: &[u8]) -> Result<(), PredictError> {
    ImageReader::new(Cursor::new(image_bytes))
        .with_guessed_format()
        .map_err(|_| PredictError::InvalidImage)?
        .into_dimensions()
        .map_err(|_| PredictError::InvalidImage)?;
    Ok(())
}

/// Decodes, forces RGB, resizes to 126x126 and normalizes into [0,1],
/// producing the model's `[1, 126, 126, 3]` input tensor. Identical bytes
/// always yield a bit-identical tensor.
pub fn preprocess(image_bytes: &[u8]) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let rgb = image::load_from_memory(image_bytes)?.to_rgb8();
    let resized = imageops::resize(&rgb, IMAGE_WIDTH, IMAGE_HEIGHT, FilterType::Triangle);

    let mut tensor = Tensor::zero::<f32>(&[1, IMAGE_HEIGHT as usize, IMAGE_WIDTH as usize, 3])?;
    let values = tensor.as_slice_mut::<f32>()?;

    // RGB8 raw bytes are already in HWC order, matching the tensor layout.
    for (value, byte) in values.iter_mut().zip(resized.as_raw()) {
        *value = *byte as f32 / 255.0;
    }

    Ok(tensor)
}
