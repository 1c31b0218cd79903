use classifier::impl_tract_onnx::ClassifierTractOnnx;
use classifier::interface::Classifier;
use config::Config;
use label_registry::LabelRegistry;
use logger::impl_console::LoggerConsole;
use logger::interface::Logger;
use pipeline::Pipeline;
use reference_dataset::ReferenceDataset;
use std::sync::Arc;

mod canonical;
mod classifier;
mod config;
mod error;
mod label_registry;
mod logger;
mod pipeline;
mod preprocess;
mod reference_dataset;
mod server;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let labels = Arc::new(LabelRegistry::load(&config.labels_path)?);
    let _ = logger.info(&format!("loaded {} labels", labels.len()));

    let reference = Arc::new(ReferenceDataset::load(&config.reference_path)?);
    let _ = logger.info(&format!("loaded {} reference records", reference.len()));

    // A missing or broken model degrades the pipeline instead of killing
    // the server; every request then reports the model as unavailable.
    let classifier: Option<Arc<dyn Classifier + Send + Sync>> =
        match ClassifierTractOnnx::new(&config.model_path) {
            Ok(classifier) => Some(Arc::new(classifier)),
            Err(e) => {
                let _ = logger.error(&format!("model loading failed: {}", e));
                None
            }
        };

    let pipeline = Arc::new(Pipeline::new(
        labels,
        reference,
        classifier,
        logger.with_namespace("pipeline"),
    ));

    let _ = logger.info(&format!("listening on {}", config.listen_addr));
    server::serve(&config.listen_addr, pipeline).await
}
