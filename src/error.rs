use thiserror::Error;

/// Startup failures. Label and reference loading are fatal; a model that
/// fails to load is not represented here because the server keeps running
/// without it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("labels resource unreadable: {0}")]
    LabelsUnreadable(std::io::Error),
    #[error("no labels found in labels resource")]
    NoLabels,
    #[error("reference resource unreadable: {0}")]
    ReferenceUnreadable(csv::Error),
    #[error("reference resource is missing the medicine_name column")]
    MissingNameColumn,
}

/// Per-request failures. Each variant maps to one fixed user-facing
/// message; the Display output is what the boundary renders.
#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error("Model not loaded on server")]
    ModelUnavailable,
    #[error("Invalid image file")]
    InvalidImage,
    #[error("Prediction error: {0}")]
    Inference(String),
    #[error("Prediction index out of range")]
    IndexOutOfRange,
}
