use tract_onnx::prelude::Tensor;

pub trait Classifier {
    /// Runs the model on a preprocessed input tensor and returns one score
    /// per output channel. Scores are not calibrated probabilities; only
    /// argmax is meaningful. The caller is responsible for handing in a
    /// tensor of the model's expected shape.
    fn predict(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
