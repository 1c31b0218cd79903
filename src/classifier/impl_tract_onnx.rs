use crate::classifier::interface::Classifier;
use std::path::Path;
use tract_onnx::prelude::*;

pub struct ClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
}

impl ClassifierTractOnnx {
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { model })
    }
}

impl Classifier for ClassifierTractOnnx {
    fn predict(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let scores = outputs[0].to_array_view::<f32>()?;

        Ok(scores.iter().copied().collect())
    }
}
