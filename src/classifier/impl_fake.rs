use crate::classifier::interface::Classifier;
use rand::distr::{Distribution, Uniform};
use tract_onnx::prelude::Tensor;

/// Stand-in classifier for tests and for running the server without a
/// model artifact.
#[allow(dead_code)]
pub struct ClassifierFake {
    scores: Option<Vec<f32>>,
    num_classes: usize,
}

#[allow(dead_code)]
impl ClassifierFake {
    /// Always returns the same score vector.
    pub fn with_scores(scores: Vec<f32>) -> Self {
        Self {
            num_classes: scores.len(),
            scores: Some(scores),
        }
    }

    /// Returns a fresh uniform random score vector per call.
    pub fn random(num_classes: usize) -> Self {
        Self {
            scores: None,
            num_classes,
        }
    }
}

impl Classifier for ClassifierFake {
    fn predict(&self, _input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(scores) = &self.scores {
            return Ok(scores.clone());
        }

        let mut rng = rand::rng();
        let score_dist = Uniform::new(0.0f32, 1.0)?;

        Ok((0..self.num_classes)
            .map(|_| score_dist.sample(&mut rng))
            .collect())
    }
}
