use crate::canonical::canonicalize;
use crate::classifier::interface::Classifier;
use crate::error::PredictError;
use crate::label_registry::LabelRegistry;
use crate::logger::interface::Logger;
use crate::preprocess;
use crate::reference_dataset::ReferenceDataset;
use std::sync::Arc;

/// What the boundary renders for a successful request.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub medicine_name: String,
    pub drug_class: String,
    pub primary_use: String,
    pub description: String,
    pub predicted_class: String,
}

/// Orchestrates validate -> preprocess -> infer -> decode -> lookup.
/// All dependencies are injected at startup and read-only afterwards.
/// A `None` classifier is the degraded mode after a failed model load.
pub struct Pipeline {
    labels: Arc<LabelRegistry>,
    reference: Arc<ReferenceDataset>,
    classifier: Option<Arc<dyn Classifier + Send + Sync>>,
    logger: Arc<dyn Logger>,
}

impl Pipeline {
    pub fn new(
        labels: Arc<LabelRegistry>,
        reference: Arc<ReferenceDataset>,
        classifier: Option<Arc<dyn Classifier + Send + Sync>>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            labels,
            reference,
            classifier,
            logger,
        }
    }

    pub fn predict(&self, image_bytes: &[u8]) -> Result<Prediction, PredictError> {
        // Degraded mode is checked before the image is touched.
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(PredictError::ModelUnavailable)?;

        preprocess::validate(image_bytes)?;

        // Decode and inference failures are not distinguished further.
        let scores = preprocess::preprocess(image_bytes)
            .and_then(|tensor| classifier.predict(tensor))
            .map_err(|e| PredictError::Inference(e.to_string()))?;

        let index = argmax(&scores).ok_or(PredictError::IndexOutOfRange)?;

        // Guards against a registry/model output-count mismatch.
        let label = match self.labels.get(index) {
            Some(label) => label.to_string(),
            None => return Err(PredictError::IndexOutOfRange),
        };

        let fields = self.reference.lookup(&canonicalize(&label));

        let _ = self
            .logger
            .info(&format!("predicted class {} ({})", label, index));

        Ok(Prediction {
            medicine_name: label.clone(),
            drug_class: fields.drug_class,
            primary_use: fields.primary_use,
            description: fields.description,
            predicted_class: label,
        })
    }
}

fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::impl_fake::ClassifierFake;
    use crate::test_support::{pipeline_with, png_bytes, REFERENCE_CSV};

    #[test]
    fn test_argmax_picks_highest_score() {
        assert_eq!(argmax(&[0.1, 0.9, 0.3]), Some(1));
        assert_eq!(argmax(&[0.5]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_predict_matches_reference_row() {
        let classifier = ClassifierFake::with_scores(vec![0.8, 0.2]);
        let pipeline = pipeline_with(
            "amoxicillin\nibuprofen\n",
            REFERENCE_CSV,
            Some(Arc::new(classifier)),
        );

        let prediction = pipeline.predict(&png_bytes(32, 32, [200, 10, 10])).unwrap();

        assert_eq!(prediction.predicted_class, "amoxicillin");
        assert_eq!(prediction.medicine_name, "amoxicillin");
        assert_eq!(prediction.drug_class, "Antibiotic");
        assert_eq!(prediction.primary_use, "Infection");
    }

    #[test]
    fn test_predict_unmatched_label_gets_not_available_fields() {
        let classifier = ClassifierFake::with_scores(vec![0.1, 0.9]);
        let pipeline = pipeline_with(
            "amoxicillin\nunknown pill\n",
            REFERENCE_CSV,
            Some(Arc::new(classifier)),
        );

        let prediction = pipeline.predict(&png_bytes(32, 32, [0, 0, 0])).unwrap();

        assert_eq!(prediction.predicted_class, "unknown pill");
        assert_eq!(prediction.drug_class, "N/A");
        assert_eq!(prediction.primary_use, "N/A");
        assert_eq!(prediction.description, "N/A");
    }

    #[test]
    fn test_predict_index_past_label_count_is_out_of_range() {
        // Three model outputs, two labels: argmax lands on index 2.
        let classifier = ClassifierFake::with_scores(vec![0.1, 0.2, 0.9]);
        let pipeline = pipeline_with(
            "amoxicillin\nibuprofen\n",
            REFERENCE_CSV,
            Some(Arc::new(classifier)),
        );

        let result = pipeline.predict(&png_bytes(32, 32, [0, 0, 0]));

        assert_eq!(result, Err(PredictError::IndexOutOfRange));
    }

    #[test]
    fn test_predict_without_model_short_circuits() {
        let pipeline = pipeline_with("amoxicillin\n", REFERENCE_CSV, None);

        // Invalid bytes on purpose: the model check must come first, so the
        // image is never validated.
        let result = pipeline.predict(b"not an image");

        assert_eq!(result, Err(PredictError::ModelUnavailable));
    }

    #[test]
    fn test_predict_invalid_image_rejected_before_inference() {
        let classifier = ClassifierFake::with_scores(vec![1.0]);
        let pipeline = pipeline_with("amoxicillin\n", REFERENCE_CSV, Some(Arc::new(classifier)));

        let result = pipeline.predict(b"not an image");

        assert_eq!(result, Err(PredictError::InvalidImage));
    }
}
