//! Classification backends.
//!
//! Only the static placeholder exists today. Handlers talk to the
//! [`Classifier`] trait so a model-backed implementation can replace it
//! without changing the HTTP surface.

use std::path::Path;

use crate::models::{CaptionResult, ClassificationResults, LabelPrediction};

/// What the handler knows about a request when it asks for a classification.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassifyInput<'a> {
    pub image: Option<&'a Path>,
    pub tags: Option<&'a str>,
    pub metadata: Option<&'a str>,
}

pub trait Classifier: Send + Sync {
    fn classify(&self, input: &ClassifyInput<'_>) -> ClassificationResults;
}

/// Returns the same canned pothole report for every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticClassifier;

impl Classifier for StaticClassifier {
    fn classify(&self, _input: &ClassifyInput<'_>) -> ClassificationResults {
        ClassificationResults {
            department: LabelPrediction {
                prediction: "Road".to_string(),
                confidence: 0.92,
                model_info: "dept-vit-v1.3-multimodal-dummy".to_string(),
            },
            severity: LabelPrediction {
                prediction: "high".to_string(),
                confidence: 0.85,
                model_info: "sev-vit-v1.1-multimodal-dummy".to_string(),
            },
            caption: CaptionResult {
                text: "Large pothole observed on road surface.".to_string(),
                model_info: "caption-blip-mini-v1-dummy".to_string(),
            },
            suggested_fixes: vec![
                "Assess structural integrity.".to_string(),
                "Fill with appropriate asphalt mix.".to_string(),
                "Compact and level the surface.".to_string(),
            ],
        }
    }
}
