use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LabelPrediction {
    pub prediction: String,
    pub confidence: f64,
    pub model_info: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CaptionResult {
    pub text: String,
    pub model_info: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClassificationResults {
    pub department: LabelPrediction,
    pub severity: LabelPrediction,
    pub caption: CaptionResult,
    pub suggested_fixes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClassifyResponse {
    pub request_id: String,
    pub results: ClassificationResults,
    pub processing_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
