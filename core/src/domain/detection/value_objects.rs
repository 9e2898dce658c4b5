use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::detection::entities::{Detection, RawCandidate};

#[derive(Debug, Clone)]
pub struct NormalizeDetectionsInput {
    pub candidates: Vec<RawCandidate>,
    pub confidence_threshold: f64,
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub confidence_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectionSummary {
    pub item_count: usize,
    pub average_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageAnalysis {
    pub detections: Vec<Detection>,
    pub summary: DetectionSummary,
}

impl ImageAnalysis {
    /// Canonical ingredient tokens in detection order, without repeats.
    pub fn ingredient_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        for detection in &self.detections {
            if !tokens.contains(&detection.category) {
                tokens.push(detection.category.clone());
            }
        }
        tokens
    }
}
