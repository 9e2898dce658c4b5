use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    detection::{
        entities::{Detection, RawCandidate},
        value_objects::{AnalyzeImageInput, ImageAnalysis, NormalizeDetectionsInput},
    },
};

/// Vision capability that reports food candidates for an image
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    fn detect_food(
        &self,
        image_data: Vec<u8>,
        mime_type: String,
        confidence_hint: f64,
    ) -> impl Future<Output = Result<Vec<RawCandidate>, CoreError>> + Send;
}

/// Service trait for detection normalization and image analysis
pub trait DetectionService: Send + Sync {
    fn normalize_detections(
        &self,
        input: NormalizeDetectionsInput,
    ) -> Result<Vec<Detection>, CoreError>;

    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<ImageAnalysis, CoreError>> + Send;
}
