use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    detection::{
        entities::Detection,
        helpers::average_confidence,
        ports::{DetectionService, VisionClient},
        value_objects::{
            AnalyzeImageInput, DetectionSummary, ImageAnalysis, NormalizeDetectionsInput,
        },
    },
    recipe::ports::RecipeCatalog,
};

impl<V, RC> DetectionService for Service<V, RC>
where
    V: VisionClient,
    RC: RecipeCatalog,
{
    fn normalize_detections(
        &self,
        input: NormalizeDetectionsInput,
    ) -> Result<Vec<Detection>, CoreError> {
        self.normalizer
            .normalize(&input.candidates, input.confidence_threshold)
    }

    #[instrument(skip(self, input), fields(image_size = input.image_data.len(), mime_type = %input.mime_type))]
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<ImageAnalysis, CoreError> {
        let threshold = input.confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CoreError::InvalidThreshold(threshold));
        }

        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("image is empty".to_string()));
        }

        if input.image_data.len() > self.max_image_size {
            return Err(CoreError::FileTooLarge {
                size: input.image_data.len(),
                max: self.max_image_size,
            });
        }

        let candidates = self
            .vision_client
            .detect_food(input.image_data, input.mime_type, threshold)
            .await?;

        let detections = self.normalizer.normalize(&candidates, threshold)?;

        let summary = DetectionSummary {
            item_count: detections.len(),
            average_confidence: average_confidence(&detections),
        };

        info!(
            candidates = candidates.len(),
            items = summary.item_count,
            "analyzed fridge image"
        );

        Ok(ImageAnalysis {
            detections,
            summary,
        })
    }
}
