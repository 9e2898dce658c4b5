use fridgevision_core::domain::detection::RawCandidate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NormalizeDetectionsValidator {
    #[serde(default)]
    #[validate(length(max = 500, message = "at most 500 candidates per request"))]
    pub candidates: Vec<RawCandidate>,

    /// Defaults to the server's configured threshold
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0, message = "confidence_threshold must be in [0, 1]"))]
    #[schema(example = 0.6)]
    pub confidence_threshold: Option<f64>,
}
