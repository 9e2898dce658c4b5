use axum::extract::State;
use fridgevision_core::domain::detection::{
    Detection, NormalizeDetectionsInput, ports::DetectionService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    detection::validators::NormalizeDetectionsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NormalizeDetectionsResponse {
    pub data: Vec<Detection>,
}

#[utoipa::path(
    post,
    path = "/normalize",
    tag = "detections",
    summary = "Normalize raw detection candidates",
    description = "Filters candidates by confidence, canonicalizes labels and suppresses duplicate boxes of the same category",
    responses(
        (status = 200, body = NormalizeDetectionsResponse),
        (status = 400, description = "Threshold outside [0, 1]")
    ),
    request_body = NormalizeDetectionsValidator
)]
pub async fn normalize_detections(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<NormalizeDetectionsValidator>,
) -> Result<Response<NormalizeDetectionsResponse>, ApiError> {
    let detections = state
        .service
        .normalize_detections(NormalizeDetectionsInput {
            candidates: payload.candidates,
            confidence_threshold: payload
                .confidence_threshold
                .unwrap_or(state.args.detection.confidence_threshold),
        })
        .map_err(ApiError::from)?;

    Ok(Response::OK(NormalizeDetectionsResponse { data: detections }))
}
