use axum::extract::{Multipart, State};
use fridgevision_core::domain::detection::{
    AnalyzeImageInput, ImageAnalysis, ports::DetectionService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    image_upload::read_image_upload,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub data: ImageAnalysis,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "detections",
    summary = "Detect food items in a fridge photo",
    description = "Runs the vision model on the uploaded `image` part and returns normalized detections. An optional `confidence_threshold` text part overrides the default.",
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, description = "Missing or invalid image"),
        (status = 413, description = "Image too large"),
        (status = 502, description = "Vision service failure")
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let upload = read_image_upload(multipart, state.args.detection.max_image_size).await?;

    let confidence_threshold = upload
        .parse_field::<f64>("confidence_threshold")?
        .unwrap_or(state.args.detection.confidence_threshold);

    let analysis = state
        .service
        .analyze_image(AnalyzeImageInput {
            image_data: upload.image_data,
            mime_type: upload.mime_type,
            confidence_threshold,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { data: analysis }))
}
