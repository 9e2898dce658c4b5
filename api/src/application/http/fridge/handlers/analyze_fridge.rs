use axum::extract::{Multipart, State};
use fridgevision_core::domain::{
    detection::{AnalyzeImageInput, Detection, DetectionSummary, ports::DetectionService},
    recipe::{RecommendRecipesInput, Recommendation, ports::RecipeService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    fridge::validators::FridgeAnalysisForm,
    image_upload::read_image_upload,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FridgeAnalysis {
    pub detections: Vec<Detection>,
    pub summary: DetectionSummary,
    pub recommendation: Recommendation,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFridgeResponse {
    pub data: FridgeAnalysis,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "fridge",
    summary = "Detect fridge contents and recommend recipes",
    description = "Multipart form with an `image` part and optional `confidence_threshold`, `cuisine`, `diet`, `max_ready_time` and `max_results` text parts. Recipes are recommended for the detected ingredients.",
    responses(
        (status = 200, body = AnalyzeFridgeResponse),
        (status = 400, description = "Missing or invalid form data"),
        (status = 413, description = "Image too large"),
        (status = 502, description = "Vision service failure")
    ),
)]
pub async fn analyze_fridge(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<AnalyzeFridgeResponse>, ApiError> {
    let upload = read_image_upload(multipart, state.args.detection.max_image_size).await?;
    let form = FridgeAnalysisForm::try_from(&upload)?;

    let analysis = state
        .service
        .analyze_image(AnalyzeImageInput {
            image_data: upload.image_data,
            mime_type: upload.mime_type,
            confidence_threshold: form
                .confidence_threshold
                .unwrap_or(state.args.detection.confidence_threshold),
        })
        .await
        .map_err(ApiError::from)?;

    let recommendation = state
        .service
        .recommend_recipes(RecommendRecipesInput {
            ingredients: analysis.ingredient_tokens(),
            preferences: form.preferences,
            max_results: form.max_results.unwrap_or(state.args.catalog.max_recipes),
        })
        .await
        .map_err(ApiError::from)?;

    tracing::info!(
        items = analysis.summary.item_count,
        recipes = recommendation.recipes.len(),
        source = ?recommendation.source,
        "fridge analysis complete"
    );

    Ok(Response::OK(AnalyzeFridgeResponse {
        data: FridgeAnalysis {
            detections: analysis.detections,
            summary: analysis.summary,
            recommendation,
        },
    }))
}
