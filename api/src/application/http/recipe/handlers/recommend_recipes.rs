use axum::extract::State;
use fridgevision_core::domain::recipe::{
    RecipePreferences, RecommendRecipesInput, Recommendation, ports::RecipeService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::RecommendRecipesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendRecipesResponse {
    pub data: Recommendation,
}

#[utoipa::path(
    post,
    path = "/recommend",
    tag = "recipes",
    summary = "Recommend recipes for a set of ingredients",
    description = "Queries the remote recipe catalog and falls back to the built-in recipe set when it is unavailable. The `source` field tells which one answered.",
    responses(
        (status = 200, body = RecommendRecipesResponse),
        (status = 400, description = "Invalid request")
    ),
    request_body = RecommendRecipesValidator
)]
pub async fn recommend_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendRecipesValidator>,
) -> Result<Response<RecommendRecipesResponse>, ApiError> {
    let recommendation = state
        .service
        .recommend_recipes(RecommendRecipesInput {
            ingredients: payload.ingredients,
            preferences: RecipePreferences {
                cuisine: payload.cuisine,
                diet: payload.diet,
                max_ready_time: payload.max_ready_time,
            },
            max_results: payload
                .max_results
                .unwrap_or(state.args.catalog.max_recipes),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendRecipesResponse {
        data: recommendation,
    }))
}
