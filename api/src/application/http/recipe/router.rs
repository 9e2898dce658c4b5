use super::handlers::recommend_recipes::{__path_recommend_recipes, recommend_recipes};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recommend_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recipes/recommend", state.args.server.root_path),
        post(recommend_recipes),
    )
}
