use super::handlers::analyze_fridge::{__path_analyze_fridge, analyze_fridge};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_fridge))]
pub struct FridgeApiDoc;

pub fn fridge_routes(state: AppState) -> Router<AppState> {
    let body_limit = state.args.detection.max_image_size + 64 * 1024;

    Router::new().route(
        &format!("{}/fridge/analyze", state.args.server.root_path),
        post(analyze_fridge).layer(DefaultBodyLimit::max(body_limit)),
    )
}
