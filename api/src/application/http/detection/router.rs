use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    normalize_detections::{__path_normalize_detections, normalize_detections},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(normalize_detections, analyze_image))]
pub struct DetectionApiDoc;

pub fn detection_routes(state: AppState) -> Router<AppState> {
    // Leave room for multipart framing around the largest accepted image.
    let body_limit = state.args.detection.max_image_size + 64 * 1024;

    Router::new()
        .route(
            &format!("{}/detections/normalize", state.args.server.root_path),
            post(normalize_detections),
        )
        .route(
            &format!("{}/detections/image", state.args.server.root_path),
            post(analyze_image).layer(DefaultBodyLimit::max(body_limit)),
        )
}
