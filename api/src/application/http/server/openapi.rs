use crate::application::http::{
    detection::router::DetectionApiDoc, fridge::router::FridgeApiDoc,
    health::HealthApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FridgeVision API"
    ),
    nest(
        (path = "/detections", api = DetectionApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/fridge", api = FridgeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
