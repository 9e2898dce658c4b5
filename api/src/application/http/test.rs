use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use serde_json::{Value, json};

use crate::{
    application::http::server::http_server::{router, state},
    args::Args,
};

async fn server_with(extra: &[&str]) -> TestServer {
    let mut argv = vec!["fridgevision-api", "--gemini-api-key", "test-key"];
    argv.extend_from_slice(extra);
    let args = Arc::new(Args::parse_from(argv));

    let state = state(args).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

async fn server() -> TestServer {
    server_with(&[]).await
}

#[tokio::test]
async fn test_normalize_detections() {
    let server = server().await;

    let response = server
        .post("/detections/normalize")
        .json(&json!({
            "candidates": [
                {"label": "Red Pepper", "confidence": 0.9, "bbox": [0, 0, 10, 10]},
                {"label": "green pepper", "confidence": 0.8, "bbox": [1, 1, 10, 10]},
                {"label": "Milk", "confidence": 0.7, "bbox": [20, 20, 30, 30]},
                {"name": "ketchup", "confidence": "0.95", "bbox": [40, 40, "x", 50]}
            ],
            "confidence_threshold": 0.6
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["category"], "bell_pepper");
    assert_eq!(data[0]["confidence"], 0.9);
    assert_eq!(data[0]["bbox"], json!([0.0, 0.0, 10.0, 10.0]));
    assert_eq!(data[1]["category"], "milk");
}

#[tokio::test]
async fn test_normalize_detections_drops_candidates_without_a_text_label() {
    let server = server().await;

    let response = server
        .post("/detections/normalize")
        .json(&json!({
            "candidates": [
                {"label": null, "confidence": 0.9, "bbox": [0, 0, 10, 10]},
                {"label": 7, "confidence": 0.9, "bbox": [0, 0, 10, 10]},
                {"label": "Milk", "confidence": 0.8, "bbox": [20, 20, 30, 30]}
            ]
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["category"], "milk");
}

#[tokio::test]
async fn test_normalize_detections_rejects_out_of_range_threshold() {
    let server = server().await;

    let response = server
        .post("/detections/normalize")
        .json(&json!({"candidates": [], "confidence_threshold": 1.5}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn test_recommend_recipes_without_catalog_key_serves_fallback() {
    let server = server().await;

    let response = server
        .post("/recipes/recommend")
        .json(&json!({"ingredients": ["Chicken", "bell_pepper", "onion"], "max_results": 2}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["source"], "fallback");
    assert!(
        body["data"]["degradedReason"]
            .as_str()
            .unwrap()
            .contains("SPOONACULAR_API_KEY")
    );
    let recipes = body["data"]["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0]["title"], "Chicken Stir Fry");
    assert_eq!(recipes[0]["usedIngredientCount"], 3);
}

#[tokio::test]
async fn test_recommend_recipes_with_no_ingredients_is_empty() {
    let server = server().await;

    let response = server
        .post("/recipes/recommend")
        .json(&json!({"ingredients": []}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["recipes"], json!([]));
    assert!(body["data"].get("degradedReason").is_none());
}

#[tokio::test]
async fn test_recommend_recipes_rejects_zero_max_results() {
    let server = server().await;

    let response = server
        .post("/recipes/recommend")
        .json(&json!({"ingredients": ["apple"], "max_results": 0}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_image_requires_an_image_part() {
    let server = server().await;

    let form = MultipartForm::new().add_text("confidence_threshold", "0.5");
    let response = server.post("/detections/image").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Missing image field");
}

#[tokio::test]
async fn test_analyze_image_rejects_non_image_uploads() {
    let server = server().await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"hello".to_vec())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );
    let response = server.post("/detections/image").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_image_enforces_size_limit() {
    let server = server_with(&["--max-image-size", "4"]).await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0u8; 16])
            .file_name("fridge.jpg")
            .mime_type("image/jpeg"),
    );
    let response = server.post("/detections/image").multipart(form).await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_analyze_fridge_validates_form_before_detection() {
    let server = server().await;

    let form = MultipartForm::new()
        .add_text("max_ready_time", "soon")
        .add_part(
            "image",
            Part::bytes(vec![0xFF, 0xD8, 0xFF])
                .file_name("fridge.jpg")
                .mime_type("image/jpeg"),
        );
    let response = server.post("/fridge/analyze").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_routes_honor_root_path() {
    let server = server_with(&["--server-root-path", "/api"]).await;

    server.get("/api/health/live").await.assert_status_ok();
    server
        .get("/health/live")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let openapi = server.get("/api/api-docs/openapi.json").await.json::<Value>();
    assert!(openapi["paths"].get("/api/detections/normalize").is_some());
    assert!(openapi["paths"].get("/api/recipes/recommend").is_some());
}

#[tokio::test]
async fn test_health_and_metrics() {
    let server = server().await;

    let response = server.get("/health/live").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");

    server.get("/metrics").await.assert_status_ok();
}
