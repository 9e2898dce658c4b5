use std::sync::Mutex;
use std::time::Duration;

use crate::domain::{
    common::entities::app_errors::CoreError,
    detection::{entities::RawCandidate, ports::VisionClient},
    recipe::{entities::Recipe, ports::RecipeCatalog, value_objects::CatalogQuery},
};

pub struct FakeVisionClient {
    pub response: Result<Vec<RawCandidate>, CoreError>,
    pub calls: Mutex<Vec<f64>>,
}

impl FakeVisionClient {
    pub fn returning(response: Result<Vec<RawCandidate>, CoreError>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl VisionClient for FakeVisionClient {
    async fn detect_food(
        &self,
        _image_data: Vec<u8>,
        _mime_type: String,
        confidence_hint: f64,
    ) -> Result<Vec<RawCandidate>, CoreError> {
        self.calls.lock().unwrap().push(confidence_hint);
        self.response.clone()
    }
}

pub struct FakeRecipeCatalog {
    pub response: Result<Vec<Recipe>, CoreError>,
    pub delay: Option<Duration>,
    pub queries: Mutex<Vec<CatalogQuery>>,
}

impl FakeRecipeCatalog {
    pub fn returning(response: Result<Vec<Recipe>, CoreError>) -> Self {
        Self {
            response,
            delay: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::returning(Err(CoreError::ExternalServiceError(
            "connection refused".to_string(),
        )))
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::returning(Ok(Vec::new()))
        }
    }

    pub fn queries(&self) -> Vec<CatalogQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl RecipeCatalog for FakeRecipeCatalog {
    async fn find_recipes(&self, query: CatalogQuery) -> Result<Vec<Recipe>, CoreError> {
        self.queries.lock().unwrap().push(query);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}
