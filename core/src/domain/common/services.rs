use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    common::{DEFAULT_CATALOG_TIMEOUT, DEFAULT_MAX_IMAGE_SIZE},
    detection::{DetectionNormalizer, ports::VisionClient},
    recipe::{FallbackRecipeBook, ports::RecipeCatalog},
};

/// Domain service wiring the ports to the normalizer and the fallback
/// dataset. Cloning is cheap; all state is shared and read-only.
pub struct Service<V, RC>
where
    V: VisionClient,
    RC: RecipeCatalog,
{
    pub(crate) vision_client: Arc<V>,
    pub(crate) recipe_catalog: Arc<RC>,
    pub(crate) normalizer: Arc<DetectionNormalizer>,
    pub(crate) fallback_recipes: Arc<FallbackRecipeBook>,
    pub(crate) catalog_timeout: Duration,
    pub(crate) max_image_size: usize,
}

impl<V, RC> Service<V, RC>
where
    V: VisionClient,
    RC: RecipeCatalog,
{
    pub fn new(vision_client: V, recipe_catalog: RC) -> Self {
        Self {
            vision_client: Arc::new(vision_client),
            recipe_catalog: Arc::new(recipe_catalog),
            normalizer: Arc::new(DetectionNormalizer::default()),
            fallback_recipes: Arc::new(FallbackRecipeBook::default()),
            catalog_timeout: DEFAULT_CATALOG_TIMEOUT,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }

    pub fn with_normalizer(mut self, normalizer: DetectionNormalizer) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    pub fn with_fallback_recipes(mut self, fallback_recipes: FallbackRecipeBook) -> Self {
        self.fallback_recipes = Arc::new(fallback_recipes);
        self
    }

    pub fn with_catalog_timeout(mut self, timeout: Duration) -> Self {
        self.catalog_timeout = timeout;
        self
    }

    pub fn with_max_image_size(mut self, max_image_size: usize) -> Self {
        self.max_image_size = max_image_size;
        self
    }

    pub fn normalizer(&self) -> &DetectionNormalizer {
        &self.normalizer
    }
}

impl<V, RC> Clone for Service<V, RC>
where
    V: VisionClient,
    RC: RecipeCatalog,
{
    fn clone(&self) -> Self {
        Self {
            vision_client: Arc::clone(&self.vision_client),
            recipe_catalog: Arc::clone(&self.recipe_catalog),
            normalizer: Arc::clone(&self.normalizer),
            fallback_recipes: Arc::clone(&self.fallback_recipes),
            catalog_timeout: self.catalog_timeout,
            max_image_size: self.max_image_size,
        }
    }
}
