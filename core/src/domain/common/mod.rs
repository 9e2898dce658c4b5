use std::time::Duration;

pub mod entities;
#[cfg(test)]
pub(crate) mod fakes;
pub mod geometry;
pub mod services;
pub mod text;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;
pub const DEFAULT_SUPPRESSION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_CATALOG_TIMEOUT: Duration = Duration::from_secs(8);
pub const DEFAULT_MAX_IMAGE_SIZE: usize = 20 * 1024 * 1024; // 20MB, Gemini inline limit

#[derive(Clone, Debug)]
pub struct FridgeVisionConfig {
    pub llm: LLMConfig,
    pub catalog: RecipeCatalogConfig,
    pub detection: DetectionConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

#[derive(Clone, Debug)]
pub struct RecipeCatalogConfig {
    pub spoonacular_api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
    /// Refuse to start without a catalog credential instead of serving
    /// fallback recipes only.
    pub require_remote: bool,
}

impl Default for RecipeCatalogConfig {
    fn default() -> Self {
        Self {
            spoonacular_api_key: None,
            base_url: "https://api.spoonacular.com/recipes".to_string(),
            timeout: DEFAULT_CATALOG_TIMEOUT,
            require_remote: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DetectionConfig {
    pub suppression_threshold: f64,
    pub max_image_size: usize,
    /// `None` keeps the built-in synonym and prefix/suffix rules.
    pub label_rules: Option<crate::domain::detection::LabelRules>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            suppression_threshold: DEFAULT_SUPPRESSION_THRESHOLD,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
            label_rules: None,
        }
    }
}
