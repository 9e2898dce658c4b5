use tracing::{info, warn};

use crate::{
    domain::{
        common::{FridgeVisionConfig, entities::app_errors::CoreError, services::Service},
        detection::{DetectionNormalizer, LabelRules},
    },
    infrastructure::{llm::GeminiVisionClient, recipe_catalog::SpoonacularClient},
};

pub type FridgeVisionService = Service<GeminiVisionClient, SpoonacularClient>;

pub fn create_service(config: FridgeVisionConfig) -> Result<FridgeVisionService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::MissingCredential("GEMINI_API_KEY".to_string()));
    }

    let has_catalog_key = config
        .catalog
        .spoonacular_api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());

    if !has_catalog_key {
        if config.catalog.require_remote {
            return Err(CoreError::MissingCredential(
                "SPOONACULAR_API_KEY".to_string(),
            ));
        }
        warn!("SPOONACULAR_API_KEY is not set, recipes will come from the local fallback set");
    }

    let vision_client =
        GeminiVisionClient::new(config.llm.gemini_api_key, config.llm.gemini_model);

    let recipe_catalog = SpoonacularClient::new(
        config.catalog.spoonacular_api_key,
        config.catalog.base_url,
        config.catalog.timeout,
    )?;

    let rules = config.detection.label_rules.unwrap_or_default();
    let normalizer = DetectionNormalizer::new(&rules, config.detection.suppression_threshold)?;

    info!(
        synonyms = rules.synonyms.len(),
        suppression_threshold = config.detection.suppression_threshold,
        catalog_timeout_ms = config.catalog.timeout.as_millis() as u64,
        "fridge vision service configured"
    );

    Ok(Service::new(vision_client, recipe_catalog)
        .with_normalizer(normalizer)
        .with_catalog_timeout(config.catalog.timeout)
        .with_max_image_size(config.detection.max_image_size))
}

/// Loads label rules from a JSON document. The document replaces the built-in
/// table; omitted sections are empty.
pub fn load_label_rules(raw: &str) -> Result<LabelRules, CoreError> {
    serde_json::from_str(raw)
        .map_err(|e| CoreError::Invalid(format!("invalid label rules: {}", e)))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::common::{DetectionConfig, LLMConfig, RecipeCatalogConfig};

    fn config() -> FridgeVisionConfig {
        FridgeVisionConfig {
            llm: LLMConfig {
                gemini_api_key: "test-key".to_string(),
                gemini_model: "gemini-1.5-flash-latest".to_string(),
            },
            catalog: RecipeCatalogConfig::default(),
            detection: DetectionConfig::default(),
        }
    }

    #[test]
    fn test_service_without_catalog_key_starts_in_fallback_mode() {
        let service = create_service(config()).unwrap();
        assert!(!service.recipe_catalog.has_credentials());
    }

    #[test]
    fn test_required_remote_catalog_needs_a_key() {
        let mut config = config();
        config.catalog.require_remote = true;
        assert_eq!(
            create_service(config.clone()).err(),
            Some(CoreError::MissingCredential("SPOONACULAR_API_KEY".to_string()))
        );

        config.catalog.spoonacular_api_key = Some("spoon".to_string());
        let service = create_service(config).unwrap();
        assert!(service.recipe_catalog.has_credentials());
    }

    #[test]
    fn test_vision_key_is_required() {
        let mut config = config();
        config.llm.gemini_api_key = "  ".to_string();
        assert_eq!(
            create_service(config).err(),
            Some(CoreError::MissingCredential("GEMINI_API_KEY".to_string()))
        );
    }

    #[test]
    fn test_configuration_reaches_the_service() {
        let mut config = config();
        config.catalog.timeout = Duration::from_millis(1500);
        config.detection.suppression_threshold = 0.7;
        config.detection.max_image_size = 1024;

        let service = create_service(config).unwrap();
        assert_eq!(service.catalog_timeout, Duration::from_millis(1500));
        assert_eq!(service.max_image_size, 1024);
        assert_eq!(service.normalizer().suppression_threshold(), 0.7);
    }

    #[test]
    fn test_out_of_range_suppression_threshold_is_rejected() {
        let mut config = config();
        config.detection.suppression_threshold = 1.5;
        assert_eq!(
            create_service(config).err(),
            Some(CoreError::InvalidSuppressionThreshold(1.5))
        );
    }

    #[test]
    fn test_load_label_rules() {
        let rules = load_label_rules(r#"{"synonyms": [{"from": "scallion", "to": "green_onion"}]}"#)
            .unwrap();
        let service = create_service(FridgeVisionConfig {
            detection: DetectionConfig {
                label_rules: Some(rules),
                ..DetectionConfig::default()
            },
            ..config()
        })
        .unwrap();
        assert_eq!(
            service.normalizer().canonical_category("Scallion").as_deref(),
            Some("green_onion")
        );

        assert!(matches!(load_label_rules("not json"), Err(CoreError::Invalid(_))));
    }
}
