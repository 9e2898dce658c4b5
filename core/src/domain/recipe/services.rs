use tracing::{debug, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, text::to_display},
    detection::{DetectionNormalizer, ports::VisionClient},
    recipe::{
        ports::{RecipeCatalog, RecipeService},
        value_objects::{CatalogQuery, Recommendation, RecommendRecipesInput},
    },
};

impl<V, RC> RecipeService for Service<V, RC>
where
    V: VisionClient,
    RC: RecipeCatalog,
{
    #[instrument(skip(self, input), fields(ingredients = input.ingredients.len(), max_results = input.max_results))]
    async fn recommend_recipes(
        &self,
        input: RecommendRecipesInput,
    ) -> Result<Recommendation, CoreError> {
        if input.max_results == 0 {
            return Err(CoreError::InvalidMaxResults);
        }

        let ingredients = canonical_ingredients(&self.normalizer, &input.ingredients);
        if ingredients.is_empty() {
            return Ok(Recommendation::fallback(Vec::new(), None));
        }

        let query = CatalogQuery {
            ingredients: ingredients.iter().map(|i| to_display(i)).collect(),
            preferences: input.preferences.clone(),
            max_results: input.max_results,
        };

        let lookup = tokio::time::timeout(
            self.catalog_timeout,
            self.recipe_catalog.find_recipes(query),
        )
        .await;

        let failure = match lookup {
            Ok(Ok(mut recipes)) => {
                recipes.truncate(input.max_results);
                debug!(count = recipes.len(), "served recipes from remote catalog");
                return Ok(Recommendation::remote(recipes));
            }
            Ok(Err(e)) => e,
            Err(_) => CoreError::Timeout(self.catalog_timeout.as_millis()),
        };

        warn!(error = %failure, "recipe catalog unavailable, serving fallback recipes");

        let recipes =
            self.fallback_recipes
                .recommend(&ingredients, &input.preferences, input.max_results);

        Ok(Recommendation::fallback(recipes, Some(failure.to_string())))
    }
}

/// Canonical tokens in input order, blanks and repeats removed. User input
/// goes through the same label rules as detections, so `"Eggs"` and a
/// detected `egg` agree.
fn canonical_ingredients(normalizer: &DetectionNormalizer, raw: &[String]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::with_capacity(raw.len());
    for item in raw {
        if let Some(token) = normalizer.canonical_category(item)
            && !tokens.contains(&token)
        {
            tokens.push(token);
        }
    }
    tokens
}
