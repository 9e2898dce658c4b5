use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, ports::RecipeCatalog, value_objects::CatalogQuery},
};

/// Spoonacular `complexSearch` adapter. Without an API key every lookup
/// fails fast with [`CoreError::MissingCredential`] and callers fall back.
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    ready_in_minutes: Option<u32>,
    #[serde(default)]
    servings: Option<u32>,
    #[serde(default)]
    health_score: Option<f64>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    used_ingredient_count: Option<u32>,
    #[serde(default)]
    used_ingredients: Vec<IngredientRef>,
    #[serde(default)]
    missed_ingredients: Vec<IngredientRef>,
}

#[derive(Debug, Deserialize)]
struct IngredientRef {
    name: String,
}

impl SpoonacularClient {
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build recipe catalog client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn query_params(api_key: &str, query: &CatalogQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apiKey", api_key.to_string()),
            ("includeIngredients", query.ingredients.join(",")),
            ("number", query.max_results.to_string()),
            ("fillIngredients", "true".to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("ignorePantry", "true".to_string()),
            ("sort", "max-used-ingredients".to_string()),
        ];

        let preferences = &query.preferences;
        if let Some(cuisine) = &preferences.cuisine {
            params.push(("cuisine", cuisine.to_lowercase()));
        }
        if let Some(diet) = &preferences.diet {
            params.push(("diet", diet.to_lowercase()));
        }
        if let Some(max_ready_time) = preferences.max_ready_time {
            params.push(("maxReadyTime", max_ready_time.to_string()));
        }

        params
    }
}

fn into_recipes(response: SearchResponse) -> Vec<Recipe> {
    response
        .results
        .into_iter()
        .filter(|result| !result.title.trim().is_empty())
        .map(|result| {
            let used_ingredients: Vec<String> = result
                .used_ingredients
                .into_iter()
                .map(|i| i.name)
                .collect();

            Recipe {
                title: result.title,
                used_ingredient_count: result
                    .used_ingredient_count
                    .unwrap_or(used_ingredients.len() as u32),
                used_ingredients,
                missed_ingredients: result
                    .missed_ingredients
                    .into_iter()
                    .map(|i| i.name)
                    .collect(),
                ready_in_minutes: result.ready_in_minutes,
                servings: result.servings,
                health_score: result.health_score,
                image: result.image,
                source_url: result.source_url,
            }
        })
        .collect()
}

impl RecipeCatalog for SpoonacularClient {
    async fn find_recipes(&self, query: CatalogQuery) -> Result<Vec<Recipe>, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::MissingCredential("SPOONACULAR_API_KEY".to_string()))?;

        let url = format!("{}/complexSearch", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&Self::query_params(api_key, &query))
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                if e.is_timeout() {
                    CoreError::ExternalServiceError(format!("Recipe API timed out: {}", e))
                } else {
                    CoreError::ExternalServiceError(format!("Recipe API error: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(CoreError::ExternalServiceError(format!(
                "Recipe API returned error: {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse recipe catalog response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse recipe response: {}", e))
        })?;

        let recipes = into_recipes(body);
        tracing::debug!(
            count = recipes.len(),
            ingredients = %query.ingredients.join(","),
            "recipe catalog lookup succeeded"
        );

        Ok(recipes)
    }
}
