use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub used_ingredients: Vec<String>,
    pub missed_ingredients: Vec<String>,
    /// Ordering key. Equals `used_ingredients.len()` for locally built
    /// recipes; catalog records may report it independently.
    pub used_ingredient_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Entry of the local dataset served when the remote catalog is unavailable.
/// Ingredients are canonical tokens in order of importance.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub cuisine: Option<String>,
    pub diets: Option<Vec<String>>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub health_score: Option<f64>,
}

impl FallbackRecipe {
    pub fn new(title: &str, ingredients: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            cuisine: None,
            diets: None,
            ready_in_minutes: None,
            servings: None,
            health_score: None,
        }
    }

    pub fn cuisine(mut self, cuisine: &str) -> Self {
        self.cuisine = Some(cuisine.to_string());
        self
    }

    pub fn diets(mut self, diets: &[&str]) -> Self {
        self.diets = Some(diets.iter().map(|d| d.to_string()).collect());
        self
    }

    pub fn ready_in(mut self, minutes: u32) -> Self {
        self.ready_in_minutes = Some(minutes);
        self
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    pub fn health_score(mut self, score: f64) -> Self {
        self.health_score = Some(score);
        self
    }
}
