use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

/// Optional restrictions on recommended recipes. `None` means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipePreferences {
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub max_ready_time: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct RecommendRecipesInput {
    /// Canonical ingredient tokens
    pub ingredients: Vec<String>,
    pub preferences: RecipePreferences,
    pub max_results: usize,
}

/// Query handed to the remote catalog. Ingredients are in display form.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub ingredients: Vec<String>,
    pub preferences: RecipePreferences,
    pub max_results: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Remote,
    Fallback,
}

/// Recipes plus where they came from, so degraded responses can be told
/// apart from fully serviced ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub source: RecipeSource,
    pub recipes: Vec<Recipe>,
    /// Upstream failure that forced the fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<String>,
}

impl Recommendation {
    pub fn remote(recipes: Vec<Recipe>) -> Self {
        Self {
            source: RecipeSource::Remote,
            recipes,
            degraded_reason: None,
        }
    }

    pub fn fallback(recipes: Vec<Recipe>, reason: Option<String>) -> Self {
        Self {
            source: RecipeSource::Fallback,
            recipes,
            degraded_reason: reason,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded_reason.is_some()
    }
}
