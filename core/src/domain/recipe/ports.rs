use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{CatalogQuery, Recommendation, RecommendRecipesInput},
    },
};

/// Remote recipe catalog keyed by ingredients and optional filters
#[cfg_attr(test, mockall::automock)]
pub trait RecipeCatalog: Send + Sync {
    /// Recipes in the catalog's own relevance order
    fn find_recipes(
        &self,
        query: CatalogQuery,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

/// Service trait for recipe recommendation
pub trait RecipeService: Send + Sync {
    fn recommend_recipes(
        &self,
        input: RecommendRecipesInput,
    ) -> impl Future<Output = Result<Recommendation, CoreError>> + Send;
}
