use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendRecipesValidator {
    /// Ingredient names in any form, e.g. `"Bell Pepper"` or `"bell_pepper"`
    #[serde(default)]
    #[validate(length(max = 100, message = "at most 100 ingredients per request"))]
    #[schema(example = json!(["bell_pepper", "milk", "egg"]))]
    pub ingredients: Vec<String>,

    #[serde(default)]
    #[schema(example = "italian")]
    pub cuisine: Option<String>,

    #[serde(default)]
    #[schema(example = "vegetarian")]
    pub diet: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "max_ready_time must be positive"))]
    pub max_ready_time: Option<u32>,

    /// Defaults to the server's configured maximum
    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "max_results must be between 1 and 100"))]
    pub max_results: Option<usize>,
}
