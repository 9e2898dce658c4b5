pub mod llm;
pub mod recipe_catalog;
