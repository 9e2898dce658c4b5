use crate::domain::{
    common::text::{same_tag, to_display},
    recipe::{
        entities::{FallbackRecipe, Recipe},
        value_objects::RecipePreferences,
    },
};

/// Fixed local recipe list used when the remote catalog cannot be reached.
#[derive(Debug, Clone)]
pub struct FallbackRecipeBook {
    recipes: Vec<FallbackRecipe>,
}

impl FallbackRecipeBook {
    pub fn new(recipes: Vec<FallbackRecipe>) -> Self {
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Ranks local recipes by how many of `ingredients` they use.
    ///
    /// Recipes using none are dropped. Preferences are enforced only where
    /// the entry records the matching metadata. Ties keep dataset order.
    pub fn recommend(
        &self,
        ingredients: &[String],
        preferences: &RecipePreferences,
        max_results: usize,
    ) -> Vec<Recipe> {
        let mut scored: Vec<(usize, Recipe)> = self
            .recipes
            .iter()
            .filter(|recipe| matches_preferences(recipe, preferences))
            .filter_map(|recipe| {
                let recipe = build_recipe(recipe, ingredients);
                let overlap = recipe.used_ingredients.len();
                (overlap > 0).then_some((overlap, recipe))
            })
            .collect();

        // stable sort keeps dataset order between equal scores
        scored.sort_by(|(a, _), (b, _)| b.cmp(a));

        scored
            .into_iter()
            .take(max_results)
            .map(|(_, recipe)| recipe)
            .collect()
    }
}

fn matches_preferences(recipe: &FallbackRecipe, preferences: &RecipePreferences) -> bool {
    if let (Some(wanted), Some(cuisine)) = (&preferences.cuisine, &recipe.cuisine)
        && !same_tag(wanted, cuisine)
    {
        return false;
    }

    if let (Some(wanted), Some(diets)) = (&preferences.diet, &recipe.diets)
        && !diets.iter().any(|diet| same_tag(wanted, diet))
    {
        return false;
    }

    if let (Some(max), Some(minutes)) = (preferences.max_ready_time, recipe.ready_in_minutes)
        && minutes > max
    {
        return false;
    }

    true
}

fn build_recipe(recipe: &FallbackRecipe, ingredients: &[String]) -> Recipe {
    let mut used = Vec::new();
    let mut missed = Vec::new();

    for ingredient in &recipe.ingredients {
        if ingredients.contains(ingredient) {
            if !used.contains(ingredient) {
                used.push(ingredient.clone());
            }
        } else {
            missed.push(ingredient.clone());
        }
    }

    Recipe {
        title: recipe.title.clone(),
        used_ingredient_count: used.len() as u32,
        used_ingredients: used.iter().map(|i| to_display(i)).collect(),
        missed_ingredients: missed.iter().map(|i| to_display(i)).collect(),
        ready_in_minutes: recipe.ready_in_minutes,
        servings: recipe.servings,
        health_score: recipe.health_score,
        image: None,
        source_url: None,
    }
}

impl Default for FallbackRecipeBook {
    fn default() -> Self {
        Self::new(vec![
            FallbackRecipe::new(
                "Chicken Stir Fry",
                &["chicken", "bell_pepper", "onion", "garlic", "soy_sauce", "rice"],
            )
            .cuisine("Asian")
            .diets(&["dairy free"])
            .ready_in(25)
            .servings(4)
            .health_score(72.0),
            FallbackRecipe::new(
                "Tomato Basil Pasta",
                &["pasta", "tomato", "garlic", "basil", "olive_oil", "cheese"],
            )
            .cuisine("Italian")
            .diets(&["vegetarian"])
            .ready_in(30)
            .servings(4)
            .health_score(58.0),
            FallbackRecipe::new(
                "Chicken Fajitas",
                &["chicken", "bell_pepper", "onion", "tortilla", "lime"],
            )
            .cuisine("Mexican")
            .ready_in(35)
            .servings(4)
            .health_score(64.0),
            FallbackRecipe::new(
                "Vegetable Omelette",
                &["egg", "bell_pepper", "onion", "cheese", "milk"],
            )
            .cuisine("American")
            .diets(&["vegetarian", "gluten free", "keto"])
            .ready_in(25)
            .servings(2)
            .health_score(61.0),
            FallbackRecipe::new(
                "Apple Cinnamon Oatmeal",
                &["oats", "apple", "milk", "cinnamon", "honey"],
            )
            .cuisine("American")
            .diets(&["vegetarian"])
            .ready_in(15)
            .servings(2)
            .health_score(77.0),
            FallbackRecipe::new("Banana Smoothie", &["banana", "milk", "yogurt", "honey"])
                .diets(&["vegetarian", "gluten free"])
                .ready_in(5)
                .servings(2)
                .health_score(69.0),
            FallbackRecipe::new(
                "Greek Salad",
                &["cucumber", "tomato", "onion", "cheese", "olive_oil", "lettuce"],
            )
            .cuisine("Mediterranean")
            .diets(&["vegetarian", "gluten free"])
            .ready_in(25)
            .servings(4)
            .health_score(83.0),
            FallbackRecipe::new(
                "Chicken Curry",
                &["chicken", "onion", "tomato", "garlic", "ginger", "yogurt", "rice"],
            )
            .cuisine("Indian")
            .diets(&["gluten free"])
            .ready_in(45)
            .servings(4)
            .health_score(70.0),
            FallbackRecipe::new(
                "Apple Pancakes",
                &["flour", "egg", "milk", "apple", "butter"],
            )
            .cuisine("American")
            .diets(&["vegetarian"])
            .ready_in(30)
            .servings(4)
            .health_score(45.0),
            FallbackRecipe::new(
                "Beef Tacos",
                &["beef", "tortilla", "tomato", "lettuce", "cheese", "onion"],
            )
            .cuisine("Mexican")
            .ready_in(30)
            .servings(4)
            .health_score(55.0),
            FallbackRecipe::new(
                "Carrot Ginger Soup",
                &["carrot", "ginger", "onion", "garlic", "vegetable_broth"],
            )
            .diets(&["vegan", "vegetarian", "gluten free"])
            .ready_in(40)
            .servings(4)
            .health_score(88.0),
            FallbackRecipe::new(
                "Mushroom Risotto",
                &["rice", "mushroom", "onion", "cheese", "butter", "vegetable_broth"],
            )
            .cuisine("Italian")
            .diets(&["vegetarian", "gluten free"])
            .ready_in(45)
            .servings(4)
            .health_score(52.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::text::to_token;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_fallback_recipes_for_apple_and_milk() {
        let book = FallbackRecipeBook::default();
        let input = tokens(&["apple", "milk"]);
        let recipes = book.recommend(&input, &RecipePreferences::default(), 5);

        assert!(!recipes.is_empty());
        assert!(recipes.len() <= 5);
        for recipe in &recipes {
            assert!(
                recipe
                    .used_ingredients
                    .iter()
                    .any(|i| i == "apple" || i == "milk")
            );
        }
        let counts: Vec<u32> = recipes.iter().map(|r| r.used_ingredient_count).collect();
        let mut sorted = counts.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted);

        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Apple Cinnamon Oatmeal",
                "Apple Pancakes",
                "Vegetable Omelette",
                "Banana Smoothie"
            ]
        );
    }

    #[test]
    fn test_used_and_missed_ingredients_in_display_form() {
        let book = FallbackRecipeBook::default();
        let input = tokens(&["bell_pepper", "chicken"]);
        let recipes = book.recommend(&input, &RecipePreferences::default(), 1);

        assert_eq!(recipes.len(), 1);
        let recipe = &recipes[0];
        assert_eq!(recipe.title, "Chicken Stir Fry");
        assert_eq!(recipe.used_ingredients, vec!["chicken", "bell pepper"]);
        assert_eq!(
            recipe.missed_ingredients,
            vec!["onion", "garlic", "soy sauce", "rice"]
        );
        assert_eq!(recipe.used_ingredient_count as usize, recipe.used_ingredients.len());
        for used in &recipe.used_ingredients {
            assert!(input.contains(&to_token(used)));
        }
    }

    #[test]
    fn test_time_constraint_can_empty_results() {
        let book = FallbackRecipeBook::default();
        let preferences = RecipePreferences {
            max_ready_time: Some(20),
            ..Default::default()
        };
        let recipes = book.recommend(&tokens(&["chicken", "tomato", "onion"]), &preferences, 3);
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_preferences_ignore_missing_metadata() {
        let book = FallbackRecipeBook::default();
        let preferences = RecipePreferences {
            cuisine: Some("Italian".to_string()),
            ..Default::default()
        };
        let recipes = book.recommend(&tokens(&["banana", "carrot"]), &preferences, 5);
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        // neither entry records a cuisine, so neither is excluded
        assert_eq!(titles, vec!["Banana Smoothie", "Carrot Ginger Soup"]);
    }

    #[test]
    fn test_recorded_cuisine_is_a_hard_filter() {
        let book = FallbackRecipeBook::default();
        let preferences = RecipePreferences {
            cuisine: Some("italian".to_string()),
            ..Default::default()
        };
        let recipes = book.recommend(&tokens(&["chicken", "pasta"]), &preferences, 10);
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        // the chicken dishes record Asian, Mexican and Indian cuisines
        assert_eq!(titles, vec!["Tomato Basil Pasta"]);

        let unfiltered = book.recommend(&tokens(&["chicken"]), &RecipePreferences::default(), 10);
        assert_eq!(unfiltered.len(), 3);
    }

    #[test]
    fn test_diet_filter_is_case_and_separator_insensitive() {
        let book = FallbackRecipeBook::default();
        let preferences = RecipePreferences {
            diet: Some("Gluten_Free".to_string()),
            ..Default::default()
        };
        let recipes = book.recommend(&tokens(&["chicken"]), &preferences, 10);
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        // Chicken Fajitas records no diets, so the filter does not apply to it
        assert_eq!(titles, vec!["Chicken Fajitas", "Chicken Curry"]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let book = FallbackRecipeBook::default();
        let input = tokens(&["onion", "garlic", "tomato", "cheese"]);
        let first = book.recommend(&input, &RecipePreferences::default(), 10);
        for _ in 0..5 {
            assert_eq!(book.recommend(&input, &RecipePreferences::default(), 10), first);
        }
    }

    #[test]
    fn test_no_overlap_yields_nothing() {
        let book = FallbackRecipeBook::default();
        assert!(
            book.recommend(&tokens(&["dragon_fruit"]), &RecipePreferences::default(), 5)
                .is_empty()
        );
    }
}
