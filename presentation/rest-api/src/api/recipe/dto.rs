use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::recipe::model::{Recipe, RecipeIngredient};

#[derive(Debug, Clone, Object)]
pub struct GenerateRecipeRequest {
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
    /// "small", "medium" (default) or "large"
    #[oai(skip_serializing_if_is_none)]
    pub recipe_size: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub dietary_restrictions: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub cuisine_preference: Option<String>,
    /// Soonest-expiring ingredients first (default true)
    #[oai(skip_serializing_if_is_none)]
    pub prioritize_expiring: Option<bool>,
    /// Maximum number of ingredients sent to the generator (default 8)
    #[oai(skip_serializing_if_is_none)]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeIngredientResponse {
    pub name: String,
    pub days_remaining: i64,
}

impl From<RecipeIngredient> for RecipeIngredientResponse {
    fn from(ingredient: RecipeIngredient) -> Self {
        Self {
            name: ingredient.name,
            days_remaining: ingredient.days_remaining,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    pub recipe: String,
    /// Ingredients handed to the generator, in the order they were sent
    pub ingredients: Vec<RecipeIngredientResponse>,
    pub recipe_size: String,
    pub created_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            recipe: recipe.text,
            ingredients: recipe.ingredients.into_iter().map(|i| i.into()).collect(),
            recipe_size: recipe.constraints.size.to_string(),
            created_at: recipe.created_at,
        }
    }
}
