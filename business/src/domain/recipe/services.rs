use async_trait::async_trait;

use super::errors::RecipeError;
use super::model::RecipeConstraints;

/// Service port for turning a list of ingredient names into recipe text.
#[async_trait]
pub trait RecipeGeneratorService: Send + Sync {
    async fn generate(
        &self,
        ingredient_names: &[String],
        constraints: &RecipeConstraints,
    ) -> Result<String, RecipeError>;
}
