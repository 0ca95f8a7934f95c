use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeConstraints};
use crate::domain::shared::value_objects::UserId;

pub struct GenerateRecipeParams {
    pub owner: Option<UserId>,
    pub constraints: RecipeConstraints,
    pub prioritize_expiring: bool,
    pub limit: usize,
}

#[async_trait]
pub trait GenerateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: GenerateRecipeParams) -> Result<Recipe, RecipeError>;
}
