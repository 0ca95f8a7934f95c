use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::clock::Clock;
use crate::domain::food_item::aging::{active_only, age_items};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeIngredient};
use crate::domain::recipe::ranker;
use crate::domain::recipe::services::RecipeGeneratorService;
use crate::domain::recipe::use_cases::generate::{GenerateRecipeParams, GenerateRecipeUseCase};

pub struct GenerateRecipeUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub generator: Arc<dyn RecipeGeneratorService>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateRecipeUseCase for GenerateRecipeUseCaseImpl {
    async fn execute(&self, params: GenerateRecipeParams) -> Result<Recipe, RecipeError> {
        let items = self.repository.get_all(params.owner).await?;
        let usable = active_only(age_items(items, self.clock.today()));

        let selected = if params.prioritize_expiring {
            ranker::rank_for_recipe(usable, params.limit)
        } else {
            ranker::take_in_storage_order(usable, params.limit)
        };

        if selected.is_empty() {
            return Err(RecipeError::NoIngredients);
        }

        let ingredients: Vec<RecipeIngredient> = selected
            .into_iter()
            .map(|aged| RecipeIngredient {
                name: aged.item.name,
                days_remaining: aged.days_remaining,
            })
            .collect();
        let names: Vec<String> = ingredients.iter().map(|i| i.name.clone()).collect();

        self.logger.info(&format!(
            "Generating {} recipe from {} ingredients",
            params.constraints.size,
            names.len()
        ));

        let text = self
            .generator
            .generate(&names, &params.constraints)
            .await
            .inspect_err(|e| self.logger.error(&format!("Recipe generation failed: {}", e)))?;

        Ok(Recipe {
            text,
            ingredients,
            constraints: params.constraints,
            created_at: Utc::now(),
        })
    }
}
