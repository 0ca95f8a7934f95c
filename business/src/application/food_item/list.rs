use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::food_item::aging::{AgedFoodItem, active_only, age_items};
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::list::{ListFoodItemsParams, ListFoodItemsUseCase};
use crate::domain::logger::Logger;

pub struct ListFoodItemsUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListFoodItemsUseCase for ListFoodItemsUseCaseImpl {
    async fn execute(
        &self,
        params: ListFoodItemsParams,
    ) -> Result<Vec<AgedFoodItem>, FoodItemError> {
        let items = self.repository.get_all(params.owner).await?;
        let aged = age_items(items, self.clock.today());

        let result = if params.include_expired {
            aged
        } else {
            active_only(aged)
        };

        self.logger
            .debug(&format!("Listing {} food items", result.len()));

        Ok(result)
    }
}
