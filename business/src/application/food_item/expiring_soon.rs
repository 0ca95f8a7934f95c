use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::food_item::aging::{AgedFoodItem, age_items};
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::expiring_soon::{
    ListExpiringSoonParams, ListExpiringSoonUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::recipe::ranker;

pub struct ListExpiringSoonUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListExpiringSoonUseCase for ListExpiringSoonUseCaseImpl {
    async fn execute(
        &self,
        params: ListExpiringSoonParams,
    ) -> Result<Vec<AgedFoodItem>, FoodItemError> {
        let items = self.repository.get_all(params.owner).await?;
        let aged = age_items(items, self.clock.today());
        let soon = ranker::expiring_soon(aged, params.threshold_days);

        self.logger.info(&format!(
            "{} food items expire within {} days",
            soon.len(),
            params.threshold_days
        ));

        Ok(soon)
    }
}
