use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::food_item::aging::AgedFoodItem;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{FoodItem, NewFoodItemProps};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::services::ShelfLifeEstimator;
use crate::domain::food_item::shelf_life::resolve_explicit;
use crate::domain::food_item::use_cases::add::{
    AddFoodItemParams, AddFoodItemUseCase, AddedFoodItem,
};
use crate::domain::logger::Logger;

pub struct AddFoodItemUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub estimator: Arc<dyn ShelfLifeEstimator>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFoodItemUseCase for AddFoodItemUseCaseImpl {
    async fn execute(&self, params: AddFoodItemParams) -> Result<AddedFoodItem, FoodItemError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(FoodItemError::NameEmpty);
        }

        let today = self.clock.today();
        let estimate = match resolve_explicit(
            params.shelf_life_days,
            params.raw_expiration.as_deref(),
            today,
        ) {
            Some(estimate) => estimate,
            None => self.estimator.estimate(name, today).await,
        };

        let item = FoodItem::new(NewFoodItemProps {
            owner: params.owner,
            name: name.to_string(),
            category: params.category,
            nutrition: params.nutrition,
            acquired_date: today,
            shelf_life_days: i64::from(estimate.days),
        })?;

        self.repository.save(&item).await?;

        self.logger.info(&format!(
            "Added food item '{}' with {} days of shelf life ({})",
            item.name, item.shelf_life_days, estimate.source
        ));

        Ok(AddedFoodItem {
            item: AgedFoodItem::at(item, today),
            estimate_source: estimate.source,
        })
    }
}
