use async_trait::async_trait;

use crate::domain::food_item::aging::AgedFoodItem;
use crate::domain::food_item::errors::FoodItemError;

pub struct FindFoodItemParams {
    pub name: String,
}

#[async_trait]
pub trait FindFoodItemUseCase: Send + Sync {
    async fn execute(&self, params: FindFoodItemParams)
    -> Result<Option<AgedFoodItem>, FoodItemError>;
}
