use async_trait::async_trait;

use crate::domain::food_item::aging::AgedFoodItem;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::shared::value_objects::UserId;

pub struct SearchFoodItemsParams {
    pub query: String,
    pub owner: Option<UserId>,
}

#[async_trait]
pub trait SearchFoodItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchFoodItemsParams,
    ) -> Result<Vec<AgedFoodItem>, FoodItemError>;
}
