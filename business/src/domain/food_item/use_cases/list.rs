use async_trait::async_trait;

use crate::domain::food_item::aging::AgedFoodItem;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::shared::value_objects::UserId;

pub struct ListFoodItemsParams {
    pub owner: Option<UserId>,
    /// Status view: keep expired items instead of hiding them.
    pub include_expired: bool,
}

#[async_trait]
pub trait ListFoodItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListFoodItemsParams,
    ) -> Result<Vec<AgedFoodItem>, FoodItemError>;
}
