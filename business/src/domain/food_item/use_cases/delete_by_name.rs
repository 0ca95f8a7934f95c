use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;

pub struct DeleteFoodItemsParams {
    pub name: String,
}

#[async_trait]
pub trait DeleteFoodItemsUseCase: Send + Sync {
    /// Returns the number of records removed.
    async fn execute(&self, params: DeleteFoodItemsParams) -> Result<u64, FoodItemError>;
}
