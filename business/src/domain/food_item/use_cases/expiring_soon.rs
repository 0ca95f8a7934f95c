use async_trait::async_trait;

use crate::domain::food_item::aging::AgedFoodItem;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::shared::value_objects::UserId;

pub struct ListExpiringSoonParams {
    pub owner: Option<UserId>,
    pub threshold_days: i64,
}

#[async_trait]
pub trait ListExpiringSoonUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListExpiringSoonParams,
    ) -> Result<Vec<AgedFoodItem>, FoodItemError>;
}
