use async_trait::async_trait;

use crate::domain::food_item::aging::AgedFoodItem;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::shelf_life::EstimateSource;
use crate::domain::shared::value_objects::UserId;

pub struct AddFoodItemParams {
    pub owner: Option<UserId>,
    pub name: String,
    pub category: Option<String>,
    pub nutrition: Option<String>,
    pub shelf_life_days: Option<i64>,
    /// Free-text expiration, run through the duration parser when no explicit
    /// day count is given.
    pub raw_expiration: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddedFoodItem {
    pub item: AgedFoodItem,
    pub estimate_source: EstimateSource,
}

#[async_trait]
pub trait AddFoodItemUseCase: Send + Sync {
    async fn execute(&self, params: AddFoodItemParams) -> Result<AddedFoodItem, FoodItemError>;
}
