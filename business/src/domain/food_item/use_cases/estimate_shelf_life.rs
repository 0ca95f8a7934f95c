use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::shelf_life::ShelfLifeEstimate;

pub struct EstimateShelfLifeParams {
    pub food_name: String,
    pub raw_expiration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfLifeEstimation {
    pub estimate: ShelfLifeEstimate,
    pub expiration_date: NaiveDate,
}

#[async_trait]
pub trait EstimateShelfLifeUseCase: Send + Sync {
    async fn execute(
        &self,
        params: EstimateShelfLifeParams,
    ) -> Result<ShelfLifeEstimation, FoodItemError>;
}
