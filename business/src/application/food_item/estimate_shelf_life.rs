use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use crate::domain::clock::Clock;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::services::ShelfLifeEstimator;
use crate::domain::food_item::shelf_life::resolve_explicit;
use crate::domain::food_item::use_cases::estimate_shelf_life::{
    EstimateShelfLifeParams, EstimateShelfLifeUseCase, ShelfLifeEstimation,
};
use crate::domain::logger::Logger;

/// Runs the shelf-life chain without storing anything.
pub struct EstimateShelfLifeUseCaseImpl {
    pub estimator: Arc<dyn ShelfLifeEstimator>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EstimateShelfLifeUseCase for EstimateShelfLifeUseCaseImpl {
    async fn execute(
        &self,
        params: EstimateShelfLifeParams,
    ) -> Result<ShelfLifeEstimation, FoodItemError> {
        let name = params.food_name.trim();
        if name.is_empty() {
            return Err(FoodItemError::NameEmpty);
        }

        let today = self.clock.today();
        let estimate = match resolve_explicit(None, params.raw_expiration.as_deref(), today) {
            Some(estimate) => estimate,
            None => self.estimator.estimate(name, today).await,
        };

        self.logger.info(&format!(
            "Estimated {} days for '{}' ({})",
            estimate.days, name, estimate.source
        ));

        Ok(ShelfLifeEstimation {
            estimate,
            expiration_date: today
                .checked_add_days(Days::new(u64::from(estimate.days)))
                .unwrap_or(NaiveDate::MAX),
        })
    }
}
