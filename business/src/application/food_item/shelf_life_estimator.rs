use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::catalog::model::normalize_name;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::food_item::duration_parser;
use crate::domain::food_item::services::{ShelfLifeEstimator, ShelfLifeLookupService};
use crate::domain::food_item::shelf_life::{EstimateSource, ShelfLifeEstimate};
use crate::domain::logger::Logger;

/// Catalog, then external lookup, then the configured default.
pub struct ShelfLifeEstimatorImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub lookup: Arc<dyn ShelfLifeLookupService>,
    pub logger: Arc<dyn Logger>,
    pub lookup_timeout: Duration,
    pub default_days: u32,
}

impl ShelfLifeEstimatorImpl {
    async fn from_lookup(&self, food_name: &str, today: NaiveDate) -> Option<u32> {
        let text = match tokio::time::timeout(self.lookup_timeout, self.lookup.lookup(food_name))
            .await
        {
            Ok(Some(text)) => text,
            Ok(None) => {
                self.logger
                    .debug(&format!("No external shelf life for '{}'", food_name));
                return None;
            }
            Err(_) => {
                self.logger.warn(&format!(
                    "Shelf life lookup for '{}' timed out after {:?}",
                    food_name, self.lookup_timeout
                ));
                return None;
            }
        };

        let days = duration_parser::parse(&text, today).shelf_life_days(today);
        if days.is_none() {
            self.logger.warn(&format!(
                "Could not parse external shelf life '{}' for '{}'",
                text, food_name
            ));
        }
        days
    }
}

#[async_trait]
impl ShelfLifeEstimator for ShelfLifeEstimatorImpl {
    async fn estimate(&self, food_name: &str, today: NaiveDate) -> ShelfLifeEstimate {
        if let Some(entry) = self.catalog.find_by_name(&normalize_name(food_name)).await {
            return ShelfLifeEstimate::new(entry.default_shelf_life_days, EstimateSource::Catalog);
        }

        if let Some(days) = self.from_lookup(food_name, today).await {
            return ShelfLifeEstimate::new(days, EstimateSource::External);
        }

        self.logger.info(&format!(
            "Using default shelf life of {} days for '{}'",
            self.default_days, food_name
        ));
        ShelfLifeEstimate::fallback(self.default_days)
    }
}
