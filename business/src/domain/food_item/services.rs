use async_trait::async_trait;
use chrono::NaiveDate;

use super::errors::FoodItemError;
use super::shelf_life::ShelfLifeEstimate;

/// A candidate item returned by image recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedFood {
    pub name: String,
    pub raw_expiration: Option<String>,
    pub category: Option<String>,
}

/// Service port for recognizing food items in a photo.
#[async_trait]
pub trait FoodRecognizerService: Send + Sync {
    async fn recognize(&self, image_base64: &str) -> Result<Vec<RecognizedFood>, FoodItemError>;
}

/// Service port for a best-effort external shelf-life reference.
///
/// Returns free text (`"5-7 days"`, `"2025-10-05"`) or nothing; never fails.
#[async_trait]
pub trait ShelfLifeLookupService: Send + Sync {
    async fn lookup(&self, food_name: &str) -> Option<String>;
}

/// Estimates a shelf life when the caller supplied none.
///
/// Always produces a value; every failure inside the chain falls through to
/// the next stage.
#[async_trait]
pub trait ShelfLifeEstimator: Send + Sync {
    async fn estimate(&self, food_name: &str, today: NaiveDate) -> ShelfLifeEstimate;
}
