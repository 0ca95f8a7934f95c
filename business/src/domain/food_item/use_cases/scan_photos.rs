use async_trait::async_trait;

use crate::domain::food_item::aging::AgedFoodItem;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::shelf_life::EstimateSource;
use crate::domain::shared::value_objects::UserId;

pub struct ScanPhotosParams {
    pub owner: Option<UserId>,
    pub images_base64: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ScannedFoodItem {
    pub item: AgedFoodItem,
    pub raw_expiration: Option<String>,
    pub estimate_source: EstimateSource,
}

/// Outcome of a batch scan. Images the recognizer failed on and items that
/// could not be stored are counted, not reported as errors, so `added` is
/// always the full list of what was persisted.
#[derive(Debug, Clone, Default)]
pub struct ScanPhotosResult {
    pub added: Vec<ScannedFoodItem>,
    pub failed_images: usize,
    pub failed_items: usize,
}

#[async_trait]
pub trait ScanPhotosUseCase: Send + Sync {
    async fn execute(&self, params: ScanPhotosParams) -> Result<ScanPhotosResult, FoodItemError>;
}
