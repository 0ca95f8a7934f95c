use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::food_item::aging::{AgedFoodItem, FreshnessStatus};
use business::domain::food_item::shelf_life::EstimateSource;
use business::domain::food_item::use_cases::add::AddedFoodItem;
use business::domain::food_item::use_cases::estimate_shelf_life::ShelfLifeEstimation;
use business::domain::food_item::use_cases::scan_photos::{ScanPhotosResult, ScannedFoodItem};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum FreshnessStatusDto {
    #[oai(rename = "fresh")]
    Fresh,
    #[oai(rename = "expired")]
    Expired,
}

impl From<FreshnessStatus> for FreshnessStatusDto {
    fn from(status: FreshnessStatus) -> Self {
        match status {
            FreshnessStatus::Fresh { .. } => FreshnessStatusDto::Fresh,
            FreshnessStatus::Expired => FreshnessStatusDto::Expired,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum EstimateSourceDto {
    #[oai(rename = "explicit")]
    Explicit,
    #[oai(rename = "catalog")]
    Catalog,
    #[oai(rename = "external")]
    External,
    #[oai(rename = "default")]
    Default,
}

impl From<EstimateSource> for EstimateSourceDto {
    fn from(source: EstimateSource) -> Self {
        match source {
            EstimateSource::Explicit => EstimateSourceDto::Explicit,
            EstimateSource::Catalog => EstimateSourceDto::Catalog,
            EstimateSource::External => EstimateSourceDto::External,
            EstimateSource::Default => EstimateSourceDto::Default,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddFoodItemRequest {
    /// Food name (cannot be empty)
    pub name: String,
    /// Free-text category, "Unknown" when omitted
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Free-text nutrition facts, e.g. "calories:52, protein:0.3g"
    #[oai(skip_serializing_if_is_none)]
    pub nutrition: Option<String>,
    /// Shelf life in days; negative values are stored as 0
    #[oai(skip_serializing_if_is_none)]
    pub shelf_life_days: Option<i64>,
    /// Expiration as printed or spoken: "2025-10-05", "Oct 5", "5-7 days"
    #[oai(skip_serializing_if_is_none)]
    pub expiration: Option<String>,
    /// Owner of the record; omitted for the shared inventory
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct FoodItemResponse {
    pub id: Uuid,
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
    pub name: String,
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub nutrition: Option<String>,
    pub acquired_date: NaiveDate,
    pub shelf_life_days: u32,
    pub expiration_date: NaiveDate,
    /// Negative once expired
    pub days_remaining: i64,
    pub status: FreshnessStatusDto,
    /// "expired" or "good, N days left"
    pub status_label: String,
    pub created_at: DateTime<Utc>,
}

impl From<AgedFoodItem> for FoodItemResponse {
    fn from(aged: AgedFoodItem) -> Self {
        let status = aged.status();
        let expiration_date = aged.item.expiration_date();
        let item = aged.item;
        Self {
            id: item.id,
            user_id: item.owner.map(|o| o.as_str().to_string()),
            name: item.name,
            category: item.category,
            nutrition: item.nutrition,
            acquired_date: item.acquired_date,
            shelf_life_days: item.shelf_life_days,
            expiration_date,
            days_remaining: aged.days_remaining,
            status: status.into(),
            status_label: status.to_string(),
            created_at: item.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddedFoodItemResponse {
    pub item: FoodItemResponse,
    /// Where the shelf life came from
    pub estimate_source: EstimateSourceDto,
}

impl From<AddedFoodItem> for AddedFoodItemResponse {
    fn from(added: AddedFoodItem) -> Self {
        Self {
            item: added.item.into(),
            estimate_source: added.estimate_source.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DeleteFoodItemsResponseBody {
    /// Number of records removed
    pub deleted: u64,
}

#[derive(Debug, Clone, Object)]
pub struct ScanPhotosRequest {
    /// Base64-encoded photos, with or without a data URL prefix
    pub images_base64: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ScannedFoodItemResponse {
    pub item: FoodItemResponse,
    /// Expiration text read from the package, if any
    #[oai(skip_serializing_if_is_none)]
    pub raw_expiration: Option<String>,
    pub estimate_source: EstimateSourceDto,
}

impl From<ScannedFoodItem> for ScannedFoodItemResponse {
    fn from(scanned: ScannedFoodItem) -> Self {
        Self {
            item: scanned.item.into(),
            raw_expiration: scanned.raw_expiration,
            estimate_source: scanned.estimate_source.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ScanPhotosResponseBody {
    pub added: Vec<ScannedFoodItemResponse>,
    /// Photos the recognizer could not read
    pub failed_images: u64,
    /// Recognized items that could not be stored
    pub failed_items: u64,
}

impl From<ScanPhotosResult> for ScanPhotosResponseBody {
    fn from(result: ScanPhotosResult) -> Self {
        Self {
            added: result.added.into_iter().map(|s| s.into()).collect(),
            failed_images: result.failed_images as u64,
            failed_items: result.failed_items as u64,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct EstimateShelfLifeRequest {
    pub food_name: String,
    /// Optional expiration text; used as-is when it parses
    #[oai(skip_serializing_if_is_none)]
    pub expiration: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ShelfLifeEstimateResponse {
    pub shelf_life_days: u32,
    pub source: EstimateSourceDto,
    /// Expiration if bought today
    pub expiration_date: NaiveDate,
}

impl From<ShelfLifeEstimation> for ShelfLifeEstimateResponse {
    fn from(estimation: ShelfLifeEstimation) -> Self {
        Self {
            shelf_life_days: estimation.estimate.days,
            source: estimation.estimate.source.into(),
            expiration_date: estimation.expiration_date,
        }
    }
}
