use poem_openapi::Object;

use business::domain::catalog::model::{CatalogEntry, FoodCategory};

#[derive(Debug, Clone, Object)]
pub struct CatalogEntryResponse {
    /// Lowercase food name
    pub name: String,
    pub default_shelf_life_days: u32,
}

impl From<CatalogEntry> for CatalogEntryResponse {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            name: entry.name,
            default_shelf_life_days: entry.default_shelf_life_days,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub name: String,
}

impl From<FoodCategory> for CategoryResponse {
    fn from(category: FoodCategory) -> Self {
        Self {
            name: category.name,
        }
    }
}
