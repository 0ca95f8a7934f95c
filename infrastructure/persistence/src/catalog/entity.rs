use sqlx::FromRow;

use business::domain::catalog::model::{CatalogEntry, FoodCategory};
use business::domain::food_item::model::clamp_shelf_life;

#[derive(Debug, FromRow)]
pub struct CatalogEntryEntity {
    pub name: String,
    pub default_shelf_life_days: i64,
}

impl CatalogEntryEntity {
    pub fn into_domain(self) -> CatalogEntry {
        CatalogEntry::new(&self.name, clamp_shelf_life(self.default_shelf_life_days))
    }
}

#[derive(Debug, FromRow)]
pub struct FoodCategoryEntity {
    pub name: String,
}

impl FoodCategoryEntity {
    pub fn into_domain(self) -> FoodCategory {
        FoodCategory::new(&self.name)
    }
}
