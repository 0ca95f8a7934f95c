use async_trait::async_trait;

use super::model::{CatalogEntry, FoodCategory};
use crate::domain::errors::RepositoryError;

/// Read side is infallible from the caller's view: a failed lookup behaves
/// like a catalog miss.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Option<CatalogEntry>;
    async fn get_all(&self) -> Vec<CatalogEntry>;
    /// Returns `true` when the entry was inserted, `false` when the name
    /// already existed.
    async fn insert_if_absent(&self, entry: &CatalogEntry) -> Result<bool, RepositoryError>;
    async fn get_categories(&self) -> Vec<FoodCategory>;
    async fn insert_category_if_absent(
        &self,
        category: &FoodCategory,
    ) -> Result<bool, RepositoryError>;
}
