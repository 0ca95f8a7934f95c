use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{CatalogEntry, FoodCategory};

#[async_trait]
pub trait GetCatalogUseCase: Send + Sync {
    async fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
    async fn categories(&self) -> Result<Vec<FoodCategory>, CatalogError>;
}
