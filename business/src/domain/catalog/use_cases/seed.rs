use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub entries_inserted: usize,
    pub categories_inserted: usize,
}

#[async_trait]
pub trait SeedCatalogUseCase: Send + Sync {
    /// Idempotent: existing entries are left untouched.
    async fn execute(&self) -> Result<SeedReport, CatalogError>;
}
