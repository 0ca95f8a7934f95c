use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::defaults::{DEFAULT_CATALOG, DEFAULT_CATEGORIES};
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{CatalogEntry, FoodCategory};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::seed::{SeedCatalogUseCase, SeedReport};
use crate::domain::logger::Logger;

pub struct SeedCatalogUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SeedCatalogUseCase for SeedCatalogUseCaseImpl {
    async fn execute(&self) -> Result<SeedReport, CatalogError> {
        let mut report = SeedReport::default();

        for (name, days) in DEFAULT_CATALOG {
            if self
                .repository
                .insert_if_absent(&CatalogEntry::new(name, *days))
                .await?
            {
                report.entries_inserted += 1;
            }
        }

        for name in DEFAULT_CATEGORIES {
            if self
                .repository
                .insert_category_if_absent(&FoodCategory::new(name))
                .await?
            {
                report.categories_inserted += 1;
            }
        }

        self.logger.info(&format!(
            "Catalog seeded: {} new entries, {} new categories",
            report.entries_inserted, report.categories_inserted
        ));

        Ok(report)
    }
}
