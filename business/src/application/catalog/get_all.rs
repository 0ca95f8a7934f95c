use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{CatalogEntry, FoodCategory};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::GetCatalogUseCase;

pub struct GetCatalogUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
}

#[async_trait]
impl GetCatalogUseCase for GetCatalogUseCaseImpl {
    async fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(self.repository.get_all().await)
    }

    async fn categories(&self) -> Result<Vec<FoodCategory>, CatalogError> {
        Ok(self.repository.get_categories().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockCatalogRepo;

    #[tokio::test]
    async fn should_return_catalog_entries_and_categories() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_all()
            .returning(|| vec![CatalogEntry::new("milk", 7), CatalogEntry::new("salt", 365)]);
        repo.expect_get_categories()
            .returning(|| vec![FoodCategory::new("Dairy")]);

        let use_case = GetCatalogUseCaseImpl {
            repository: Arc::new(repo),
        };

        let entries = use_case.entries().await.unwrap();
        let categories = use_case.categories().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].default_shelf_life_days, 365);
        assert_eq!(categories[0].name, "Dairy");
    }
}
