use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::model::{CatalogEntry, FoodCategory};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

use super::entity::{CatalogEntryEntity, FoodCategoryEntity};

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn find_by_name(&self, name: &str) -> Option<CatalogEntry> {
        sqlx::query_as::<_, CatalogEntryEntity>(
            "SELECT name, default_shelf_life_days FROM food_catalog WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, name, "Catalog lookup failed"))
        .ok()
        .flatten()
        .map(|e| e.into_domain())
    }

    async fn get_all(&self) -> Vec<CatalogEntry> {
        sqlx::query_as::<_, CatalogEntryEntity>(
            "SELECT name, default_shelf_life_days FROM food_catalog ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Catalog listing failed"))
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.into_domain())
        .collect()
    }

    async fn insert_if_absent(&self, entry: &CatalogEntry) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO food_catalog (name, default_shelf_life_days) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING",
        )
        .bind(&entry.name)
        .bind(i64::from(entry.default_shelf_life_days))
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_categories(&self) -> Vec<FoodCategory> {
        sqlx::query_as::<_, FoodCategoryEntity>("SELECT name FROM food_categories ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Category listing failed"))
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.into_domain())
            .collect()
    }

    async fn insert_category_if_absent(
        &self,
        category: &FoodCategory,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO food_categories (name) VALUES ($1) ON CONFLICT (name) DO NOTHING",
        )
        .bind(&category.name)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected() > 0)
    }
}
