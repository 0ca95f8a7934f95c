use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::food_item::model::FoodItem;
use business::domain::food_item::repository::FoodItemRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::{ACQUIRED_DATE_FORMAT, FoodItemEntity, into_domain_items};

const SELECT_COLUMNS: &str =
    "SELECT id, owner, name, category, nutrition, acquired_date, shelf_life_days, created_at FROM food_items";

pub struct FoodItemRepositoryPostgres {
    pool: PgPool,
}

impl FoodItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodItemRepository for FoodItemRepositoryPostgres {
    async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO food_items (id, owner, name, category, nutrition, acquired_date, shelf_life_days, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(item.id)
        .bind(item.owner.as_ref().map(|o| o.as_str()))
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.nutrition)
        .bind(item.acquired_date.format(ACQUIRED_DATE_FORMAT).to_string())
        .bind(i64::from(item.shelf_life_days))
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn get_all(&self, owner: Option<UserId>) -> Result<Vec<FoodItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, FoodItemEntity>(&format!(
            "{SELECT_COLUMNS} WHERE ($1::TEXT IS NULL OR owner = $1) ORDER BY seq"
        ))
        .bind(owner.as_ref().map(|o| o.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(into_domain_items(entities))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<FoodItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, FoodItemEntity>(&format!(
            "{SELECT_COLUMNS} WHERE LOWER(name) = LOWER($1) ORDER BY seq"
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(into_domain_items(entities).into_iter().next())
    }

    async fn search(
        &self,
        query: &str,
        owner: Option<UserId>,
    ) -> Result<Vec<FoodItem>, RepositoryError> {
        // STRPOS instead of LIKE so '%' and '_' in the query match literally.
        let entities = sqlx::query_as::<_, FoodItemEntity>(&format!(
            "{SELECT_COLUMNS} WHERE STRPOS(LOWER(name), LOWER($1)) > 0 AND ($2::TEXT IS NULL OR owner = $2) ORDER BY seq"
        ))
        .bind(query)
        .bind(owner.as_ref().map(|o| o.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(into_domain_items(entities))
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM food_items WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
