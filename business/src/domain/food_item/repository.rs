use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::FoodItem;

/// Persistence port for the food log.
///
/// All listings return records in storage (insertion) order. Implementations
/// skip rows they cannot decode instead of failing the whole call.
#[async_trait]
pub trait FoodItemRepository: Send + Sync {
    /// Always inserts; never merges with same-named records.
    async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError>;
    /// `None` lists every record regardless of owner.
    async fn get_all(&self, owner: Option<UserId>) -> Result<Vec<FoodItem>, RepositoryError>;
    /// Case-insensitive exact match, first record in storage order.
    async fn find_by_name(&self, name: &str) -> Result<Option<FoodItem>, RepositoryError>;
    /// Case-insensitive substring match.
    async fn search(
        &self,
        query: &str,
        owner: Option<UserId>,
    ) -> Result<Vec<FoodItem>, RepositoryError>;
    /// Case-sensitive exact match; removes every matching record and returns
    /// how many were deleted.
    async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError>;
}
