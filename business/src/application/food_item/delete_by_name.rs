use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::delete_by_name::{
    DeleteFoodItemsParams, DeleteFoodItemsUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteFoodItemsUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteFoodItemsUseCase for DeleteFoodItemsUseCaseImpl {
    async fn execute(&self, params: DeleteFoodItemsParams) -> Result<u64, FoodItemError> {
        if params.name.trim().is_empty() {
            return Err(FoodItemError::NameEmpty);
        }

        // Exact, case-sensitive: every acquisition with this name goes.
        let deleted = self.repository.delete_by_name(&params.name).await?;

        self.logger.info(&format!(
            "Deleted {} food items named '{}'",
            deleted, params.name
        ));

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::food_item::find_by_name::FindFoodItemUseCaseImpl;
    use crate::domain::food_item::use_cases::find_by_name::{
        FindFoodItemParams, FindFoodItemUseCase,
    };
    use crate::test_support::{InMemoryFoodItemRepository, clock_at, date, food_item, mock_logger};

    #[tokio::test]
    async fn should_not_find_item_after_deleting_it() {
        let repo = Arc::new(InMemoryFoodItemRepository::default());
        repo.save(&food_item("Apple", date(2025, 1, 1), 5))
            .await
            .unwrap();
        repo.save(&food_item("Apple", date(2025, 1, 2), 5))
            .await
            .unwrap();

        let delete = DeleteFoodItemsUseCaseImpl {
            repository: repo.clone(),
            logger: mock_logger(),
        };
        let find = FindFoodItemUseCaseImpl {
            repository: repo,
            clock: clock_at(date(2025, 1, 3)),
        };

        let deleted = delete
            .execute(DeleteFoodItemsParams {
                name: "Apple".to_string(),
            })
            .await
            .unwrap();
        let found = find
            .execute(FindFoodItemParams {
                name: "Apple".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(deleted, 2);
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn should_leave_differently_cased_names_in_place() {
        let repo = Arc::new(InMemoryFoodItemRepository::default());
        repo.save(&food_item("apple", date(2025, 1, 1), 5))
            .await
            .unwrap();

        let delete = DeleteFoodItemsUseCaseImpl {
            repository: repo.clone(),
            logger: mock_logger(),
        };

        let deleted = delete
            .execute(DeleteFoodItemsParams {
                name: "Apple".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(deleted, 0);
        assert_eq!(repo.get_all(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let delete = DeleteFoodItemsUseCaseImpl {
            repository: Arc::new(InMemoryFoodItemRepository::default()),
            logger: mock_logger(),
        };

        let result = delete
            .execute(DeleteFoodItemsParams {
                name: String::new(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), FoodItemError::NameEmpty));
    }
}
