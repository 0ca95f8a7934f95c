use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::food_item::aging::{AgedFoodItem, active_only, age_items};
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::search::{SearchFoodItemsParams, SearchFoodItemsUseCase};
use crate::domain::logger::Logger;

pub struct SearchFoodItemsUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchFoodItemsUseCase for SearchFoodItemsUseCaseImpl {
    async fn execute(
        &self,
        params: SearchFoodItemsParams,
    ) -> Result<Vec<AgedFoodItem>, FoodItemError> {
        let query = params.query.trim();
        if query.is_empty() {
            return Err(FoodItemError::QueryEmpty);
        }

        let items = self.repository.search(query, params.owner).await?;
        let result = active_only(age_items(items, self.clock.today()));

        self.logger.debug(&format!(
            "Search '{}' matched {} food items",
            query,
            result.len()
        ));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryFoodItemRepository, clock_at, date, food_item, mock_logger};

    async fn use_case() -> SearchFoodItemsUseCaseImpl {
        let repo = InMemoryFoodItemRepository::default();
        for (name, acquired, days) in [
            ("Green Apple", date(2025, 1, 1), 5),
            ("Pineapple", date(2024, 11, 1), 5),
            ("apple juice", date(2025, 1, 1), 10),
            ("Banana", date(2025, 1, 1), 3),
        ] {
            repo.save(&food_item(name, acquired, days)).await.unwrap();
        }

        SearchFoodItemsUseCaseImpl {
            repository: Arc::new(repo),
            clock: clock_at(date(2025, 1, 2)),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_match_substring_case_insensitively_and_skip_expired() {
        let items = use_case()
            .await
            .execute(SearchFoodItemsParams {
                query: "APPLE".to_string(),
                owner: None,
            })
            .await
            .unwrap();

        let names: Vec<_> = items.iter().map(|i| i.item.name.as_str()).collect();
        assert_eq!(names, vec!["Green Apple", "apple juice"]);
    }

    #[tokio::test]
    async fn should_reject_blank_query() {
        let result = use_case()
            .await
            .execute(SearchFoodItemsParams {
                query: "  ".to_string(),
                owner: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), FoodItemError::QueryEmpty));
    }
}
