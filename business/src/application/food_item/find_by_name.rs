use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::food_item::aging::AgedFoodItem;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::find_by_name::{FindFoodItemParams, FindFoodItemUseCase};

pub struct FindFoodItemUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub clock: Arc<dyn Clock>,
}

#[async_trait]
impl FindFoodItemUseCase for FindFoodItemUseCaseImpl {
    async fn execute(
        &self,
        params: FindFoodItemParams,
    ) -> Result<Option<AgedFoodItem>, FoodItemError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(FoodItemError::NameEmpty);
        }

        let found = self.repository.find_by_name(name).await?;
        Ok(found.map(|item| AgedFoodItem::at(item, self.clock.today())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockFoodItemRepo, clock_at, date, food_item};

    #[tokio::test]
    async fn should_return_aged_item_when_found() {
        let mut repo = MockFoodItemRepo::new();
        repo.expect_find_by_name()
            .withf(|name| name == "milk")
            .returning(|_| Ok(Some(food_item("Milk", date(2025, 1, 1), 7))));

        let use_case = FindFoodItemUseCaseImpl {
            repository: Arc::new(repo),
            clock: clock_at(date(2025, 1, 9)),
        };

        let found = use_case
            .execute(FindFoodItemParams {
                name: " milk ".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.item.name, "Milk");
        assert!(found.is_expired());
    }

    #[tokio::test]
    async fn should_return_none_when_missing() {
        let mut repo = MockFoodItemRepo::new();
        repo.expect_find_by_name().returning(|_| Ok(None));

        let use_case = FindFoodItemUseCaseImpl {
            repository: Arc::new(repo),
            clock: clock_at(date(2025, 1, 1)),
        };

        let found = use_case
            .execute(FindFoodItemParams {
                name: "Caviar".to_string(),
            })
            .await
            .unwrap();

        assert!(found.is_none());
    }
}
