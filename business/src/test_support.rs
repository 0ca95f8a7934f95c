//! Mocks and fixtures shared by the use case tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use crate::domain::catalog::model::{CatalogEntry, FoodCategory};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::clock::Clock;
use crate::domain::errors::RepositoryError;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{FoodItem, NewFoodItemProps};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::services::{
    FoodRecognizerService, RecognizedFood, ShelfLifeEstimator, ShelfLifeLookupService,
};
use crate::domain::food_item::shelf_life::ShelfLifeEstimate;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeConstraints;
use crate::domain::recipe::services::RecipeGeneratorService;
use crate::domain::shared::value_objects::UserId;

mock! {
    pub FoodItemRepo {}

    #[async_trait]
    impl FoodItemRepository for FoodItemRepo {
        async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError>;
        async fn get_all(&self, owner: Option<UserId>) -> Result<Vec<FoodItem>, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<FoodItem>, RepositoryError>;
        async fn search(
            &self,
            query: &str,
            owner: Option<UserId>,
        ) -> Result<Vec<FoodItem>, RepositoryError>;
        async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub CatalogRepo {}

    #[async_trait]
    impl CatalogRepository for CatalogRepo {
        async fn find_by_name(&self, name: &str) -> Option<CatalogEntry>;
        async fn get_all(&self) -> Vec<CatalogEntry>;
        async fn insert_if_absent(&self, entry: &CatalogEntry) -> Result<bool, RepositoryError>;
        async fn get_categories(&self) -> Vec<FoodCategory>;
        async fn insert_category_if_absent(
            &self,
            category: &FoodCategory,
        ) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub ShelfLifeLookup {}

    #[async_trait]
    impl ShelfLifeLookupService for ShelfLifeLookup {
        async fn lookup(&self, food_name: &str) -> Option<String>;
    }
}

mock! {
    pub Estimator {}

    #[async_trait]
    impl ShelfLifeEstimator for Estimator {
        async fn estimate(&self, food_name: &str, today: NaiveDate) -> ShelfLifeEstimate;
    }
}

mock! {
    pub Recognizer {}

    #[async_trait]
    impl FoodRecognizerService for Recognizer {
        async fn recognize(&self, image_base64: &str) -> Result<Vec<RecognizedFood>, FoodItemError>;
    }
}

mock! {
    pub RecipeGenerator {}

    #[async_trait]
    impl RecipeGeneratorService for RecipeGenerator {
        async fn generate(
            &self,
            ingredient_names: &[String],
            constraints: &RecipeConstraints,
        ) -> Result<String, RecipeError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn clock_at(date: NaiveDate) -> Arc<dyn Clock> {
    Arc::new(FixedClock(date))
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn food_item(name: &str, acquired_date: NaiveDate, shelf_life_days: i64) -> FoodItem {
    FoodItem::new(NewFoodItemProps {
        owner: None,
        name: name.to_string(),
        category: None,
        nutrition: None,
        acquired_date,
        shelf_life_days,
    })
    .unwrap()
}

/// Vec-backed repository with the same matching rules as the SQL adapter.
#[derive(Default)]
pub struct InMemoryFoodItemRepository {
    items: Mutex<Vec<FoodItem>>,
}

#[async_trait]
impl FoodItemRepository for InMemoryFoodItemRepository {
    async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn get_all(&self, owner: Option<UserId>) -> Result<Vec<FoodItem>, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| owner.is_none() || i.owner == owner)
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<FoodItem>, RepositoryError> {
        let needle = name.to_lowercase();
        let items = self.items.lock().unwrap();
        Ok(items.iter().find(|i| i.name.to_lowercase() == needle).cloned())
    }

    async fn search(
        &self,
        query: &str,
        owner: Option<UserId>,
    ) -> Result<Vec<FoodItem>, RepositoryError> {
        let needle = query.to_lowercase();
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| owner.is_none() || i.owner == owner)
            .filter(|i| i.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.name != name);
        Ok((before - items.len()) as u64)
    }
}
