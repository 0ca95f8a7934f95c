use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::services::FoodRecognizerService;
use crate::domain::food_item::use_cases::add::{AddFoodItemParams, AddFoodItemUseCase};
use crate::domain::food_item::use_cases::scan_photos::{
    ScanPhotosParams, ScanPhotosResult, ScanPhotosUseCase, ScannedFoodItem,
};
use crate::domain::logger::Logger;

/// Recognizes each photo and adds what it finds through the regular add path.
pub struct ScanPhotosUseCaseImpl {
    pub recognizer: Arc<dyn FoodRecognizerService>,
    pub add_food_item: Arc<dyn AddFoodItemUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanPhotosUseCase for ScanPhotosUseCaseImpl {
    async fn execute(&self, params: ScanPhotosParams) -> Result<ScanPhotosResult, FoodItemError> {
        if params.images_base64.is_empty() {
            return Err(FoodItemError::NoImages);
        }

        self.logger.info(&format!(
            "Scanning {} food photos",
            params.images_base64.len()
        ));

        let mut result = ScanPhotosResult::default();

        for (index, image) in params.images_base64.iter().enumerate() {
            let recognized = match self.recognizer.recognize(image).await {
                Ok(recognized) => recognized,
                Err(e) => {
                    self.logger
                        .warn(&format!("Photo {} could not be recognized: {}", index, e));
                    result.failed_images += 1;
                    continue;
                }
            };

            for food in recognized {
                let added = self
                    .add_food_item
                    .execute(AddFoodItemParams {
                        owner: params.owner.clone(),
                        name: food.name.clone(),
                        category: food.category,
                        nutrition: None,
                        shelf_life_days: None,
                        raw_expiration: food.raw_expiration.clone(),
                    })
                    .await;

                match added {
                    Ok(added) => result.added.push(ScannedFoodItem {
                        item: added.item,
                        raw_expiration: food.raw_expiration,
                        estimate_source: added.estimate_source,
                    }),
                    Err(FoodItemError::NameEmpty) => {
                        self.logger
                            .warn(&format!("Skipping unnamed item found in photo {}", index));
                    }
                    Err(e) => {
                        self.logger.error(&format!(
                            "Could not add {} found in photo {}: {}",
                            food.name, index, e
                        ));
                        result.failed_items += 1;
                    }
                }
            }
        }

        self.logger.info(&format!(
            "Photo scan added {} food items, {} photos failed, {} items not stored",
            result.added.len(),
            result.failed_images,
            result.failed_items
        ));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::food_item::aging::AgedFoodItem;
    use crate::domain::food_item::services::RecognizedFood;
    use crate::domain::food_item::shelf_life::EstimateSource;
    use crate::domain::food_item::use_cases::add::AddedFoodItem;
    use crate::test_support::{MockRecognizer, date, food_item, mock_logger};
    use mockall::mock;

    mock! {
        pub AddFoodItem {}

        #[async_trait]
        impl AddFoodItemUseCase for AddFoodItem {
            async fn execute(&self, params: AddFoodItemParams) -> Result<AddedFoodItem, FoodItemError>;
        }
    }

    fn recognized(name: &str, raw_expiration: Option<&str>) -> RecognizedFood {
        RecognizedFood {
            name: name.to_string(),
            raw_expiration: raw_expiration.map(str::to_string),
            category: None,
        }
    }

    fn adding_everything() -> MockAddFoodItem {
        let mut add = MockAddFoodItem::new();
        add.expect_execute().returning(|params| {
            if params.name.trim().is_empty() {
                return Err(FoodItemError::NameEmpty);
            }
            let item = food_item(&params.name, date(2025, 1, 1), 5);
            Ok(AddedFoodItem {
                item: AgedFoodItem::at(item, date(2025, 1, 1)),
                estimate_source: EstimateSource::Catalog,
            })
        });
        add
    }

    fn params(images: &[&str]) -> ScanPhotosParams {
        ScanPhotosParams {
            owner: None,
            images_base64: images.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn should_add_every_recognized_item() {
        let mut recognizer = MockRecognizer::new();
        recognizer.expect_recognize().returning(|_| {
            Ok(vec![
                recognized("Milk", Some("2025-01-08")),
                recognized("Apple", None),
            ])
        });

        let use_case = ScanPhotosUseCaseImpl {
            recognizer: Arc::new(recognizer),
            add_food_item: Arc::new(adding_everything()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(&["fridge.jpg"])).await.unwrap();

        assert_eq!(result.added.len(), 2);
        assert_eq!(result.failed_images, 0);
        assert_eq!(result.added[0].raw_expiration.as_deref(), Some("2025-01-08"));
        assert_eq!(result.added[1].item.item.name, "Apple");
    }

    #[tokio::test]
    async fn should_continue_batch_when_one_photo_fails() {
        let mut recognizer = MockRecognizer::new();
        recognizer.expect_recognize().returning(|image| {
            if image == "blurry" {
                Err(FoodItemError::RecognitionFailed)
            } else {
                Ok(vec![recognized("Bread", None)])
            }
        });

        let use_case = ScanPhotosUseCaseImpl {
            recognizer: Arc::new(recognizer),
            add_food_item: Arc::new(adding_everything()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(&["blurry", "pantry", "shelf"]))
            .await
            .unwrap();

        assert_eq!(result.failed_images, 1);
        assert_eq!(result.added.len(), 2);
    }

    #[tokio::test]
    async fn should_skip_unnamed_recognitions() {
        let mut recognizer = MockRecognizer::new();
        recognizer
            .expect_recognize()
            .returning(|_| Ok(vec![recognized(" ", None), recognized("Egg", None)]));

        let use_case = ScanPhotosUseCaseImpl {
            recognizer: Arc::new(recognizer),
            add_food_item: Arc::new(adding_everything()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(&["carton"])).await.unwrap();

        assert_eq!(result.added.len(), 1);
        assert_eq!(result.added[0].item.item.name, "Egg");
    }

    #[tokio::test]
    async fn should_reject_empty_batch() {
        let use_case = ScanPhotosUseCaseImpl {
            recognizer: Arc::new(MockRecognizer::new()),
            add_food_item: Arc::new(MockAddFoodItem::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(&[])).await;

        assert!(matches!(result.unwrap_err(), FoodItemError::NoImages));
    }

    #[tokio::test]
    async fn should_keep_adding_and_report_stored_items_when_one_save_fails() {
        let mut recognizer = MockRecognizer::new();
        recognizer
            .expect_recognize()
            .returning(|_| Ok(vec![recognized("Milk", None), recognized("Egg", None)]));
        let mut add = MockAddFoodItem::new();
        add.expect_execute().returning(|params| {
            if params.name == "Egg" {
                return Err(FoodItemError::Repository(RepositoryError::DatabaseError));
            }
            let item = food_item(&params.name, date(2025, 1, 1), 5);
            Ok(AddedFoodItem {
                item: AgedFoodItem::at(item, date(2025, 1, 1)),
                estimate_source: EstimateSource::Default,
            })
        });

        let use_case = ScanPhotosUseCaseImpl {
            recognizer: Arc::new(recognizer),
            add_food_item: Arc::new(add),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(&["fridge", "pantry"])).await.unwrap();

        assert_eq!(result.added.len(), 2);
        assert!(result.added.iter().all(|s| s.item.item.name == "Milk"));
        assert_eq!(result.failed_items, 2);
        assert_eq!(result.failed_images, 0);
    }
}
