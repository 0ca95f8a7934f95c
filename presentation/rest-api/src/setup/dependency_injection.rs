use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::repository::CatalogRepositoryPostgres;
use persistence::food_item::repository::FoodItemRepositoryPostgres;

use openai::client::OpenAIClient;
use openai::food_recognizer::FoodRecognizerOpenAI;
use openai::recipe_generator::RecipeGeneratorOpenAI;
use openai::shelf_life_lookup::ShelfLifeLookupOpenAI;

use business::application::catalog::get_all::GetCatalogUseCaseImpl;
use business::application::catalog::seed::SeedCatalogUseCaseImpl;
use business::application::food_item::add::AddFoodItemUseCaseImpl;
use business::application::food_item::delete_by_name::DeleteFoodItemsUseCaseImpl;
use business::application::food_item::estimate_shelf_life::EstimateShelfLifeUseCaseImpl;
use business::application::food_item::expiring_soon::ListExpiringSoonUseCaseImpl;
use business::application::food_item::find_by_name::FindFoodItemUseCaseImpl;
use business::application::food_item::list::ListFoodItemsUseCaseImpl;
use business::application::food_item::scan_photos::ScanPhotosUseCaseImpl;
use business::application::food_item::search::SearchFoodItemsUseCaseImpl;
use business::application::food_item::shelf_life_estimator::ShelfLifeEstimatorImpl;
use business::application::recipe::generate::GenerateRecipeUseCaseImpl;
use business::domain::catalog::use_cases::seed::SeedCatalogUseCase;

use crate::api::catalog::routes::CatalogApi;
use crate::api::food_item::routes::{FoodItemApi, FoodItemUseCases};
use crate::api::health::routes::HealthApi;
use crate::api::recipe::routes::RecipeApi;
use crate::config::inventory_config::InventoryConfig;
use crate::config::openai_config::OpenAIConfig;
use crate::setup::clock::LocalClock;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub food_item_api: FoodItemApi,
    pub catalog_api: CatalogApi,
    pub recipe_api: RecipeApi,
    pub seed_catalog_use_case: Arc<dyn SeedCatalogUseCase>,
}

impl DependencyContainer {
    pub fn new(
        pool: sqlx::PgPool,
        openai_config: &OpenAIConfig,
        inventory_config: &InventoryConfig,
    ) -> Self {
        let logger = Arc::new(TracingLogger);
        let clock = Arc::new(LocalClock);

        // Infrastructure adapters
        let food_item_repository = Arc::new(FoodItemRepositoryPostgres::new(pool.clone()));
        let catalog_repository = Arc::new(CatalogRepositoryPostgres::new(pool));

        let openai_client =
            OpenAIClient::new(openai_config.api_key.clone(), openai_config.timeout);
        let shelf_life_lookup = Arc::new(ShelfLifeLookupOpenAI::new(openai_client.clone()));
        let food_recognizer = Arc::new(FoodRecognizerOpenAI::new(openai_client.clone()));
        let recipe_generator = Arc::new(RecipeGeneratorOpenAI::new(openai_client));

        let estimator = Arc::new(ShelfLifeEstimatorImpl {
            catalog: catalog_repository.clone(),
            lookup: shelf_life_lookup,
            logger: logger.clone(),
            lookup_timeout: inventory_config.lookup_timeout,
            default_days: inventory_config.default_shelf_life_days,
        });

        // Food item use cases
        let add_use_case = Arc::new(AddFoodItemUseCaseImpl {
            repository: food_item_repository.clone(),
            estimator: estimator.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let food_item_use_cases = FoodItemUseCases {
            add: add_use_case.clone(),
            list: Arc::new(ListFoodItemsUseCaseImpl {
                repository: food_item_repository.clone(),
                clock: clock.clone(),
                logger: logger.clone(),
            }),
            expiring_soon: Arc::new(ListExpiringSoonUseCaseImpl {
                repository: food_item_repository.clone(),
                clock: clock.clone(),
                logger: logger.clone(),
            }),
            search: Arc::new(SearchFoodItemsUseCaseImpl {
                repository: food_item_repository.clone(),
                clock: clock.clone(),
                logger: logger.clone(),
            }),
            find_by_name: Arc::new(FindFoodItemUseCaseImpl {
                repository: food_item_repository.clone(),
                clock: clock.clone(),
            }),
            delete_by_name: Arc::new(DeleteFoodItemsUseCaseImpl {
                repository: food_item_repository.clone(),
                logger: logger.clone(),
            }),
            scan_photos: Arc::new(ScanPhotosUseCaseImpl {
                recognizer: food_recognizer,
                add_food_item: add_use_case,
                logger: logger.clone(),
            }),
            estimate_shelf_life: Arc::new(EstimateShelfLifeUseCaseImpl {
                estimator,
                clock: clock.clone(),
                logger: logger.clone(),
            }),
        };

        // Catalog use cases
        let get_catalog_use_case = Arc::new(GetCatalogUseCaseImpl {
            repository: catalog_repository.clone(),
        });
        let seed_catalog_use_case = Arc::new(SeedCatalogUseCaseImpl {
            repository: catalog_repository,
            logger: logger.clone(),
        });

        // Recipe use cases
        let generate_recipe_use_case = Arc::new(GenerateRecipeUseCaseImpl {
            repository: food_item_repository,
            generator: recipe_generator,
            clock,
            logger,
        });

        Self {
            health_api: HealthApi,
            food_item_api: FoodItemApi::new(food_item_use_cases),
            catalog_api: CatalogApi::new(get_catalog_use_case),
            recipe_api: RecipeApi::new(generate_recipe_use_case),
            seed_catalog_use_case,
        }
    }
}
