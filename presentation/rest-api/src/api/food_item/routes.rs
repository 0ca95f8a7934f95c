use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::food_item::aging::AgedFoodItem;
use business::domain::food_item::use_cases::add::{AddFoodItemParams, AddFoodItemUseCase};
use business::domain::food_item::use_cases::delete_by_name::{
    DeleteFoodItemsParams, DeleteFoodItemsUseCase,
};
use business::domain::food_item::use_cases::estimate_shelf_life::{
    EstimateShelfLifeParams, EstimateShelfLifeUseCase,
};
use business::domain::food_item::use_cases::expiring_soon::{
    ListExpiringSoonParams, ListExpiringSoonUseCase,
};
use business::domain::food_item::use_cases::find_by_name::{
    FindFoodItemParams, FindFoodItemUseCase,
};
use business::domain::food_item::use_cases::list::{ListFoodItemsParams, ListFoodItemsUseCase};
use business::domain::food_item::use_cases::scan_photos::{ScanPhotosParams, ScanPhotosUseCase};
use business::domain::food_item::use_cases::search::{
    SearchFoodItemsParams, SearchFoodItemsUseCase,
};
use business::domain::recipe::ranker::DEFAULT_EXPIRING_THRESHOLD_DAYS;
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::food_item::dto::{
    AddFoodItemRequest, AddedFoodItemResponse, DeleteFoodItemsResponseBody,
    EstimateShelfLifeRequest, FoodItemResponse, ScanPhotosRequest, ScanPhotosResponseBody,
    ShelfLifeEstimateResponse,
};
use crate::api::tags::ApiTags;

pub struct FoodItemUseCases {
    pub add: Arc<dyn AddFoodItemUseCase>,
    pub list: Arc<dyn ListFoodItemsUseCase>,
    pub expiring_soon: Arc<dyn ListExpiringSoonUseCase>,
    pub search: Arc<dyn SearchFoodItemsUseCase>,
    pub find_by_name: Arc<dyn FindFoodItemUseCase>,
    pub delete_by_name: Arc<dyn DeleteFoodItemsUseCase>,
    pub scan_photos: Arc<dyn ScanPhotosUseCase>,
    pub estimate_shelf_life: Arc<dyn EstimateShelfLifeUseCase>,
}

pub struct FoodItemApi {
    use_cases: FoodItemUseCases,
}

impl FoodItemApi {
    pub fn new(use_cases: FoodItemUseCases) -> Self {
        Self { use_cases }
    }
}

fn to_responses(items: Vec<AgedFoodItem>) -> Json<Vec<FoodItemResponse>> {
    Json(items.into_iter().map(|i| i.into()).collect())
}

/// Food inventory API
///
/// Every acquisition is its own record; ages are recomputed on each read.
#[OpenApi]
impl FoodItemApi {
    /// Add a food item
    ///
    /// Shelf life comes from `shelf_life_days`, else from `expiration` text,
    /// else from the catalog, an external lookup, or the default.
    #[oai(path = "/food-items", method = "post", tag = "ApiTags::FoodItems")]
    async fn add_food_item(&self, body: Json<AddFoodItemRequest>) -> AddFoodItemResponse {
        let params = AddFoodItemParams {
            owner: UserId::from_optional(body.0.user_id),
            name: body.0.name,
            category: body.0.category,
            nutrition: body.0.nutrition,
            shelf_life_days: body.0.shelf_life_days,
            raw_expiration: body.0.expiration,
        };

        match self.use_cases.add.execute(params).await {
            Ok(added) => AddFoodItemResponse::Created(Json(added.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddFoodItemResponse::BadRequest(json),
                    _ => AddFoodItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List food items
    ///
    /// Active items only, unless `include_expired` is set, in which case
    /// expired items are included and labelled "expired".
    #[oai(path = "/food-items", method = "get", tag = "ApiTags::FoodItems")]
    async fn list_food_items(
        &self,
        user_id: Query<Option<String>>,
        include_expired: Query<Option<bool>>,
    ) -> ListFoodItemsResponse {
        let params = ListFoodItemsParams {
            owner: UserId::from_optional(user_id.0),
            include_expired: include_expired.0.unwrap_or(false),
        };

        match self.use_cases.list.execute(params).await {
            Ok(items) => ListFoodItemsResponse::Ok(to_responses(items)),
            Err(err) => ListFoodItemsResponse::InternalError(err.into_error_response().1),
        }
    }

    /// List items expiring soon
    ///
    /// Items with between 0 and `threshold_days` (default 3) days left,
    /// soonest first.
    #[oai(path = "/food-items/expiring", method = "get", tag = "ApiTags::FoodItems")]
    async fn list_expiring_soon(
        &self,
        user_id: Query<Option<String>>,
        threshold_days: Query<Option<i64>>,
    ) -> ListFoodItemsResponse {
        let params = ListExpiringSoonParams {
            owner: UserId::from_optional(user_id.0),
            threshold_days: threshold_days.0.unwrap_or(DEFAULT_EXPIRING_THRESHOLD_DAYS),
        };

        match self.use_cases.expiring_soon.execute(params).await {
            Ok(items) => ListFoodItemsResponse::Ok(to_responses(items)),
            Err(err) => ListFoodItemsResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Search food items
    ///
    /// Case-insensitive substring match on names; expired items are left out.
    #[oai(path = "/food-items/search", method = "get", tag = "ApiTags::FoodItems")]
    async fn search_food_items(
        &self,
        q: Query<Option<String>>,
        user_id: Query<Option<String>>,
    ) -> SearchFoodItemsResponse {
        let params = SearchFoodItemsParams {
            query: q.0.unwrap_or_default(),
            owner: UserId::from_optional(user_id.0),
        };

        match self.use_cases.search.execute(params).await {
            Ok(items) => SearchFoodItemsResponse::Ok(to_responses(items)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchFoodItemsResponse::BadRequest(json),
                    _ => SearchFoodItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Find a food item by name
    ///
    /// Case-insensitive exact match; returns the oldest record.
    #[oai(path = "/food-items/by-name", method = "get", tag = "ApiTags::FoodItems")]
    async fn find_food_item(&self, name: Query<String>) -> FindFoodItemResponse {
        match self
            .use_cases
            .find_by_name
            .execute(FindFoodItemParams { name: name.0 })
            .await
        {
            Ok(Some(item)) => FindFoodItemResponse::Ok(Json(item.into())),
            Ok(None) => FindFoodItemResponse::NotFound(Json(ErrorResponse::new(
                "NotFound",
                "food_item.not_found",
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FindFoodItemResponse::BadRequest(json),
                    _ => FindFoodItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete food items by name
    ///
    /// Removes every record whose name matches exactly (case-sensitive).
    #[oai(path = "/food-items", method = "delete", tag = "ApiTags::FoodItems")]
    async fn delete_food_items(&self, name: Query<String>) -> DeleteFoodItemsResponse {
        match self
            .use_cases
            .delete_by_name
            .execute(DeleteFoodItemsParams { name: name.0 })
            .await
        {
            Ok(deleted) => {
                DeleteFoodItemsResponse::Ok(Json(DeleteFoodItemsResponseBody { deleted }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteFoodItemsResponse::BadRequest(json),
                    _ => DeleteFoodItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Scan food photos
    ///
    /// Recognizes food in each photo and adds it. A photo that cannot be
    /// read is counted in `failed_images` and does not stop the batch.
    #[oai(path = "/food-items/scan", method = "post", tag = "ApiTags::FoodItems")]
    async fn scan_photos(&self, body: Json<ScanPhotosRequest>) -> ScanPhotosResponse {
        let params = ScanPhotosParams {
            owner: UserId::from_optional(body.0.user_id),
            images_base64: body.0.images_base64,
        };

        match self.use_cases.scan_photos.execute(params).await {
            Ok(result) => ScanPhotosResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ScanPhotosResponse::BadRequest(json),
                    422 => ScanPhotosResponse::UnprocessableEntity(json),
                    _ => ScanPhotosResponse::InternalError(json),
                }
            }
        }
    }

    /// Estimate shelf life
    ///
    /// Runs the same estimation as adding an item, without storing anything.
    #[oai(path = "/shelf-life/estimate", method = "post", tag = "ApiTags::ShelfLife")]
    async fn estimate_shelf_life(
        &self,
        body: Json<EstimateShelfLifeRequest>,
    ) -> EstimateShelfLifeResponse {
        let params = EstimateShelfLifeParams {
            food_name: body.0.food_name,
            raw_expiration: body.0.expiration,
        };

        match self.use_cases.estimate_shelf_life.execute(params).await {
            Ok(estimation) => EstimateShelfLifeResponse::Ok(Json(estimation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => EstimateShelfLifeResponse::BadRequest(json),
                    _ => EstimateShelfLifeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddFoodItemResponse {
    #[oai(status = 201)]
    Created(Json<AddedFoodItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListFoodItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FoodItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchFoodItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FoodItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindFoodItemResponse {
    #[oai(status = 200)]
    Ok(Json<FoodItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteFoodItemsResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteFoodItemsResponseBody>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanPhotosResponse {
    #[oai(status = 200)]
    Ok(Json<ScanPhotosResponseBody>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EstimateShelfLifeResponse {
    #[oai(status = 200)]
    Ok(Json<ShelfLifeEstimateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
