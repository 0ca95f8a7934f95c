use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::get_all::GetCatalogUseCase;

use crate::api::catalog::dto::{CatalogEntryResponse, CategoryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_catalog_use_case: Arc<dyn GetCatalogUseCase>,
}

impl CatalogApi {
    pub fn new(get_catalog_use_case: Arc<dyn GetCatalogUseCase>) -> Self {
        Self {
            get_catalog_use_case,
        }
    }
}

/// Reference data seeded at startup
#[OpenApi]
impl CatalogApi {
    /// List catalog entries
    ///
    /// Default shelf lives used when an item is added without one.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_catalog(&self) -> GetCatalogResponse {
        match self.get_catalog_use_case.entries().await {
            Ok(entries) => {
                GetCatalogResponse::Ok(Json(entries.into_iter().map(|e| e.into()).collect()))
            }
            Err(err) => GetCatalogResponse::InternalError(err.into_error_response().1),
        }
    }

    /// List food categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_catalog_use_case.categories().await {
            Ok(categories) => {
                GetCategoriesResponse::Ok(Json(categories.into_iter().map(|c| c.into()).collect()))
            }
            Err(err) => GetCategoriesResponse::InternalError(err.into_error_response().1),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CatalogEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
