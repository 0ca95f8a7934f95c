use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{RecipeConstraints, RecipeSize};
use business::domain::recipe::ranker::DEFAULT_RECIPE_INGREDIENT_LIMIT;
use business::domain::recipe::use_cases::generate::{GenerateRecipeParams, GenerateRecipeUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{GenerateRecipeRequest, RecipeResponse};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    generate_use_case: Arc<dyn GenerateRecipeUseCase>,
}

impl RecipeApi {
    pub fn new(generate_use_case: Arc<dyn GenerateRecipeUseCase>) -> Self {
        Self { generate_use_case }
    }
}

fn to_params(request: GenerateRecipeRequest) -> Result<GenerateRecipeParams, RecipeError> {
    let size = match request.recipe_size {
        Some(size) => size.parse::<RecipeSize>()?,
        None => RecipeSize::default(),
    };

    Ok(GenerateRecipeParams {
        owner: UserId::from_optional(request.user_id),
        constraints: RecipeConstraints {
            size,
            dietary_restrictions: request.dietary_restrictions.filter(|s| !s.trim().is_empty()),
            cuisine_preference: request.cuisine_preference.filter(|s| !s.trim().is_empty()),
        },
        prioritize_expiring: request.prioritize_expiring.unwrap_or(true),
        limit: request
            .limit
            .map(|l| l as usize)
            .unwrap_or(DEFAULT_RECIPE_INGREDIENT_LIMIT),
    })
}

#[OpenApi]
impl RecipeApi {
    /// Generate a recipe
    ///
    /// Builds a recipe from non-expired inventory items. By default the
    /// ingredients closest to expiring are used first.
    #[oai(path = "/recipes", method = "post", tag = "ApiTags::Recipes")]
    async fn generate_recipe(&self, body: Json<GenerateRecipeRequest>) -> GenerateRecipeResponse {
        let result = match to_params(body.0) {
            Ok(params) => self.generate_use_case.execute(params).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(recipe) => GenerateRecipeResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GenerateRecipeResponse::BadRequest(json),
                    422 => GenerateRecipeResponse::UnprocessableEntity(json),
                    502 => GenerateRecipeResponse::BadGateway(json),
                    _ => GenerateRecipeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
