use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RecipeError::InvalidSize => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.invalid_size",
            ),
            RecipeError::NoIngredients => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NoIngredients",
                "recipe.no_ingredients",
            ),
            RecipeError::GenerationFailed => (
                StatusCode::BAD_GATEWAY,
                "GenerationError",
                "recipe.generation_failed",
            ),
            RecipeError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
