use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::food_item::errors::FoodItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FoodItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FoodItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.name_empty",
            ),
            FoodItemError::QueryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.query_empty",
            ),
            FoodItemError::NoImages => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.no_images",
            ),
            FoodItemError::RecognitionFailed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "RecognitionError",
                "food_item.recognition_failed",
            ),
            FoodItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = FoodItemError::NameEmpty.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "food_item.name_empty");
    }

    #[test]
    fn should_hide_storage_details_behind_internal_error() {
        let (status, json) =
            FoodItemError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
        assert_eq!(json.0.message, "repository.persistence");
    }
}
