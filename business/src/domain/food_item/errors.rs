#[derive(Debug, thiserror::Error)]
pub enum FoodItemError {
    #[error("food_item.name_empty")]
    NameEmpty,
    #[error("food_item.query_empty")]
    QueryEmpty,
    #[error("food_item.no_images")]
    NoImages,
    #[error("food_item.recognition_failed")]
    RecognitionFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
