#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.no_ingredients")]
    NoIngredients,
    #[error("recipe.invalid_size")]
    InvalidSize,
    #[error("recipe.generation_failed")]
    GenerationFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
