/// Failure reported by a storage adapter.
///
/// Driver errors are not carried; use cases only see the code.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.database_error")]
    DatabaseError,
}
