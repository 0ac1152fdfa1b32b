/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The backing service could not be reached. Safe to retry from the caller.
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }

    /// Returns true for failures that may succeed on a later attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, RepositoryError::Unavailable)
    }
}
