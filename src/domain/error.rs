use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid username (at most 256 characters)")]
    InvalidUsername,

    #[error("Failed to encode password: {0}")]
    EncodingError(String),

    #[error("Stored password hash is malformed: {0}")]
    InvalidHashFormat(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
