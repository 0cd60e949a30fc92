use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error type for user domain operations.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("User with id {0} not found")]
    NotFound(String),

    #[error("User with email {0} not found")]
    NotFoundByEmail(String),

    #[error("Email {0} already exists")]
    EmailAlreadyExists(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid user id: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Password hashing failed: {0}")]
    Password(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
