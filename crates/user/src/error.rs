use thiserror::Error;

/// Domain-specific errors for user operations
///
/// Messages are shown to API clients as-is, except for the
/// hashing and database variants.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("the email you entered has been used")]
    EmailAlreadyExists,

    #[error("the username you entered has been used")]
    UsernameAlreadyExists,

    /// Unknown email and wrong password are deliberately the same error.
    #[error("the credential you entered are wrong")]
    InvalidCredentials,

    #[error("account not found")]
    NotFound,

    #[error("{0}")]
    ValidationError(String),

    #[error("Password hashing failed")]
    HashingError(#[from] mygram_auth::AuthError),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<validator::ValidationErrors> for UserError {
    fn from(errors: validator::ValidationErrors) -> Self {
        UserError::ValidationError(errors.to_string())
    }
}

/// Result type for user operations that may fail with UserError
pub type UserResult<T> = Result<T, UserError>;
