use thiserror::Error;

/// Message shown to clients for every token rejection.
pub const REJECTION_MESSAGE: &str = "sign in to proceed";

/// Failures of the authentication core.
///
/// Token rejections are kept distinct here so they can be logged, but
/// callers must render all of them with [`REJECTION_MESSAGE`].
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("signing secret is missing or empty")]
    MissingSecret,

    #[error("authorization cookie is missing")]
    MissingToken,

    #[error("token is malformed")]
    Malformed,

    #[error("unexpected signing algorithm `{0}`")]
    AlgorithmMismatch(String),

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token claims are invalid")]
    InvalidClaims,

    #[error("token has expired")]
    Expired,

    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("clock error: {0}")]
    Clock(String),
}

impl AuthError {
    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::MissingSecret => "missing_secret",
            AuthError::MissingToken => "missing_token",
            AuthError::Malformed => "malformed",
            AuthError::AlgorithmMismatch(_) => "algorithm_mismatch",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::InvalidClaims => "invalid_claims",
            AuthError::Expired => "expired",
            AuthError::Signing(_) => "signing",
            AuthError::Hashing(_) => "hashing",
            AuthError::Clock(_) => "clock",
        }
    }

    /// True for errors caused by the presented token rather than the server.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken
                | AuthError::Malformed
                | AuthError::AlgorithmMismatch(_)
                | AuthError::InvalidSignature
                | AuthError::InvalidClaims
                | AuthError::Expired
        )
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
