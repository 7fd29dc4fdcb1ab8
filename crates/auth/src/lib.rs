//! Authentication core
//!
//! Stateless HS256 tokens carried in an HTTP-only cookie, plus Argon2
//! password hashing for the login flow.

pub mod error;
pub mod jwt;
pub mod password;
pub mod secret;

pub use error::{AuthError, AuthResult, REJECTION_MESSAGE};
pub use jwt::{Identity, TOKEN_LIFETIME_SECS, TokenCodec};
pub use password::{hash_password, verify_password};
pub use secret::SigningSecret;

/// Cookie name carrying the token
pub const AUTH_COOKIE_NAME: &str = "Authorization";
