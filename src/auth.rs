use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, SameSite};
use mygram_auth::{AUTH_COOKIE_NAME, AuthError, Identity, TOKEN_LIFETIME_SECS};

use crate::error::AppError;

/// Session cookie carrying a freshly issued token
///
/// Lifetime matches the token's own validity window.
pub fn build_cookie<'a>(token: String) -> Cookie<'a> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(TOKEN_LIFETIME_SECS as i64))
        .build()
}

/// Cookie used to clear the session on the client
pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build((AUTH_COOKIE_NAME, "")).path("/").build()
}

/// Identity of the caller, inserted by `auth_middleware`
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthUser)
            .ok_or(AppError::Unauthenticated(AuthError::MissingToken))
    }
}
