use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use mygram_auth::{AUTH_COOKIE_NAME, AuthError, AuthResult, Identity, TokenCodec};

use crate::{error::AppError, routes::AppState};

/// Authentication middleware that validates the token from the cookie
///
/// On success the decoded `Identity` is inserted as a request extension for
/// `AuthUser`. Any rejection answers 401 with the generic body and the
/// wrapped handler never runs. The `Authorization` header is not consulted.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let identity = match authenticate(&state.token_codec, &jar) {
        Ok(identity) => identity,
        Err(e) if e.is_rejection() => {
            tracing::warn!(
                reason = e.kind(),
                path = %req.uri().path(),
                "Rejected unauthenticated request"
            );
            return AppError::Unauthenticated(e).into_response();
        }
        Err(e) => return AppError::from(e).into_response(),
    };

    tracing::debug!(user_id = %identity.user_id, "Request authenticated");

    req.extensions_mut().insert(identity);
    next.run(req).await
}

fn authenticate(codec: &TokenCodec, jar: &CookieJar) -> AuthResult<Identity> {
    let token = jar
        .get(AUTH_COOKIE_NAME)
        .map(|cookie| cookie.value())
        .ok_or(AuthError::MissingToken)?;

    codec.decode(token)
}
