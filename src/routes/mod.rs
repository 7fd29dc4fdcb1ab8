use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use mygram_auth::{AuthError, TokenCodec};
use sqlx::SqlitePool;

use crate::{config::Config, middleware::auth_middleware};

mod health;
mod users;

#[derive(Clone)]
pub struct AppState {
    pub token_codec: Arc<TokenCodec>,
    pub user_command: mygram_user::Command,
    pub pool: SqlitePool,
}

impl AppState {
    /// Build the state once at startup; the signing secret is never re-read.
    pub fn new(config: &Config, pool: SqlitePool) -> Result<Self, AuthError> {
        let secret = config.auth.signing_secret()?;

        Ok(Self {
            token_codec: Arc::new(TokenCodec::new(&secret)),
            user_command: mygram_user::Command(pool.clone()),
            pool,
        })
    }
}

pub fn router(app_state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/users",
            get(users::list).put(users::update).delete(users::delete),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                .route("/users/register", post(users::register))
                .route("/users/login", post(users::login))
                .merge(protected)
                .with_state(app_state),
        )
}
