pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use error::AppError;
pub use routes::AppState;

use tower_http::trace::TraceLayer;

/// Full application router with CORS and request tracing
///
/// Used by `serve` and by the integration tests, which drive it without
/// binding a socket.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(middleware::cors_layer())
        .layer(TraceLayer::new_for_http())
}
