use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Serialize)]
pub struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

/// Process is up; never touches the database.
pub async fn health() -> (StatusCode, Json<Probe>) {
    (
        StatusCode::OK,
        Json(Probe {
            status: "ok",
            reason: None,
        }),
    )
}

/// Ready to serve `/users`, which needs a working database.
pub async fn ready(State(pool): State<SqlitePool>) -> (StatusCode, Json<Probe>) {
    if let Err(e) = sqlx::query("SELECT 1").execute(&pool).await {
        tracing::error!(error = %e, "User store unreachable, reporting not ready");

        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Probe {
                status: "not_ready",
                reason: Some("database_unavailable"),
            }),
        );
    }

    (
        StatusCode::OK,
        Json(Probe {
            status: "ready",
            reason: None,
        }),
    )
}
