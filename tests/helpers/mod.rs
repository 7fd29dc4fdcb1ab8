#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{HeaderMap, Method, StatusCode, header},
};
use http_body_util::BodyExt;
use mygram::{
    AppState, Config,
    config::{AuthConfig, DatabaseConfig, ObservabilityConfig, ServerConfig},
};
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const TEST_TOKEN_KEY: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
}

pub fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
        },
        auth: AuthConfig {
            token_key: TEST_TOKEN_KEY.to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.path().join("mygram.db").display());
    let config = test_config(url);

    let pool = mygram::db::create_pool(&config.database.url, 5).await?;
    mygram_db::migrate(&pool).await?;

    let state = AppState::new(&config, pool)?;

    Ok(TestApp {
        router: mygram::create_app(state.clone()),
        state,
        _dir: dir,
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<TestResponse> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await?.to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    Ok(TestResponse {
        status,
        headers,
        body,
    })
}

pub async fn register(router: &Router, name: &str) -> anyhow::Result<TestResponse> {
    send(
        router,
        Method::POST,
        "/users/register",
        None,
        Some(serde_json::json!({
            "username": name,
            "email": format!("{name}@mygram.localhost"),
            "password": "my_password",
            "age": 20,
        })),
    )
    .await
}

pub async fn login(router: &Router, name: &str) -> anyhow::Result<TestResponse> {
    send(
        router,
        Method::POST,
        "/users/login",
        None,
        Some(serde_json::json!({
            "email": format!("{name}@mygram.localhost"),
            "password": "my_password",
        })),
    )
    .await
}

/// Registers `name`, logs in and returns the `Cookie` header value
pub async fn session_cookie(router: &Router, name: &str) -> anyhow::Result<String> {
    register(router, name).await?;
    let res = login(router, name).await?;
    let token = res.body["data"]["token"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("login returned no token"))?;

    Ok(format!("Authorization={token}"))
}

pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
