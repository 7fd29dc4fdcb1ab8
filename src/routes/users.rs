use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use mygram_auth::Identity;
use mygram_user::{LoginInput, RegisterInput, UpdateInput, UserRow};
use serde::Serialize;

use crate::{
    auth::{AuthUser, build_cookie, removal_cookie},
    error::{AppError, ResponseMessage},
    routes::AppState,
};

#[derive(Serialize)]
pub struct ResponseData<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ResponseData<T> {
    fn success(data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            data,
        })
    }
}

#[derive(Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    pub username: String,
    pub age: u32,
}

#[derive(Serialize)]
pub struct LoggedInUser {
    pub username: String,
    pub token: String,
}

#[derive(Serialize)]
pub struct UserItem {
    pub id: String,
    pub email: String,
    pub username: String,
    pub age: u32,
    pub profile_image_url: Option<String>,
}

#[derive(Serialize)]
pub struct UserList {
    pub users: Vec<UserItem>,
}

#[derive(Serialize)]
pub struct UpdatedUser {
    pub id: String,
    pub email: String,
    pub username: String,
    pub age: u32,
    pub profile_image_url: Option<String>,
    pub updated_at: i64,
}

impl From<UserRow> for UserItem {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            username: row.username,
            age: row.age,
            profile_image_url: row.profile_image_url,
        }
    }
}

/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let user = state.user_command.register(input).await?;

    Ok((
        StatusCode::CREATED,
        ResponseData::success(RegisteredUser {
            id: user.id,
            email: user.email,
            username: user.username,
            age: user.age,
        }),
    ))
}

/// POST /users/login
///
/// The token is returned in the body and set as the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let user = state.user_command.login(input).await?;

    let token = state.token_codec.encode(&Identity {
        user_id: user.id.to_owned(),
        email: user.email,
    })?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((
        jar.add(build_cookie(token.to_owned())),
        ResponseData::success(LoggedInUser {
            username: user.username,
            token,
        }),
    ))
}

/// GET /users
pub async fn list(
    AuthUser(_identity): AuthUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_command.list().await?;

    Ok(ResponseData::success(UserList {
        users: users.into_iter().map(UserItem::from).collect(),
    }))
}

/// PUT /users, always targets the caller's own account
pub async fn update(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<UpdateInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let user = state.user_command.update(identity.user_id, input).await?;

    Ok(ResponseData::success(UpdatedUser {
        id: user.id,
        email: user.email,
        username: user.username,
        age: user.age,
        profile_image_url: user.profile_image_url,
        updated_at: user.updated_at,
    }))
}

/// DELETE /users, removes the caller's account and clears the cookie
pub async fn delete(
    AuthUser(identity): AuthUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    state.user_command.delete(identity.user_id).await?;

    Ok((
        jar.remove(removal_cookie()),
        Json(ResponseMessage {
            status: "success",
            message: "your account has been successfully deleted".to_string(),
        }),
    ))
}
