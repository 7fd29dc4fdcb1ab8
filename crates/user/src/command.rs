use mygram_auth::{hash_password, verify_password};
use serde::Deserialize;
use sqlx::SqlitePool;
use ulid::Ulid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::repository::{self, CreateInput, FindType, UpdateRow, UserRow};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(range(min = 8))]
    pub age: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(range(min = 8))]
    pub age: u32,
    /// `None` clears the stored image
    #[validate(url)]
    pub profile_image_url: Option<String>,
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    pub async fn register(&self, input: RegisterInput) -> UserResult<UserRow> {
        input.validate()?;

        let email = input.email.to_lowercase();
        if repository::find(&self.0, FindType::Email(email.to_owned()))
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists);
        }

        let id = format!("user-{}", Ulid::new());
        let password = hash_password(&input.password)?;

        repository::create(
            &self.0,
            CreateInput {
                id: id.to_owned(),
                username: input.username,
                email,
                password,
                age: input.age,
            },
        )
        .await?;

        tracing::info!(user_id = %id, "User registered");

        self.get_user_by_id(&id).await?.ok_or(UserError::NotFound)
    }

    /// Checks credentials; the caller issues the token.
    pub async fn login(&self, input: LoginInput) -> UserResult<UserRow> {
        input.validate()?;

        let Some(credentials) =
            repository::find_credentials(&self.0, input.email.to_lowercase()).await?
        else {
            tracing::debug!("Login attempt for unknown email");
            return Err(UserError::InvalidCredentials);
        };

        if !verify_password(&input.password, &credentials.password) {
            tracing::debug!(user_id = %credentials.id, "Login attempt with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        self.get_user_by_id(&credentials.id)
            .await?
            .ok_or(UserError::InvalidCredentials)
    }

    pub async fn update(&self, id: impl Into<String>, input: UpdateInput) -> UserResult<UserRow> {
        input.validate()?;

        let id = id.into();
        let updated = repository::update(
            &self.0,
            UpdateRow {
                id: id.to_owned(),
                username: input.username,
                email: input.email.to_lowercase(),
                age: input.age,
                profile_image_url: input.profile_image_url,
            },
        )
        .await?;

        if !updated {
            return Err(UserError::NotFound);
        }

        self.get_user_by_id(&id).await?.ok_or(UserError::NotFound)
    }

    pub async fn delete(&self, id: impl Into<String>) -> UserResult<()> {
        let id = id.into();

        if !repository::delete(&self.0, id.to_owned()).await? {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
