use mygram_db::table::User;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use crate::error::{UserError, UserResult};

const USER_COLUMNS: [User; 7] = [
    User::Id,
    User::Username,
    User::Email,
    User::Age,
    User::ProfileImageUrl,
    User::CreatedAt,
    User::UpdatedAt,
];

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub age: u32,
    pub profile_image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(FromRow)]
pub(crate) struct CredentialRow {
    pub id: String,
    pub password: String,
}

pub enum FindType {
    Id(String),
    Email(String),
}

pub(crate) async fn find(pool: &SqlitePool, arg_type: FindType) -> UserResult<Option<UserRow>> {
    let mut statement = Query::select()
        .columns(USER_COLUMNS)
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::col(User::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn find_credentials(
    pool: &SqlitePool,
    email: impl Into<String>,
) -> UserResult<Option<CredentialRow>> {
    let statement = Query::select()
        .columns([User::Id, User::Password])
        .from(User::Table)
        .and_where(Expr::col(User::Email).eq(email.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CredentialRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn list(pool: &SqlitePool) -> UserResult<Vec<UserRow>> {
    let statement = Query::select()
        .columns(USER_COLUMNS)
        .from(User::Table)
        .order_by(User::CreatedAt, Order::Asc)
        .order_by(User::Id, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) struct CreateInput {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: u32,
}

pub(crate) async fn create(pool: &SqlitePool, input: CreateInput) -> UserResult<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Id,
            User::Username,
            User::Email,
            User::Password,
            User::Age,
            User::CreatedAt,
            User::UpdatedAt,
        ])
        .values_panic([
            input.id.into(),
            input.username.into(),
            input.email.into(),
            input.password.into(),
            input.age.into(),
            now.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values)
        .execute(pool)
        .await
        .map_err(unique_violation)?;

    Ok(())
}

pub(crate) struct UpdateRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub age: u32,
    pub profile_image_url: Option<String>,
}

pub(crate) async fn update(pool: &SqlitePool, row: UpdateRow) -> UserResult<bool> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::update()
        .table(User::Table)
        .value(User::Username, row.username)
        .value(User::Email, row.email)
        .value(User::Age, row.age)
        .value(User::ProfileImageUrl, row.profile_image_url)
        .value(User::UpdatedAt, now)
        .and_where(Expr::col(User::Id).eq(row.id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values)
        .execute(pool)
        .await
        .map_err(unique_violation)?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn delete(pool: &SqlitePool, id: String) -> UserResult<bool> {
    let statement = Query::delete()
        .from_table(User::Table)
        .and_where(Expr::col(User::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}

/// Maps the unique indexes on email and username to their domain errors.
fn unique_violation(err: sqlx::Error) -> UserError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            if db_err.message().contains("email") {
                return UserError::EmailAlreadyExists;
            }

            if db_err.message().contains("username") {
                return UserError::UsernameAlreadyExists;
            }
        }
    }

    UserError::DatabaseError(err)
}
