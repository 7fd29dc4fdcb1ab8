use std::{path::PathBuf, str::FromStr};

use mygram_user::{Command, RegisterInput, UserRow};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<Command> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    mygram_db::migrate(&pool).await?;

    Ok(Command(pool))
}

#[allow(dead_code)]
pub async fn create_user(command: &Command, name: impl Into<String>) -> anyhow::Result<UserRow> {
    let users = create_users(command, vec![name]).await?;

    Ok(users.into_iter().next().unwrap())
}

#[allow(dead_code)]
pub async fn create_users(
    command: &Command,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<UserRow>> {
    let mut users = vec![];
    for name in names.into_iter() {
        let name = name.into();
        let user = command
            .register(RegisterInput {
                username: name.to_owned(),
                email: format!("{name}@mygram.localhost"),
                password: "my_password".to_owned(),
                age: 20,
            })
            .await?;
        users.push(user);
    }

    Ok(users)
}
