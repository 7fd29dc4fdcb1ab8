use mygram_user::{RegisterInput, UserError};
use temp_dir::TempDir;

mod helpers;

fn input(username: &str, email: &str) -> RegisterInput {
    RegisterInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: "my_password".to_owned(),
        age: 20,
    }
}

#[tokio::test]
async fn test_register() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let user = cmd
        .register(input("johndoe", "John.Doe@MyGram.localhost"))
        .await?;

    assert!(user.id.starts_with("user-"));
    assert_eq!(user.username, "johndoe");
    assert_eq!(user.email, "john.doe@mygram.localhost");
    assert_eq!(user.age, 20);
    assert_eq!(user.created_at, user.updated_at);

    let found = cmd.get_user_by_id(&user.id).await?.unwrap();
    assert_eq!(found.email, "john.doe@mygram.localhost");
    assert_eq!(found.profile_image_url, None);

    Ok(())
}

#[tokio::test]
async fn test_register_conflicts() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    cmd.register(input("johndoe", "john.doe@mygram.localhost"))
        .await?;

    let resp = cmd
        .register(input("janedoe", "JOHN.DOE@mygram.localhost"))
        .await;
    assert!(matches!(resp, Err(UserError::EmailAlreadyExists)));

    let resp = cmd
        .register(input("JohnDoe", "jane.doe@mygram.localhost"))
        .await;
    assert!(matches!(resp, Err(UserError::UsernameAlreadyExists)));
    assert_eq!(
        resp.unwrap_err().to_string(),
        "the username you entered has been used"
    );

    Ok(())
}

#[tokio::test]
async fn test_register_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let resp = cmd.register(input("johndoe", "not-an-email")).await;
    assert!(matches!(resp, Err(UserError::ValidationError(_))));

    let resp = cmd
        .register(RegisterInput {
            password: "short".to_owned(),
            ..input("johndoe", "john.doe@mygram.localhost")
        })
        .await;
    assert!(matches!(resp, Err(UserError::ValidationError(_))));

    let resp = cmd
        .register(RegisterInput {
            age: 7,
            ..input("johndoe", "john.doe@mygram.localhost")
        })
        .await;
    assert!(matches!(resp, Err(UserError::ValidationError(_))));

    assert!(cmd.list().await?.is_empty());

    Ok(())
}
