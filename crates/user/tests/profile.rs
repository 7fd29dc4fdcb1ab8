use mygram_user::{UpdateInput, UserError};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_update() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let users = helpers::create_users(&cmd, vec!["john", "jane"]).await?;

    let updated = cmd
        .update(
            &users[0].id,
            UpdateInput {
                username: "newjohn".to_owned(),
                email: "NewJohn@mygram.localhost".to_owned(),
                age: 20,
                profile_image_url: None,
            },
        )
        .await?;

    assert_eq!(updated.id, users[0].id);
    assert_eq!(updated.username, "newjohn");
    assert_eq!(updated.email, "newjohn@mygram.localhost");
    assert!(updated.updated_at >= users[0].updated_at);

    let untouched = cmd.get_user_by_id(&users[1].id).await?.unwrap();
    assert_eq!(untouched.username, "jane");

    let resp = cmd
        .update(
            &users[0].id,
            UpdateInput {
                username: "newjohn".to_owned(),
                email: "jane@mygram.localhost".to_owned(),
                age: 20,
                profile_image_url: None,
            },
        )
        .await;
    assert!(matches!(resp, Err(UserError::EmailAlreadyExists)));

    let resp = cmd
        .update(
            "user-unknown",
            UpdateInput {
                username: "ghost".to_owned(),
                email: "ghost@mygram.localhost".to_owned(),
                age: 20,
                profile_image_url: None,
            },
        )
        .await;
    assert!(matches!(resp, Err(UserError::NotFound)));

    Ok(())
}

#[tokio::test]
async fn test_update_age_and_profile_image() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let user = helpers::create_user(&cmd, "john").await?;
    assert_eq!(user.profile_image_url, None);

    let input = |age, profile_image_url: Option<&str>| UpdateInput {
        username: "john".to_owned(),
        email: "john@mygram.localhost".to_owned(),
        age,
        profile_image_url: profile_image_url.map(str::to_owned),
    };

    cmd.update(&user.id, input(30, Some("https://cdn.mygram.localhost/john.png")))
        .await?;

    let found = cmd.get_user_by_id(&user.id).await?.unwrap();
    assert_eq!(found.age, 30);
    assert_eq!(
        found.profile_image_url.as_deref(),
        Some("https://cdn.mygram.localhost/john.png")
    );

    let listed = cmd.list().await?;
    assert_eq!(listed[0].age, 30);

    let resp = cmd.update(&user.id, input(7, None)).await;
    assert!(matches!(resp, Err(UserError::ValidationError(_))));

    let resp = cmd.update(&user.id, input(30, Some("not a url"))).await;
    assert!(matches!(resp, Err(UserError::ValidationError(_))));

    let cleared = cmd.update(&user.id, input(31, None)).await?;
    assert_eq!(cleared.age, 31);
    assert_eq!(cleared.profile_image_url, None);

    Ok(())
}

#[tokio::test]
async fn test_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let user = helpers::create_user(&cmd, "john").await?;

    cmd.delete(&user.id).await?;
    assert!(cmd.get_user_by_id(&user.id).await?.is_none());

    let resp = cmd.delete(&user.id).await;
    assert!(matches!(resp, Err(UserError::NotFound)));

    Ok(())
}
