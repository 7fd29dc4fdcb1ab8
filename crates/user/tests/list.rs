use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_list() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    assert!(cmd.list().await?.is_empty());

    let created = helpers::create_users(&cmd, vec!["alice", "bob", "carol"]).await?;
    let users = cmd.list().await?;

    assert_eq!(users.len(), 3);
    let mut ids: Vec<_> = users.iter().map(|u| u.id.to_owned()).collect();
    let mut expected: Vec<_> = created.iter().map(|u| u.id.to_owned()).collect();
    ids.sort();
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}
