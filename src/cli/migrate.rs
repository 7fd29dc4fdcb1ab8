use anyhow::Result;

pub async fn migrate(config: crate::config::Config) -> Result<()> {
    tracing::info!(url = %config.database.url, "Running migrations...");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    mygram_db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Database ready");

    Ok(())
}
