use crate::db::{connect_memory, connect_with_config};
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::{Duration, Instant};
use anyhow::Result;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let start = Instant::now();
    let db = connect_memory().await?;
    let connection_time = start.elapsed();

    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);

    assert!(connection_time < Duration::from_secs(5),
           "Connection took too long: {:?}", connection_time);
    Ok(())
}

/// Invalid configuration never reaches the driver
#[tokio::test]
async fn test_rejects_invalid_config() {
    let cfg = DatabaseConfig { url: "mysql://localhost/sums".into(), ..DatabaseConfig::default() };
    assert!(connect_with_config(&cfg).await.is_err());

    let cfg = DatabaseConfig { url: String::new(), ..DatabaseConfig::default() };
    assert!(connect_with_config(&cfg).await.is_err());
}

/// Each in-memory connection is its own database
#[tokio::test]
async fn test_memory_databases_are_isolated() -> Result<()> {
    let a = connect_memory().await?;
    let b = connect_memory().await?;
    a.execute_unprepared("CREATE TABLE marker (id INTEGER)").await?;
    let found = b
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'marker'".to_string(),
        ))
        .await?;
    assert!(found.is_none());
    Ok(())
}

/// Short idle/lifetime limits must not recycle the in-memory connection and drop its tables
#[tokio::test]
async fn test_memory_database_survives_pool_limits() -> Result<()> {
    let cfg = DatabaseConfig {
        url: configs::SQLITE_MEMORY_URL.into(),
        idle_timeout_secs: 1,
        max_lifetime_secs: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    db.execute_unprepared("CREATE TABLE marker (id INTEGER)").await?;
    db.execute_unprepared("INSERT INTO marker (id) VALUES (7)").await?;

    tokio::time::sleep(Duration::from_secs(3)).await;

    let row = db
        .query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT id FROM marker".to_string()))
        .await?
        .expect("marker row");
    let id: i32 = row.try_get("", "id")?;
    assert_eq!(id, 7);
    Ok(())
}
