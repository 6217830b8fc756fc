#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

/// Fresh in-memory SQLite database with all migrations applied.
/// Every call returns an isolated database, so tests never share rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
