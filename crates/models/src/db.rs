use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, SqlxSqliteConnector};
use tracing::info;

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    cfg.validate()?;
    if cfg.is_sqlite_memory() {
        return connect_sqlite_memory(cfg).await;
    }

    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

/// In-memory SQLite lives exactly as long as its one connection, so the pool
/// holds a single connection that is never reaped or recycled. Idle and
/// lifetime limits from the config do not apply here.
async fn connect_sqlite_memory(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut conn_opts: SqliteConnectOptions = cfg.url.parse()?;
    if !cfg.sqlx_logging {
        conn_opts = conn_opts.disable_statement_logging();
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(conn_opts)
        .await?;
    info!(backend = "sqlite", max_connections = 1, "in-memory database connected");
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Fresh private in-memory SQLite database.
pub async fn connect_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: configs::SQLITE_MEMORY_URL.to_string(), ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}
