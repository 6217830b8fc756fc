use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, RecordBackend, ServerConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;
use service::records::repository::{memory::MemoryRecordRepository, RecordRepository, SeaOrmRecordRepository};
use service::sums::repository::{SeaOrmSumRepository, SumRepository};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Connect the database, apply migrations and wire the stores.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    if cfg.database.is_sqlite_memory() {
        warn!("database is in-memory; stored sums are lost on exit");
    }

    let sums: Arc<dyn SumRepository> = Arc::new(SeaOrmSumRepository::new(db.clone()));
    let records: Arc<dyn RecordRepository> = match cfg.storage.records {
        RecordBackend::Memory => Arc::new(MemoryRecordRepository::new()),
        RecordBackend::Database => Arc::new(SeaOrmRecordRepository::new(db)),
    };
    info!(records = ?cfg.storage.records, "stores ready");
    Ok(AppState::new(sums, records))
}

/// Full application with CORS and tracing layers applied.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting server crate");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
