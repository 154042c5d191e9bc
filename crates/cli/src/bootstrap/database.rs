use judol_filter_domain::config::DatabaseConfig;
use judol_filter_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Opening record store: {}", cfg.path);

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to open record store {}: {}", cfg.path, e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Record store opened (max_connections={}, busy_timeout={}s)",
        cfg.max_connections, cfg.busy_timeout_secs
    );

    Ok(pool)
}
