use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;
use crate::database::participant_repo;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the pool, creating the database file (and its directory) when missing.
pub async fn connect(config: &Config) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT);

    if let Some(dir) = options.get_filename().parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let max_connections = config.max_connections();
    SqlitePoolOptions::new()
        .min_connections(config.pool_size.min(max_connections))
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn connect_and_migrate(config: &Config) -> sqlx::Result<SqlitePool> {
    let pool = connect(config).await?;
    participant_repo::ensure_schema(&pool).await?;
    info!("participants table ready");
    Ok(pool)
}
