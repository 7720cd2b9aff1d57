use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use website::config::Config;
use website::database::pool;
use website::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // 2. Database; the participants table is created here if absent
    info!(database_url = %config.database_url, "Connecting to database");
    let pool = pool::connect_and_migrate(&config).await?;

    // 3. Application
    let app = web::router(pool, &config.static_dir);

    // 4. Serve (with fallback port)
    let listener = match tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.port.saturating_add(1);
            warn!(
                "Could not bind {}:{}: {}. Trying fallback {}:{}",
                config.host, config.port, e, config.host, fallback
            );
            tokio::net::TcpListener::bind((config.host.as_str(), fallback)).await?
        }
    };

    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
