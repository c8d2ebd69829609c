use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities_api::config::Config;
use activities_api::database::ActivitiesDb;
use activities_api::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid environment configuration")?;
    if !config.enforce_capacity {
        info!("Capacity limits are not enforced; over-capacity signups are only logged");
    }

    // 2. Seed the in-memory activities table
    let db = ActivitiesDb::seeded();

    // 3. Build the application
    let app = web::router(AppState::new(db, &config), &config.static_dir);

    // 4. Start the server (with fallback port)
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback address {fallback}"))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
