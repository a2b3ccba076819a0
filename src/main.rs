use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::database::{seed, ActivityStore};
use mergington::web::{self, AppState};
use mergington::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // 2. Seed the store
    let config = AppConfig::from_env();
    let activities = seed::load_seed(config.seed_file.as_deref()).with_context(|| {
        format!(
            "loading seed {}",
            config
                .seed_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )
    })?;
    let store = ActivityStore::from_seed(activities).context("seeding activity store")?;
    info!("Seeded {} activities", store.len());

    // 3. Routes
    let app = web::router(AppState::new(store), &config.static_dir);

    // 4. Bind, with one fallback port
    let addr = config.bind_addr().context("parsing HOST/PORT")?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .with_context(|| format!("binding {}: {}", addr, e))?
                .context("parsing fallback address")?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("binding fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);
    info!("Open http://{}{} to get started", bound_addr, web::INDEX_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated")?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
