//! MedTouch Web Server
//!
//! Run with: cargo run -p medtouch-web

use medtouch_config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting MedTouch Web Server...");

    let config = Config::load()?;
    let addr = config.server.bind_addr();

    // Create app state
    let state = medtouch_web::state::AppState::from_config(config);

    // Build router
    let app = medtouch_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
