//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; feature routes answer with their own
//! error types, everything else with `kernel::error::AppError`.

mod app;
mod config;

use config::ServerConfig;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,passgen=info,codec=info,scanner=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if !config.scanner.rules_dir.is_dir() {
        // not fatal: passgen and base64 keep working
        tracing::warn!(
            rules_dir = %config.scanner.rules_dir.display(),
            "Rules directory not found"
        );
    }

    tracing::info!(
        rules_dir = %config.scanner.rules_dir.display(),
        upload_dir = %config.scanner.upload_dir.display(),
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    let app = app::build_app(&config);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
