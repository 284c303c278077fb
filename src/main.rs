use anyhow::{Context, Result};
use balitecture_web::config::Config;
use balitecture_web::server::{self, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("balitecture_web=info".parse()?),
        )
        .init();

    info!("Starting Balitecture web server");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Locales {:?} (default {}), redirect status {}, missing keys: {}",
        config.supported_locales,
        config.default_locale,
        config.redirect_status.as_u16(),
        config.missing_key_fallback
    );

    // Message catalogues must all load before we accept traffic
    let port = config.port;
    let state = AppState::load(config).context("Failed to load message catalogues")?;

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    server::serve(listener, state).await
}
