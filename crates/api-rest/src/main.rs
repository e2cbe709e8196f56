//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, without loading a `.env` file.
//!
//! ## Intended use
//! Useful in containers where configuration arrives purely through the environment. The
//! workspace's main `news-run` binary also loads `.env` before starting the same router.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{config_from_env, serve, AppState, DEFAULT_REST_ADDR, REST_ADDR_ENV};

/// Main entry point for the news REST API server
///
/// # Environment Variables
/// - `NEWS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `NEWSAPI_KEY`: Upstream API key (optional; news endpoints return 500 without it)
/// - `NEWSAPI_BASE_URL`: Upstream base URL (default: "https://newsapi.org/v2")
/// - `NEWS_DEFAULT_COUNTRY`: Default country for top headlines (default: "us")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    tracing::info!("-- Starting news REST API on {}", addr);

    let state = AppState::new(config_from_env()?)?;
    serve(&addr, state).await
}
