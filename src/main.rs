use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{config_from_env, serve, AppState, DEFAULT_REST_ADDR, REST_ADDR_ENV};

/// Main entry point for the news aggregator
///
/// Loads `.env` (if present), resolves configuration once, and serves the REST API on port
/// 3000 (configurable via NEWS_REST_ADDR).
///
/// # Environment Variables
/// - `NEWS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `NEWSAPI_KEY`: API key sent to the upstream news API
/// - `NEWSAPI_BASE_URL`: Upstream base URL (default: "https://newsapi.org/v2")
/// - `NEWS_DEFAULT_COUNTRY`: Default country for `/news/top` (default: "us")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("news_run=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = config_from_env()?;
    tracing::info!(
        "++ Starting news REST on {} (upstream {})",
        rest_addr,
        cfg.base_url()
    );

    serve(&rest_addr, AppState::new(cfg)?).await
}
