//! # API REST
//!
//! REST API for the news aggregator.
//!
//! Handles:
//! - HTTP endpoints with axum (`/health`, `/news/top`, `/news/search`)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON error bodies, status mapping, CORS)
//!
//! Uses `news-core` for the upstream client and article normalisation.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{router, ApiDoc, AppState};

use news_core::{
    config::{base_url_from_env_value, default_country_from_env_value},
    ApiKey, NewsConfig, NewsResult,
};

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "NEWSAPI_KEY";
/// Environment variable overriding the upstream base URL.
pub const BASE_URL_ENV: &str = "NEWSAPI_BASE_URL";
/// Environment variable overriding the default top-headlines country.
pub const DEFAULT_COUNTRY_ENV: &str = "NEWS_DEFAULT_COUNTRY";
/// Environment variable holding the REST listen address.
pub const REST_ADDR_ENV: &str = "NEWS_REST_ADDR";

pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Resolve [`NewsConfig`] from the process environment.
///
/// Intended to run once at startup. A missing `NEWSAPI_KEY` is logged but does not fail:
/// news requests then answer with a configuration error.
pub fn config_from_env() -> NewsResult<NewsConfig> {
    let api_key = ApiKey::from_optional(std::env::var(API_KEY_ENV).ok());
    if api_key.is_none() {
        tracing::warn!("{} is not set; news endpoints will return 500", API_KEY_ENV);
    }

    NewsConfig::new(
        api_key,
        base_url_from_env_value(std::env::var(BASE_URL_ENV).ok()),
        default_country_from_env_value(std::env::var(DEFAULT_COUNTRY_ENV).ok()),
    )
}

/// Binds `addr` and serves the REST router until the server stops.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
