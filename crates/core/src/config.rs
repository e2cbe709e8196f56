//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that
//! need it. Nothing in this crate reads process-wide environment variables during request
//! handling; the binaries read them and hand the raw values to the helpers below.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_COUNTRY, UPSTREAM_TIMEOUT};
use crate::{NewsError, NewsResult};
use news_types::ApiKey;
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct NewsConfig {
    api_key: Option<ApiKey>,
    base_url: String,
    default_country: String,
    upstream_timeout: Duration,
}

impl NewsConfig {
    /// Create a new `NewsConfig`.
    ///
    /// A missing API key is not an error here: the service starts without one and reports a
    /// configuration error on each request that needs it.
    pub fn new(
        api_key: Option<ApiKey>,
        base_url: String,
        default_country: String,
    ) -> NewsResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(NewsError::InvalidInput("base_url cannot be empty".into()));
        }

        let default_country = default_country.trim().to_string();
        if default_country.is_empty() {
            return Err(NewsError::InvalidInput(
                "default_country cannot be empty".into(),
            ));
        }

        Ok(Self {
            api_key,
            base_url,
            default_country,
            upstream_timeout: UPSTREAM_TIMEOUT,
        })
    }

    /// Replace the upstream timeout. Only tests shorten it.
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Upstream base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    pub fn upstream_timeout(&self) -> Duration {
        self.upstream_timeout
    }
}

/// Resolve the upstream base URL from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_BASE_URL`].
pub fn base_url_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Resolve the default top-headlines country from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_COUNTRY`].
pub fn default_country_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_COUNTRY.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
