//! Upstream news API client.
//!
//! Each operation issues exactly one GET request. Whatever status the upstream answers with is
//! returned as an [`UpstreamResponse`]; only transport failures (timeout, DNS, refused
//! connection) come back as `Err`. Interpreting a non-2xx status is left to the caller, and
//! nothing is retried.

use crate::articles::UpstreamPayload;
use crate::config::NewsConfig;
use crate::constants::{API_KEY_HEADER, EVERYTHING_PATH, TOP_HEADLINES_PATH};
use crate::{NewsError, NewsResult};
use news_types::ApiKey;

/// Query parameters for one upstream call, in the order they are sent.
pub type QueryParams = Vec<(&'static str, String)>;

/// Status and body of an upstream reply, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as an upstream article payload.
    pub fn payload(&self) -> NewsResult<UpstreamPayload> {
        UpstreamPayload::parse(&self.body)
    }
}

/// Builds the top-headlines query. `category` is only included when it is non-empty.
pub fn top_headlines_params(country: &str, category: Option<&str>, page_size: u32) -> QueryParams {
    let mut params = vec![
        ("country", country.to_string()),
        ("pageSize", page_size.to_string()),
    ];
    if let Some(category) = category.filter(|c| !c.is_empty()) {
        params.push(("category", category.to_string()));
    }
    params
}

/// Builds the keyword-search query.
pub fn search_params(query: &str, page_size: u32, sort_by: &str, language: &str) -> QueryParams {
    vec![
        ("q", query.to_string()),
        ("pageSize", page_size.to_string()),
        ("sortBy", sort_by.to_string()),
        ("language", language.to_string()),
    ]
}

/// HTTP client for the two upstream endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl NewsApiClient {
    /// Creates a client using the base URL and timeout from `cfg`.
    ///
    /// # Errors
    /// Returns [`NewsError::HttpClient`] if the TLS backend cannot be initialised.
    pub fn new(cfg: &NewsConfig) -> NewsResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.upstream_timeout())
            .build()
            .map_err(NewsError::HttpClient)?;

        Ok(Self {
            http,
            base_url: cfg.base_url().to_string(),
        })
    }

    /// Fetches top headlines for a country, optionally narrowed to one category.
    pub async fn fetch_top_headlines(
        &self,
        api_key: &ApiKey,
        country: &str,
        category: Option<&str>,
        page_size: u32,
    ) -> NewsResult<UpstreamResponse> {
        let params = top_headlines_params(country, category, page_size);
        self.get(TOP_HEADLINES_PATH, api_key, &params).await
    }

    /// Searches all articles for a keyword.
    pub async fn fetch_search_results(
        &self,
        api_key: &ApiKey,
        query: &str,
        page_size: u32,
        sort_by: &str,
        language: &str,
    ) -> NewsResult<UpstreamResponse> {
        let params = search_params(query, page_size, sort_by, language);
        self.get(EVERYTHING_PATH, api_key, &params).await
    }

    async fn get(
        &self,
        path: &str,
        api_key: &ApiKey,
        params: &[(&'static str, String)],
    ) -> NewsResult<UpstreamResponse> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, ?params, "calling upstream news API");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key.expose())
            .query(params)
            .send()
            .await
            .map_err(NewsError::from_transport)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(NewsError::from_transport)?;

        tracing::debug!(%url, status, "upstream news API replied");
        Ok(UpstreamResponse { status, body })
    }
}
