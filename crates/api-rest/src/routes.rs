//! REST routes for the news service.
//!
//! Each handler validates its input, calls the upstream client once, and shapes the normalised
//! articles into the response body. Requests share nothing but the read-only [`AppState`].

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiError;
use api_shared::{CleanArticle, ErrorRes, HealthRes, HealthService, SearchRes, TopHeadlinesRes};
use news_core::{
    clean_articles,
    constants::{DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY},
    ApiKey, NewsApiClient, NewsConfig, NewsResult, NonEmptyText, UpstreamResponse,
};

/// Application state for the REST API server
///
/// Built once at startup from the resolved configuration and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<NewsConfig>,
    client: NewsApiClient,
}

impl AppState {
    /// Builds the state, including the pooled upstream HTTP client.
    pub fn new(cfg: NewsConfig) -> NewsResult<Self> {
        let client = NewsApiClient::new(&cfg)?;
        Ok(Self {
            cfg: Arc::new(cfg),
            client,
        })
    }

    fn api_key(&self) -> Result<&ApiKey, ApiError> {
        self.cfg.api_key().ok_or(ApiError::MissingApiKey)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, top_headlines, search_news),
    components(schemas(HealthRes, TopHeadlinesRes, SearchRes, CleanArticle, ErrorRes))
)]
pub struct ApiDoc;

/// Query parameters of `GET /news/top`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct TopHeadlinesQuery {
    /// Two-letter country code; defaults to the configured country ("us").
    pub country: Option<String>,
    /// Optional category filter, omitted upstream when absent.
    pub category: Option<String>,
    /// Number of articles to return (default 10).
    #[serde(default = "default_page_size", alias = "page_size")]
    pub page_size: u32,
}

/// Query parameters of `GET /news/search`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Keyword to search for; must not be blank.
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_page_size", alias = "page_size")]
    pub page_size: u32,
    /// Upstream sort order (default "publishedAt").
    #[serde(default = "default_sort_by", alias = "sort_by")]
    pub sort_by: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    DEFAULT_SORT_BY.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Builds the REST router with OpenAPI/Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/news/top", get(top_headlines))
        .route("/news/search", get(search_news))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Always answers, whether or not an API key is configured.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/news/top",
    params(TopHeadlinesQuery),
    responses(
        (status = 200, description = "Normalised top headlines", body = TopHeadlinesRes),
        (status = 400, description = "Malformed query string", body = ErrorRes),
        (status = 500, description = "API key not configured", body = ErrorRes),
        (status = 502, description = "Upstream unreachable or unreadable", body = ErrorRes),
        (status = 504, description = "Upstream timed out", body = ErrorRes)
    )
)]
/// Fetch top headlines
///
/// Supports optional filtering by category and country, and a page size. Non-2xx answers from
/// the upstream API are forwarded with the upstream status and body.
#[axum::debug_handler]
async fn top_headlines(
    State(state): State<AppState>,
    params: Result<Query<TopHeadlinesQuery>, QueryRejection>,
) -> Result<Json<TopHeadlinesRes>, ApiError> {
    let Query(params) = params?;
    let api_key = state.api_key()?;
    let country = params
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| state.cfg.default_country());

    let response = state
        .client
        .fetch_top_headlines(api_key, country, params.category.as_deref(), params.page_size)
        .await?;
    let (total_results, articles) = normalise(response)?;

    Ok(Json(TopHeadlinesRes {
        total_results,
        articles,
    }))
}

#[utoipa::path(
    get,
    path = "/news/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Normalised search results", body = SearchRes),
        (status = 400, description = "Empty or malformed query", body = ErrorRes),
        (status = 500, description = "API key not configured", body = ErrorRes),
        (status = 502, description = "Upstream unreachable or unreadable", body = ErrorRes),
        (status = 504, description = "Upstream timed out", body = ErrorRes)
    )
)]
/// Search news articles by keyword
#[axum::debug_handler]
async fn search_news(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchRes>, ApiError> {
    let Query(params) = params?;
    let query = NonEmptyText::new(params.q).map_err(|_| ApiError::EmptyQuery)?;
    let api_key = state.api_key()?;

    let response = state
        .client
        .fetch_search_results(
            api_key,
            query.as_str(),
            params.page_size,
            &params.sort_by,
            &params.language,
        )
        .await?;
    let (total_results, articles) = normalise(response)?;

    Ok(Json(SearchRes {
        query: query.into_inner(),
        total_results,
        articles,
    }))
}

// Shared tail of both news handlers
fn normalise(response: UpstreamResponse) -> Result<(Option<u64>, Vec<CleanArticle>), ApiError> {
    if !response.is_success() {
        tracing::warn!("Upstream news API returned status {}", response.status);
        return Err(ApiError::Upstream {
            status: response.status,
            body: response.body,
        });
    }

    let mut payload = response.payload()?;
    let articles = clean_articles(payload.take_articles());
    Ok((payload.total_results, articles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use httpmock::prelude::*;
    use news_core::constants::DEFAULT_COUNTRY;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn config(base_url: &str, api_key: Option<&str>) -> NewsConfig {
        NewsConfig::new(
            api_key.and_then(|k| ApiKey::new(k).ok()),
            base_url.to_string(),
            DEFAULT_COUNTRY.to_string(),
        )
        .expect("valid config")
    }

    fn app(base_url: &str, api_key: Option<&str>) -> Router {
        router(AppState::new(config(base_url, api_key)).expect("state"))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).expect("json body");
        (status, body)
    }

    #[tokio::test]
    async fn health_needs_no_configuration() {
        let (status, body) = get_json(app("http://127.0.0.1:1", None), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn top_headlines_are_normalised() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/top-headlines")
                    .header("X-Api-Key", "k")
                    .query_param("country", "us")
                    .query_param("pageSize", "2");
                then.status(200).json_body(json!({
                    "status": "ok",
                    "totalResults": 34,
                    "articles": [
                        {
                            "title": "A",
                            "source": { "name": "CNN" },
                            "publishedAt": "2024-01-01T00:00:00Z",
                            "url": "http://a",
                            "description": "d"
                        },
                        {
                            "title": "B",
                            "source": null,
                            "publishedAt": "2024-01-02T00:00:00Z",
                            "url": "http://b"
                        }
                    ]
                }));
            })
            .await;

        let (status, body) = get_json(
            app(&server.base_url(), Some("k")),
            "/news/top?country=us&pageSize=2",
        )
        .await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "totalResults": 34,
                "articles": [
                    {
                        "title": "A",
                        "source": "CNN",
                        "publishedAt": "2024-01-01T00:00:00Z",
                        "url": "http://a",
                        "description": "d"
                    },
                    {
                        "title": "B",
                        "source": null,
                        "publishedAt": "2024-01-02T00:00:00Z",
                        "url": "http://b",
                        "description": null
                    }
                ]
            })
        );
    }

    #[tokio::test]
    async fn top_headlines_apply_defaults_and_forward_category() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/top-headlines")
                    .query_param("country", "us")
                    .query_param("pageSize", "10")
                    .query_param("category", "health");
                then.status(200).json_body(json!({ "totalResults": 0, "articles": [] }));
            })
            .await;

        let (status, body) = get_json(
            app(&server.base_url(), Some("k")),
            "/news/top?category=health",
        )
        .await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "totalResults": 0, "articles": [] }));
    }

    #[tokio::test]
    async fn search_echoes_query_and_sends_filters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/everything")
                    .header("X-Api-Key", "k")
                    .query_param("q", "rust")
                    .query_param("pageSize", "5")
                    .query_param("sortBy", "relevancy")
                    .query_param("language", "en");
                then.status(200).json_body(json!({
                    "totalResults": 1,
                    "articles": [{ "title": "Rust 2024", "source": { "id": null, "name": "Blog" } }]
                }));
            })
            .await;

        let (status, body) = get_json(
            app(&server.base_url(), Some("k")),
            "/news/search?q=rust&page_size=5&sortBy=relevancy",
        )
        .await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"], "rust");
        assert_eq!(body["totalResults"], 1);
        assert_eq!(body["articles"][0]["source"], "Blog");
        assert_eq!(body["articles"][0]["url"], Value::Null);
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_calling_upstream() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(json!({ "articles": [] }));
            })
            .await;

        for uri in ["/news/top", "/news/search?q=rust"] {
            let (status, body) = get_json(app(&server.base_url(), None), uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({ "detail": "API key not configured." }));
        }

        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn empty_query_is_rejected_before_calling_upstream() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(json!({ "articles": [] }));
            })
            .await;

        for uri in ["/news/search?q=", "/news/search?q=%20%20", "/news/search"] {
            let (status, body) = get_json(app(&server.base_url(), Some("k")), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                body,
                json!({ "detail": "Query parameter 'q' cannot be empty." })
            );
        }

        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn empty_query_wins_over_missing_key() {
        let (status, _) = get_json(app("http://127.0.0.1:1", None), "/news/search?q=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn upstream_error_status_and_body_are_forwarded() {
        let server = MockServer::start_async().await;
        let upstream_body = r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/everything");
                then.status(401).body(upstream_body);
            })
            .await;

        let (status, body) = get_json(
            app(&server.base_url(), Some("wrong")),
            "/news/search?q=rust",
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "detail": upstream_body }));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_bad_gateway() {
        let (status, body) = get_json(app("http://127.0.0.1:1", Some("k")), "/news/top").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["detail"], "Upstream news API is unreachable.");
    }

    #[tokio::test]
    async fn unreadable_upstream_payload_is_bad_gateway() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/top-headlines");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let (status, _) = get_json(app(&server.base_url(), Some("k")), "/news/top").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn malformed_query_is_a_json_bad_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(json!({ "articles": [] }));
            })
            .await;

        for uri in [
            "/news/top?pageSize=abc",
            "/news/top?pageSize=-1",
            "/news/search?q=rust&pageSize=abc",
        ] {
            let (status, body) = get_json(app(&server.base_url(), Some("k")), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            let detail = body["detail"].as_str().expect("detail string");
            assert!(detail.contains("Failed to deserialize"), "{uri}: {detail}");
        }

        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn slow_upstream_is_gateway_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/top-headlines");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(json!({ "articles": [] }));
            })
            .await;

        let cfg = config(&server.base_url(), Some("k"))
            .with_upstream_timeout(Duration::from_millis(50));
        let app = router(AppState::new(cfg).expect("state"));

        let (status, body) = get_json(app, "/news/top").await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["detail"], "Upstream news API timed out.");
    }

    #[tokio::test]
    async fn odd_field_types_do_not_drop_the_page() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/everything");
                then.status(200).json_body(json!({
                    "totalResults": "many",
                    "articles": [
                        { "title": "A", "description": 123 },
                        { "title": "B", "url": "http://b" }
                    ]
                }));
            })
            .await;

        let (status, body) = get_json(
            app(&server.base_url(), Some("k")),
            "/news/search?q=rust",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalResults"], Value::Null);
        assert_eq!(body["articles"][0]["title"], "A");
        assert_eq!(body["articles"][0]["description"], Value::Null);
        assert_eq!(body["articles"][1]["url"], "http://b");
    }

    #[test]
    fn openapi_documents_news_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/health".to_string()));
        assert!(paths.contains(&"/news/top".to_string()));
        assert!(paths.contains(&"/news/search".to_string()));
    }
}
