//! JSON bodies produced by the news service.
//!
//! Field names follow the upstream API's camelCase convention so that clients already familiar
//! with it see the same keys (`publishedAt`, `totalResults`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalised article projection.
///
/// Every key is always serialised; missing upstream values become `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanArticle {
    pub title: Option<String>,
    /// Name of the publishing source, flattened from the upstream `source.name`.
    pub source: Option<String>,
    pub published_at: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
}

/// Response of `GET /news/top`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopHeadlinesRes {
    pub total_results: Option<u64>,
    pub articles: Vec<CleanArticle>,
}

/// Response of `GET /news/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRes {
    /// The keyword exactly as supplied by the caller.
    pub query: String,
    pub total_results: Option<u64>,
    pub articles: Vec<CleanArticle>,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}
