//! # News Core
//!
//! Core logic for the news aggregator service.
//!
//! This crate contains the parts with an observable contract:
//! - [`NewsApiClient`]: one GET per operation against the upstream news API
//! - [`clean_articles`]: the one-to-one article projection
//! - [`NewsConfig`]: configuration resolved once at startup
//!
//! **No API concerns**: HTTP routing, status mapping and OpenAPI belong in `api-rest`.

pub mod articles;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;

pub use api_shared::CleanArticle;
pub use articles::{clean_articles, RawArticle, RawSource, UpstreamPayload};
pub use client::{search_params, top_headlines_params, NewsApiClient, UpstreamResponse};
pub use config::NewsConfig;
pub use error::{NewsError, NewsResult};
pub use news_types::{ApiKey, NonEmptyText};
