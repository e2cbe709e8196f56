//! Constants used throughout the news core crate.
//!
//! Upstream endpoint names, header names and request defaults live here so the client, the REST
//! handlers and the CLI agree on them.

use std::time::Duration;

/// Base URL of the upstream news API when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Path of the top-headlines endpoint, relative to the base URL.
pub const TOP_HEADLINES_PATH: &str = "top-headlines";

/// Path of the keyword-search endpoint, relative to the base URL.
pub const EVERYTHING_PATH: &str = "everything";

/// Header carrying the upstream credential.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Network timeout applied to every upstream call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Country used for top headlines when the caller does not pass one.
pub const DEFAULT_COUNTRY: &str = "us";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const DEFAULT_SORT_BY: &str = "publishedAt";

pub const DEFAULT_LANGUAGE: &str = "en";
