//! # API Shared
//!
//! Shared definitions for the news service APIs.
//!
//! Contains:
//! - Wire types (`wire` module) returned by the REST API and printed by the CLI
//! - Shared services like `HealthService`
//!
//! Used by `news-core`, `api-rest` and the `news` CLI.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
