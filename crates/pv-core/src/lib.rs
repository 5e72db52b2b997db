//! # pv-core
//!
//! Shared building blocks for the pageviews client: configuration, the
//! error taxonomy, the filter dimensions and the per-operation parameter
//! validators. Nothing in this crate touches the network.

pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result, ValidationError};
pub use types::{Access, Agent, Granularity, PageviewParams};
pub use validation::{AggregateRequest, PerArticleRequest, TopRequest, MAX_TOP_LIMIT};

/// Versioned REST root of the Wikimedia analytics API
pub const PAGEVIEWS_BASE_URL: &str = "https://wikimedia.org/api/rest_v1";
