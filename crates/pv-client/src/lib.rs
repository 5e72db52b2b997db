//! # pv-client
//!
//! A client for the Wikimedia pageviews REST API.
//!
//! ## Features
//!
//! - **Validated**: parameters are checked before any request is made
//! - **Async/Await**: one GET per call, built on reqwest and tokio
//! - **Stateless**: no caching, no retries, no shared state between calls
//! - **Configurable**: base URL, `User-Agent` and timeout via [`Config`]
//! - **Observable**: `tracing` spans plus an injectable [`RequestLogger`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pv_client::{Config, PageviewParams, PageviewsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PageviewsClient::new(Config::default())?;
//!
//!     let params = PageviewParams::new("en.wikipedia.org")
//!         .article("Albert Einstein")
//!         .start("20240101")
//!         .end("20240131");
//!     let series = client.per_article(&params).await?;
//!     println!("{}", series["items"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<serde_json::Value, pv_core::Error>`.
//! Validation failures never reach the network; a 404 carrying a `detail`
//! message surfaces that message verbatim.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod logging;
pub mod transport;

// Re-export the main client and common types
pub use client::PageviewsClient;
pub use endpoints::pageviews::PageviewEndpoints;
pub use logging::{RequestLogger, TracingRequestLogger};
pub use pv_core::{Access, Agent, Config, Error, Granularity, PageviewParams, Result, ValidationError};
pub use pv_models as models;
pub use transport::{Transport, USER_AGENT};
