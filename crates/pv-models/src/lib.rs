//! # pv-models
//!
//! Typed views over the JSON documents returned by the pageviews API.
//!
//! The client hands back each response as a raw [`serde_json::Value`];
//! these structures are an opt-in layer for callers that want fields
//! instead of map lookups.
//!
//! ## Usage
//!
//! ```ignore
//! use pv_models::{Document, TopArticlesResponse};
//!
//! let doc = client.top(&params).await?;
//! let top = TopArticlesResponse::from_document(doc)?;
//! for article in top.articles() {
//!     println!("{} {}", article.rank, article.article);
//! }
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod pageviews;

pub use common::Document;
pub use pageviews::*;
