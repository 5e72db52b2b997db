/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Pageview statistics endpoints
//!
//! This module provides access to the four pageviews endpoints:
//! - The dimensions listing
//! - Daily series for a single article
//! - Project-wide aggregated series
//! - The most viewed articles for a single day
//!
//! Every call validates its parameters first and makes no request when
//! validation fails.

use super::PAGEVIEWS_ROOT;
use crate::transport::Transport;
use pv_core::validation::{validate_aggregate, validate_per_article, validate_top};
use pv_core::{AggregateRequest, Error, PageviewParams, PerArticleRequest, Result, TopRequest};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Pageviews endpoints
pub struct PageviewEndpoints {
  transport: Arc<Transport>,
}

impl PageviewEndpoints {
  /// Create a new pageviews endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List the endpoints available under `/metrics/pageviews/`
  #[instrument(skip(self))]
  pub async fn dimensions(&self) -> Result<Value> {
    self.transport.get_json(dimensions_path()).await
  }

  /// Get the daily view series of one article
  ///
  /// # Arguments
  ///
  /// * `params` - needs `project`, `article`, `start` and `end` (`YYYYMMDD`);
  ///   `access`, `agent` and `granularity` fall back to their defaults
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use pv_client::{PageviewsClient, Config, PageviewParams};
  /// # async fn run() -> pv_client::Result<()> {
  /// let client = PageviewsClient::new(Config::default())?;
  /// let params = PageviewParams::new("en.wikipedia.org")
  ///   .article("Albert Einstein")
  ///   .start("20240101")
  ///   .end("20240107");
  /// let series = client.pageviews().per_article(&params).await?;
  /// println!("{}", series["items"][0]["views"]);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, params), fields(project = ?params.project, article = ?params.article))]
  pub async fn per_article(&self, params: &PageviewParams) -> Result<Value> {
    let request = validate_per_article(params)?;
    self.transport.get_json(per_article_path(&request)).await
  }

  /// Get the project-wide view series
  ///
  /// `start` and `end` carry an hour: `YYYYMMDDHH`.
  #[instrument(skip(self, params), fields(project = ?params.project))]
  pub async fn aggregate(&self, params: &PageviewParams) -> Result<Value> {
    let request = validate_aggregate(params)?;
    self.transport.get_json(aggregate_path(&request)).await
  }

  /// Get the most viewed articles of a project for one day
  ///
  /// When `limit` is set, `items[0].articles` is cut down to that many
  /// leading entries. The API's ranking order is kept.
  #[instrument(skip(self, params), fields(project = ?params.project, limit = ?params.limit))]
  pub async fn top(&self, params: &PageviewParams) -> Result<Value> {
    let request = validate_top(params)?;
    let mut doc = self.transport.get_json(top_path(&request)).await?;

    if let Some(limit) = request.limit {
      truncate_articles(&mut doc, limit)?;
    }

    Ok(doc)
  }
}

pub(crate) fn dimensions_path() -> Vec<String> {
  let mut path = root();
  path.push(String::new());
  path
}

pub(crate) fn per_article_path(request: &PerArticleRequest) -> Vec<String> {
  let mut path = root();
  path.extend([
    "per-article".to_string(),
    request.project.clone(),
    request.access.to_string(),
    request.agent.to_string(),
    article_segment(&request.article),
    request.granularity.to_string(),
    request.start.clone(),
    request.end.clone(),
  ]);
  path
}

pub(crate) fn aggregate_path(request: &AggregateRequest) -> Vec<String> {
  let mut path = root();
  path.extend([
    "aggregate".to_string(),
    request.project.clone(),
    request.access.to_string(),
    request.agent.to_string(),
    request.granularity.to_string(),
    request.start.clone(),
    request.end.clone(),
  ]);
  path
}

pub(crate) fn top_path(request: &TopRequest) -> Vec<String> {
  let mut path = root();
  path.extend([
    "top".to_string(),
    request.project.clone(),
    request.access.to_string(),
    request.year.clone(),
    request.month.clone(),
    request.day.clone(),
  ]);
  path
}

fn root() -> Vec<String> {
  PAGEVIEWS_ROOT.iter().map(|s| s.to_string()).collect()
}

/// Titles use underscores for spaces. Percent-encoding happens when the
/// segment is appended to the URL.
fn article_segment(article: &str) -> String {
  article.chars().map(|c| if c.is_whitespace() { '_' } else { c }).collect()
}

fn truncate_articles(doc: &mut Value, limit: usize) -> Result<()> {
  let articles = doc
    .pointer_mut("/items/0/articles")
    .and_then(Value::as_array_mut)
    .ok_or_else(|| Error::InvalidResponse("expected items[0].articles to be a list".to_string()))?;

  if articles.len() > limit {
    debug!("Truncating {} top articles to {}", articles.len(), limit);
    articles.truncate(limit);
  }
  Ok(())
}
