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

//! Client facade over the pageviews endpoints

use crate::endpoints::pageviews::PageviewEndpoints;
use crate::logging::RequestLogger;
use crate::transport::Transport;
use pv_core::{Config, PageviewParams, Result};
use serde_json::Value;
use std::sync::Arc;

/// Main pageviews API client
///
/// Holds the configuration resolved at construction (base URL,
/// `User-Agent`, optional request logger). Calls share nothing else, so
/// the client can be cloned and used from many tasks at once.
///
/// # Examples
///
/// ```rust,no_run
/// use pv_client::{Config, PageviewParams, PageviewsClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PageviewsClient::new(Config::from_env()?)?;
///
///     let params = PageviewParams::new("en.wikipedia.org")
///         .date("2024", "01", "15")
///         .limit(10);
///     let top = client.top(&params).await?;
///     println!("{}", top["items"][0]["articles"]);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PageviewsClient {
  transport: Arc<Transport>,
}

impl PageviewsClient {
  /// Create a new pageviews API client
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is unusable or the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Create a client that reports every outgoing request to `logger`
  ///
  /// Takes precedence over `config.log_requests`.
  pub fn with_request_logger(config: Config, logger: Arc<dyn RequestLogger>) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::with_logger(&config, Some(logger))?) })
  }

  /// Get access to the pageviews endpoints
  pub fn pageviews(&self) -> PageviewEndpoints {
    PageviewEndpoints::new(self.transport.clone())
  }

  /// Shortcut for [`PageviewEndpoints::dimensions`]
  pub async fn dimensions(&self) -> Result<Value> {
    self.pageviews().dimensions().await
  }

  /// Shortcut for [`PageviewEndpoints::per_article`]
  pub async fn per_article(&self, params: &PageviewParams) -> Result<Value> {
    self.pageviews().per_article(params).await
  }

  /// Shortcut for [`PageviewEndpoints::aggregate`]
  pub async fn aggregate(&self, params: &PageviewParams) -> Result<Value> {
    self.pageviews().aggregate(params).await
  }

  /// Shortcut for [`PageviewEndpoints::top`]
  pub async fn top(&self, params: &PageviewParams) -> Result<Value> {
    self.pageviews().top(params).await
  }

  /// The transport this client sends requests through
  pub fn transport(&self) -> &Transport {
    &self.transport
  }
}

impl std::fmt::Debug for PageviewsClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PageviewsClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let client = PageviewsClient::new(Config::default()).expect("Failed to create client");
    assert_eq!(client.transport().base_url().as_str(), "https://wikimedia.org/api/rest_v1");
    assert_eq!(client.transport().user_agent(), crate::USER_AGENT);
  }

  #[test]
  fn test_client_with_logger() {
    let logger: Arc<dyn RequestLogger> = Arc::new(crate::TracingRequestLogger);
    let client = PageviewsClient::with_request_logger(Config::default(), logger).unwrap();
    assert!(format!("{client:?}").contains("logger: true"));
  }

  #[test]
  fn test_client_rejects_bad_base_url() {
    assert!(PageviewsClient::new(Config::default().with_base_url("::")).is_err());
  }
}
