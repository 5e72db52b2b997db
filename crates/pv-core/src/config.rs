//! Configuration management for the pageviews client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Client configuration, resolved once when the client is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Versioned REST root, e.g. `https://wikimedia.org/api/rest_v1`
  pub base_url: String,

  /// Overrides the library's own `User-Agent` header
  pub user_agent: Option<String>,

  /// Request timeout in seconds; `None` leaves it to reqwest
  pub timeout_secs: Option<u64>,

  /// Echo every outgoing request through the tracing request logger
  pub log_requests: bool,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      base_url: crate::PAGEVIEWS_BASE_URL.to_string(),
      user_agent: None,
      timeout_secs: None,
      log_requests: false,
    }
  }
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// Every variable is optional; unset values fall back to [`Config::default`].
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let base_url =
      env::var("PAGEVIEWS_BASE_URL").unwrap_or_else(|_| crate::PAGEVIEWS_BASE_URL.to_string());

    let user_agent = env::var("PAGEVIEWS_USER_AGENT").ok();

    let timeout_secs = match env::var("PAGEVIEWS_TIMEOUT_SECS") {
      Ok(raw) => Some(
        raw.parse().map_err(|_| Error::Config("Invalid PAGEVIEWS_TIMEOUT_SECS".to_string()))?,
      ),
      Err(_) => None,
    };

    let log_requests = match env::var("PAGEVIEWS_LOG_REQUESTS") {
      Ok(raw) => parse_flag(&raw)
        .ok_or_else(|| Error::Config("Invalid PAGEVIEWS_LOG_REQUESTS".to_string()))?,
      Err(_) => false,
    };

    Ok(Config { base_url, user_agent, timeout_secs, log_requests })
  }

  /// Point the client at a different API root (a mock server in tests)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Replace the default `User-Agent`
  pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = Some(user_agent.into());
    self
  }

  /// Abort requests that take longer than `secs`
  pub fn with_timeout_secs(mut self, secs: u64) -> Self {
    self.timeout_secs = Some(secs);
    self
  }

  /// Turn the tracing request logger on or off
  pub fn with_request_logging(mut self, enabled: bool) -> Self {
    self.log_requests = enabled;
    self
  }
}

fn parse_flag(raw: &str) -> Option<bool> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" | "" => Some(false),
    _ => None,
  }
}
