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

//! HTTP transport layer for pageviews API requests

use crate::logging::{RequestLogger, TracingRequestLogger};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use pv_core::validation::is_dot_segment;
use pv_core::{Config, Error, Result, ValidationError};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// `User-Agent` sent with every request unless the config overrides it
pub const USER_AGENT: &str = concat!(
  env!("CARGO_PKG_NAME"),
  "-v",
  env!("CARGO_PKG_VERSION"),
  " (",
  env!("CARGO_PKG_REPOSITORY"),
  ")"
);

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped in a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'!')
  .remove(b'~')
  .remove(b'*')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')');

/// HTTP transport: one GET per call, no retries, no caching
pub struct Transport {
  client: Client,
  base_url: Url,
  user_agent: String,
  logger: Option<Arc<dyn RequestLogger>>,
}

impl Transport {
  /// Create a new transport instance
  ///
  /// Installs [`TracingRequestLogger`] when `config.log_requests` is set.
  pub fn new(config: &Config) -> Result<Self> {
    let logger: Option<Arc<dyn RequestLogger>> =
      if config.log_requests { Some(Arc::new(TracingRequestLogger)) } else { None };
    Self::with_logger(config, logger)
  }

  /// Create a transport with an explicit request logger (or none)
  pub fn with_logger(config: &Config, logger: Option<Arc<dyn RequestLogger>>) -> Result<Self> {
    let base_url = Url::parse(&config.base_url)?;
    if base_url.cannot_be_a_base() {
      return Err(Error::Config(format!("base URL cannot carry a path: {}", config.base_url)));
    }

    let user_agent = config.user_agent.clone().unwrap_or_else(|| USER_AGENT.to_string());

    let mut builder = Client::builder().user_agent(user_agent.clone());
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, base_url, user_agent, logger })
  }

  /// Append path segments to the base URL, percent-encoding each one.
  ///
  /// `.` and `..` are refused since URL normalization would drop them.
  /// Pure: the same segments always produce the same URL.
  pub fn build_url<I>(&self, segments: I) -> Result<Url>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    let mut path = self.base_url.path().trim_end_matches('/').to_string();
    for segment in segments {
      let segment = segment.as_ref();
      if is_dot_segment(segment) {
        return Err(ValidationError::DotSegment(segment.to_string()).into());
      }
      path.push('/');
      path.extend(utf8_percent_encode(segment, SEGMENT));
    }

    let mut url = self.base_url.clone();
    url.set_path(&path);
    Ok(url)
  }

  /// GET the given path and map the outcome to a JSON document or an error
  #[instrument(skip_all)]
  pub async fn get_json<I>(&self, segments: I) -> Result<Value>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    let url = self.build_url(segments)?;
    if let Some(logger) = &self.logger {
      logger.log_request(&Method::GET, &url);
    }
    debug!("Making request to: {}", url);

    let response = self.client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    debug!("Response status {} with {} bytes", status, body.len());
    map_response(status, &body)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// `User-Agent` header value sent with each request
  pub fn user_agent(&self) -> &str {
    &self.user_agent
  }
}

impl fmt::Debug for Transport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url.as_str())
      .field("user_agent", &self.user_agent)
      .field("logger", &self.logger.is_some())
      .finish()
  }
}

/// Classify a completed response.
///
/// 200 with JSON is the only success. A 404 whose body is JSON with a
/// `detail` field reports that detail; every other non-200 reports the code.
pub(crate) fn map_response(status: StatusCode, body: &str) -> Result<Value> {
  if status != StatusCode::OK {
    if status == StatusCode::NOT_FOUND {
      if let Some(detail) = not_found_detail(body) {
        debug!("API reported: {}", detail);
        return Err(Error::NotFound(detail));
      }
    }
    warn!("Request failed with status: {}", status);
    return Err(Error::Status(status.as_u16()));
  }

  serde_json::from_str(body).map_err(Error::Parse)
}

fn not_found_detail(body: &str) -> Option<String> {
  let doc: Value = serde_json::from_str(body).ok()?;
  let detail = doc.get("detail")?;
  Some(match detail {
    Value::String(text) => text.clone(),
    other => other.to_string(),
  })
}
