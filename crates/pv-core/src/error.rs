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

use thiserror::Error;

/// A parameter set rejected before any request was made.
///
/// Rules are checked in a fixed order and the first failure wins, so the
/// variant tells the caller exactly which rule tripped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  #[error("project is required (e.g. en.wikipedia.org)")]
  MissingProject,

  #[error("project must be a domain such as en.wikipedia.org, got '{0}'")]
  InvalidProject(String),

  #[error("article is required")]
  MissingArticle,

  #[error("article cannot consist only of dots, got '{0}'")]
  InvalidArticle(String),

  #[error("start is required")]
  MissingStart,

  #[error("start must be formatted as {format}, got '{value}'")]
  InvalidStart { format: &'static str, value: String },

  #[error("end is required")]
  MissingEnd,

  #[error("end must be formatted as {format}, got '{value}'")]
  InvalidEnd { format: &'static str, value: String },

  #[error("year is required")]
  MissingYear,

  #[error("year must be a four digit year between 1900 and 2099, got '{0}'")]
  InvalidYear(String),

  #[error("month is required")]
  MissingMonth,

  #[error("month must be between 01 and 12, got '{0}'")]
  InvalidMonth(String),

  #[error("day is required")]
  MissingDay,

  #[error("day must be between 01 and 31, got '{0}'")]
  InvalidDay(String),

  #[error("limit must be between 1 and {max}, got {value}")]
  InvalidLimit { value: usize, max: usize },

  #[error("access must be one of all-access, desktop, mobile-app, mobile-web, got '{0}'")]
  InvalidAccess(String),

  #[error("agent must be one of all-agents, user, spider, automated, got '{0}'")]
  InvalidAgent(String),

  #[error("granularity must be daily, got '{0}'")]
  InvalidGranularity(String),

  #[error("path segment '{0}' would be collapsed out of the URL")]
  DotSegment(String),
}

/// The main error type for pv-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Parameters failed validation; no request was sent
  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// The HTTP request itself failed (DNS, connection, TLS, body read)
  #[error(transparent)]
  Transport(#[from] reqwest::Error),

  /// 404 carrying the API's own `detail` text
  #[error("{0}")]
  NotFound(String),

  /// Any other non-200 response
  #[error("Request failed with status code {0}")]
  Status(u16),

  /// A 200 response whose body was not JSON
  #[error("Failed to parse response: {0}")]
  Parse(#[source] serde_json::Error),

  /// The document parsed but lacks a field the operation relies on
  #[error("Invalid API response: {0}")]
  InvalidResponse(String),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Base URL could not be parsed
  #[error("Invalid base URL: {0}")]
  Url(#[from] url::ParseError),
}

impl Error {
  /// True when the call was rejected before reaching the network.
  pub fn is_validation(&self) -> bool {
    matches!(self, Error::Validation(_))
  }

  /// HTTP status code for remote errors, if any.
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::NotFound(_) => Some(404),
      Error::Status(code) => Some(*code),
      Error::Transport(e) => e.status().map(|s| s.as_u16()),
      _ => None,
    }
  }
}

/// Result type alias for pv-* crates
pub type Result<T> = std::result::Result<T, Error>;
