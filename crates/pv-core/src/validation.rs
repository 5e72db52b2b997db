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

//! Parameter validation for the pageviews operations.
//!
//! Each operation has its own validator that either returns a typed,
//! fully-resolved request or the first [`ValidationError`] encountered.
//! Rules run in a fixed order: project, article, start/end, the
//! operation-specific date fields, then the optional dimension filters.
//! Empty strings are treated the same as absent fields.

use crate::error::ValidationError;
use crate::types::{Access, Agent, Granularity, PageviewParams};
use regex::Regex;
use std::sync::LazyLock;

/// Largest ranking the top-articles endpoint returns
pub const MAX_TOP_LIMIT: usize = 1000;

const DAILY_FORMAT: &str = "YYYYMMDD";
const HOURLY_FORMAT: &str = "YYYYMMDDHH";

static DAILY_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^((?:19|20)\d{2})([-/.]?)(0[1-9]|1[0-2])([-/.]?)(0[1-9]|[12]\d|3[01])$")
    .expect("daily timestamp pattern")
});

static HOURLY_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^((?:19|20)\d{2})([-/.]?)(0[1-9]|1[0-2])([-/.]?)(0[1-9]|[12]\d|3[01])([-/.]?)([01]\d|2[0-3])$",
  )
  .expect("hourly timestamp pattern")
});

static YEAR_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?:19|20)\d{2}$").expect("year pattern"));
static MONTH_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?:0[1-9]|1[0-2])$").expect("month pattern"));
static DAY_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?:0[1-9]|[12]\d|3[01])$").expect("day pattern"));

/// Validated parameters for the per-article series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerArticleRequest {
  pub project: String,
  pub access: Access,
  pub agent: Agent,
  pub article: String,
  pub granularity: Granularity,
  /// `YYYYMMDD`, separators removed
  pub start: String,
  pub end: String,
}

/// Validated parameters for the aggregated series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRequest {
  pub project: String,
  pub access: Access,
  pub agent: Agent,
  pub granularity: Granularity,
  /// `YYYYMMDDHH`, separators removed
  pub start: String,
  pub end: String,
}

/// Validated parameters for the top-articles listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRequest {
  pub project: String,
  pub access: Access,
  pub year: String,
  pub month: String,
  pub day: String,
  pub limit: Option<usize>,
}

pub fn validate_per_article(
  params: &PageviewParams,
) -> Result<PerArticleRequest, ValidationError> {
  let project = project(params)?;
  let article = present(&params.article).ok_or(ValidationError::MissingArticle)?;
  if is_dot_segment(article) {
    return Err(ValidationError::InvalidArticle(article.to_string()));
  }
  let (start, end) = range(params, &DAILY_RE, DAILY_FORMAT)?;
  let (access, agent, granularity) = dimensions(params)?;

  Ok(PerArticleRequest {
    project,
    access,
    agent,
    article: article.to_string(),
    granularity,
    start,
    end,
  })
}

pub fn validate_aggregate(params: &PageviewParams) -> Result<AggregateRequest, ValidationError> {
  let project = project(params)?;
  let (start, end) = range(params, &HOURLY_RE, HOURLY_FORMAT)?;
  let (access, agent, granularity) = dimensions(params)?;

  Ok(AggregateRequest { project, access, agent, granularity, start, end })
}

pub fn validate_top(params: &PageviewParams) -> Result<TopRequest, ValidationError> {
  let project = project(params)?;

  let year = present(&params.year).ok_or(ValidationError::MissingYear)?;
  if !YEAR_RE.is_match(year) {
    return Err(ValidationError::InvalidYear(year.to_string()));
  }
  let month = present(&params.month).ok_or(ValidationError::MissingMonth)?;
  if !MONTH_RE.is_match(month) {
    return Err(ValidationError::InvalidMonth(month.to_string()));
  }
  // Pattern only: "31" passes for every month.
  let day = present(&params.day).ok_or(ValidationError::MissingDay)?;
  if !DAY_RE.is_match(day) {
    return Err(ValidationError::InvalidDay(day.to_string()));
  }

  if let Some(limit) = params.limit {
    if limit == 0 || limit > MAX_TOP_LIMIT {
      return Err(ValidationError::InvalidLimit { value: limit, max: MAX_TOP_LIMIT });
    }
  }

  let access: Access = optional(&params.access)?.unwrap_or_default();

  Ok(TopRequest {
    project,
    access,
    year: year.to_string(),
    month: month.to_string(),
    day: day.to_string(),
    limit: params.limit,
  })
}

fn present(field: &Option<String>) -> Option<&str> {
  field.as_deref().filter(|v| !v.is_empty())
}

fn project(params: &PageviewParams) -> Result<String, ValidationError> {
  let project = present(&params.project).ok_or(ValidationError::MissingProject)?;
  if !project.contains('.') || is_dot_segment(project) {
    return Err(ValidationError::InvalidProject(project.to_string()));
  }
  Ok(project.to_string())
}

/// `.` and `..` are resolved away by URL path normalization.
pub fn is_dot_segment(segment: &str) -> bool {
  matches!(segment, "." | "..")
}

fn range(
  params: &PageviewParams,
  pattern: &Regex,
  format: &'static str,
) -> Result<(String, String), ValidationError> {
  let start = present(&params.start).ok_or(ValidationError::MissingStart)?;
  let start = normalize_timestamp(pattern, start)
    .ok_or_else(|| ValidationError::InvalidStart { format, value: start.to_string() })?;

  let end = present(&params.end).ok_or(ValidationError::MissingEnd)?;
  let end = normalize_timestamp(pattern, end)
    .ok_or_else(|| ValidationError::InvalidEnd { format, value: end.to_string() })?;

  Ok((start, end))
}

/// Match `raw` against a timestamp pattern and strip its separators.
///
/// Separators are optional but must be the same character throughout.
fn normalize_timestamp(pattern: &Regex, raw: &str) -> Option<String> {
  let caps = pattern.captures(raw)?;
  let separators: Vec<&str> =
    caps.iter().skip(2).step_by(2).flatten().map(|m| m.as_str()).collect();
  if separators.windows(2).any(|pair| pair[0] != pair[1]) {
    return None;
  }
  Some(
    caps
      .iter()
      .skip(1)
      .step_by(2)
      .flatten()
      .map(|m| m.as_str())
      .collect(),
  )
}

fn optional<T>(field: &Option<String>) -> Result<Option<T>, ValidationError>
where
  T: std::str::FromStr<Err = ValidationError>,
{
  present(field).map(str::parse).transpose()
}

fn dimensions(params: &PageviewParams) -> Result<(Access, Agent, Granularity), ValidationError> {
  let access: Access = optional(&params.access)?.unwrap_or_default();
  let agent: Agent = optional(&params.agent)?.unwrap_or_default();
  let granularity: Granularity = optional(&params.granularity)?.unwrap_or_default();
  Ok((access, agent, granularity))
}
