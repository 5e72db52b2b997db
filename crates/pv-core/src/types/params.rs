//! Caller-supplied request parameters.

use serde::{Deserialize, Serialize};

/// The parameter mapping handed to every pageviews operation.
///
/// All fields are optional at the type level; which ones are required
/// depends on the operation and is enforced by [`crate::validation`].
/// Dimension filters are kept as raw strings so that an unknown value is
/// reported as a validation error rather than being unrepresentable.
///
/// ```
/// use pv_core::{Access, PageviewParams};
///
/// let params = PageviewParams::new("en.wikipedia.org")
///   .article("Albert Einstein")
///   .start("20240101")
///   .end("20240131")
///   .access(Access::Desktop);
/// assert_eq!(params.access.as_deref(), Some("desktop"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageviewParams {
  pub project: Option<String>,
  pub article: Option<String>,
  pub start: Option<String>,
  pub end: Option<String>,
  pub access: Option<String>,
  pub agent: Option<String>,
  pub granularity: Option<String>,
  pub year: Option<String>,
  pub month: Option<String>,
  pub day: Option<String>,
  pub limit: Option<usize>,
}

impl PageviewParams {
  /// Start a parameter set for the given project
  pub fn new(project: impl Into<String>) -> Self {
    Self { project: Some(project.into()), ..Self::default() }
  }

  pub fn article(mut self, article: impl Into<String>) -> Self {
    self.article = Some(article.into());
    self
  }

  pub fn start(mut self, start: impl Into<String>) -> Self {
    self.start = Some(start.into());
    self
  }

  pub fn end(mut self, end: impl Into<String>) -> Self {
    self.end = Some(end.into());
    self
  }

  /// Accepts either an [`Access`](super::Access) or its wire string
  pub fn access(mut self, access: impl ToString) -> Self {
    self.access = Some(access.to_string());
    self
  }

  pub fn agent(mut self, agent: impl ToString) -> Self {
    self.agent = Some(agent.to_string());
    self
  }

  pub fn granularity(mut self, granularity: impl ToString) -> Self {
    self.granularity = Some(granularity.to_string());
    self
  }

  /// Set year, month and day in one go (top-articles)
  pub fn date(
    mut self,
    year: impl Into<String>,
    month: impl Into<String>,
    day: impl Into<String>,
  ) -> Self {
    self.year = Some(year.into());
    self.month = Some(month.into());
    self.day = Some(day.into());
    self
  }

  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }
}
