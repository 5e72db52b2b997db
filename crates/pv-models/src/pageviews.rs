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

//! Pageviews response models

use crate::common::{parse_timestamp, Document};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Listing of the available pageview endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionsResponse {
  pub items: Vec<String>,
}

impl Document for DimensionsResponse {}

/// One data point of a per-article series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleViews {
  pub project: String,
  pub article: String,
  pub granularity: String,
  /// `YYYYMMDDHH`
  pub timestamp: String,
  pub access: String,
  pub agent: String,
  pub views: u64,
}

impl ArticleViews {
  pub fn timestamp(&self) -> Option<NaiveDateTime> {
    parse_timestamp(&self.timestamp)
  }
}

/// Per-article series response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerArticleResponse {
  pub items: Vec<ArticleViews>,
}

impl PerArticleResponse {
  /// Sum of views over the whole series
  pub fn total_views(&self) -> u64 {
    self.items.iter().map(|i| i.views).sum()
  }
}

impl Document for PerArticleResponse {}

/// One data point of a project-wide aggregated series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateViews {
  pub project: String,
  pub access: String,
  pub agent: String,
  pub granularity: String,
  pub timestamp: String,
  pub views: u64,
}

impl AggregateViews {
  pub fn timestamp(&self) -> Option<NaiveDateTime> {
    parse_timestamp(&self.timestamp)
  }
}

/// Aggregated series response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResponse {
  pub items: Vec<AggregateViews>,
}

impl AggregateResponse {
  pub fn total_views(&self) -> u64 {
    self.items.iter().map(|i| i.views).sum()
  }
}

impl Document for AggregateResponse {}

/// A single ranked entry in the top-articles listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopArticle {
  pub article: String,
  pub views: u64,
  pub rank: u32,
}

/// The ranking for one project and day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopArticlesItem {
  pub project: String,
  pub access: String,
  pub year: String,
  pub month: String,
  pub day: String,
  pub articles: Vec<TopArticle>,
}

impl TopArticlesItem {
  /// Calendar date of the ranking, if the fields form a real date
  pub fn date(&self) -> Option<NaiveDate> {
    let year = self.year.parse().ok()?;
    let month = self.month.parse().ok()?;
    let day = self.day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
  }
}

/// Top-articles response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopArticlesResponse {
  pub items: Vec<TopArticlesItem>,
}

impl TopArticlesResponse {
  /// Ranked articles of the first item, in API order
  pub fn articles(&self) -> &[TopArticle] {
    self.items.first().map(|i| i.articles.as_slice()).unwrap_or(&[])
  }
}

impl Document for TopArticlesResponse {}
