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

//! Filter dimensions accepted by the pageviews endpoints.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access method: which kind of client produced the traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
  #[default]
  AllAccess,
  Desktop,
  MobileApp,
  MobileWeb,
}

impl Access {
  pub const ALL: [Access; 4] = [Access::AllAccess, Access::Desktop, Access::MobileApp, Access::MobileWeb];

  /// Wire value used in URL paths
  pub fn as_str(&self) -> &'static str {
    match self {
      Access::AllAccess => "all-access",
      Access::Desktop => "desktop",
      Access::MobileApp => "mobile-app",
      Access::MobileWeb => "mobile-web",
    }
  }
}

impl fmt::Display for Access {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Access {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Access::ALL
      .into_iter()
      .find(|a| a.as_str() == s)
      .ok_or_else(|| ValidationError::InvalidAccess(s.to_string()))
  }
}

/// Agent type: who or what made the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Agent {
  #[default]
  AllAgents,
  User,
  Spider,
  Automated,
}

impl Agent {
  pub const ALL: [Agent; 4] = [Agent::AllAgents, Agent::User, Agent::Spider, Agent::Automated];

  pub fn as_str(&self) -> &'static str {
    match self {
      Agent::AllAgents => "all-agents",
      Agent::User => "user",
      Agent::Spider => "spider",
      Agent::Automated => "automated",
    }
  }
}

impl fmt::Display for Agent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Agent {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Agent::ALL
      .into_iter()
      .find(|a| a.as_str() == s)
      .ok_or_else(|| ValidationError::InvalidAgent(s.to_string()))
  }
}

/// Time bucketing of the returned series. Only daily is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
  #[default]
  Daily,
}

impl Granularity {
  pub fn as_str(&self) -> &'static str {
    match self {
      Granularity::Daily => "daily",
    }
  }
}

impl fmt::Display for Granularity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Granularity {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "daily" => Ok(Granularity::Daily),
      other => Err(ValidationError::InvalidGranularity(other.to_string())),
    }
  }
}
