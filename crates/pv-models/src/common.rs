//! Conversion from raw response documents into typed models

use pv_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A model that can be read out of a parsed response document.
pub trait Document: DeserializeOwned {
  /// Convert a parsed document, reporting shape mismatches as
  /// [`Error::InvalidResponse`].
  fn from_document(doc: Value) -> Result<Self> {
    serde_json::from_value(doc).map_err(|e| Error::InvalidResponse(e.to_string()))
  }
}

/// Parse the `YYYYMMDDHH` timestamps used throughout the API.
pub fn parse_timestamp(raw: &str) -> Option<chrono::NaiveDateTime> {
  if raw.len() != 10 {
    return None;
  }
  chrono::NaiveDateTime::parse_from_str(&format!("{raw}0000"), "%Y%m%d%H%M%S").ok()
}
