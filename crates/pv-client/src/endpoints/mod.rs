//! Endpoint groups of the pageviews API

pub mod pageviews;

/// Path prefix shared by every pageviews endpoint
pub(crate) const PAGEVIEWS_ROOT: [&str; 2] = ["metrics", "pageviews"];
