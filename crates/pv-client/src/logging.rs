//! Injectable hook for echoing outgoing requests

use reqwest::Method;
use tracing::info;
use url::Url;

/// Observes every request the transport is about to send.
///
/// Installed per client; the transport calls it once per request, before
/// the request goes out. Any `Fn(&Method, &Url)` closure works as a logger.
pub trait RequestLogger: Send + Sync {
  /// Called with the method and fully built URL
  fn log_request(&self, method: &Method, url: &Url);
}

impl<F> RequestLogger for F
where
  F: Fn(&Method, &Url) + Send + Sync,
{
  fn log_request(&self, method: &Method, url: &Url) {
    self(method, url)
  }
}

/// Emits each outgoing request as a `tracing` event at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRequestLogger;

impl RequestLogger for TracingRequestLogger {
  fn log_request(&self, method: &Method, url: &Url) {
    info!(%method, %url, "pageviews request");
  }
}
