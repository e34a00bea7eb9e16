//! Address fetcher port
//!
//! Defines how the address lookup reaches an endpoint.

use std::future::Future;

/// Fetches the raw response body of an address endpoint
///
/// Implementations perform a single `GET`; retries, timeouts and parsing are
/// handled by the lookup service.
pub trait AddressFetcher: Send + Sync + 'static {
    /// Fetch `url` and return the response body
    fn fetch(&self, url: &str) -> impl Future<Output = anyhow::Result<String>> + Send;
}
