//! Asynchronous public address lookup
//!
//! Endpoints are tried in order, each up to `attempts` times with a per-attempt
//! timeout. The first response that carries a valid address wins. The lookup
//! runs as its own task so form edits never wait on it; its outcome is applied
//! with [`FormState::set_network_address`](super::FormState::set_network_address).

use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use super::address::{DEFAULT_ENDPOINTS, NetworkResolutionFailure, parse_address_body};
use crate::core::models::NetworkAddress;
use crate::core::ports::AddressFetcher;

/// Lookup settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressLookup {
    /// Endpoints in the order they are tried
    pub endpoints: Vec<String>,
    /// Attempts per endpoint, at least one
    pub attempts: u32,
    /// Limit for a single attempt
    pub timeout: Duration,
    /// Pause between attempts on the same endpoint
    pub retry_delay: Duration,
}

impl Default for AddressLookup {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|e| (*e).to_string()).collect(),
            attempts: 2,
            timeout: Duration::from_secs(5),
            retry_delay: Duration::from_millis(500),
        }
    }
}

impl AddressLookup {
    /// Try every endpoint until one yields an address
    pub async fn resolve<F: AddressFetcher>(
        &self,
        fetcher: &F,
    ) -> Result<String, NetworkResolutionFailure> {
        if self.endpoints.is_empty() {
            return Err(NetworkResolutionFailure::NoEndpoints);
        }
        let attempts = self.attempts.max(1);

        for url in &self.endpoints {
            for attempt in 1..=attempts {
                debug!("Fetching address from {url} (attempt {attempt}/{attempts})");
                match tokio::time::timeout(self.timeout, fetcher.fetch(url)).await {
                    Ok(Ok(body)) => {
                        if let Some(address) = parse_address_body(&body) {
                            info!("Resolved public address {address} via {url}");
                            return Ok(address);
                        }
                        warn!("Response from {url} carried no address");
                        break;
                    },
                    Ok(Err(e)) => warn!("Address lookup via {url} failed: {e:#}"),
                    Err(_) => warn!("Address lookup via {url} timed out after {:?}", self.timeout),
                }
                if attempt < attempts {
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }

        Err(NetworkResolutionFailure::AllFailed(self.endpoints.len()))
    }

    /// Run the lookup as a background task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F: AddressFetcher>(self, fetcher: F) -> LookupHandle {
        let task = tokio::spawn(async move { self.resolve(&fetcher).await });
        LookupHandle { task }
    }
}

/// Handle to a running lookup
#[derive(Debug)]
pub struct LookupHandle {
    task: JoinHandle<Result<String, NetworkResolutionFailure>>,
}

impl LookupHandle {
    /// Stop the lookup; [`finish`](Self::finish) then yields `Unresolved`
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the lookup has completed
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the outcome
    pub async fn finish(self) -> NetworkAddress {
        match self.task.await {
            Ok(Ok(address)) => NetworkAddress::Resolved(address),
            Ok(Err(e)) => {
                warn!("Public address unavailable: {e}");
                NetworkAddress::Unresolved
            },
            Err(e) if e.is_cancelled() => {
                info!("Public address lookup cancelled");
                NetworkAddress::Unresolved
            },
            Err(e) => {
                warn!("Public address lookup task failed: {e}");
                NetworkAddress::Unresolved
            },
        }
    }
}
