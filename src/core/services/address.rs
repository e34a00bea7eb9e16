//! Public address response parsing
//!
//! Address endpoints answer with a JSON object carrying the address in an
//! `ip` or `ipAddress` field. Only values that parse as an IPv4 or IPv6
//! address are accepted.

use std::net::IpAddr;

use thiserror::Error;

/// Endpoints tried in order when none are configured
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "https://api64.ipify.org?format=json",
    "https://api.ipify.org?format=json",
    "https://ipapi.co/json/",
];

const ADDRESS_FIELDS: &[&str] = &["ip", "ipAddress"];

/// The lookup produced no address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkResolutionFailure {
    /// Nothing to try
    #[error("no address endpoints configured")]
    NoEndpoints,

    /// Every endpoint failed or answered without an address
    #[error("all {0} address endpoint(s) failed")]
    AllFailed(usize),
}

/// Extract the address from an endpoint response body
#[must_use]
pub fn parse_address_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ADDRESS_FIELDS
        .iter()
        .filter_map(|field| value.get(field).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|candidate| candidate.parse::<IpAddr>().is_ok())
        .map(String::from)
}
