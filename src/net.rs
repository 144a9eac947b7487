// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client construction.
//!
//! Geocoding, place search, and tile fetching all go through one
//! `reqwest::Client`. Nominatim's usage policy requires an identifying
//! User-Agent on every request, so the client is built once with it here.

use crate::error::{Error, Result};
use std::time::Duration;

/// Identifies this application to the geocoding and tile services.
pub const USER_AGENT: &str = concat!("IcedAtlas/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout. Geocode responses are small; anything slower than
/// this is treated as a network failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the application's HTTP client.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| Error::Http(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_the_application() {
        assert!(USER_AGENT.starts_with("IcedAtlas/"));
    }

    #[test]
    fn client_builds_without_error() {
        assert!(build_client().is_ok());
    }
}
