// SPDX-License-Identifier: MPL-2.0
//! Reverse geocoding: coordinate in, address fields out.
//!
//! Two backends, selected by the active [`MapProvider`]. The Google backend
//! only runs with a non-empty API key; without one the free Nominatim
//! endpoint answers instead, so a click always resolves through something.

use crate::error::Result;
use crate::geo::{Coordinates, LocationDetails, MapProvider};

pub mod google;
pub mod nominatim;

/// Resolves `coord` into address details via the active provider.
///
/// `Ok(None)` means the backend answered but had nothing for this point;
/// `Err` is a transport or decode failure. Callers treat both the same way
/// (details stay empty) and only differ in what they log.
pub async fn reverse_geocode(
    client: &reqwest::Client,
    provider: MapProvider,
    api_key: &str,
    coord: Coordinates,
) -> Result<Option<LocationDetails>> {
    if uses_google(provider, api_key) {
        google::reverse(client, api_key, coord).await
    } else {
        nominatim::reverse(client, coord).await
    }
}

/// The Google backend needs both the provider selection and a key.
pub(crate) fn uses_google(provider: MapProvider, api_key: &str) -> bool {
    provider == MapProvider::Google && !api_key.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_requires_a_key() {
        assert!(uses_google(MapProvider::Google, "abc123"));
        assert!(!uses_google(MapProvider::Google, ""));
    }

    #[test]
    fn osm_never_routes_to_google() {
        assert!(!uses_google(MapProvider::Osm, "abc123"));
        assert!(!uses_google(MapProvider::Osm, ""));
    }
}
