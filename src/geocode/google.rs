// SPDX-License-Identifier: MPL-2.0
//! Reverse geocoding against the Google Geocoding API.

use crate::error::{Error, Result};
use crate::geo::{Coordinates, LocationDetails};
use serde::Deserialize;

const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Address-component types accepted for the suburb field.
const SUBURB_TYPES: [&str; 2] = ["sublocality", "neighborhood"];

/// Address-component types accepted for the city field.
const CITY_TYPES: [&str; 2] = ["locality", "administrative_area_level_2"];

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub(crate) results: Vec<GeocodeResult>,
    pub(crate) status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeocodeResult {
    pub(crate) formatted_address: Option<String>,
    #[serde(default)]
    pub(crate) address_components: Vec<AddressComponent>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AddressComponent {
    pub(crate) long_name: Option<String>,
    #[serde(default)]
    pub(crate) types: Vec<String>,
}

/// Reverse-geocodes `coord` with the given API key. `Ok(None)` means Google
/// returned no results (also covers denied or over-quota keys, which come
/// back as a non-OK `status` with an empty result list).
pub async fn reverse(
    client: &reqwest::Client,
    api_key: &str,
    coord: Coordinates,
) -> Result<Option<LocationDetails>> {
    let url = format!(
        "{GEOCODE_ENDPOINT}?latlng={},{}&key={}",
        coord.lat,
        coord.lng,
        urlencoding::encode(api_key)
    );

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "Google geocode returned status {}",
            response.status()
        )));
    }

    let body: GeocodeResponse = response.json().await?;
    if body.results.is_empty() {
        if let Some(status) = &body.status {
            if status != "OK" && status != "ZERO_RESULTS" {
                log::debug!("Google geocode answered with status {status}");
            }
        }
        return Ok(None);
    }

    Ok(extract(body))
}

/// Takes the first result: the formatted address verbatim, plus suburb and
/// city from the first component carrying any of the wanted types.
pub(crate) fn extract(body: GeocodeResponse) -> Option<LocationDetails> {
    let result = body.results.into_iter().next()?;

    let suburb = component_matching(&result.address_components, &SUBURB_TYPES);
    let city = component_matching(&result.address_components, &CITY_TYPES);

    Some(LocationDetails {
        address: result.formatted_address.unwrap_or_default(),
        suburb,
        city,
    })
}

fn component_matching(components: &[AddressComponent], wanted: &[&str]) -> String {
    components
        .iter()
        .find(|component| wanted.iter().any(|t| component.types.iter().any(|ct| ct == t)))
        .and_then(|component| component.long_name.clone())
        .unwrap_or_default()
}
