// SPDX-License-Identifier: MPL-2.0
//! Reverse geocoding against OpenStreetMap's Nominatim service.
//!
//! Nominatim answers with a `display_name` plus a bag of optional address
//! fields whose naming varies by place kind (city vs town vs village, suburb
//! vs neighbourhood vs hamlet). The response record keeps every field
//! optional and the extraction collapses them into the fixed
//! [`LocationDetails`] shape.

use crate::error::{Error, Result};
use crate::geo::{Coordinates, LocationDetails};
use serde::Deserialize;

const REVERSE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";

/// Raw `/reverse` response. Ocean clicks come back as `{"error": "..."}`
/// with no address at all, so everything is optional.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReverseResponse {
    pub(crate) display_name: Option<String>,
    pub(crate) address: Option<AddressFields>,
}

/// The subset of Nominatim address fields this application reads.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AddressFields {
    pub(crate) suburb: Option<String>,
    pub(crate) neighbourhood: Option<String>,
    pub(crate) hamlet: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) town: Option<String>,
    pub(crate) village: Option<String>,
    pub(crate) municipality: Option<String>,
}

/// Reverse-geocodes `coord`. `Ok(None)` means Nominatim had no address for
/// the point (open water, unmapped area).
pub async fn reverse(
    client: &reqwest::Client,
    coord: Coordinates,
) -> Result<Option<LocationDetails>> {
    let url = format!(
        "{REVERSE_ENDPOINT}?format=json&lat={}&lon={}&addressdetails=1",
        coord.lat, coord.lng
    );

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "Nominatim reverse returned status {}",
            response.status()
        )));
    }

    let body: ReverseResponse = response.json().await?;
    Ok(extract(body))
}

/// Collapses a raw response into `LocationDetails`.
///
/// A response without an `address` object yields `None`; within it, the
/// suburb and city fields take the first present alternative. Absent fields
/// become empty strings.
pub(crate) fn extract(body: ReverseResponse) -> Option<LocationDetails> {
    let address = body.address?;

    Some(LocationDetails {
        address: body.display_name.unwrap_or_default(),
        suburb: address
            .suburb
            .or(address.neighbourhood)
            .or(address.hamlet)
            .unwrap_or_default(),
        city: address
            .city
            .or(address.town)
            .or(address.village)
            .or(address.municipality)
            .unwrap_or_default(),
    })
}
