// SPDX-License-Identifier: MPL-2.0
//! Google Places search: autocomplete predictions plus the follow-up
//! details lookup that resolves a prediction to a coordinate.

use super::SearchResult;
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use serde::Deserialize;

const AUTOCOMPLETE_ENDPOINT: &str =
    "https://maps.googleapis.com/maps/api/place/autocomplete/json";
const DETAILS_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/details/json";

/// Predictions are restricted to New Zealand, matching the map's start view.
const COUNTRY_RESTRICTION: &str = "country:nz";

/// Field mask sent with the details request.
const DETAIL_FIELDS: &str = "geometry,name,formatted_address";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AutocompleteResponse {
    #[serde(default)]
    pub(crate) predictions: Vec<Prediction>,
    pub(crate) status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Prediction {
    pub(crate) place_id: Option<String>,
    pub(crate) description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DetailsResponse {
    pub(crate) result: Option<PlaceDetails>,
    pub(crate) status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlaceDetails {
    pub(crate) geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Geometry {
    pub(crate) location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LatLng {
    pub(crate) lat: f64,
    pub(crate) lng: f64,
}

/// Fetches autocomplete predictions for `query`. Predictions carry no
/// coordinate; selecting one goes through [`details`].
pub async fn autocomplete(
    client: &reqwest::Client,
    api_key: &str,
    query: &str,
) -> Result<Vec<SearchResult>> {
    let url = format!(
        "{AUTOCOMPLETE_ENDPOINT}?input={}&components={}&key={}",
        urlencoding::encode(query),
        urlencoding::encode(COUNTRY_RESTRICTION),
        urlencoding::encode(api_key)
    );

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "Google autocomplete returned {}",
            response.status()
        )));
    }

    let body: AutocompleteResponse = response.json().await?;
    match body.status.as_deref() {
        Some("OK") | Some("ZERO_RESULTS") | None => {}
        Some(status) => {
            log::debug!("Google autocomplete status {status}, treating as no predictions");
            return Ok(Vec::new());
        }
    }

    Ok(body
        .predictions
        .into_iter()
        .filter_map(into_result)
        .collect())
}

/// Resolves a prediction's coordinate. Returns `Ok(None)` when the place
/// carries no geometry, which the caller treats as a no-op selection.
pub async fn details(
    client: &reqwest::Client,
    api_key: &str,
    place_id: &str,
) -> Result<Option<Coordinates>> {
    let url = format!(
        "{DETAILS_ENDPOINT}?place_id={}&fields={}&key={}",
        urlencoding::encode(place_id),
        urlencoding::encode(DETAIL_FIELDS),
        urlencoding::encode(api_key)
    );

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "Google place details returned {}",
            response.status()
        )));
    }

    let body: DetailsResponse = response.json().await?;
    if let Some(status) = body.status.as_deref() {
        if status != "OK" {
            log::debug!("Google place details status {status}, ignoring selection");
            return Ok(None);
        }
    }

    Ok(extract_coordinates(body))
}

fn into_result(prediction: Prediction) -> Option<SearchResult> {
    let place_id = prediction.place_id?;
    Some(SearchResult {
        id: place_id,
        display_name: prediction.description.unwrap_or_default(),
        coordinates: None,
    })
}

fn extract_coordinates(body: DetailsResponse) -> Option<Coordinates> {
    let location = body.result?.geometry?.location?;
    Some(Coordinates::new(location.lat, location.lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictions_become_results_without_coordinates() {
        let json = r#"{
            "predictions": [
                {"place_id": "ChIJ1", "description": "Wellington, New Zealand"},
                {"description": "No id, unselectable"}
            ],
            "status": "OK"
        }"#;
        let body: AutocompleteResponse = serde_json::from_str(json).expect("valid response");
        let results: Vec<SearchResult> =
            body.predictions.into_iter().filter_map(into_result).collect();

        assert_eq!(results.len(), 1, "prediction without a place id is dropped");
        assert_eq!(results[0].id, "ChIJ1");
        assert_eq!(results[0].display_name, "Wellington, New Zealand");
        assert_eq!(results[0].coordinates, None);
    }

    #[test]
    fn details_geometry_resolves_to_coordinates() {
        let json = r#"{
            "result": {
                "geometry": {"location": {"lat": -41.2865, "lng": 174.7762}},
                "name": "Wellington",
                "formatted_address": "Wellington, New Zealand"
            },
            "status": "OK"
        }"#;
        let body: DetailsResponse = serde_json::from_str(json).expect("valid response");

        assert_eq!(
            extract_coordinates(body),
            Some(Coordinates::new(-41.2865, 174.7762))
        );
    }

    #[test]
    fn details_without_geometry_is_none() {
        let json = r#"{"result": {"name": "Mystery"}, "status": "OK"}"#;
        let body: DetailsResponse = serde_json::from_str(json).expect("valid response");

        assert_eq!(extract_coordinates(body), None);
    }

    #[test]
    fn empty_details_response_is_none() {
        let body: DetailsResponse =
            serde_json::from_str(r#"{"status": "NOT_FOUND"}"#).expect("valid response");

        assert_eq!(extract_coordinates(body), None);
    }
}
