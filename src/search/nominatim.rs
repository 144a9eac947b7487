// SPDX-License-Identifier: MPL-2.0
//! Free-text place search against the public Nominatim instance.

use super::SearchResult;
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use serde::Deserialize;

const SEARCH_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Search is biased to New Zealand, same as the map's start view.
const COUNTRY_CODES: &str = "nz";

/// Maximum number of candidates requested per query.
pub const RESULT_LIMIT: usize = 5;

/// One entry of the `/search` response array. Nominatim sends coordinates
/// as decimal strings.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub(crate) place_id: Option<u64>,
    pub(crate) lat: Option<String>,
    pub(crate) lon: Option<String>,
    #[serde(default)]
    pub(crate) display_name: String,
}

/// Runs a place search. Items whose coordinates are missing or fail to
/// parse are dropped rather than surfaced as unselectable entries.
pub async fn search(client: &reqwest::Client, query: &str) -> Result<Vec<SearchResult>> {
    let url = format!(
        "{SEARCH_ENDPOINT}?format=json&q={}&countrycodes={COUNTRY_CODES}&limit={RESULT_LIMIT}&addressdetails=1",
        urlencoding::encode(query)
    );

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "Nominatim search returned {}",
            response.status()
        )));
    }

    let items: Vec<SearchItem> = response.json().await?;
    Ok(items.into_iter().filter_map(into_result).collect())
}

fn into_result(item: SearchItem) -> Option<SearchResult> {
    let Some(coordinates) = parse_coordinates(item.lat.as_deref(), item.lon.as_deref()) else {
        log::debug!(
            "Dropping search result without usable coordinates: {:?}",
            item.display_name
        );
        return None;
    };

    Some(SearchResult {
        id: item.place_id.map(|id| id.to_string()).unwrap_or_default(),
        display_name: item.display_name,
        coordinates: Some(coordinates),
    })
}

/// Parses Nominatim's string-typed coordinate pair.
pub(crate) fn parse_coordinates(lat: Option<&str>, lon: Option<&str>) -> Option<Coordinates> {
    let lat: f64 = lat?.parse().ok()?;
    let lng: f64 = lon?.parse().ok()?;
    Some(Coordinates::new(lat, lng))
}
