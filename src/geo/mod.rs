// SPDX-License-Identifier: MPL-2.0
//! Core geographic types shared across the application.
//!
//! These types represent pure data without any presentation dependencies.

use serde::Serialize;

pub mod mercator;

/// A WGS-84 point in decimal degrees.
///
/// Immutable value type: every map click or search selection replaces the
/// current pair wholesale, nothing mutates it in place.
///
/// # Example
///
/// ```
/// use iced_atlas::geo::Coordinates;
///
/// let auckland = Coordinates::new(-36.8485, 174.7633);
/// assert_eq!(auckland.lat, -36.8485);
/// assert_eq!(auckland.lng, 174.7633);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in degrees, south negative.
    pub lat: f64,
    /// Longitude in degrees, west negative.
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Reverse-geocoded address fields for a coordinate.
///
/// Derived data, never hand-edited: replaced wholesale per geocode response.
/// Absent fields are empty strings, never missing keys, so the form can bind
/// to them directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationDetails {
    /// Full formatted address / display name, verbatim from the provider.
    pub address: String,
    /// Suburb or neighbourhood, empty when the provider has none.
    pub suburb: String,
    /// City, town or equivalent locality, empty when the provider has none.
    pub city: String,
}

/// Which backend renders the basemap and answers geocoding/search queries.
///
/// Switching provider changes how *future* lookups are performed; it never
/// clears the current coordinate or details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapProvider {
    Google,
    #[default]
    Osm,
}

impl MapProvider {
    pub const ALL: [MapProvider; 2] = [MapProvider::Osm, MapProvider::Google];

    /// The i18n key for this provider's display label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            MapProvider::Google => "provider-google",
            MapProvider::Osm => "provider-osm",
        }
    }

    /// Stable identifier used in serialized payloads and logs.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MapProvider::Google => "google",
            MapProvider::Osm => "osm",
        }
    }

    /// Camera the map starts at before any selection, per provider.
    #[must_use]
    pub fn start_camera(self) -> (Coordinates, u8) {
        match self {
            MapProvider::Google => (Coordinates::new(-40.9006, 174.886), 6),
            MapProvider::Osm => (Coordinates::new(-41.5, 172.5), 5),
        }
    }
}

/// Zoom applied when a location is selected externally (search result).
pub const SELECTION_ZOOM: u8 = 15;

/// Formats one coordinate component with exactly six decimal digits, or an
/// empty string when absent.
#[must_use]
pub fn format_coordinate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.6}", v),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_coordinate_renders_six_decimals() {
        assert_eq!(format_coordinate(Some(-36.8485)), "-36.848500");
        assert_eq!(format_coordinate(Some(174.7633)), "174.763300");
        assert_eq!(format_coordinate(Some(0.0)), "0.000000");
    }

    #[test]
    fn format_coordinate_absent_is_empty() {
        assert_eq!(format_coordinate(None), "");
    }

    #[test]
    fn location_details_default_is_all_empty() {
        let details = LocationDetails::default();
        assert!(details.address.is_empty());
        assert!(details.suburb.is_empty());
        assert!(details.city.is_empty());
    }

    #[test]
    fn provider_default_is_osm() {
        assert_eq!(MapProvider::default(), MapProvider::Osm);
    }

    #[test]
    fn provider_ids_are_stable() {
        assert_eq!(MapProvider::Osm.id(), "osm");
        assert_eq!(MapProvider::Google.id(), "google");
    }

    #[test]
    fn start_cameras_are_over_new_zealand() {
        for provider in MapProvider::ALL {
            let (center, zoom) = provider.start_camera();
            assert!(center.lat < -34.0 && center.lat > -48.0);
            assert!(center.lng > 166.0 && center.lng < 180.0);
            assert!((4..=7).contains(&zoom));
        }
    }

    #[test]
    fn coordinates_serialize_with_lat_lng_keys() {
        let json = serde_json::to_string(&Coordinates::new(-41.5, 172.5)).unwrap();
        assert_eq!(json, r#"{"lat":-41.5,"lng":172.5}"#);
    }
}
