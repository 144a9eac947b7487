// SPDX-License-Identifier: MPL-2.0
//! Web-mercator projection math for the slippy-map surface.
//!
//! All conversions go through "world pixels": the square raster the whole
//! planet occupies at a given integer zoom (256 px tiles, doubling per
//! level). Screen positions are world pixels offset by the camera.

use crate::geo::Coordinates;

/// Edge length of one raster tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Zoom bounds of the tile pyramid.
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 19;

/// Latitude where the web-mercator projection cuts off.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Side length of the world raster in pixels at `zoom`.
#[must_use]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << u32::from(zoom.min(MAX_ZOOM)))
}

/// Projects a geographic coordinate to world pixels at `zoom`.
///
/// Latitude is clamped to the projection's valid range first.
#[must_use]
pub fn project(coord: Coordinates, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = coord.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (coord.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;

    (x, y)
}

/// Inverse of [`project`]: world pixels back to a geographic coordinate.
///
/// Horizontal positions outside the world raster wrap around the
/// antimeridian, so panning east past 180° yields longitudes near -180°
/// rather than values outside the valid range.
#[must_use]
pub fn unproject(x: f64, y: f64, zoom: u8) -> Coordinates {
    let size = world_size(zoom);

    let lng = (x / size).rem_euclid(1.0) * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();

    Coordinates::new(lat, lng)
}

/// Clamps `zoom` into the tile pyramid's valid range.
#[must_use]
pub fn clamp_zoom(zoom: i16) -> u8 {
    zoom.clamp(i16::from(MIN_ZOOM), i16::from(MAX_ZOOM)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn world_size_doubles_per_zoom_level() {
        assert_eq!(world_size(0), 256.0);
        assert_eq!(world_size(1), 512.0);
        assert_eq!(world_size(5), 8192.0);
    }

    #[test]
    fn origin_projects_to_world_center() {
        let (x, y) = project(Coordinates::new(0.0, 0.0), 2);
        assert!((x - 512.0).abs() < EPSILON);
        assert!((y - 512.0).abs() < EPSILON);
    }

    #[test]
    fn project_unproject_round_trips() {
        let wellington = Coordinates::new(-41.2865, 174.7762);
        for zoom in [0, 5, 12, 19] {
            let (x, y) = project(wellington, zoom);
            let back = unproject(x, y, zoom);
            assert!((back.lat - wellington.lat).abs() < 1e-6, "lat at z{zoom}");
            assert!((back.lng - wellington.lng).abs() < 1e-6, "lng at z{zoom}");
        }
    }

    #[test]
    fn project_clamps_polar_latitudes() {
        let (_, y_north) = project(Coordinates::new(90.0, 0.0), 3);
        let (_, y_south) = project(Coordinates::new(-90.0, 0.0), 3);
        assert!(y_north >= 0.0);
        assert!(y_south <= world_size(3));
    }

    #[test]
    fn west_is_left_and_north_is_up() {
        let zoom = 6;
        let (x_west, _) = project(Coordinates::new(0.0, -120.0), zoom);
        let (x_east, _) = project(Coordinates::new(0.0, 120.0), zoom);
        assert!(x_west < x_east);

        let (_, y_north) = project(Coordinates::new(60.0, 0.0), zoom);
        let (_, y_south) = project(Coordinates::new(-60.0, 0.0), zoom);
        assert!(y_north < y_south);
    }

    #[test]
    fn unproject_wraps_across_the_antimeridian() {
        let size = world_size(5);

        let east_of_dateline = unproject(size + 100.0, size / 2.0, 5);
        assert!(east_of_dateline.lng > -180.0 && east_of_dateline.lng < 0.0);

        let west_of_origin = unproject(-100.0, size / 2.0, 5);
        assert!(west_of_origin.lng > 0.0 && west_of_origin.lng < 180.0);
    }

    #[test]
    fn clamp_zoom_stays_in_pyramid() {
        assert_eq!(clamp_zoom(-3), MIN_ZOOM);
        assert_eq!(clamp_zoom(7), 7);
        assert_eq!(clamp_zoom(42), MAX_ZOOM);
    }
}
