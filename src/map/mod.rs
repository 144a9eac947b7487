// SPDX-License-Identifier: MPL-2.0
//! Map camera and viewport math.
//!
//! A [`Camera`] is a geographic center plus an integer zoom level. All
//! screen math runs through [`crate::geo::mercator`] world pixels: the
//! camera center sits at the viewport midpoint, everything else is an
//! offset from there.

use crate::geo::{mercator, Coordinates, MapProvider};
use iced::{Point, Size};

pub mod tiles;

pub use tiles::{TileCache, TileCacheConfig, TileId};

/// Viewpoint over the web-mercator plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Geographic point at the viewport midpoint.
    pub center: Coordinates,
    /// Integer zoom level of the tile pyramid.
    pub zoom: u8,
}

/// Where one tile lands on screen. The same tile can appear more than once
/// when the world raster is narrower than the viewport at low zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub id: TileId,
    /// Top-left corner in viewport pixels.
    pub origin: Point,
}

impl Camera {
    #[must_use]
    pub fn new(center: Coordinates, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.min(mercator::MAX_ZOOM),
        }
    }

    /// The camera a provider's map starts at before any selection.
    #[must_use]
    pub fn start(provider: MapProvider) -> Self {
        let (center, zoom) = provider.start_camera();
        Self::new(center, zoom)
    }

    /// Screen position of a geographic point, in viewport pixels.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn to_screen(&self, coord: Coordinates, viewport: Size) -> Point {
        let (world_x, world_y) = mercator::project(coord, self.zoom);
        let (center_x, center_y) = mercator::project(self.center, self.zoom);

        Point::new(
            (f64::from(viewport.width) / 2.0 + world_x - center_x) as f32,
            (f64::from(viewport.height) / 2.0 + world_y - center_y) as f32,
        )
    }

    /// Geographic point under a viewport position.
    #[must_use]
    pub fn to_geo(&self, position: Point, viewport: Size) -> Coordinates {
        let (center_x, center_y) = mercator::project(self.center, self.zoom);
        let world_x = center_x + f64::from(position.x) - f64::from(viewport.width) / 2.0;
        let world_y = center_y + f64::from(position.y) - f64::from(viewport.height) / 2.0;

        mercator::unproject(world_x, world_y, self.zoom)
    }

    /// Moves the center, keeping the zoom level.
    pub fn recenter(&mut self, center: Coordinates) {
        self.center = center;
    }

    /// Moves the center and zoom in one step (search selection).
    pub fn jump_to(&mut self, center: Coordinates, zoom: u8) {
        self.center = center;
        self.zoom = zoom.min(mercator::MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = mercator::clamp_zoom(i16::from(self.zoom) + 1);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = mercator::clamp_zoom(i16::from(self.zoom) - 1);
    }

    /// Zooms by `steps` levels while keeping the geographic point under
    /// `focus` fixed on screen (mouse-wheel zoom).
    pub fn zoom_about(&mut self, focus: Point, viewport: Size, steps: i16) {
        let target = mercator::clamp_zoom(i16::from(self.zoom) + steps);
        if target == self.zoom {
            return;
        }

        let anchor = self.to_geo(focus, viewport);
        self.zoom = target;

        // Re-center so the anchor lands back under the cursor.
        let (anchor_x, anchor_y) = mercator::project(anchor, self.zoom);
        let world_x = anchor_x - (f64::from(focus.x) - f64::from(viewport.width) / 2.0);
        let world_y = anchor_y - (f64::from(focus.y) - f64::from(viewport.height) / 2.0);
        self.center = mercator::unproject(world_x, world_y, self.zoom);
    }

    /// Tiles whose rasters intersect the viewport, deduplicated. This is
    /// the fetch list; drawing goes through [`Self::tile_placements`].
    #[must_use]
    pub fn visible_tiles(&self, viewport: Size) -> Vec<TileId> {
        let mut ids: Vec<TileId> = self
            .tile_placements(viewport)
            .into_iter()
            .map(|placement| placement.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Screen placement of every tile raster touching the viewport,
    /// including wrap-around copies left and right of the antimeridian.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    #[must_use]
    pub fn tile_placements(&self, viewport: Size) -> Vec<TilePlacement> {
        let tiles_per_axis = i64::from(1u32 << u32::from(self.zoom));
        let (center_x, center_y) = mercator::project(self.center, self.zoom);
        let half_width = f64::from(viewport.width) / 2.0;
        let half_height = f64::from(viewport.height) / 2.0;

        let first_column = ((center_x - half_width) / mercator::TILE_SIZE).floor() as i64;
        let last_column = ((center_x + half_width) / mercator::TILE_SIZE).floor() as i64;
        let first_row = ((center_y - half_height) / mercator::TILE_SIZE).floor() as i64;
        let last_row = ((center_y + half_height) / mercator::TILE_SIZE).floor() as i64;

        let mut placements = Vec::new();
        for row in first_row..=last_row {
            // No vertical wrap: the mercator world ends at the polar cutoff.
            if !(0..tiles_per_axis).contains(&row) {
                continue;
            }
            for column in first_column..=last_column {
                let id = TileId::new(
                    self.zoom,
                    column.rem_euclid(tiles_per_axis) as u32,
                    row as u32,
                );
                let origin = Point::new(
                    (half_width + (column as f64) * mercator::TILE_SIZE - center_x) as f32,
                    (half_height + (row as f64) * mercator::TILE_SIZE - center_y) as f32,
                );
                placements.push(TilePlacement { id, origin });
            }
        }
        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    fn nz_camera() -> Camera {
        Camera::start(MapProvider::Osm)
    }

    #[test]
    fn start_cameras_match_provider_defaults() {
        let osm = Camera::start(MapProvider::Osm);
        assert_eq!(osm.zoom, 5);

        let google = Camera::start(MapProvider::Google);
        assert_eq!(google.zoom, 6);
    }

    #[test]
    fn new_clamps_zoom_to_pyramid_max() {
        let camera = Camera::new(Coordinates::new(0.0, 0.0), 40);
        assert_eq!(camera.zoom, mercator::MAX_ZOOM);
    }

    #[test]
    fn center_lands_at_viewport_midpoint() {
        let camera = nz_camera();
        let screen = camera.to_screen(camera.center, VIEWPORT);
        assert!((screen.x - 400.0).abs() < 0.001);
        assert!((screen.y - 300.0).abs() < 0.001);
    }

    #[test]
    fn screen_geo_round_trips() {
        let camera = Camera::new(Coordinates::new(-41.2865, 174.7762), 12);
        let position = Point::new(137.0, 455.5);

        let geo = camera.to_geo(position, VIEWPORT);
        let back = camera.to_screen(geo, VIEWPORT);

        assert!((back.x - position.x).abs() < 0.01);
        assert!((back.y - position.y).abs() < 0.01);
    }

    #[test]
    fn zoom_about_keeps_the_cursor_point_fixed() {
        let mut camera = nz_camera();
        let focus = Point::new(120.0, 80.0);
        let anchor = camera.to_geo(focus, VIEWPORT);

        camera.zoom_about(focus, VIEWPORT, 1);
        assert_eq!(camera.zoom, 6);

        let back = camera.to_screen(anchor, VIEWPORT);
        assert!((back.x - focus.x).abs() < 0.5);
        assert!((back.y - focus.y).abs() < 0.5);
    }

    #[test]
    fn zoom_about_clamps_at_the_pyramid_edges() {
        let mut camera = Camera::new(Coordinates::new(-41.0, 174.0), mercator::MAX_ZOOM);
        let before = camera.center;

        camera.zoom_about(Point::new(10.0, 10.0), VIEWPORT, 3);
        assert_eq!(camera.zoom, mercator::MAX_ZOOM);
        assert_eq!(camera.center, before, "no-op zoom must not drift");
    }

    #[test]
    fn zoom_buttons_step_one_level() {
        let mut camera = nz_camera();
        camera.zoom_in();
        assert_eq!(camera.zoom, 6);
        camera.zoom_out();
        camera.zoom_out();
        assert_eq!(camera.zoom, 4);
    }

    #[test]
    fn visible_tiles_cover_the_viewport_and_stay_in_range() {
        let camera = nz_camera();
        let tiles = camera.visible_tiles(VIEWPORT);

        // 800x600 at z5 needs a 4-5 x 3-4 block of 256px tiles.
        assert!(tiles.len() >= 12 && tiles.len() <= 20, "got {}", tiles.len());
        for tile in &tiles {
            assert_eq!(tile.zoom, 5);
            assert!(tile.x < 32);
            assert!(tile.y < 32);
        }
    }

    #[test]
    fn visible_tiles_include_the_center_tile() {
        let camera = nz_camera();
        let (center_x, center_y) = mercator::project(camera.center, camera.zoom);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let center_tile = TileId::new(
            camera.zoom,
            (center_x / mercator::TILE_SIZE) as u32,
            (center_y / mercator::TILE_SIZE) as u32,
        );

        assert!(camera.visible_tiles(VIEWPORT).contains(&center_tile));
    }

    #[test]
    fn placements_wrap_across_the_antimeridian() {
        let camera = Camera::new(Coordinates::new(-43.9, 179.95), 5);
        let tiles = camera.visible_tiles(VIEWPORT);

        assert!(tiles.iter().any(|t| t.x == 31), "west of the dateline");
        assert!(tiles.iter().any(|t| t.x == 0), "east of the dateline");
    }

    #[test]
    fn low_zoom_dedups_wrap_copies() {
        let camera = Camera::new(Coordinates::new(0.0, 0.0), 0);

        let tiles = camera.visible_tiles(VIEWPORT);
        assert_eq!(tiles, vec![TileId::new(0, 0, 0)]);

        let placements = camera.tile_placements(VIEWPORT);
        assert!(placements.len() > 1, "wrap copies fill the wide viewport");
    }

    #[test]
    fn placement_origins_touch_the_viewport() {
        let camera = nz_camera();
        for placement in camera.tile_placements(VIEWPORT) {
            assert!(placement.origin.x > -256.5 && placement.origin.x < 800.5);
            assert!(placement.origin.y > -256.5 && placement.origin.y < 600.5);
        }
    }
}
