// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning the map, and tells
//! a click apart from a drag by how far the cursor traveled.

use iced::Point;

/// Cursor travel below this many pixels still counts as a click.
pub const CLICK_THRESHOLD: f32 = 5.0;

/// Manages grab-and-drag state for the map canvas.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether movement has exceeded the click threshold
    pub is_dragging: bool,

    /// Position where the pointer went down
    pub start_position: Option<Point>,

    /// Camera center in world pixels when the press happened
    pub start_center: Option<(f64, f64)>,
}

impl DragState {
    /// Starts tracking a press at `position` with the camera at `center`.
    pub fn press(&mut self, position: Point, center: (f64, f64)) {
        self.is_dragging = false;
        self.start_position = Some(position);
        self.start_center = Some(center);
    }

    /// Stops tracking and resets all state.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_center = None;
    }

    /// Whether a press is being tracked (dragging or not yet decided).
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.start_position.is_some()
    }

    /// Whether releasing now should count as a click rather than a drag end.
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.is_pressed() && !self.is_dragging
    }

    /// Calculates the new camera center in world pixels for the current
    /// cursor position.
    ///
    /// Returns `None` until the cursor has traveled past [`CLICK_THRESHOLD`];
    /// after that the press is committed as a drag and every call yields a
    /// center. Content moves opposite to the cursor: dragging right pans the
    /// world left.
    pub fn center_for(&mut self, current_position: Point) -> Option<(f64, f64)> {
        let start_pos = self.start_position?;
        let (start_x, start_y) = self.start_center?;

        if !self.is_dragging && start_pos.distance(current_position) < CLICK_THRESHOLD {
            return None;
        }
        self.is_dragging = true;

        let delta_x = f64::from(current_position.x - start_pos.x);
        let delta_y = f64::from(current_position.y - start_pos.y);

        Some((start_x - delta_x, start_y - delta_y))
    }
}
