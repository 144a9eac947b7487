// SPDX-License-Identifier: MPL-2.0
//! Map canvas: draws the visible tiles and turns raw pointer input into
//! pan, zoom and pick messages.
#![allow(clippy::cast_possible_truncation)]

use super::drag::DragState;
use super::Message;
use crate::geo::mercator::{self, TILE_SIZE};
use crate::geo::{Coordinates, MapProvider};
use crate::map::{Camera, TileCache};
use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{mouse, Point, Rectangle, Renderer, Size, Theme};

/// Pin height from tip to head center, in pixels.
const MARKER_HEIGHT: f32 = 22.0;
/// Radius of the pin head.
const MARKER_RADIUS: f32 = 8.0;

/// Everything one frame of the map needs, borrowed from the component state.
pub struct MapCanvas<'a> {
    pub camera: &'a Camera,
    pub tiles: &'a TileCache,
    pub cache: &'a canvas::Cache,
    pub provider: MapProvider,
    pub marker: Option<Coordinates>,
}

/// Interaction state Iced keeps for the canvas between frames.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pub drag: DragState,
    /// Last viewport size published to the application.
    reported_size: Option<Size>,
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            // The first draw and every resize land here; report the viewport
            // so the tiles covering it can be requested.
            iced::Event::Window(iced::window::Event::RedrawRequested(_)) => {
                let size = bounds.size();
                if state.reported_size != Some(size) {
                    state.reported_size = Some(size);
                    return Some(Action::publish(Message::ViewportResized(size)));
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(cursor_position) = cursor.position_in(bounds) {
                    let center = mercator::project(self.camera.center, self.camera.zoom);
                    state.drag.press(cursor_position, center);
                    return Some(Action::capture());
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                if !state.drag.is_pressed() {
                    return None;
                }
                // Cursor left the canvas mid-press: abandon the drag
                let Some(cursor_position) = cursor.position_in(bounds) else {
                    state.drag.stop();
                    return None;
                };
                if let Some((world_x, world_y)) = state.drag.center_for(cursor_position) {
                    let mut camera = *self.camera;
                    camera.recenter(mercator::unproject(world_x, world_y, camera.zoom));
                    return Some(Action::publish(Message::Panned(camera)).and_capture());
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                let was_click = state.drag.is_click();
                state.drag.stop();
                if was_click {
                    if let Some(cursor_position) = cursor.position_in(bounds) {
                        let picked = self.camera.to_geo(cursor_position, bounds.size());
                        return Some(Action::publish(Message::Clicked(picked)).and_capture());
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                state.drag.stop();
            }
            iced::Event::Mouse(iced::mouse::Event::WheelScrolled { delta }) => {
                if let Some(cursor_position) = cursor.position_in(bounds) {
                    let steps = scroll_steps(delta);
                    if steps != 0 {
                        let mut camera = *self.camera;
                        camera.zoom_about(cursor_position, bounds.size(), steps);
                        if camera.zoom != self.camera.zoom {
                            return Some(Action::publish(Message::Zoomed(camera)).and_capture());
                        }
                    }
                }
            }
            iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => {
                // Only when the pointer is over the map, so typing in the
                // form or search input never zooms.
                if cursor.position_in(bounds).is_some() {
                    let mut camera = *self.camera;
                    match key {
                        iced::keyboard::Key::Character(c)
                            if c.as_str() == "+" || c.as_str() == "=" =>
                        {
                            camera.zoom_in();
                        }
                        iced::keyboard::Key::Character(c) if c.as_str() == "-" => {
                            camera.zoom_out();
                        }
                        _ => return None,
                    }
                    if camera.zoom != self.camera.zoom {
                        return Some(Action::publish(Message::Zoomed(camera)).and_capture());
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            // Backdrop shows through until tiles arrive
            frame.fill_rectangle(Point::ORIGIN, frame.size(), palette::GRAY_100);

            let tile_size = Size::new(TILE_SIZE as f32, TILE_SIZE as f32);
            for placement in self.camera.tile_placements(frame.size()) {
                if let Some(handle) = self.tiles.peek(self.provider, placement.id) {
                    frame.draw_image(
                        Rectangle::new(placement.origin, tile_size),
                        canvas::Image::new(handle.clone()),
                    );
                }
            }

            if let Some(marker) = self.marker {
                draw_marker(frame, self.camera.to_screen(marker, frame.size()));
            }
        });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.drag.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Converts a scroll delta into whole zoom steps. Trackpads report pixel
/// deltas, mice report lines; both collapse to direction here.
fn scroll_steps(delta: &mouse::ScrollDelta) -> i16 {
    let amount = match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    };

    if amount > f32::EPSILON {
        1
    } else if amount < -f32::EPSILON {
        -1
    } else {
        0
    }
}

/// Classic teardrop pin: filled head with a small white core, tail
/// tapering down to the selected point.
fn draw_marker(frame: &mut canvas::Frame, position: Point) {
    let head = Point::new(position.x, position.y - MARKER_HEIGHT);

    let mut tail = canvas::path::Builder::new();
    tail.move_to(position);
    tail.line_to(Point::new(
        head.x - MARKER_RADIUS * 0.8,
        head.y + MARKER_RADIUS * 0.4,
    ));
    tail.line_to(Point::new(
        head.x + MARKER_RADIUS * 0.8,
        head.y + MARKER_RADIUS * 0.4,
    ));
    tail.close();

    frame.fill(&tail.build(), palette::ERROR_500);
    frame.fill(&Path::circle(head, MARKER_RADIUS), palette::ERROR_500);
    frame.fill(&Path::circle(head, MARKER_RADIUS * 0.4), palette::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_scroll_maps_to_single_steps() {
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }),
            1
        );
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Lines { x: 0.0, y: -3.0 }),
            -1
        );
    }

    #[test]
    fn pixel_scroll_maps_by_direction() {
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Pixels { x: 0.0, y: 240.0 }),
            1
        );
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Pixels { x: 0.0, y: -60.0 }),
            -1
        );
    }

    #[test]
    fn zero_scroll_is_ignored() {
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Lines { x: 1.0, y: 0.0 }),
            0
        );
    }
}
