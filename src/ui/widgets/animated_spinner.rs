// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, LineCap, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

/// Fraction of the full circle covered by the ring. The remaining quarter
/// stays open so the rotation is visible.
const SWEEP: f32 = 1.5 * PI;

/// Indeterminate progress ring: a three-quarter circle whose gap spins with
/// the `rotation` angle supplied by the caller on every animation tick.
pub struct AnimatedSpinner {
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new animated spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_MD,
        }
    }

    /// Overrides the rendered diameter (defaults to `sizing::ICON_MD`).
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Stroke width scaled to the spinner diameter so small inline spinners
    /// keep a visible ring.
    fn stroke_width(&self) -> f32 {
        (self.size / 8.0).clamp(2.0, 3.0)
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // The geometry changes every tick, so there is nothing to cache.
        let mut frame = Frame::new(renderer, bounds.size());

        let center = frame.center();
        let stroke_width = self.stroke_width();
        let radius = frame.width().min(frame.height()) / 2.0 - stroke_width;

        // Start at twelve o'clock, then let the supplied rotation carry the
        // gap around the ring.
        let start = self.rotation - FRAC_PI_2;

        let mut ring = path::Builder::new();
        ring.arc(path::Arc {
            center,
            radius,
            start_angle: Radians(start),
            end_angle: Radians(start + SWEEP),
        });

        frame.stroke(
            &ring.build(),
            Stroke::default()
                .with_width(stroke_width)
                .with_color(self.color)
                .with_line_cap(LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
