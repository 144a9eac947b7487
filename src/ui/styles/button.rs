// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

fn flat_border(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Default::default()
    }
}

/// Bouton primaire (action de validation).
///
/// Solid indigo fill that darkens on hover. Disabled buttons fall back to the
/// neutral scale so they read as inert rather than merely unfocused.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let background = match status {
        button::Status::Active => palette::PRIMARY_600,
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Disabled => {
            if is_light {
                palette::GRAY_100
            } else {
                palette::GRAY_700
            }
        }
    };

    let text_color = match status {
        button::Status::Disabled => palette::GRAY_400,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: flat_border(radius::MD),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for secondary actions (clear, cancel).
/// Adapts to light/dark theme while maintaining consistency.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (idle_bg, hover_bg, text_color, border_color) = if is_light {
        (
            palette::GRAY_100,
            palette::GRAY_200,
            palette::GRAY_700,
            palette::GRAY_300,
        )
    } else {
        (
            palette::GRAY_700,
            palette::GRAY_500,
            WHITE,
            palette::GRAY_500,
        )
    };

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => hover_bg,
        _ => idle_bg,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: match status {
            button::Status::Disabled => palette::GRAY_400,
            _ => text_color,
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Flat row style for entries in the search results dropdown.
/// Rows tint green on hover, echoing the search accent color.
pub fn menu_item(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette::SUCCESS_50))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::GRAY_900,
        border: flat_border(radius::SM),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let active = primary(&theme, button::Status::Active);
        let hovered = primary(&theme, button::Status::Hovered);

        assert_eq!(
            active.background,
            Some(Background::Color(palette::PRIMARY_600))
        );
        assert_eq!(
            hovered.background,
            Some(Background::Color(palette::PRIMARY_700))
        );
        assert_eq!(active.text_color, WHITE);
    }

    #[test]
    fn disabled_primary_grays_out() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Disabled);

        assert_eq!(style.text_color, palette::GRAY_400);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_100)));
    }

    #[test]
    fn secondary_keeps_neutral_border_on_hover() {
        let theme = Theme::Light;
        let idle = secondary(&theme, button::Status::Active);
        let hover = secondary(&theme, button::Status::Hovered);

        assert_eq!(idle.border.color, palette::GRAY_300);
        assert_eq!(hover.border.color, palette::GRAY_300);
        assert_eq!(hover.background, Some(Background::Color(palette::GRAY_200)));
    }

    #[test]
    fn menu_item_highlights_on_hover() {
        let theme = Theme::Light;
        let idle = menu_item(&theme, button::Status::Active);
        let hover = menu_item(&theme, button::Status::Hovered);

        assert_eq!(idle.background, None);
        assert_eq!(
            hover.background,
            Some(Background::Color(palette::SUCCESS_50))
        );
    }
}
