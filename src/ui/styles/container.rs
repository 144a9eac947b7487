// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sidebar surface holding the details form.
///
/// The color is derived from the active Iced `Theme` background so the panel
/// stays readable in both light and dark modes without hard-coding colors.
pub fn sidebar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// White pill behind the search input; carries the floating drop shadow.
pub fn search_shell(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Elevated list anchored below the search input.
pub fn dropdown(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Translucent chip shown over the map for tile attribution.
pub fn attribution(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Soft green callout confirming that a provider needs no configuration.
pub fn success_note(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SUCCESS_50)),
        border: Border {
            color: palette::SUCCESS_100,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Soft yellow callout around the API key input.
pub fn warning_note(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WARNING_50)),
        border: Border {
            color: palette::WARNING_100,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Light panel behind the serialized location preview.
pub fn code_block(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_50)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Full-pane notice shown in place of the map when it cannot render.
pub fn placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        ..Default::default()
    }
}
