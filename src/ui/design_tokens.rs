// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Single source of truth for the application's visual constants, loosely
following the W3C Design Tokens format.

The color palette is lifted from Tailwind CSS's default scale: indigo for
the brand/primary range, gray for neutrals, green and red for semantic
accents. Hex values are noted next to each constant.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_atlas::ui::design_tokens::{palette, radius, spacing};

// Raw JSON preview surface
let code_bg = palette::GRAY_50;
let code_radius = radius::SM;

// Use the spacing scale
let padding = spacing::MD; // 16px
```

Tokens are deliberately interdependent (e.g. `spacing::MD == spacing::XS * 2`);
the compile-time block at the bottom keeps the relationships honest.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutrals
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1f2937
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // #6b7280
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9ca3af
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859); // #d1d5db
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // #e5e7eb
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // #f3f4f6
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984); // #f9fafb

    // Brand colors (indigo scale)
    pub const PRIMARY_500: Color = Color::from_rgb(0.388, 0.400, 0.945); // #6366f1
    pub const PRIMARY_600: Color = Color::from_rgb(0.310, 0.275, 0.898); // #4f46e5
    pub const PRIMARY_700: Color = Color::from_rgb(0.263, 0.220, 0.792); // #4338ca

    // Semantic colors
    pub const SUCCESS_50: Color = Color::from_rgb(0.941, 0.992, 0.957); // #f0fdf4
    pub const SUCCESS_100: Color = Color::from_rgb(0.863, 0.988, 0.906); // #dcfce7
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369); // #22c55e
    pub const SUCCESS_600: Color = Color::from_rgb(0.086, 0.639, 0.290); // #16a34a
    pub const WARNING_50: Color = Color::from_rgb(0.996, 0.988, 0.910); // #fefce8
    pub const WARNING_100: Color = Color::from_rgb(0.996, 0.976, 0.765); // #fef9c3
    pub const WARNING_800: Color = Color::from_rgb(0.522, 0.302, 0.055); // #854d0e
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // #ef4444
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    /// Translucent chips floating over the map (tile attribution)
    pub const SURFACE: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    //! Layout rhythm built on a 4px base unit.

    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    // Component widths
    pub const SIDEBAR_WIDTH: f32 = 400.0;
    pub const SEARCH_BAR_WIDTH: f32 = 416.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for consistent text hierarchy:
    //! titles for headings, body for primary content, caption and
    //! micro for supporting text.

    /// App name in the sidebar header
    pub const TITLE_MD: f32 = 20.0;

    /// Section headings
    pub const TITLE_SM: f32 = 18.0;

    /// Emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Default size for inputs, buttons, and running text
    pub const BODY: f32 = 14.0;

    /// Dropdown titles and compact values
    pub const BODY_SM: f32 = 13.0;

    /// Field labels, hints, attribution
    pub const CAPTION: f32 = 12.0;

    /// Footer fine print
    pub const MICRO: f32 = 10.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Hairline borders around fields and callouts
    pub const WIDTH_SM: f32 = 1.0;

    /// Focus rings
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color {
            a: 0.0,
            ..palette::BLACK
        },
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Subtle lift for inputs and small cards
    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.08,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    /// Floating surfaces (search bar, sidebar edge)
    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.12,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 16.0,
    };

    /// Popovers layered above everything else (results dropdown)
    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    // Typography validation
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
    assert!(typography::CAPTION > typography::MICRO);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Radius validation
    assert!(radius::LG > radius::MD);
    assert!(radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn neutral_scale_darkens_monotonically() {
        let grays = [
            palette::GRAY_50,
            palette::GRAY_100,
            palette::GRAY_200,
            palette::GRAY_300,
            palette::GRAY_400,
            palette::GRAY_500,
            palette::GRAY_700,
            palette::GRAY_800,
            palette::GRAY_900,
        ];

        for pair in grays.windows(2) {
            let luma = |c: &iced::Color| c.r + c.g + c.b;
            assert!(luma(&pair[1]) < luma(&pair[0]));
        }
    }
}
