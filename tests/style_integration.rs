// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_atlas::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_atlas::ui::styles::{button, container};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, Status::Active);
        let _ = button::secondary(&theme, Status::Active);
        let _ = button::menu_item(&theme, Status::Active);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Light;

        let _ = container::sidebar(&theme);
        let _ = container::search_shell(&theme);
        let _ = container::dropdown(&theme);
        let _ = container::attribution(&theme);
        let _ = container::success_note(&theme);
        let _ = container::warning_note(&theme);
        let _ = container::code_block(&theme);
        let _ = container::placeholder(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::SURFACE;

        // Sizing
        let _ = sizing::SIDEBAR_WIDTH;
    }

    #[test]
    fn attribution_surface_is_translucent() {
        let theme = Theme::Light;
        let style = container::attribution(&theme);

        let Some(Background::Color(color)) = style.background else {
            panic!("attribution chip needs a background");
        };
        assert!(color.a > 0.0 && color.a < 1.0);
    }
}
