// SPDX-License-Identifier: MPL-2.0
//! Details form component: provider picker, reverse-geocoded address
//! fields, and the submit/clear actions.
//!
//! The form itself is stateless. Everything it shows is owned by the
//! application and handed in through [`ViewContext`]; messages map
//! one-to-one onto events for the application to act on.

use crate::geo::{format_coordinate, Coordinates, LocationDetails, MapProvider};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Vertical;
use iced::font::{self, Weight};
use iced::widget::{button, container, pick_list, rule, scrollable, text, text_input, Column, Row};
use iced::{Color, Element, Font, Length};

/// Wrapper pairing a provider with its localized label for `pick_list`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderOption {
    provider: MapProvider,
    label: String,
}

impl ProviderOption {
    #[must_use]
    pub fn new(provider: MapProvider, i18n: &I18n) -> Self {
        Self {
            provider,
            label: i18n.tr(provider.i18n_key()),
        }
    }

    #[must_use]
    pub fn provider(&self) -> MapProvider {
        self.provider
    }

    #[must_use]
    pub fn all(i18n: &I18n) -> Vec<ProviderOption> {
        MapProvider::ALL
            .iter()
            .map(|&provider| Self::new(provider, i18n))
            .collect()
    }
}

impl std::fmt::Display for ProviderOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Messages emitted by the details form.
#[derive(Debug, Clone)]
pub enum Message {
    /// A provider was picked from the dropdown.
    ProviderSelected(ProviderOption),
    /// The Google API key input changed.
    ApiKeyChanged(String),
    /// Clear the current selection.
    ClearPressed,
    /// Submit the current selection.
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Switch the active map provider.
    ProviderChanged(MapProvider),
    /// Store the new Google API key.
    ApiKeyChanged(String),
    /// Drop the selected location and its details.
    Cleared,
    /// Serialize and submit the selected location.
    Submitted,
}

/// Process a details form message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ProviderSelected(option) => Event::ProviderChanged(option.provider),
        Message::ApiKeyChanged(key) => Event::ApiKeyChanged(key),
        Message::ClearPressed => Event::Cleared,
        Message::SubmitPressed => Event::Submitted,
    }
}

/// Contextual data needed to render the details form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub provider: MapProvider,
    pub api_key: &'a str,
    /// Currently selected location, if any.
    pub coordinates: Option<Coordinates>,
    /// Reverse-geocoded fields for the selection.
    pub details: &'a LocationDetails,
    /// Whether a reverse geocode is still in flight.
    pub is_loading: bool,
    /// Shared spinner angle, driven by the application tick.
    pub spinner_rotation: f32,
    /// Pretty-printed submission payload, when a location is selected.
    pub json_preview: Option<String>,
}

/// Render the details form sidebar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(text(ctx.i18n.tr("app-title")).size(typography::TITLE_MD))
        .push(build_provider_section(&ctx))
        .push(rule::horizontal(1))
        .push(build_details_section(&ctx))
        .push(build_footer_buttons(&ctx));

    if let Some(json) = &ctx.json_preview {
        content = content.push(build_json_preview(ctx.i18n, json.clone()));
    }

    content = content.push(
        text(ctx.i18n.tr(match ctx.provider {
            MapProvider::Osm => "footer-osm",
            MapProvider::Google => "footer-google",
        }))
        .size(typography::MICRO)
        .color(palette::GRAY_400),
    );

    let scrollable_content = scrollable(content).width(Length::Fixed(sizing::SIDEBAR_WIDTH));

    container(scrollable_content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

/// Provider picker plus the per-provider key input or ready hint.
fn build_provider_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut section = Column::new()
        .spacing(spacing::XS)
        .push(field_label(
            ctx.i18n.tr("form-provider-label"),
            palette::GRAY_400,
        ));

    let picker = pick_list(
        ProviderOption::all(ctx.i18n),
        Some(ProviderOption::new(ctx.provider, ctx.i18n)),
        Message::ProviderSelected,
    )
    .width(Length::Fill)
    .padding(spacing::XS);
    section = section.push(picker);

    match ctx.provider {
        MapProvider::Google => {
            // The key never leaves the machine, but it is still a secret:
            // a yellow callout plus a secure input.
            let key_box = Column::new()
                .spacing(spacing::XXS)
                .push(field_label(
                    ctx.i18n.tr("form-api-key-label"),
                    palette::WARNING_800,
                ))
                .push(
                    text_input(&ctx.i18n.tr("form-api-key-placeholder"), ctx.api_key)
                        .secure(true)
                        .on_input(Message::ApiKeyChanged)
                        .padding(spacing::XS)
                        .size(typography::BODY),
                );

            section = section.push(
                container(key_box)
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::container::warning_note),
            );
        }
        MapProvider::Osm => {
            section = section.push(
                container(
                    text(ctx.i18n.tr("form-osm-ready"))
                        .size(typography::CAPTION)
                        .color(palette::SUCCESS_600),
                )
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::success_note),
            );
        }
    }

    section.into()
}

/// Address fields, coordinates, and the loading indicator.
fn build_details_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            text(ctx.i18n.tr("form-details-title"))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_800)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::default()
                }),
        );

    if ctx.is_loading {
        header = header
            .push(
                AnimatedSpinner::new(palette::PRIMARY_600, ctx.spinner_rotation)
                    .with_size(sizing::ICON_SM)
                    .into_element(),
            )
            .push(
                text(ctx.i18n.tr("form-loading"))
                    .size(typography::CAPTION)
                    .color(palette::PRIMARY_600),
            );
    }

    let field_placeholder = ctx.i18n.tr("form-field-placeholder");
    let coordinate_placeholder = ctx.i18n.tr("form-coordinate-placeholder");

    let mut section = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(build_field(
            ctx.i18n.tr("form-address-label"),
            &ctx.details.address,
            ctx.i18n.tr("form-address-placeholder"),
        ))
        .push(build_field(
            ctx.i18n.tr("form-suburb-label"),
            &ctx.details.suburb,
            field_placeholder.clone(),
        ))
        .push(build_field(
            ctx.i18n.tr("form-city-label"),
            &ctx.details.city,
            field_placeholder,
        ))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(Column::new().width(Length::FillPortion(1)).push(
                    build_coordinate_field(
                        ctx.i18n.tr("form-latitude-label"),
                        &format_coordinate(ctx.coordinates.map(|c| c.lat)),
                        coordinate_placeholder.clone(),
                    ),
                ))
                .push(Column::new().width(Length::FillPortion(1)).push(
                    build_coordinate_field(
                        ctx.i18n.tr("form-longitude-label"),
                        &format_coordinate(ctx.coordinates.map(|c| c.lng)),
                        coordinate_placeholder,
                    ),
                )),
        );

    if ctx.coordinates.is_none() {
        section = section.push(
            text(ctx.i18n.tr("form-hint-click-map"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400)
                .font(Font {
                    style: font::Style::Italic,
                    ..Font::default()
                }),
        );
    }

    section.into()
}

/// Uppercase caption label rendered above a field.
fn field_label<'a>(label: String, color: Color) -> Element<'a, Message> {
    text(label.to_uppercase())
        .size(typography::CAPTION)
        .color(color)
        .into()
}

/// One labeled read-only field. Inputs without an `on_input` handler render
/// in the theme's disabled style, which is exactly the look we want.
fn build_field<'a>(label: String, value: &str, placeholder: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(field_label(label, palette::GRAY_500))
        .push(
            text_input(&placeholder, value)
                .padding(spacing::XS)
                .size(typography::BODY),
        )
        .into()
}

/// Like [`build_field`], but monospaced: coordinates line up digit for digit.
fn build_coordinate_field<'a>(
    label: String,
    value: &str,
    placeholder: String,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(field_label(label, palette::GRAY_400))
        .push(
            text_input(&placeholder, value)
                .padding(spacing::XS)
                .size(typography::BODY_SM)
                .font(Font::MONOSPACE),
        )
        .into()
}

/// Clear and submit buttons, disabled until a location is selected.
fn build_footer_buttons<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let has_selection = ctx.coordinates.is_some();

    let clear_btn = button(text(ctx.i18n.tr("form-clear")).size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::FillPortion(1))
        .style(styles::button::secondary);
    let clear_btn = if has_selection {
        clear_btn.on_press(Message::ClearPressed)
    } else {
        clear_btn
    };

    let submit_btn = button(text(ctx.i18n.tr("form-submit")).size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::FillPortion(1))
        .style(styles::button::primary);
    let submit_btn = if has_selection {
        submit_btn.on_press(Message::SubmitPressed)
    } else {
        submit_btn
    };

    Row::new()
        .spacing(spacing::XS)
        .push(clear_btn)
        .push(submit_btn)
        .into()
}

/// Pretty-printed payload preview in a monospace block.
fn build_json_preview<'a>(i18n: &I18n, json: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(field_label(i18n.tr("form-json-title"), palette::GRAY_400))
        .push(
            container(text(json).size(typography::CAPTION).font(Font::MONOSPACE))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::code_block),
        )
        .into()
}
