// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the single-screen layout: details sidebar on the left, the map
//! pane filling the rest, and the search bar floating top-center over the
//! map.

use super::{App, Message};
use crate::ui::design_tokens::spacing;
use crate::ui::details_form;
use crate::ui::map_view;
use crate::ui::search_bar;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Container, Row, Stack};
use iced::{Element, Length};

/// Renders the application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let sidebar = details_form::view(details_form::ViewContext {
        i18n: &app.i18n,
        provider: app.provider,
        api_key: &app.api_key,
        coordinates: app.coordinates,
        details: &app.details,
        is_loading: app.is_loading,
        spinner_rotation: app.spinner_rotation,
        json_preview: app.json_preview(),
    })
    .map(Message::Form);

    let map = map_view::view(map_view::ViewContext {
        state: &app.map,
        i18n: &app.i18n,
        marker: app.coordinates,
        google_ready: app.google_ready(),
    })
    .map(Message::Map);

    let search = search_bar::view(search_bar::ViewContext {
        state: &app.search,
        i18n: &app.i18n,
        provider: app.provider,
        google_ready: app.google_ready(),
        spinner_rotation: app.spinner_rotation,
    })
    .map(Message::Search);

    // The search bar floats over the map; empty overlay space passes
    // pointer events through to the canvas below.
    let map_pane = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(map)
        .push(
            Container::new(search)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Top),
        );

    Row::new()
        .push(sidebar)
        .push(map_pane)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
