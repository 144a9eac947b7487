// SPDX-License-Identifier: MPL-2.0
//! Search bar component floating over the map.
//!
//! Wraps the debounced [`SearchState`] machine: keystrokes arm timers, an
//! unchallenged timer asks the application to run the provider search, and
//! responses flow back in as messages. Selecting a dropdown entry either
//! yields a coordinate directly or asks for a Google details lookup first.

use crate::error::Result;
use crate::geo::{Coordinates, MapProvider};
use crate::i18n::fluent::I18n;
use crate::search::{short_name, EditOutcome, SearchResult, SearchState, Selection};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Border, Color, Element, Font, Length, Padding, Theme};

/// Messages emitted by the search bar.
#[derive(Debug, Clone)]
pub enum Message {
    /// The input text changed.
    QueryChanged(String),
    /// A debounce timer stamped with this generation elapsed.
    DebounceElapsed(u64),
    /// The search request for this generation completed.
    ResultsReceived {
        generation: u64,
        result: Result<Vec<SearchResult>>,
    },
    /// A dropdown entry was clicked.
    ResultChosen(usize),
    /// The Google details lookup for a chosen prediction completed.
    DetailsResolved {
        result: Result<Option<Coordinates>>,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// No action needed.
    None,
    /// Start a debounce timer stamped with this generation.
    StartDebounce { generation: u64 },
    /// The debounce elapsed unchallenged: run the provider search.
    Search { generation: u64, query: String },
    /// A selection resolved to a coordinate; treat it like a map pick.
    LocationSelected(Coordinates),
    /// A Google prediction needs its coordinate looked up.
    FetchDetails { place_id: String },
}

/// Process a search bar message and return the corresponding event.
pub fn update(state: &mut SearchState, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => match state.edit(query) {
            EditOutcome::Schedule(generation) => Event::StartDebounce { generation },
            EditOutcome::Cleared => Event::None,
        },
        Message::DebounceElapsed(generation) => match state.debounce_elapsed(generation) {
            Some(query) => {
                state.mark_fired(generation);
                Event::Search { generation, query }
            }
            None => Event::None,
        },
        Message::ResultsReceived { generation, result } => {
            match result {
                Ok(results) => {
                    if !state.apply_results(generation, results) {
                        log::debug!("Discarded stale search response (generation {generation})");
                    }
                }
                Err(error) => {
                    state.apply_failure(generation);
                    log::warn!("Place search failed: {error}");
                }
            }
            Event::None
        }
        Message::ResultChosen(index) => match state.select(index) {
            Some(Selection::Resolved(coordinates)) => Event::LocationSelected(coordinates),
            Some(Selection::NeedsDetails { place_id }) => Event::FetchDetails { place_id },
            None => Event::None,
        },
        Message::DetailsResolved { result } => match result {
            Ok(Some(coordinates)) => Event::LocationSelected(coordinates),
            Ok(None) => {
                log::debug!("Selected place had no geometry");
                Event::None
            }
            Err(error) => {
                log::warn!("Place details lookup failed: {error}");
                Event::None
            }
        },
    }
}

/// Contextual data needed to render the search bar.
pub struct ViewContext<'a> {
    pub state: &'a SearchState,
    pub i18n: &'a I18n,
    pub provider: MapProvider,
    /// Whether the Google backend is usable (an API key is present).
    pub google_ready: bool,
    /// Shared spinner angle, driven by the application tick.
    pub spinner_rotation: f32,
}

/// Render the search input with its results dropdown.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let enabled = ctx.provider != MapProvider::Google || ctx.google_ready;

    let placeholder = match (ctx.provider, ctx.google_ready) {
        (MapProvider::Osm, _) => ctx.i18n.tr("search-placeholder-osm"),
        (MapProvider::Google, true) => ctx.i18n.tr("search-placeholder-google"),
        (MapProvider::Google, false) => ctx.i18n.tr("search-placeholder-google-disabled"),
    };

    let mut input = text_input(&placeholder, &ctx.state.query)
        .padding([spacing::SM, spacing::MD])
        .size(typography::BODY)
        .width(Length::Fill)
        .style(search_input);
    if enabled {
        input = input.on_input(Message::QueryChanged);
    }

    let mut bar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input);
    if ctx.state.is_searching() {
        bar = bar.push(
            AnimatedSpinner::new(palette::SUCCESS_500, ctx.spinner_rotation)
                .with_size(sizing::ICON_SM)
                .into_element(),
        );
    }

    // White pill carrying the drop shadow; the input itself stays borderless
    // until focused.
    let shell = container(bar)
        .width(Length::Fill)
        .padding(Padding::ZERO.right(spacing::SM))
        .style(styles::container::search_shell);

    let mut content = Column::new().spacing(spacing::XS).push(shell);
    if ctx.state.dropdown_open {
        content = content.push(build_dropdown(&ctx.state.results));
    }

    container(content)
        .width(Length::Fixed(sizing::SEARCH_BAR_WIDTH))
        .into()
}

/// Input style matching the shell: flat while idle, a green focus ring while
/// the field has keyboard focus, grayed out when the provider is unusable.
fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    use iced::widget::text_input::{Status, Style};

    let extended = theme.extended_palette();

    let focused = matches!(status, Status::Focused { .. });
    let disabled = matches!(status, Status::Disabled);

    Style {
        background: if disabled {
            palette::GRAY_100.into()
        } else {
            palette::WHITE.into()
        },
        border: Border {
            color: if focused {
                palette::SUCCESS_500
            } else {
                Color::TRANSPARENT
            },
            width: if focused { border::WIDTH_MD } else { 0.0 },
            radius: radius::LG.into(),
        },
        icon: palette::GRAY_400,
        placeholder: palette::GRAY_400,
        value: if disabled {
            palette::GRAY_400
        } else {
            palette::GRAY_900
        },
        selection: extended.primary.weak.color,
    }
}

/// Build the results list anchored under the input. Each row pairs the place
/// name with the full display name in smaller, muted type.
fn build_dropdown(results: &[SearchResult]) -> Element<'_, Message> {
    let mut list = Column::new();
    for (index, result) in results.iter().enumerate() {
        let title = text(short_name(&result.display_name).to_string())
            .size(typography::BODY_SM)
            .font(Font {
                weight: Weight::Medium,
                ..Font::default()
            });
        let detail = text(result.display_name.clone())
            .size(typography::CAPTION)
            .color(palette::GRAY_500);

        list = list.push(
            button(Column::new().push(title).push(detail))
                .on_press(Message::ResultChosen(index))
                .style(styles::button::menu_item)
                .width(Length::Fill)
                .padding([spacing::SM, spacing::MD]),
        );
    }

    container(list)
        .width(Length::Fill)
        .style(styles::container::dropdown)
        .padding(spacing::XXS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn result_named(id: &str, name: &str, coords: Option<Coordinates>) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            display_name: name.to_string(),
            coordinates: coords,
        }
    }

    #[test]
    fn typing_a_long_query_starts_a_debounce() {
        let mut state = SearchState::new();

        let event = update(&mut state, Message::QueryChanged("wellington".into()));

        assert!(matches!(event, Event::StartDebounce { generation: 1 }));
    }

    #[test]
    fn typing_a_short_query_does_nothing() {
        let mut state = SearchState::new();

        let event = update(&mut state, Message::QueryChanged("we".into()));

        assert!(matches!(event, Event::None));
    }

    #[test]
    fn current_timer_fires_the_search() {
        let mut state = SearchState::new();
        let Event::StartDebounce { generation } =
            update(&mut state, Message::QueryChanged("wellington".into()))
        else {
            panic!("expected StartDebounce");
        };

        let event = update(&mut state, Message::DebounceElapsed(generation));

        match event {
            Event::Search {
                generation: fired,
                query,
            } => {
                assert_eq!(fired, generation);
                assert_eq!(query, "wellington");
            }
            other => panic!("expected Search, got {other:?}"),
        }
        assert!(state.is_searching());
    }

    #[test]
    fn superseded_timer_fires_nothing() {
        let mut state = SearchState::new();
        let Event::StartDebounce { generation: old } =
            update(&mut state, Message::QueryChanged("auckland".into()))
        else {
            panic!("expected StartDebounce");
        };
        let _ = update(&mut state, Message::QueryChanged("auckland cbd".into()));

        let event = update(&mut state, Message::DebounceElapsed(old));

        assert!(matches!(event, Event::None));
        assert!(!state.is_searching());
    }

    #[test]
    fn successful_results_open_the_dropdown() {
        let mut state = SearchState::new();
        let _ = update(&mut state, Message::QueryChanged("wellington".into()));
        let generation = state.generation();
        let _ = update(&mut state, Message::DebounceElapsed(generation));

        let generation = state.generation();
        let event = update(
            &mut state,
            Message::ResultsReceived {
                generation,
                result: Ok(vec![result_named("1", "Wellington, NZ", None)]),
            },
        );

        assert!(matches!(event, Event::None));
        assert!(state.dropdown_open);
        assert!(!state.is_searching());
    }

    #[test]
    fn failed_search_settles_quietly() {
        let mut state = SearchState::new();
        let _ = update(&mut state, Message::QueryChanged("wellington".into()));
        let generation = state.generation();
        let _ = update(&mut state, Message::DebounceElapsed(generation));

        let generation = state.generation();
        let event = update(
            &mut state,
            Message::ResultsReceived {
                generation,
                result: Err(Error::Http("timeout".into())),
            },
        );

        assert!(matches!(event, Event::None));
        assert!(!state.dropdown_open);
        assert!(!state.is_searching());
    }

    #[test]
    fn choosing_a_resolved_result_selects_the_location() {
        let mut state = SearchState::new();
        let _ = update(&mut state, Message::QueryChanged("wellington".into()));
        let generation = state.generation();
        let _ = update(&mut state, Message::DebounceElapsed(generation));
        let generation = state.generation();
        let _ = update(
            &mut state,
            Message::ResultsReceived {
                generation,
                result: Ok(vec![result_named(
                    "1",
                    "Wellington, NZ",
                    Some(Coordinates::new(-41.2865, 174.7762)),
                )]),
            },
        );

        let event = update(&mut state, Message::ResultChosen(0));

        match event {
            Event::LocationSelected(coordinates) => {
                assert_eq!(coordinates, Coordinates::new(-41.2865, 174.7762));
            }
            other => panic!("expected LocationSelected, got {other:?}"),
        }
    }

    #[test]
    fn choosing_a_prediction_requests_details() {
        let mut state = SearchState::new();
        let _ = update(&mut state, Message::QueryChanged("cathedral".into()));
        let generation = state.generation();
        let _ = update(&mut state, Message::DebounceElapsed(generation));
        let generation = state.generation();
        let _ = update(
            &mut state,
            Message::ResultsReceived {
                generation,
                result: Ok(vec![result_named("place-abc", "Cathedral Cove, Hahei", None)]),
            },
        );

        let event = update(&mut state, Message::ResultChosen(0));

        match event {
            Event::FetchDetails { place_id } => assert_eq!(place_id, "place-abc"),
            other => panic!("expected FetchDetails, got {other:?}"),
        }
    }

    #[test]
    fn resolved_details_select_the_location() {
        let mut state = SearchState::new();

        let event = update(
            &mut state,
            Message::DetailsResolved {
                result: Ok(Some(Coordinates::new(-36.8485, 174.7633))),
            },
        );

        assert!(matches!(event, Event::LocationSelected(_)));
    }

    #[test]
    fn details_without_geometry_are_dropped() {
        let mut state = SearchState::new();

        let event = update(&mut state, Message::DetailsResolved { result: Ok(None) });

        assert!(matches!(event, Event::None));
    }

    #[test]
    fn details_failure_is_dropped() {
        let mut state = SearchState::new();

        let event = update(
            &mut state,
            Message::DetailsResolved {
                result: Err(Error::Http("quota".into())),
            },
        );

        assert!(matches!(event, Event::None));
    }
}
