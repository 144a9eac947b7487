// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component events come back here and are translated into state changes
//! and async side effects: tile downloads, debounce timers, geocoding and
//! place search requests. Every request class is stamped (geocode sequence,
//! debounce generation) so stale completions can be recognized and dropped.

use super::{App, Message};
use crate::error::Result;
use crate::geo::{Coordinates, LocationDetails, MapProvider, SELECTION_ZOOM};
use crate::map::{tiles, TileId};
use crate::ui::details_form;
use crate::ui::map_view;
use crate::ui::search_bar;
use crate::{geocode, search};
use iced::Task;

/// Handles map component messages and their follow-up effects.
pub fn handle_map_message(app: &mut App, message: map_view::Message) -> Task<Message> {
    match map_view::update(&mut app.map, message) {
        map_view::Event::None => Task::none(),
        map_view::Event::FetchTiles(needed) => fetch_tiles(app, needed),
        map_view::Event::LocationPicked(coord) => {
            // A click on the map is outside interaction for the dropdown
            app.search.close_dropdown();
            select_location(app, coord)
        }
    }
}

/// Handles search bar messages: debounce timers, provider queries, and the
/// selection follow-ups.
pub fn handle_search_message(app: &mut App, message: search_bar::Message) -> Task<Message> {
    match search_bar::update(&mut app.search, message) {
        search_bar::Event::None => Task::none(),
        search_bar::Event::StartDebounce { generation } => {
            Task::perform(tokio::time::sleep(search::DEBOUNCE), move |()| {
                Message::Search(search_bar::Message::DebounceElapsed(generation))
            })
        }
        search_bar::Event::Search { generation, query } => start_search(app, generation, query),
        search_bar::Event::LocationSelected(coord) => {
            let needed = app.map.jump_to(coord, SELECTION_ZOOM);
            let tile_task = fetch_tiles(app, needed);
            let geocode_task = select_location(app, coord);
            Task::batch([tile_task, geocode_task])
        }
        search_bar::Event::FetchDetails { place_id } => start_details_lookup(app, place_id),
    }
}

/// Handles details form messages.
pub fn handle_form_message(app: &mut App, message: details_form::Message) -> Task<Message> {
    match details_form::update(message) {
        details_form::Event::ProviderChanged(provider) => {
            app.provider = provider;
            let needed = app.map.set_provider(provider);
            fetch_tiles(app, needed)
        }
        details_form::Event::ApiKeyChanged(key) => {
            app.api_key = key;
            Task::none()
        }
        details_form::Event::Cleared => {
            app.coordinates = None;
            app.details = LocationDetails::default();
            app.is_loading = false;
            // Orphan any geocode still in flight so its completion cannot
            // repopulate the form after the clear
            app.geocode_seq += 1;
            app.map.invalidate();
            Task::none()
        }
        details_form::Event::Submitted => {
            if let Some(json) = app.json_preview() {
                log::info!("Submitted location:\n{json}");
            }
            Task::none()
        }
    }
}

/// Applies a finished reverse geocode, unless a newer selection superseded
/// the request that produced it.
pub fn handle_geocode_resolved(
    app: &mut App,
    seq: u64,
    result: Result<Option<LocationDetails>>,
) -> Task<Message> {
    if seq != app.geocode_seq {
        log::debug!(
            "Discarding geocode completion {seq}, newest request is {}",
            app.geocode_seq
        );
        return Task::none();
    }

    app.is_loading = false;
    app.details = match result {
        Ok(Some(details)) => details,
        Ok(None) => {
            log::debug!("Reverse geocode had no result for {:?}", app.coordinates);
            LocationDetails::default()
        }
        Err(error) => {
            log::warn!("Reverse geocode failed: {error}");
            LocationDetails::default()
        }
    };
    Task::none()
}

/// The central selection flow, shared by map clicks and search selections:
/// remember the coordinate, drop the old details, and start a
/// sequence-stamped reverse geocode.
fn select_location(app: &mut App, coord: Coordinates) -> Task<Message> {
    app.coordinates = Some(coord);
    app.details = LocationDetails::default();
    app.is_loading = true;
    app.geocode_seq += 1;
    // The marker moved, the canvas needs a redraw
    app.map.invalidate();

    let seq = app.geocode_seq;
    let client = app.client.clone();
    let provider = app.provider;
    let api_key = app.api_key.clone();
    Task::perform(
        async move { geocode::reverse_geocode(&client, provider, &api_key, coord).await },
        move |result| Message::GeocodeResolved { seq, result },
    )
}

/// Spawns one download task per missing tile.
fn fetch_tiles(app: &App, needed: Vec<TileId>) -> Task<Message> {
    let provider = app.map.provider();
    Task::batch(needed.into_iter().map(|tile| {
        Task::perform(
            tiles::fetch(app.client.clone(), provider, tile),
            |(provider, tile, result)| {
                Message::Map(map_view::Message::TileFetched {
                    provider,
                    tile,
                    result,
                })
            },
        )
    }))
}

/// Fires the provider search for a debounced query.
fn start_search(app: &mut App, generation: u64, query: String) -> Task<Message> {
    let client = app.client.clone();
    match app.provider {
        MapProvider::Osm => Task::perform(
            async move { search::nominatim::search(&client, &query).await },
            move |result| {
                Message::Search(search_bar::Message::ResultsReceived { generation, result })
            },
        ),
        MapProvider::Google => {
            if !app.google_ready() {
                // The provider can switch to Google while a timer armed on
                // the OSM side is pending; without a key that timer must
                // settle without firing a request.
                app.search.apply_failure(generation);
                return Task::none();
            }
            let api_key = app.api_key.clone();
            Task::perform(
                async move { search::google::autocomplete(&client, &api_key, &query).await },
                move |result| {
                    Message::Search(search_bar::Message::ResultsReceived { generation, result })
                },
            )
        }
    }
}

/// Resolves a chosen Google prediction to its coordinate.
fn start_details_lookup(app: &App, place_id: String) -> Task<Message> {
    let client = app.client.clone();
    let api_key = app.api_key.clone();
    Task::perform(
        async move { search::google::details(&client, &api_key, &place_id).await },
        |result| Message::Search(search_bar::Message::DetailsResolved { result }),
    )
}
