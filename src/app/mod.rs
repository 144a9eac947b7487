// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the map, the search
//! bar, and the details form.
//!
//! The `App` struct owns the shared pieces of state (provider, API key,
//! selected coordinate, resolved details, loading flag) and translates
//! component events into side effects like tile downloads, debounce timers,
//! and geocoding requests. This file intentionally keeps policy decisions
//! (window sizing, provider switching, the stale-response guard) close to
//! the main update loop so it is easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::geo::{Coordinates, LocationDetails, MapProvider};
use crate::i18n::fluent::I18n;
use crate::map::TileCacheConfig;
use crate::net;
use crate::search::SearchState;
use crate::ui::map_view;
use iced::{window, Element, Subscription, Task, Theme};
use serde::Serialize;
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.2;

/// Root Iced application state that bridges the UI components, the HTTP
/// clients, and localization.
pub struct App {
    pub i18n: I18n,
    client: reqwest::Client,
    provider: MapProvider,
    /// Google Maps API key; empty means the Google surfaces are disabled.
    api_key: String,
    /// Currently selected location, if any.
    coordinates: Option<Coordinates>,
    /// Reverse-geocoded fields for the selection. Empty while unresolved.
    details: LocationDetails,
    /// Whether the newest reverse geocode request is still in flight.
    is_loading: bool,
    /// Bumped per selection; stamps geocode requests so a slow response can
    /// never overwrite the details of a newer click.
    geocode_seq: u64,
    /// Shared spinner angle in radians, advanced by `Message::Tick`.
    spinner_rotation: f32,
    map: map_view::State,
    search: SearchState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("provider", &self.provider)
            .field("coordinates", &self.coordinates)
            .field("is_loading", &self.is_loading)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let provider = MapProvider::default();
        Self {
            i18n: I18n::default(),
            client: net::build_client().unwrap_or_else(|error| {
                log::warn!("Falling back to a plain HTTP client: {error}");
                reqwest::Client::new()
            }),
            provider,
            api_key: String::new(),
            coordinates: None,
            details: LocationDetails::default(),
            is_loading: false,
            geocode_seq: 0,
            spinner_rotation: 0.0,
            map: map_view::State::new(provider, TileCacheConfig::default()),
            search: SearchState::new(),
        }
    }
}

/// Payload logged by the Submit action and mirrored in the sidebar's JSON
/// preview pane.
#[derive(Debug, Serialize)]
struct Submission<'a> {
    provider: &'static str,
    coordinates: Coordinates,
    address: &'a str,
    suburb: &'a str,
    city: &'a str,
}

impl App {
    /// Initializes application state from the config file and the `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            log::warn!("Could not read the config file, using defaults: {error}");
            config::Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        if let Some(key) = flags.google_key {
            app.api_key = key;
        }
        if let Some(tiles) = config.tile_cache_tiles {
            app.map = map_view::State::new(app.provider, TileCacheConfig::new(tiles));
        }

        // The first tile downloads start once the canvas reports its
        // viewport size, so there is nothing to kick off here.
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_loading, self.search.is_searching())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Map(map_message) => update::handle_map_message(self, map_message),
            Message::Search(search_message) => update::handle_search_message(self, search_message),
            Message::Form(form_message) => update::handle_form_message(self, form_message),
            Message::GeocodeResolved { seq, result } => {
                update::handle_geocode_resolved(self, seq, result)
            }
            Message::Tick(_instant) => {
                // Only runs while a spinner is visible; the subscription is
                // dropped as soon as nothing is loading.
                self.spinner_rotation += SPINNER_SPEED;
                if self.spinner_rotation > std::f32::consts::TAU {
                    self.spinner_rotation -= std::f32::consts::TAU;
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Whether the Google surfaces (map, search) have a key to work with.
    fn google_ready(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// The submission payload for the current selection, if one exists.
    fn submission(&self) -> Option<Submission<'_>> {
        let coordinates = self.coordinates?;
        Some(Submission {
            provider: self.provider.id(),
            coordinates,
            address: &self.details.address,
            suburb: &self.details.suburb,
            city: &self.details.city,
        })
    }

    /// Pretty-printed JSON of the current submission for the preview pane.
    fn json_preview(&self) -> Option<String> {
        serde_json::to_string_pretty(&self.submission()?).ok()
    }
}
