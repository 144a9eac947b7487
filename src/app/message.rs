// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::geo::LocationDetails;
use crate::ui::details_form;
use crate::ui::map_view;
use crate::ui::search_bar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Map(map_view::Message),
    Search(search_bar::Message),
    Form(details_form::Message),
    /// A reverse geocode lookup finished. `seq` identifies the click that
    /// started it; completions for anything but the newest click are
    /// discarded.
    GeocodeResolved {
        seq: u64,
        result: Result<Option<LocationDetails>, Error>,
    },
    Tick(Instant), // Periodic tick driving the spinners
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional Google Maps API key. Falls back to the
    /// `GOOGLE_MAPS_API_KEY` environment variable when absent.
    pub google_key: Option<String>,
}
