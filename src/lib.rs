// SPDX-License-Identifier: MPL-2.0
//! `iced_atlas` is a map viewer with reverse geocoding built with the Iced GUI framework.
//!
//! Click anywhere on the map to look up the address of that spot, or search
//! for a place by name. Tiles and geocoding come from OpenStreetMap or the
//! Google Maps platform, switchable at runtime. The crate demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/iced_atlas/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod geo;
pub mod geocode;
pub mod i18n;
pub mod map;
pub mod net;
pub mod search;
pub mod ui;

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
