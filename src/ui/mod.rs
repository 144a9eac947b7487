// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`map_view`] - Interactive slippy map with pan, zoom, and click-to-pick
//! - [`search_bar`] - Debounced place search with a results dropdown
//! - [`details_form`] - Provider picker, address fields, and submit actions
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod details_form;
pub mod map_view;
pub mod search_bar;
pub mod styles;
pub mod widgets;
