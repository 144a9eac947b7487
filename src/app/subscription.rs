// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription that drives the spinner animations.
///
/// Active only while a geocode or a search request is in flight; the rest
/// of the time the application sits fully idle with no timer running.
pub fn create_tick_subscription(is_loading: bool, is_searching: bool) -> Subscription<Message> {
    if is_loading || is_searching {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
