// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are always routed. The tick clock only runs while the
//! overlay has a fade or hide pending, or while the player is playing.

use super::Message;
use crate::domain::ui::TickInterval;
use crate::ui::overlay_view;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};

/// Keyboard shortcuts of the demo.
///
/// - `Space` toggles playback
/// - `E` simulates a playback error
/// - `C` simulates a cast error
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };
        match key.as_ref() {
            Key::Named(Named::Space) => {
                Some(Message::Overlay(overlay_view::Message::TogglePlayback))
            }
            Key::Character("e") => Some(Message::SimulateError),
            Key::Character("c") => Some(Message::SimulateCastError),
            _ => None,
        }
    })
}

/// Periodic tick driving fades, the auto-hide timer and playback.
pub fn create_tick_subscription(interval: TickInterval) -> Subscription<Message> {
    time::every(interval.as_duration()).map(Message::Tick)
}
