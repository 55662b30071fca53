// SPDX-License-Identifier: MPL-2.0
//! Player collaborator interface.
//!
//! The overlay never talks to a playback engine directly. It consumes the
//! lifecycle events defined here through a scoped [`Subscription`] and issues
//! the few commands exposed by the [`Player`] trait.

mod events;
mod simulated;

pub use events::{EventBus, Subscription, SubscriptionId};
pub use simulated::SimulatedPlayer;

use crate::error::PlayerError;

/// Discriminant of a [`PlayerEvent`], used to filter subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerEventType {
    LoadStart,
    Error,
    CastEvent,
    Play,
    Playing,
    Pause,
    SourceChange,
    TimeUpdate,
}

/// Kind of cast event relayed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastEventType {
    ChromecastStateChange,
    AirplayStateChange,
    ChromecastError,
}

/// Error payload attached to a cast event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastError {
    pub error_code: String,
    pub description: String,
}

/// Event relayed from the casting integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastEvent {
    pub sub_type: CastEventType,
    pub error: Option<CastError>,
}

impl CastEvent {
    /// Creates a cast error event.
    pub fn chromecast_error(error_code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            sub_type: CastEventType::ChromecastError,
            error: Some(CastError {
                error_code: error_code.into(),
                description: description.into(),
            }),
        }
    }

    /// Normalizes a cast error into the shape used for playback errors.
    ///
    /// Returns `None` for non-error sub-types.
    #[must_use]
    pub fn player_error(&self) -> Option<PlayerError> {
        if self.sub_type != CastEventType::ChromecastError {
            return None;
        }
        Some(match &self.error {
            Some(err) => PlayerError::new(err.error_code.clone(), err.description.clone()),
            None => PlayerError::new("CAST_ERROR", "Chromecast error"),
        })
    }
}

/// Lifecycle event emitted by the player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    LoadStart,
    Error(PlayerError),
    CastEvent(CastEvent),
    Play,
    Playing,
    Pause,
    SourceChange,
    TimeUpdate { current_time: f64 },
}

impl PlayerEvent {
    /// Returns the discriminant used for subscription filtering.
    #[must_use]
    pub fn event_type(&self) -> PlayerEventType {
        match self {
            Self::LoadStart => PlayerEventType::LoadStart,
            Self::Error(_) => PlayerEventType::Error,
            Self::CastEvent(_) => PlayerEventType::CastEvent,
            Self::Play => PlayerEventType::Play,
            Self::Playing => PlayerEventType::Playing,
            Self::Pause => PlayerEventType::Pause,
            Self::SourceChange => PlayerEventType::SourceChange,
            Self::TimeUpdate { .. } => PlayerEventType::TimeUpdate,
        }
    }
}

/// Media source currently loaded in the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub uri: String,
}

impl Source {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// Commands and read-only state of the player collaborator.
pub trait Player {
    fn play(&mut self);
    fn pause(&mut self);
    fn paused(&self) -> bool;
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    fn source(&self) -> Option<&Source>;
    /// Registers interest in the given event types.
    ///
    /// Dropping the returned subscription unregisters it.
    fn subscribe(&mut self, types: &[PlayerEventType]) -> Subscription;
}
