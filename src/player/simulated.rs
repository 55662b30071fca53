// SPDX-License-Identifier: MPL-2.0
//! In-memory player used by the demo application and tests.
//!
//! It has no decoder; it only advances a clock and emits the same lifecycle
//! events a real engine would, in the same order.

use super::{CastEvent, EventBus, Player, PlayerEvent, PlayerEventType, Source, Subscription};
use crate::error::PlayerError;
use std::time::Duration;

#[derive(Debug)]
pub struct SimulatedPlayer {
    bus: EventBus,
    source: Option<Source>,
    paused: bool,
    current_time: f64,
    duration_secs: f64,
}

impl SimulatedPlayer {
    /// Creates an idle player whose sources last `duration_secs`.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            bus: EventBus::new(),
            source: None,
            paused: true,
            current_time: 0.0,
            duration_secs: duration_secs.max(0.0),
        }
    }

    /// Loads a new source: emits `SourceChange` then `LoadStart`.
    pub fn set_source(&mut self, source: Source) {
        self.source = Some(source);
        self.paused = true;
        self.current_time = 0.0;
        self.bus.emit(&PlayerEvent::SourceChange);
        self.bus.emit(&PlayerEvent::LoadStart);
    }

    /// Advances playback by `elapsed`, emitting `TimeUpdate` while playing.
    ///
    /// Reaching the end pauses the player.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused || self.source.is_none() {
            return;
        }
        self.current_time = (self.current_time + elapsed.as_secs_f64()).min(self.duration_secs);
        self.bus.emit(&PlayerEvent::TimeUpdate {
            current_time: self.current_time,
        });
        if self.current_time >= self.duration_secs {
            self.pause();
        }
    }

    /// Reports a playback failure.
    pub fn fail(&mut self, error: PlayerError) {
        self.paused = true;
        self.bus.emit(&PlayerEvent::Error(error));
    }

    /// Reports a failure of the cast receiver.
    pub fn cast_error(&mut self, error_code: impl Into<String>, description: impl Into<String>) {
        self.bus
            .emit(&PlayerEvent::CastEvent(CastEvent::chromecast_error(error_code, description)));
    }

    /// Total length of the current source in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Number of live subscriptions, mostly useful to check teardown.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.bus.listener_count()
    }
}

impl Player for SimulatedPlayer {
    fn play(&mut self) {
        if self.source.is_none() || !self.paused {
            return;
        }
        if self.current_time >= self.duration_secs {
            self.current_time = 0.0;
        }
        self.paused = false;
        self.bus.emit(&PlayerEvent::Play);
        self.bus.emit(&PlayerEvent::Playing);
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.bus.emit(&PlayerEvent::Pause);
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    fn subscribe(&mut self, types: &[PlayerEventType]) -> Subscription {
        self.bus.subscribe(types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PlayerEventType; 8] = [
        PlayerEventType::LoadStart,
        PlayerEventType::Error,
        PlayerEventType::CastEvent,
        PlayerEventType::Play,
        PlayerEventType::Playing,
        PlayerEventType::Pause,
        PlayerEventType::SourceChange,
        PlayerEventType::TimeUpdate,
    ];

    #[test]
    fn set_source_emits_source_change_then_load_start() {
        let mut player = SimulatedPlayer::new(10.0);
        let mut sub = player.subscribe(&ALL);
        player.set_source(Source::new("demo://clip"));
        assert_eq!(sub.drain(), vec![PlayerEvent::SourceChange, PlayerEvent::LoadStart]);
    }

    #[test]
    fn play_without_source_is_ignored() {
        let mut player = SimulatedPlayer::new(10.0);
        let mut sub = player.subscribe(&ALL);
        player.play();
        assert!(player.paused());
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn play_and_pause_emit_lifecycle_events() {
        let mut player = SimulatedPlayer::new(10.0);
        player.set_source(Source::new("demo://clip"));
        let mut sub = player.subscribe(&ALL);

        player.play();
        player.play();
        player.pause();
        player.pause();

        assert_eq!(
            sub.drain(),
            vec![PlayerEvent::Play, PlayerEvent::Playing, PlayerEvent::Pause]
        );
    }

    #[test]
    fn advance_stops_at_end_of_source() {
        let mut player = SimulatedPlayer::new(1.0);
        player.set_source(Source::new("demo://clip"));
        player.play();
        let mut sub = player.subscribe(&[PlayerEventType::TimeUpdate, PlayerEventType::Pause]);

        player.advance(Duration::from_millis(600));
        player.advance(Duration::from_millis(600));
        player.advance(Duration::from_millis(600));

        assert!(player.paused());
        assert!((player.current_time() - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            sub.drain(),
            vec![
                PlayerEvent::TimeUpdate { current_time: 0.6 },
                PlayerEvent::TimeUpdate { current_time: 1.0 },
                PlayerEvent::Pause,
            ]
        );
    }

    #[test]
    fn cast_error_is_relayed_as_cast_event() {
        let mut player = SimulatedPlayer::new(1.0);
        let mut sub = player.subscribe(&[PlayerEventType::CastEvent]);
        player.cast_error("CAST_LOST", "Receiver went away");
        match sub.try_next() {
            Some(PlayerEvent::CastEvent(event)) => assert!(event.player_error().is_some()),
            other => panic!("expected cast event, got {other:?}"),
        }
    }
}
