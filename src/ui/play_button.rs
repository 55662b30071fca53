// SPDX-License-Identifier: MPL-2.0
//! Play/pause button.
//!
//! Besides toggling playback, the button keeps the overlay pinned while the
//! player is paused: a pause takes an activity id from the control surface
//! and the next play releases it.

use crate::domain::ui::ActivityId;
use crate::overlay::ControlSurface;
use crate::player::{Player, PlayerEvent, PlayerEventType, Subscription};
use crate::ui::design_tokens::{faded, opacity, palette, radius, spacing, typography};
use iced::widget::{button, text, Text};
use iced::{Background, Border, Element, Theme};
use std::time::Instant;

const SUBSCRIBED_EVENTS: [PlayerEventType; 6] = [
    PlayerEventType::Play,
    PlayerEventType::Playing,
    PlayerEventType::Pause,
    PlayerEventType::Error,
    PlayerEventType::TimeUpdate,
    PlayerEventType::SourceChange,
];

#[derive(Debug)]
pub struct PlayButton {
    paused: bool,
    error: bool,
    pause_lock: Option<ActivityId>,
    subscription: Option<Subscription>,
}

impl Default for PlayButton {
    fn default() -> Self {
        Self {
            paused: true,
            error: false,
            pause_lock: None,
            subscription: None,
        }
    }
}

impl PlayButton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to `player` and mirrors its current paused state.
    pub fn attach<P: Player + ?Sized>(&mut self, player: &mut P) {
        self.subscription = Some(player.subscribe(&SUBSCRIBED_EVENTS));
        self.paused = player.paused();
        self.error = false;
    }

    /// Drops the subscription and releases the pause lock.
    pub fn detach<C: ControlSurface + ?Sized>(&mut self, controls: &mut C, now: Instant) {
        self.subscription = None;
        if let Some(id) = self.pause_lock.take() {
            controls.release_active(Some(id), now);
        }
    }

    /// Handles every player event queued since the last call.
    pub fn pump<P, C>(&mut self, player: &P, controls: &mut C, now: Instant) -> usize
    where
        P: Player + ?Sized,
        C: ControlSurface + ?Sized,
    {
        let events = match self.subscription.as_mut() {
            Some(subscription) => subscription.drain(),
            None => return 0,
        };
        for event in &events {
            self.handle_event(event, player, controls, now);
        }
        events.len()
    }

    pub fn handle_event<P, C>(
        &mut self,
        event: &PlayerEvent,
        player: &P,
        controls: &mut C,
        now: Instant,
    ) where
        P: Player + ?Sized,
        C: ControlSurface + ?Sized,
    {
        match event {
            PlayerEvent::Play | PlayerEvent::Playing => {
                self.paused = false;
                if let Some(id) = self.pause_lock.take() {
                    controls.release_active(Some(id), now);
                }
            }
            PlayerEvent::Pause => {
                self.paused = true;
                if self.pause_lock.is_none() {
                    self.pause_lock = Some(controls.acquire_active(now));
                }
            }
            PlayerEvent::TimeUpdate { .. } => self.paused = player.paused(),
            PlayerEvent::Error(_) => self.error = true,
            PlayerEvent::SourceChange => {
                self.paused = player.paused();
                self.error = false;
            }
            PlayerEvent::LoadStart | PlayerEvent::CastEvent(_) => {}
        }
    }

    /// Plays when paused, pauses otherwise.
    ///
    /// The press is ignored while the overlay is fading out or hidden.
    pub fn toggle<P, C>(&self, player: &mut P, controls: &C) -> bool
    where
        P: Player + ?Sized,
        C: ControlSurface + ?Sized,
    {
        if self.error || !controls.buttons_enabled() {
            return false;
        }
        if player.paused() {
            player.play();
        } else {
            player.pause();
        }
        true
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The button renders nothing once the player reported an error.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.error
    }

    #[must_use]
    pub fn holds_pause_lock(&self) -> bool {
        self.pause_lock.is_some()
    }

    /// Renders the button; `None` while hidden after an error.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        on_press: Option<Message>,
        fade: f32,
    ) -> Option<Element<'a, Message>> {
        if !self.is_visible() {
            return None;
        }
        let glyph = if self.paused { "▶" } else { "❚❚" };
        let label = Text::new(glyph)
            .size(typography::TITLE_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(palette::WHITE, fade)),
            });

        let enabled = on_press.is_some();
        let mut play = button(label)
            .padding(spacing::MD)
            .style(move |_theme: &Theme, status: button::Status| {
                let alpha = match status {
                    button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
                    button::Status::Disabled => opacity::OVERLAY_SUBTLE,
                    button::Status::Active => opacity::OVERLAY_MEDIUM,
                };
                button::Style {
                    background: Some(Background::Color(faded(
                        palette::BLACK,
                        alpha * if enabled { 1.0 } else { opacity::DISABLED } * fade,
                    ))),
                    text_color: faded(palette::WHITE, fade),
                    border: Border {
                        radius: radius::FULL.into(),
                        ..Border::default()
                    },
                    ..button::Style::default()
                }
            });
        if let Some(message) = on_press {
            play = play.on_press(message);
        }
        Some(play.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;
    use crate::overlay::{Orchestrator, OverlaySettings};
    use crate::player::{SimulatedPlayer, Source};

    type Controls = Orchestrator<fn()>;

    fn setup() -> (SimulatedPlayer, Controls, PlayButton) {
        let mut player = SimulatedPlayer::new(60.0);
        player.set_source(Source::new("demo://clip"));
        let controls = Orchestrator::new(OverlaySettings::default());
        let mut play_button = PlayButton::new();
        play_button.attach(&mut player);
        (player, controls, play_button)
    }

    #[test]
    fn pause_pins_overlay_and_play_releases_it() {
        let now = Instant::now();
        let (mut player, mut controls, mut play_button) = setup();

        player.play();
        play_button.pump(&player, &mut controls, now);
        assert!(!play_button.is_paused());
        assert_eq!(controls.outstanding(), 0);

        player.pause();
        play_button.pump(&player, &mut controls, now);
        assert!(play_button.is_paused());
        assert!(play_button.holds_pause_lock());
        assert_eq!(controls.outstanding(), 1);

        player.play();
        play_button.pump(&player, &mut controls, now);
        assert!(!play_button.holds_pause_lock());
        assert_eq!(controls.outstanding(), 0);
        assert!(controls.hide_deadline().is_some());
    }

    #[test]
    fn repeated_pause_takes_a_single_lock() {
        let now = Instant::now();
        let (player, mut controls, mut play_button) = setup();
        play_button.handle_event(&PlayerEvent::Pause, &player, &mut controls, now);
        play_button.handle_event(&PlayerEvent::Pause, &player, &mut controls, now);
        assert_eq!(controls.outstanding(), 1);
    }

    #[test]
    fn toggle_requires_enabled_buttons() {
        let now = Instant::now();
        let (mut player, mut controls, play_button) = setup();

        assert!(play_button.toggle(&mut player, &controls));
        assert!(!player.paused());

        controls.handle_event(&PlayerEvent::Playing, now);
        controls.on_user_action(now);
        controls.tick(now + std::time::Duration::from_millis(2_500));
        assert!(!controls.buttons_enabled());

        assert!(!play_button.toggle(&mut player, &controls));
        assert!(!player.paused());
    }

    #[test]
    fn error_hides_button_until_source_change() {
        let now = Instant::now();
        let (mut player, mut controls, mut play_button) = setup();

        player.fail(PlayerError::new("E", "boom"));
        play_button.pump(&player, &mut controls, now);
        assert!(!play_button.is_visible());
        assert!(!play_button.toggle(&mut player, &controls));

        player.set_source(Source::new("demo://other"));
        play_button.pump(&player, &mut controls, now);
        assert!(play_button.is_visible());
    }

    #[test]
    fn works_through_dyn_control_surface() {
        let now = Instant::now();
        let (player, mut controls, mut play_button) = setup();
        let surface: &mut dyn ControlSurface<Menu = fn()> = &mut controls;
        play_button.handle_event(&PlayerEvent::Pause, &player, surface, now);
        play_button.handle_event(&PlayerEvent::Playing, &player, surface, now);
        assert_eq!(controls.outstanding(), 0);
        assert!(controls.hide_deadline().is_some());
    }

    #[test]
    fn detach_releases_pause_lock_and_subscription() {
        let now = Instant::now();
        let (mut player, mut controls, mut play_button) = setup();
        player.play();
        player.pause();
        play_button.pump(&player, &mut controls, now);
        assert_eq!(controls.outstanding(), 1);

        let listeners_before = player.listener_count();
        play_button.detach(&mut controls, now);
        assert_eq!(controls.outstanding(), 0);
        assert_eq!(player.listener_count(), listeners_before - 1);
    }
}
