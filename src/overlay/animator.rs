// SPDX-License-Identifier: MPL-2.0
//! Fade animator driving the overlay opacity.
//!
//! Transitions are linear and always start from the current opacity, so a
//! fade-out that interrupts a fade-in continues smoothly from wherever the
//! fade-in had reached. Settlement flips the interaction flags:
//!
//! | Event            | `showing` | `buttons_enabled` |
//! |------------------|-----------|-------------------|
//! | fade-in starts   | `true`    | unchanged         |
//! | fade-in settles  | unchanged | `true`            |
//! | fade-out starts  | unchanged | `false`           |
//! | fade-out settles | `false`   | unchanged         |

use crate::domain::ui::{FadeDuration, Generation, Opacity};
use std::time::Instant;

/// Visibility of the overlay as seen by the renderer and the buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityState {
    /// Whether the overlay is laid out at all.
    pub showing: bool,
    /// Whether controls should honor presses.
    pub buttons_enabled: bool,
    pub opacity: Opacity,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            showing: true,
            buttons_enabled: true,
            opacity: Opacity::VISIBLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

impl FadeDirection {
    fn target(self) -> Opacity {
        match self {
            Self::In => Opacity::VISIBLE,
            Self::Out => Opacity::HIDDEN,
        }
    }
}

/// Completion token of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub direction: FadeDirection,
    pub generation: Generation,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    direction: FadeDirection,
    from: Opacity,
    started_at: Instant,
    generation: Generation,
}

#[derive(Debug)]
pub struct FadeAnimator {
    state: VisibilityState,
    duration: FadeDuration,
    transition: Option<Transition>,
    generation: Generation,
}

impl FadeAnimator {
    #[must_use]
    pub fn new(duration: FadeDuration) -> Self {
        Self {
            state: VisibilityState::default(),
            duration,
            transition: None,
            generation: Generation::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Generation of the most recently started (or canceled) transition.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts fading the overlay in.
    ///
    /// Returns `false` when the overlay is already fully visible or already
    /// fading in.
    pub fn fade_in(&mut self, now: Instant) -> bool {
        match self.transition {
            Some(t) if t.direction == FadeDirection::In => return false,
            None if self.state.showing
                && self.state.buttons_enabled
                && self.state.opacity.is_opaque() =>
            {
                return false;
            }
            _ => {}
        }
        self.state.showing = true;
        self.start(FadeDirection::In, now);
        true
    }

    /// Starts fading the overlay out.
    ///
    /// Returns `false` when the overlay is already hidden or already
    /// fading out.
    pub fn fade_out(&mut self, now: Instant) -> bool {
        match self.transition {
            Some(t) if t.direction == FadeDirection::Out => return false,
            None if !self.state.showing => return false,
            _ => {}
        }
        self.state.buttons_enabled = false;
        self.start(FadeDirection::Out, now);
        true
    }

    /// Advances the in-flight transition to `now`.
    ///
    /// Returns the settlement when the transition completes during this tick.
    pub fn tick(&mut self, now: Instant) -> Option<Settled> {
        let transition = self.transition?;
        let elapsed = now.saturating_duration_since(transition.started_at);
        let progress = if self.duration.is_instant() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_duration().as_secs_f32()
        };
        self.state.opacity = transition.from.lerp(transition.direction.target(), progress);

        if progress < 1.0 {
            return None;
        }
        let settled = Settled {
            direction: transition.direction,
            generation: transition.generation,
        };
        self.settle(settled).then_some(settled)
    }

    /// Applies a settlement if it belongs to the current transition.
    ///
    /// Stale settlements (superseded or canceled transitions) are ignored.
    pub fn settle(&mut self, settled: Settled) -> bool {
        match self.transition {
            Some(t) if t.generation == settled.generation => {}
            _ => {
                tracing::trace!(generation = settled.generation.value(), "stale fade settlement");
                return false;
            }
        }
        self.transition = None;
        self.state.opacity = settled.direction.target();
        match settled.direction {
            FadeDirection::In => self.state.buttons_enabled = true,
            FadeDirection::Out => self.state.showing = false,
        }
        tracing::debug!(direction = ?settled.direction, "fade settled");
        true
    }

    /// Ends the in-flight transition at once, jumping to its target.
    ///
    /// The flags end up as if the fade had settled, so a canceled fade-out
    /// leaves the overlay hidden and a canceled fade-in leaves it visible and
    /// interactive. Settlements handed out earlier become stale.
    pub fn cancel(&mut self) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        self.generation = self.generation.next();
        self.state.opacity = transition.direction.target();
        match transition.direction {
            FadeDirection::In => self.state.buttons_enabled = true,
            FadeDirection::Out => self.state.showing = false,
        }
        tracing::debug!(direction = ?transition.direction, "fade canceled");
    }

    fn start(&mut self, direction: FadeDirection, now: Instant) {
        self.generation = self.generation.next();
        self.transition = Some(Transition {
            direction,
            from: self.state.opacity,
            started_at: now,
            generation: self.generation,
        });
        tracing::debug!(?direction, from = self.state.opacity.value(), "fade started");
        if self.duration.is_instant() {
            self.tick(now);
        }
    }
}
