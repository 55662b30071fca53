// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for overlay values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// ActivityId
// =============================================================================

/// Identifier of one outstanding "keep the overlay visible" demand.
///
/// Ids are issued in increasing order by a single controller and are never
/// reused during its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivityId(u64);

impl ActivityId {
    /// Wraps a raw counter value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Version token carried by scheduled work (hide timers, fade settlements).
///
/// A scheduled action only applies if its generation is still the current one
/// of the component that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// Returns the generation that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// Overlay opacity, guaranteed to be within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully transparent.
    pub const HIDDEN: Self = Self(0.0);
    /// Fully opaque.
    pub const VISIBLE: Self = Self(1.0);

    /// Creates a new opacity, clamping the value to the valid range.
    ///
    /// `NaN` is treated as fully transparent.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::HIDDEN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Linearly interpolates from `self` toward `target`.
    ///
    /// `progress` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, target: Self, progress: f32) -> Self {
        let t = progress.clamp(0.0, 1.0);
        Self::new(self.0 + (target.0 - self.0) * t)
    }

    /// Returns whether the overlay is fully opaque.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.0 >= 1.0
    }

    /// Returns whether the overlay is fully transparent.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::VISIBLE
    }
}

// =============================================================================
// Hide Delay Bounds
// =============================================================================

/// Auto-hide delay bounds (0.5 to 30 seconds).
pub mod hide_delay_bounds {
    /// Minimum auto-hide delay in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum auto-hide delay in milliseconds.
    pub const MAX_MS: u64 = 30_000;
    /// Default auto-hide delay in milliseconds.
    pub const DEFAULT_MS: u64 = 2_500;
}

// =============================================================================
// HideDelay
// =============================================================================

/// Delay between the last qualifying activity and the overlay fading out.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500 ms–30 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new hide delay, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(hide_delay_bounds::MIN_MS, hide_delay_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Fade Duration Bounds
// =============================================================================

/// Fade transition duration bounds (instant to 2 seconds).
pub mod fade_duration_bounds {
    /// Minimum fade duration in milliseconds (instant fade).
    pub const MIN_MS: u64 = 0;
    /// Maximum fade duration in milliseconds.
    pub const MAX_MS: u64 = 2_000;
    /// Default fade duration in milliseconds.
    pub const DEFAULT_MS: u64 = 200;
}

// =============================================================================
// FadeDuration
// =============================================================================

/// Duration of a single fade-in or fade-out transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDuration(u64);

impl FadeDuration {
    /// Creates a new fade duration, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(fade_duration_bounds::MIN_MS, fade_duration_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if transitions complete instantly.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self(fade_duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tick Interval Bounds
// =============================================================================

/// Animation tick interval bounds.
pub mod tick_interval_bounds {
    /// Minimum tick interval in milliseconds (~120 fps).
    pub const MIN_MS: u64 = 8;
    /// Maximum tick interval in milliseconds.
    pub const MAX_MS: u64 = 250;
    /// Default tick interval in milliseconds (~60 fps).
    pub const DEFAULT_MS: u64 = 16;
}

// =============================================================================
// TickInterval
// =============================================================================

/// Interval between animation/timer ticks while the overlay has pending work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new tick interval, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(tick_interval_bounds::MIN_MS, tick_interval_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_interval_bounds::DEFAULT_MS)
    }
}
