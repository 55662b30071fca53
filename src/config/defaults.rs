// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Overlay**: auto-hide delay, fade duration, tick interval
//! - **Demo**: simulated source used by the demo application

use crate::domain::ui::newtypes::{fade_duration_bounds, hide_delay_bounds, tick_interval_bounds};

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default delay before idle controls fade out (in milliseconds).
pub const DEFAULT_HIDE_DELAY_MS: u64 = hide_delay_bounds::DEFAULT_MS;

/// Minimum auto-hide delay (in milliseconds).
pub const MIN_HIDE_DELAY_MS: u64 = hide_delay_bounds::MIN_MS;

/// Maximum auto-hide delay (in milliseconds).
pub const MAX_HIDE_DELAY_MS: u64 = hide_delay_bounds::MAX_MS;

/// Default fade transition duration (in milliseconds).
pub const DEFAULT_FADE_DURATION_MS: u64 = fade_duration_bounds::DEFAULT_MS;

/// Maximum fade transition duration (in milliseconds).
pub const MAX_FADE_DURATION_MS: u64 = fade_duration_bounds::MAX_MS;

/// Default interval between animation ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_interval_bounds::DEFAULT_MS;

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Length of the simulated demo source (in seconds).
pub const DEFAULT_DEMO_DURATION_SECS: f64 = 120.0;

/// URI of the simulated demo source.
pub const DEMO_SOURCE_URI: &str = "demo://big-buck-bunny";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_HIDE_DELAY_MS > 0);
    assert!(DEFAULT_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HIDE_DELAY_MS <= MAX_HIDE_DELAY_MS);

    assert!(DEFAULT_FADE_DURATION_MS <= MAX_FADE_DURATION_MS);
    // A fade must finish well before the next auto-hide can start.
    assert!(MAX_FADE_DURATION_MS < MAX_HIDE_DELAY_MS);

    assert!(DEFAULT_TICK_INTERVAL_MS >= tick_interval_bounds::MIN_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= tick_interval_bounds::MAX_MS);

    assert!(DEFAULT_DEMO_DURATION_SECS > 0.0);
};
