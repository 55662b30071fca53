// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::overlay_view;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation and playback clock.
    Tick(Instant),
    Overlay(overlay_view::Message),
    /// Keyboard shortcut to make the simulated player fail.
    SimulateError,
    /// Keyboard shortcut to report a lost cast session.
    SimulateCastError,
}

/// Runtime flags passed from the CLI to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `OVERLAY_CONTROLS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Overrides `[overlay] hide_delay_ms` for this run.
    pub hide_delay_ms: Option<u64>,
    /// Starts playback as soon as the demo source is loaded.
    pub autoplay: bool,
}
