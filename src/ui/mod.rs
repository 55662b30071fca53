// SPDX-License-Identifier: MPL-2.0
//! User interface of the overlay.
//!
//! Widgets follow the Elm-style "state down, messages up" pattern: the
//! overlay controller decides what is visible and these modules only draw it.
//!
//! - [`overlay_view`] - Renders an overlay frame (bars, center slot, menus)
//! - [`play_button`] - Play/pause button that pins the overlay while paused
//! - [`settings_menu`] - Settings and playback speed menus
//! - [`components`] - Reusable components (error display)
//! - [`styles`] - Fade-aware overlay styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod overlay_view;
pub mod play_button;
pub mod settings_menu;
pub mod styles;
