// SPDX-License-Identifier: MPL-2.0
//! `overlay_controls` is the adaptive visibility controller of a video player
//! overlay, with an Iced demo application built around a simulated player.
//!
//! The controller ([`overlay::Orchestrator`]) decides when the controls are
//! shown, faded or hidden. Inputs are player lifecycle events, user activity
//! and explicit "keep visible" demands from buttons and menus.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod overlay;
pub mod player;
pub mod ui;
