// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - Error panel with an action button and collapsible
//!   technical details

pub mod error_display;
