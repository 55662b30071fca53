// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and the range rules they enforce.
//! It has no dependencies on external crates (except `std`) so the overlay
//! controller can be tested without a GUI toolkit.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`ActivityId`](ui::ActivityId),
//!   [`Opacity`](ui::Opacity), [`HideDelay`](ui::HideDelay),
//!   [`FadeDuration`](ui::FadeDuration), [`TickInterval`](ui::TickInterval))

pub mod ui;
