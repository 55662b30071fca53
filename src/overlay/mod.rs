// SPDX-License-Identifier: MPL-2.0
//! Adaptive visibility controller for the player overlay.
//!
//! The [`Orchestrator`] decides when the controls are shown or hidden. It
//! combines four parts:
//!
//! - [`ActivityLedger`]: counted set of "keep visible" demands
//! - [`FadeAnimator`]: opacity transitions and interaction flags
//! - [`HideTimer`]: delayed auto-hide with generation tokens
//! - [`MenuStack`]: LIFO stack of modal menus
//!
//! Buttons and menus never touch those parts directly; they receive the
//! orchestrator as a [`ControlSurface`].
//!
//! All operations take the current [`Instant`] explicitly so the controller
//! can be driven by an iced tick subscription in the application and by
//! synthetic clocks in tests.

mod animator;
mod ledger;
mod menu;
mod orchestrator;
mod timer;

pub use animator::{FadeAnimator, FadeDirection, Settled, VisibilityState};
pub use ledger::ActivityLedger;
pub use menu::{MenuFactory, MenuStack, StackChange};
pub use orchestrator::{ControlsFrame, Orchestrator, OverlayFrame, OverlaySettings};
pub use timer::{HideTicket, HideTimer};

use crate::domain::ui::ActivityId;
use std::time::Instant;

/// Operations the overlay exposes to the controls it hosts.
pub trait ControlSurface {
    /// Menu factory type accepted by [`ControlSurface::open_menu`].
    type Menu;

    /// Pins the overlay visible until the returned id is released.
    fn acquire_active(&mut self, now: Instant) -> ActivityId;

    /// Releases a pin. `None` and unknown ids are ignored.
    fn release_active(&mut self, id: Option<ActivityId>, now: Instant);

    fn open_menu(&mut self, menu: Self::Menu, now: Instant);

    fn close_current_menu(&mut self, now: Instant);

    /// Reports user input (touch, pointer move).
    fn on_user_action(&mut self, now: Instant);

    /// Whether controls should currently honor presses.
    fn buttons_enabled(&self) -> bool;
}
