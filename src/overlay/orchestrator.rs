// SPDX-License-Identifier: MPL-2.0
//! Visibility orchestrator.
//!
//! State machine over `(first_play, error, menu_open, showing)`:
//!
//! - `LoadStart` clears the error
//! - `Error` and cast errors set it; only the error display renders
//! - `Play`/`Playing` enable the top and bottom bars
//! - `SourceChange` disables them again until the next play
//! - user activity shows the overlay and re-arms the auto-hide timer
//! - menus and buttons pin the overlay through the activity ledger

use super::animator::{FadeAnimator, VisibilityState};
use super::ledger::ActivityLedger;
use super::menu::{MenuFactory, MenuStack, StackChange};
use super::timer::{HideTicket, HideTimer};
use super::ControlSurface;
use crate::domain::ui::{ActivityId, FadeDuration, HideDelay};
use crate::error::PlayerError;
use crate::player::{Player, PlayerEvent, PlayerEventType, Subscription};
use std::time::Instant;

/// Player events the orchestrator reacts to.
const SUBSCRIBED_EVENTS: [PlayerEventType; 6] = [
    PlayerEventType::LoadStart,
    PlayerEventType::Error,
    PlayerEventType::CastEvent,
    PlayerEventType::Play,
    PlayerEventType::Playing,
    PlayerEventType::SourceChange,
];

/// Timing settings of the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlaySettings {
    pub hide_delay: HideDelay,
    pub fade_duration: FadeDuration,
}

/// What the overlay should render right now.
#[derive(Debug)]
pub enum OverlayFrame<'a, N> {
    /// The player failed; the error display replaces every control.
    Error(&'a PlayerError),
    Controls(ControlsFrame<'a, N>),
}

/// Normal overlay layout.
#[derive(Debug)]
pub struct ControlsFrame<'a, N> {
    pub visibility: VisibilityState,
    /// Top bar slot; absent before first play and while a menu is open.
    pub top_bar: bool,
    /// Bottom bar slot; absent before first play and while a menu is open.
    pub bottom_bar: bool,
    /// Center slot (play button); absent while a menu is open.
    pub center: bool,
    /// The open menu, rendered in place of the control bars.
    pub menu: Option<&'a N>,
}

pub struct Orchestrator<F: MenuFactory> {
    settings: OverlaySettings,
    ledger: ActivityLedger,
    timer: HideTimer,
    animator: FadeAnimator,
    menus: MenuStack<F>,
    menu_lock: Option<ActivityId>,
    first_play: bool,
    error: Option<PlayerError>,
    subscription: Option<Subscription>,
}

impl<F: MenuFactory> std::fmt::Debug for Orchestrator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("visibility", &self.animator.state())
            .field("first_play", &self.first_play)
            .field("error", &self.error)
            .field("menu_depth", &self.menus.depth())
            .field("outstanding", &self.ledger.outstanding())
            .field("hide_deadline", &self.timer.deadline())
            .finish()
    }
}

impl<F: MenuFactory> Orchestrator<F> {
    #[must_use]
    pub fn new(settings: OverlaySettings) -> Self {
        Self {
            settings,
            ledger: ActivityLedger::new(),
            timer: HideTimer::new(),
            animator: FadeAnimator::new(settings.fade_duration),
            menus: MenuStack::new(),
            menu_lock: None,
            first_play: false,
            error: None,
            subscription: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Starts listening to `player`.
    ///
    /// Attaching to a player that is already past the start of its source
    /// counts as first play, so a remounted overlay shows its bars at once.
    pub fn attach<P: Player + ?Sized>(&mut self, player: &mut P) {
        self.detach();
        self.subscription = Some(player.subscribe(&SUBSCRIBED_EVENTS));
        if player.source().is_some() && player.current_time() != 0.0 {
            self.first_play = true;
        }
        tracing::debug!(first_play = self.first_play, "overlay attached to player");
    }

    /// Stops listening and cancels every pending timer or fade.
    ///
    /// Safe to call any number of times.
    pub fn detach(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("overlay detached from player");
        }
        self.timer.cancel();
        self.animator.cancel();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Handles every player event queued since the last call.
    ///
    /// Returns the number of events processed.
    pub fn pump(&mut self, now: Instant) -> usize {
        let events = match self.subscription.as_mut() {
            Some(subscription) => subscription.drain(),
            None => return 0,
        };
        for event in &events {
            self.handle_event(event, now);
        }
        events.len()
    }

    /// Applies one player lifecycle event.
    pub fn handle_event(&mut self, event: &PlayerEvent, _now: Instant) {
        match event {
            PlayerEvent::LoadStart => {
                if self.error.take().is_some() {
                    tracing::debug!("load started, error cleared");
                }
            }
            PlayerEvent::Error(error) => self.set_error(error.clone()),
            PlayerEvent::CastEvent(cast) => {
                if let Some(error) = cast.player_error() {
                    self.set_error(error);
                }
            }
            PlayerEvent::Play | PlayerEvent::Playing => self.first_play = true,
            PlayerEvent::SourceChange => self.first_play = false,
            PlayerEvent::Pause | PlayerEvent::TimeUpdate { .. } => {}
        }
    }

    fn set_error(&mut self, error: PlayerError) {
        tracing::debug!(%error, "overlay switched to error display");
        self.error = Some(error);
    }

    // =========================================================================
    // Control surface
    // =========================================================================

    /// Reports user input. Ignored before first play and while in error.
    pub fn on_user_action(&mut self, now: Instant) {
        if !self.first_play || self.error.is_some() {
            return;
        }
        self.show_ui(now);
        self.hide_after_timeout(now);
    }

    /// Pins the overlay visible; shows it synchronously before returning.
    pub fn acquire_active(&mut self, now: Instant) -> ActivityId {
        self.show_ui(now);
        let id = self.ledger.acquire();
        tracing::debug!(%id, outstanding = self.ledger.outstanding(), "overlay pinned");
        id
    }

    /// Releases a pin and arms the auto-hide timer once nothing is pinned.
    ///
    /// Never hides synchronously. `None` and unknown ids are ignored.
    pub fn release_active(&mut self, id: impl Into<Option<ActivityId>>, now: Instant) {
        if let Some(id) = id.into() {
            let removed = self.ledger.release(id);
            tracing::debug!(
                %id,
                removed,
                outstanding = self.ledger.outstanding(),
                "overlay unpinned"
            );
        }
        self.hide_after_timeout(now);
    }

    /// Opens `menu` on top of any open menu.
    ///
    /// The first open menu pins the overlay until the stack empties again.
    pub fn open_menu(&mut self, menu: F, now: Instant) {
        if self.menus.push(menu) == StackChange::Opened && self.menu_lock.is_none() {
            self.menu_lock = Some(self.acquire_active(now));
        }
        tracing::debug!(depth = self.menus.depth(), "menu opened");
    }

    /// Closes the top menu, returning to the previous menu or the controls.
    pub fn close_current_menu(&mut self, now: Instant) {
        match self.menus.pop() {
            StackChange::Unchanged => return,
            StackChange::Emptied => {
                let lock = self.menu_lock.take();
                self.release_active(lock, now);
            }
            StackChange::Opened | StackChange::Replaced => {}
        }
        tracing::debug!(depth = self.menus.depth(), "menu closed");
        self.on_user_action(now);
    }

    #[must_use]
    pub fn buttons_enabled(&self) -> bool {
        self.animator.state().buttons_enabled
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Advances the fade and fires the auto-hide timer when due.
    pub fn tick(&mut self, now: Instant) {
        self.animator.tick(now);
        if let Some(ticket) = self.timer.poll(now) {
            self.fire_hide(ticket, now);
        }
    }

    /// Runs a scheduled hide.
    ///
    /// Stale tickets do nothing. The ledger is checked again here so a pin
    /// taken after arming keeps the overlay on screen.
    pub fn fire_hide(&mut self, ticket: HideTicket, now: Instant) -> bool {
        if !self.timer.fire(ticket) {
            return false;
        }
        if !self.ledger.is_idle() || self.error.is_some() {
            tracing::debug!(
                outstanding = self.ledger.outstanding(),
                "auto-hide skipped, overlay is pinned"
            );
            return false;
        }
        tracing::debug!("auto-hide fired");
        self.animator.fade_out(now)
    }

    /// Whether a fade or hide is pending and the caller should keep ticking.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.animator.is_animating() || self.timer.is_armed()
    }

    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    // =========================================================================
    // Render model
    // =========================================================================

    #[must_use]
    pub fn frame(&self) -> OverlayFrame<'_, F::Node> {
        if let Some(error) = &self.error {
            return OverlayFrame::Error(error);
        }
        let menu = self.menus.current();
        let bars = self.first_play && menu.is_none();
        OverlayFrame::Controls(ControlsFrame {
            visibility: self.animator.state(),
            top_bar: bars,
            bottom_bar: bars,
            center: menu.is_none(),
            menu,
        })
    }

    #[must_use]
    pub fn visibility(&self) -> VisibilityState {
        self.animator.state()
    }

    #[must_use]
    pub fn first_play(&self) -> bool {
        self.first_play
    }

    #[must_use]
    pub fn error(&self) -> Option<&PlayerError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn menu_depth(&self) -> usize {
        self.menus.depth()
    }

    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.ledger.outstanding()
    }

    #[must_use]
    pub fn settings(&self) -> OverlaySettings {
        self.settings
    }

    fn show_ui(&mut self, now: Instant) {
        self.timer.cancel();
        self.animator.fade_in(now);
    }

    fn hide_after_timeout(&mut self, now: Instant) {
        if self.ledger.is_idle() {
            self.timer.arm(now, self.settings.hide_delay.as_duration());
        }
    }
}

impl<F: MenuFactory> Drop for Orchestrator<F> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<F: MenuFactory> ControlSurface for Orchestrator<F> {
    type Menu = F;

    fn acquire_active(&mut self, now: Instant) -> ActivityId {
        Orchestrator::acquire_active(self, now)
    }

    fn release_active(&mut self, id: Option<ActivityId>, now: Instant) {
        Orchestrator::release_active(self, id, now);
    }

    fn open_menu(&mut self, menu: F, now: Instant) {
        Orchestrator::open_menu(self, menu, now);
    }

    fn close_current_menu(&mut self, now: Instant) {
        Orchestrator::close_current_menu(self, now);
    }

    fn on_user_action(&mut self, now: Instant) {
        Orchestrator::on_user_action(self, now);
    }

    fn buttons_enabled(&self) -> bool {
        Orchestrator::buttons_enabled(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{CastEvent, SimulatedPlayer, Source};
    use std::time::Duration;

    type Menu = fn() -> &'static str;

    fn menu_a() -> &'static str {
        "A"
    }

    fn menu_b() -> &'static str {
        "B"
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn orchestrator() -> Orchestrator<Menu> {
        Orchestrator::new(OverlaySettings::default())
    }

    /// Orchestrator that has seen first play and settled fully hidden.
    fn hidden(t0: Instant) -> Orchestrator<Menu> {
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        o.on_user_action(t0);
        o.tick(t0 + ms(2_500));
        o.tick(t0 + ms(2_700));
        assert!(!o.visibility().showing);
        o
    }

    #[test]
    fn initial_state_shows_container_without_bars() {
        let o = orchestrator();
        assert!(o.visibility().showing);
        assert!(!o.first_play());
        assert!(o.error().is_none());
        match o.frame() {
            OverlayFrame::Controls(frame) => {
                assert!(!frame.top_bar);
                assert!(!frame.bottom_bar);
                assert!(frame.center);
                assert!(frame.menu.is_none());
            }
            OverlayFrame::Error(_) => panic!("expected controls"),
        }
    }

    #[test]
    fn user_action_before_first_play_is_ignored() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.on_user_action(t0);
        assert!(!o.needs_tick());
        assert!(o.hide_deadline().is_none());
    }

    #[test]
    fn user_action_arms_hide_after_default_delay() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Play, t0);
        o.on_user_action(t0);
        assert_eq!(o.hide_deadline(), Some(t0 + ms(2_500)));

        o.tick(t0 + ms(2_499));
        assert!(o.visibility().buttons_enabled);

        o.tick(t0 + ms(2_500));
        assert!(!o.visibility().buttons_enabled);
        assert!(o.visibility().showing);

        o.tick(t0 + ms(2_700));
        assert!(!o.visibility().showing);
        assert!(!o.needs_tick());
    }

    #[test]
    fn user_action_fades_hidden_overlay_back_in() {
        let t0 = Instant::now();
        let mut o = hidden(t0);
        let t1 = t0 + ms(5_000);
        o.on_user_action(t1);
        assert!(o.visibility().showing);
        assert!(!o.visibility().buttons_enabled);
        o.tick(t1 + ms(200));
        assert!(o.visibility().buttons_enabled);
    }

    #[test]
    fn acquire_shows_synchronously_and_cancels_pending_hide() {
        let t0 = Instant::now();
        let mut o = hidden(t0);
        let t1 = t0 + ms(5_000);

        let id = o.acquire_active(t1);
        assert_eq!(id.value(), 0);
        assert!(o.visibility().showing);
        assert!(o.hide_deadline().is_none());

        o.tick(t1 + ms(60_000));
        assert!(o.visibility().showing);
        assert!(o.visibility().buttons_enabled);
    }

    #[test]
    fn release_only_schedules_hide() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        let id = o.acquire_active(t0);
        o.release_active(id, t0);

        assert!(o.visibility().showing);
        assert!(o.visibility().buttons_enabled);
        assert_eq!(o.hide_deadline(), Some(t0 + ms(2_500)));
    }

    #[test]
    fn release_with_outstanding_demand_does_not_arm() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        let a = o.acquire_active(t0);
        let _b = o.acquire_active(t0);
        o.release_active(a, t0);
        assert!(o.hide_deadline().is_none());
        assert_eq!(o.outstanding(), 1);
    }

    #[test]
    fn release_of_unknown_or_missing_id_is_harmless() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        let keep = o.acquire_active(t0);
        o.release_active(None, t0);
        o.release_active(ActivityId::new(42), t0);
        assert_eq!(o.outstanding(), 1);
        assert!(o.hide_deadline().is_none());

        o.release_active(keep, t0);
        o.release_active(keep, t0);
        assert_eq!(o.outstanding(), 0);
    }

    #[test]
    fn pin_taken_after_arming_survives_stale_hide() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        o.on_user_action(t0);
        let ticket = o.timer.poll(t0 + ms(2_500)).expect("hide should be due");

        // Pin directly through the ledger so the timer is not canceled.
        o.ledger.acquire();
        assert!(!o.fire_hide(ticket, t0 + ms(2_500)));
        assert!(o.visibility().buttons_enabled);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        o.on_user_action(t0);
        let stale = o.timer.poll(t0 + ms(2_500)).expect("hide should be due");
        o.on_user_action(t0 + ms(1_000));

        assert!(!o.fire_hide(stale, t0 + ms(2_500)));
        assert!(o.visibility().buttons_enabled);
    }

    #[test]
    fn menus_round_trip_ledger_and_visibility() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        let before = (o.outstanding(), o.visibility());

        for _ in 0..3 {
            o.open_menu(menu_a, t0);
        }
        assert_eq!(o.outstanding(), 1);
        for _ in 0..3 {
            o.close_current_menu(t0);
        }

        assert_eq!((o.outstanding(), o.visibility()), before);
        assert_eq!(o.menu_depth(), 0);
        assert!(o.menu_lock.is_none());
    }

    #[test]
    fn closing_submenu_returns_to_parent_then_controls() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        o.open_menu(menu_a, t0);
        o.open_menu(menu_b, t0);

        o.close_current_menu(t0);
        match o.frame() {
            OverlayFrame::Controls(frame) => {
                assert_eq!(frame.menu, Some(&"A"));
                assert!(!frame.top_bar);
                assert!(!frame.center);
            }
            OverlayFrame::Error(_) => panic!("expected controls"),
        }
        assert_eq!(o.outstanding(), 1);
        assert!(o.hide_deadline().is_none());

        o.close_current_menu(t0);
        match o.frame() {
            OverlayFrame::Controls(frame) => {
                assert!(frame.menu.is_none());
                assert!(frame.top_bar);
                assert!(frame.bottom_bar);
            }
            OverlayFrame::Error(_) => panic!("expected controls"),
        }
        assert_eq!(o.outstanding(), 0);
        assert_eq!(o.hide_deadline(), Some(t0 + ms(2_500)));
    }

    #[test]
    fn menu_open_supersedes_pending_hide() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        o.on_user_action(t0);
        o.open_menu(menu_a, t0 + ms(2_400));

        o.tick(t0 + ms(10_000));
        assert!(o.visibility().showing);
        assert!(o.visibility().buttons_enabled);
    }

    #[test]
    fn close_on_empty_stack_is_noop() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        o.close_current_menu(t0);
        assert!(o.hide_deadline().is_none());
    }

    #[test]
    fn error_replaces_controls_until_load_start() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        o.open_menu(menu_a, t0);
        o.handle_event(&PlayerEvent::Error(PlayerError::new("E", "boom")), t0);

        assert!(matches!(o.frame(), OverlayFrame::Error(e) if e.code == "E"));

        o.handle_event(&PlayerEvent::LoadStart, t0);
        assert!(matches!(o.frame(), OverlayFrame::Controls(_)));
    }

    #[test]
    fn cast_error_sets_error_state() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(
            &PlayerEvent::CastEvent(CastEvent::chromecast_error("CAST", "lost")),
            t0,
        );
        assert_eq!(o.error().map(|e| e.message.as_str()), Some("lost"));
    }

    #[test]
    fn user_action_ignored_while_in_error() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        o.handle_event(&PlayerEvent::Error(PlayerError::new("E", "boom")), t0);
        o.on_user_action(t0);
        assert!(o.hide_deadline().is_none());
    }

    #[test]
    fn source_change_resets_first_play() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Play, t0);
        assert!(o.first_play());
        o.handle_event(&PlayerEvent::SourceChange, t0);
        assert!(!o.first_play());
    }

    #[test]
    fn attach_pumps_player_events() {
        let t0 = Instant::now();
        let mut player = SimulatedPlayer::new(30.0);
        let mut o = orchestrator();
        o.attach(&mut player);
        assert!(!o.first_play());

        player.set_source(Source::new("demo://clip"));
        player.play();
        assert_eq!(o.pump(t0), 4);
        assert!(o.first_play());
    }

    #[test]
    fn attach_mid_playback_counts_as_first_play() {
        let mut player = SimulatedPlayer::new(30.0);
        player.set_source(Source::new("demo://clip"));
        player.play();
        player.advance(ms(1_500));

        let mut o = orchestrator();
        o.attach(&mut player);
        assert!(o.first_play());
    }

    #[test]
    fn detach_releases_subscription_and_cancels_work() {
        let t0 = Instant::now();
        let mut player = SimulatedPlayer::new(30.0);
        let mut o = orchestrator();
        o.attach(&mut player);
        o.handle_event(&PlayerEvent::Playing, t0);
        o.on_user_action(t0);
        assert_eq!(player.listener_count(), 1);

        o.detach();
        o.detach();
        assert_eq!(player.listener_count(), 0);
        assert!(!o.needs_tick());
        assert_eq!(o.pump(t0), 0);
    }

    #[test]
    fn drop_detaches_from_player() {
        let mut player = SimulatedPlayer::new(30.0);
        {
            let mut o = orchestrator();
            o.attach(&mut player);
            assert_eq!(player.listener_count(), 1);
        }
        assert_eq!(player.listener_count(), 0);
    }

    #[test]
    fn reattach_during_fade_out_leaves_controls_usable() {
        let t0 = Instant::now();
        let mut player = SimulatedPlayer::new(30.0);
        let mut o = orchestrator();
        o.attach(&mut player);
        o.handle_event(&PlayerEvent::Playing, t0);
        o.on_user_action(t0);
        o.tick(t0 + ms(2_500));
        assert!(o.needs_tick());

        o.attach(&mut player);
        let state = o.visibility();
        assert!(!state.showing);
        assert!(!state.buttons_enabled);
        assert!(state.opacity.is_transparent());

        o.on_user_action(t0 + ms(2_600));
        o.tick(t0 + ms(3_600));
        let state = o.visibility();
        assert!(state.showing);
        assert!(state.buttons_enabled);
        assert!(state.opacity.is_opaque());
    }

    #[test]
    fn touch_during_fade_out_reverses_it() {
        let t0 = Instant::now();
        let mut o = orchestrator();
        o.handle_event(&PlayerEvent::Playing, t0);
        o.on_user_action(t0);
        o.tick(t0 + ms(2_500));
        o.tick(t0 + ms(2_600));
        assert!(!o.buttons_enabled());
        assert!(!o.visibility().opacity.is_opaque());

        o.on_user_action(t0 + ms(2_600));
        o.tick(t0 + ms(2_900));
        let state = o.visibility();
        assert!(state.showing);
        assert!(state.buttons_enabled);
        assert!(state.opacity.is_opaque());
        assert_eq!(o.hide_deadline(), Some(t0 + ms(5_100)));
    }

    #[test]
    fn reattach_keeps_single_subscription() {
        let mut player = SimulatedPlayer::new(30.0);
        let mut o = orchestrator();
        o.attach(&mut player);
        o.attach(&mut player);
        assert_eq!(player.listener_count(), 1);
    }
}
