// SPDX-License-Identifier: MPL-2.0
//! Application root: a simulated player with the adaptive overlay on top.
//!
//! The `App` struct wires the player, the overlay controller and the play
//! button together and translates messages into controller calls. Player
//! events are pumped after every message so the controls never lag behind
//! the player state.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_DEMO_DURATION_SECS, DEMO_SOURCE_URI};
use crate::domain::ui::TickInterval;
use crate::error::PlayerError;
use crate::overlay::Orchestrator;
use crate::player::{Player, SimulatedPlayer, Source};
use crate::ui::design_tokens::palette;
use crate::ui::overlay_view::{self, ViewModel};
use crate::ui::play_button::PlayButton;
use crate::ui::settings_menu::{MenuAction, SettingsMenu};
use iced::widget::{container, Container};
use iced::{window, Background, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    config: Config,
    player: SimulatedPlayer,
    orchestrator: Orchestrator<SettingsMenu>,
    play_button: PlayButton,
    tick_interval: TickInterval,
    /// Timestamp of the previous tick while playing.
    last_tick: Option<Instant>,
    /// Current playback rate.
    speed: f32,
    show_error_details: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("orchestrator", &self.orchestrator)
            .field("paused", &self.player.paused())
            .field("speed", &self.speed)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 540;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 270;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the settings, applies CLI overrides and loads the demo source.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(key) = config_warning {
            tracing::warn!(%key, "falling back to default settings");
        }
        if let Some(ms) = flags.hide_delay_ms {
            config.overlay.hide_delay_ms = Some(ms);
        }
        if flags.autoplay {
            config.demo.autoplay = Some(true);
        }
        (Self::with_config(config, Instant::now()), Task::none())
    }

    /// Builds the application around `config` with the demo source loaded.
    pub fn with_config(config: Config, now: Instant) -> Self {
        let mut player = SimulatedPlayer::new(
            config
                .demo
                .duration_secs
                .unwrap_or(DEFAULT_DEMO_DURATION_SECS),
        );
        let mut orchestrator = Orchestrator::new(config.overlay.settings());
        orchestrator.attach(&mut player);
        let mut play_button = PlayButton::new();
        play_button.attach(&mut player);

        let mut app = Self {
            tick_interval: config.overlay.tick_interval(),
            config,
            player,
            orchestrator,
            play_button,
            last_tick: None,
            speed: 1.0,
            show_error_details: false,
        };

        app.player.set_source(Source::new(DEMO_SOURCE_URI));
        if app.config.demo.autoplay.unwrap_or(false) {
            app.player.play();
        }
        app.sync(now);
        tracing::info!(settings = ?app.orchestrator.settings(), "overlay ready");
        app
    }

    fn title(&self) -> String {
        "Overlay Controls".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = subscription::create_event_subscription();
        if self.orchestrator.needs_tick() || !self.player.paused() {
            Subscription::batch([
                events,
                subscription::create_tick_subscription(self.tick_interval),
            ])
        } else {
            events
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = match message {
            Message::Tick(now) => now,
            _ => Instant::now(),
        };
        match message {
            Message::Tick(now) => self.on_tick(now),
            Message::Overlay(overlay_message) => self.on_overlay(overlay_message, now),
            Message::SimulateError => self.player.fail(PlayerError::new(
                "MEDIA_ERR_DECODE",
                "The video could not be decoded",
            )),
            Message::SimulateCastError => self
                .player
                .cast_error("CAST_SESSION_LOST", "Lost connection to the cast device"),
        }
        self.sync(now);
        Task::none()
    }

    fn on_tick(&mut self, now: Instant) {
        if self.player.paused() {
            self.last_tick = None;
        } else if let Some(last) = self.last_tick.replace(now) {
            let elapsed = now.saturating_duration_since(last).mul_f32(self.speed);
            self.player.advance(elapsed);
        }
        self.sync(now);
        self.orchestrator.tick(now);
    }

    fn on_overlay(&mut self, message: overlay_view::Message, now: Instant) {
        match message {
            overlay_view::Message::UserAction => self.orchestrator.on_user_action(now),
            overlay_view::Message::TogglePlayback => {
                if self.play_button.toggle(&mut self.player, &self.orchestrator) {
                    self.sync(now);
                    self.orchestrator.on_user_action(now);
                }
            }
            overlay_view::Message::OpenSettings => {
                if self.orchestrator.buttons_enabled() {
                    self.orchestrator.open_menu(SettingsMenu::Main, now);
                }
            }
            overlay_view::Message::Menu(action) => self.on_menu(action, now),
            overlay_view::Message::Reload => {
                self.show_error_details = false;
                self.player.set_source(Source::new(DEMO_SOURCE_URI));
            }
            overlay_view::Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
            }
        }
    }

    fn on_menu(&mut self, action: MenuAction, now: Instant) {
        if !self.orchestrator.buttons_enabled() {
            return;
        }
        match action {
            MenuAction::OpenPlaybackSpeed => self
                .orchestrator
                .open_menu(SettingsMenu::PlaybackSpeed(self.speed), now),
            MenuAction::SetPlaybackSpeed(speed) => {
                tracing::debug!(speed, "playback speed changed");
                self.speed = speed;
                self.orchestrator.close_current_menu(now);
            }
            MenuAction::Close => self.orchestrator.close_current_menu(now),
        }
    }

    /// Delivers queued player events to the overlay and the play button.
    fn sync(&mut self, now: Instant) {
        self.orchestrator.pump(now);
        self.play_button
            .pump(&self.player, &mut self.orchestrator, now);
    }

    pub fn view(&self) -> Element<'_, Message> {
        let overlay = overlay_view::view(ViewModel {
            frame: self.orchestrator.frame(),
            play_button: &self.play_button,
            title: self
                .player
                .source()
                .map_or("", |source| source.uri.as_str()),
            current_time: self.player.current_time(),
            duration: self.player.duration_secs(),
            speed: self.speed,
            show_error_details: self.show_error_details,
        })
        .map(Message::Overlay);

        Container::new(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(palette::GRAY_900)),
                ..container::Style::default()
            })
            .into()
    }
}
