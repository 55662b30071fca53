// SPDX-License-Identifier: MPL-2.0
//! Renders an [`OverlayFrame`] as iced widgets.
//!
//! The overlay is a full-size mouse area: any pointer movement or press that
//! no control captured is reported as [`Message::UserAction`]. Controls only
//! get press handlers while the frame says buttons are enabled.

use crate::overlay::{ControlsFrame, OverlayFrame};
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{faded, palette, spacing, typography};
use crate::ui::play_button::PlayButton;
use crate::ui::settings_menu::{MenuAction, MenuView};
use crate::ui::styles::overlay as overlay_styles;
use iced::widget::{
    button, mouse_area, progress_bar, text, Column, Container, Row, Space, Text,
};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer moved or pressed somewhere on the overlay.
    UserAction,
    TogglePlayback,
    OpenSettings,
    Menu(MenuAction),
    Reload,
    ToggleErrorDetails,
}

/// Everything the overlay needs to draw one frame.
pub struct ViewModel<'a> {
    pub frame: OverlayFrame<'a, MenuView>,
    pub play_button: &'a PlayButton,
    pub title: &'a str,
    pub current_time: f64,
    pub duration: f64,
    pub speed: f32,
    pub show_error_details: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &model.frame {
        OverlayFrame::Error(error) => centered_error_view(
            ErrorDisplay::from_player_error(error)
                .action("Reload", Message::Reload)
                .on_toggle_details(Message::ToggleErrorDetails)
                .details_visible(model.show_error_details),
        ),
        OverlayFrame::Controls(frame) if !frame.visibility.showing => {
            Space::new().width(Length::Fill).height(Length::Fill).into()
        }
        OverlayFrame::Controls(frame) => controls(frame, &model),
    };

    mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_move(|_| Message::UserAction)
    .on_press(Message::UserAction)
    .into()
}

fn controls<'a>(frame: &ControlsFrame<'_, MenuView>, model: &ViewModel<'a>) -> Element<'a, Message> {
    let fade = frame.visibility.opacity.value();
    let enabled = frame.visibility.buttons_enabled;

    let center: Element<'a, Message> = if let Some(menu) = frame.menu {
        menu.view(Message::Menu, enabled, fade)
    } else if frame.center {
        model
            .play_button
            .view(enabled.then_some(Message::TogglePlayback), fade)
            .unwrap_or_else(|| Space::new().into())
    } else {
        Space::new().into()
    };

    let mut layout = Column::new().width(Length::Fill).height(Length::Fill);

    layout = if frame.top_bar {
        layout.push(top_bar(model.title, model.speed, enabled, fade))
    } else {
        layout.push(Space::new().height(Length::Fixed(top_bar_height())))
    };

    layout = layout.push(
        Container::new(center)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    );

    if frame.bottom_bar {
        layout = layout.push(bottom_bar(model.current_time, model.duration, fade));
    }

    layout.into()
}

fn top_bar_height() -> f32 {
    typography::TITLE_MD + 2.0 * spacing::SM
}

fn top_bar<'a>(title: &str, speed: f32, enabled: bool, fade: f32) -> Element<'a, Message> {
    let mut settings = button(Text::new("⚙").size(typography::TITLE_MD))
        .padding(spacing::XXS)
        .style(overlay_styles::bar_button(fade, enabled));
    if enabled {
        settings = settings.on_press(Message::OpenSettings);
    }

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(title.to_string()).size(typography::BODY))
        .push(Space::new().width(Length::Fill));
    if (speed - 1.0).abs() > f32::EPSILON {
        row = row.push(
            Text::new(format!("{speed}x"))
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(palette::GRAY_200, fade)),
                }),
        );
    }
    row = row.push(settings);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(top_bar_height()))
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(overlay_styles::bar(fade))
        .into()
}

fn bottom_bar<'a>(current_time: f64, duration: f64, fade: f32) -> Element<'a, Message> {
    #[allow(clippy::cast_possible_truncation)]
    let progress = if duration > 0.0 {
        (current_time / duration).clamp(0.0, 1.0) as f32
    } else {
        0.0
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(format!(
                "{} / {}",
                format_timestamp(current_time),
                format_timestamp(duration)
            ))
            .size(typography::CAPTION),
        )
        .push(progress_bar(0.0..=1.0, progress).style(overlay_styles::progress(fade)));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(overlay_styles::bar(fade))
        .into()
}

/// Formats seconds as `m:ss`, or `h:mm:ss` from one hour on.
#[must_use]
pub fn format_timestamp(secs: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
