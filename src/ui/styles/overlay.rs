// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the control bars and the progress bar.
//!
//! Every style takes the current fade value so the whole overlay dims
//! together during a transition.

use crate::ui::design_tokens::{
    faded, opacity,
    palette::{BLACK, GRAY_700, PRIMARY_400, WHITE},
    radius,
};
use iced::widget::{button, container, progress_bar};
use iced::{Background, Border, Color, Theme};

fn bar_background(fade: f32) -> Color {
    faded(
        Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        },
        fade,
    )
}

/// Style for the top and bottom control bars.
pub fn bar(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(bar_background(fade))),
        text_color: Some(faded(WHITE, fade)),
        ..Default::default()
    }
}

/// Style for icon buttons placed on the bars.
pub fn bar_button(fade: f32, enabled: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hover = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let alpha = match (enabled, hover) {
            (true, true) => opacity::OVERLAY_SUBTLE,
            _ => 0.0,
        };
        button::Style {
            background: Some(Background::Color(faded(Color { a: alpha, ..WHITE }, fade))),
            text_color: faded(
                Color {
                    a: if enabled { 1.0 } else { opacity::DISABLED },
                    ..WHITE
                },
                fade,
            ),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Style for the playback progress bar.
pub fn progress(fade: f32) -> impl Fn(&Theme) -> progress_bar::Style {
    move |_theme: &Theme| progress_bar::Style {
        background: Background::Color(faded(GRAY_700, fade)),
        bar: Background::Color(faded(PRIMARY_400, fade)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
    }
}
