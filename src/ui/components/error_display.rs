// SPDX-License-Identifier: MPL-2.0
//! Error display shown in place of the overlay controls.
//!
//! It shows:
//! - a title
//! - the player's error message
//! - an optional action button (e.g. "Reload")
//! - the error code as collapsible technical details
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::from_player_error(&error)
//!     .action("Reload", Message::Reload)
//!     .on_toggle_details(Message::ToggleErrorDetails)
//!     .view()
//! ```

use crate::error::PlayerError;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    action_label: Option<String>,
    action_message: Option<Message>,
    toggle_details_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            details: None,
            show_details: false,
            action_label: None,
            action_message: None,
            toggle_details_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefills title, message and details from a player error.
    pub fn from_player_error(error: &PlayerError) -> Self {
        Self::new()
            .title("Playback error")
            .message(error.message.clone())
            .details(format!("Error code: {}", error.code))
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details (collapsible).
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    /// Renders the error panel.
    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::TITLE_MD)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            content = content.push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label).size(typography::BODY))
                .on_press(msg)
                .padding([spacing::XXS, spacing::MD])
                .style(|_theme: &Theme, status: button::Status| {
                    let base = match status {
                        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
                        _ => palette::PRIMARY_600,
                    };
                    button::Style {
                        background: Some(Background::Color(base)),
                        text_color: palette::WHITE,
                        border: Border {
                            radius: radius::SM.into(),
                            ..Border::default()
                        },
                        ..button::Style::default()
                    }
                });
            content = content.push(Container::new(action_btn).padding(spacing::SM));
        }

        if let Some(details_text) = self.details {
            if let Some(toggle_msg) = self.toggle_details_message {
                let toggle_label = if self.show_details {
                    "Hide details"
                } else {
                    "Show details"
                };
                content = content.push(
                    button(Text::new(toggle_label).size(typography::CAPTION))
                        .on_press(toggle_msg)
                        .style(button::text),
                );
            }

            if self.show_details {
                let details_column = Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(rule::horizontal(1))
                    .push(
                        Text::new(details_text)
                            .size(typography::CAPTION)
                            .style(|_theme: &Theme| text::Style {
                                color: Some(palette::GRAY_200),
                            }),
                    );
                content = content.push(details_column);
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(420.0)
            .padding(spacing::LG)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::OVERLAY_STRONG,
                    ..palette::GRAY_900
                })),
                border: Border {
                    color: palette::GRAY_700,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                text_color: Some(palette::WHITE),
                ..container::Style::default()
            })
            .into()
    }
}

/// Centers an error display over the whole overlay.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}
