// SPDX-License-Identifier: MPL-2.0
//! Settings menus opened from the overlay.
//!
//! Each variant is a [`MenuFactory`]: the overlay keeps the factory on its
//! menu stack and only builds the view of the menu on top.

use crate::overlay::MenuFactory;
use crate::ui::design_tokens::{faded, opacity, palette, radius, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Text};
use iced::{Background, Border, Element, Length, Theme};

/// Playback rates offered by the speed submenu.
pub const PLAYBACK_SPEEDS: [f32; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// What selecting a menu entry does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    OpenPlaybackSpeed,
    SetPlaybackSpeed(f32),
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
    pub selected: bool,
}

/// Built menu, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub title: String,
    pub entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsMenu {
    Main,
    /// Speed submenu; carries the current rate to mark it selected.
    PlaybackSpeed(f32),
}

impl MenuFactory for SettingsMenu {
    type Node = MenuView;

    fn build(&self) -> MenuView {
        match *self {
            SettingsMenu::Main => MenuView {
                title: "Settings".to_string(),
                entries: vec![
                    MenuEntry {
                        label: "Playback speed".to_string(),
                        action: MenuAction::OpenPlaybackSpeed,
                        selected: false,
                    },
                    MenuEntry {
                        label: "Close".to_string(),
                        action: MenuAction::Close,
                        selected: false,
                    },
                ],
            },
            SettingsMenu::PlaybackSpeed(current) => MenuView {
                title: "Playback speed".to_string(),
                entries: PLAYBACK_SPEEDS
                    .iter()
                    .map(|&speed| MenuEntry {
                        label: speed_label(speed),
                        action: MenuAction::SetPlaybackSpeed(speed),
                        selected: (speed - current).abs() < f32::EPSILON,
                    })
                    .collect(),
            },
        }
    }
}

fn speed_label(speed: f32) -> String {
    if (speed - 1.0).abs() < f32::EPSILON {
        "Normal".to_string()
    } else {
        format!("{speed}x")
    }
}

impl MenuView {
    /// Renders the menu panel.
    ///
    /// `on_select` maps an entry to a message; entries get no press handler
    /// when `enabled` is false.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        on_select: impl Fn(MenuAction) -> Message,
        enabled: bool,
        fade: f32,
    ) -> Element<'a, Message> {
        let mut content = Column::new().spacing(spacing::XS).width(Length::Fill);

        content = content.push(
            Text::new(self.title.clone())
                .size(typography::TITLE_MD)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(palette::WHITE, fade)),
                }),
        );

        for entry in &self.entries {
            let selected = entry.selected;
            let label = Text::new(entry.label.clone()).size(typography::BODY);
            let mut row = button(label)
                .width(Length::Fill)
                .padding([spacing::XXS, spacing::SM])
                .style(move |_theme: &Theme, status: button::Status| {
                    let background = match status {
                        button::Status::Hovered | button::Status::Pressed => {
                            Some(Background::Color(faded(palette::GRAY_700, fade)))
                        }
                        _ if selected => Some(Background::Color(faded(palette::PRIMARY_600, fade))),
                        _ => None,
                    };
                    button::Style {
                        background,
                        text_color: faded(
                            if selected {
                                palette::WHITE
                            } else {
                                palette::GRAY_200
                            },
                            fade,
                        ),
                        border: Border {
                            radius: radius::SM.into(),
                            ..Border::default()
                        },
                        ..button::Style::default()
                    }
                });
            if enabled {
                row = row.on_press(on_select(entry.action));
            }
            content = content.push(row);
        }

        Container::new(content)
            .width(Length::Fixed(260.0))
            .padding(spacing::MD)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(faded(
                    palette::GRAY_900,
                    opacity::OVERLAY_STRONG * fade,
                ))),
                border: Border {
                    radius: radius::MD.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
            .into()
    }
}
