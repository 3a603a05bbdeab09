// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for buttons and containers.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Style for the primary call-to-action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Style for overlay buttons (navigation arrows, lightbox close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border::default(),
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for filter buttons; the selected filter gets the brand color.
pub fn filter(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let (background, text_color) = if selected {
            (palette::PRIMARY_500, palette::GRAY_900)
        } else if matches!(status, button::Status::Hovered) {
            (palette::PRIMARY_200, palette::GRAY_900)
        } else {
            (
                palette_ext.background.weak.color,
                palette_ext.background.base.text,
            )
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: palette::PRIMARY_600,
                width: if selected { 1.0 } else { 0.0 },
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round indicator/progress dot; the active one is filled with the brand
/// color, the rest stay translucent white.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if active {
            palette::PRIMARY_500
        } else if matches!(status, button::Status::Hovered) {
            Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            }
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::GRAY_900,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Invisible button wrapping a grid thumbnail.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        _ => opacity::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::PRIMARY_500
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Card surface for testimonial content.
pub fn card(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dimmed full-window backdrop behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Header bar background.
pub fn header(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette_ext.background.base.color)),
        shadow: shadow::SM,
        ..Default::default()
    }
}
