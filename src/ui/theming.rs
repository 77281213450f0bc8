// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Scene colors
    pub backdrop: Color,
    pub speckle: Color,
    pub texture: Color,

    // Card colors
    pub card_face: Color,
    pub card_border: Color,
    pub banner: Color,

    // Text colors
    pub headline: Color,
    pub body_text: Color,

    // Panel colors
    pub panel_background: Color,
    pub panel_border: Color,
}

impl ColorScheme {
    /// Night scheme, the demo's native look.
    #[must_use]
    pub fn night() -> Self {
        Self {
            backdrop: palette::BLACK,
            speckle: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_200
            },
            texture: palette::PRIMARY_TEXT,

            card_face: palette::PAPER,
            card_border: palette::SECONDARY,
            banner: palette::PRIMARY,

            headline: palette::PRIMARY_TEXT,
            body_text: palette::WHITE,

            panel_background: palette::PAPER,
            panel_border: palette::PANEL_BORDER,
        }
    }

    /// Day scheme for light-mode systems: same hues on a washed backdrop.
    #[must_use]
    pub fn day() -> Self {
        Self {
            backdrop: Color::from_rgb(0.92, 0.95, 1.0),
            speckle: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
            texture: palette::PRIMARY,

            card_face: Color {
                a: 0.85,
                ..palette::PRIMARY
            },
            card_border: palette::PANEL_BORDER,
            banner: palette::SECONDARY,

            headline: Color::from_rgb(0.05, 0.25, 0.5),
            body_text: palette::BLACK,

            panel_background: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PANEL_BORDER
            },
            panel_border: palette::PANEL_BORDER,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::day()
        } else {
            Self::night() // Default to night for dark mode or on error
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    #[must_use]
    pub fn color_scheme(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::day(),
            ThemeMode::Dark => ColorScheme::night(),
            ThemeMode::System => ColorScheme::from_system(),
        }
    }
}
