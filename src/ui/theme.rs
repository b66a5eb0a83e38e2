//! Light and dark display modes and the colors each one paints with.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display mode, toggled independently of the to-do data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::light(),
            Self::Dark => Palette::dark(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub primary: Color,
    pub success: Color,
    pub danger: Color,
    pub highlight_bg: Color,
    pub snackbar_fg: Color,
    pub snackbar_bg: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 18),
            foreground: Color::White,
            muted: Color::DarkGray,
            primary: Color::LightBlue,
            success: Color::LightGreen,
            danger: Color::LightRed,
            highlight_bg: Color::Rgb(55, 55, 55),
            snackbar_fg: Color::Black,
            snackbar_bg: Color::Rgb(225, 225, 225),
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            primary: Color::Blue,
            success: Color::Green,
            danger: Color::Red,
            highlight_bg: Color::Rgb(220, 220, 220),
            snackbar_fg: Color::White,
            snackbar_bg: Color::Rgb(50, 50, 50),
        }
    }

    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    #[must_use]
    pub fn completed(&self) -> Style {
        self.base().fg(self.muted).add_modifier(Modifier::CROSSED_OUT)
    }

    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default().bg(self.highlight_bg).add_modifier(Modifier::BOLD)
    }
}
