//! Color palettes for the two theme modes

use ratatui::style::Color;

use crate::ThemeMode;

/// Resolved palette handed to every renderer
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub border: Color,
    pub border_focus: Color,
    pub good: Color,
    pub warn: Color,
    pub bad: Color,
}

/// Look up the palette for a theme mode
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => Palette {
            bg: Color::Reset,
            fg: Color::White,
            muted: Color::DarkGray,
            accent: Color::Green,
            highlight_bg: Color::Green,
            highlight_fg: Color::Black,
            border: Color::DarkGray,
            border_focus: Color::Green,
            good: Color::Green,
            warn: Color::Yellow,
            bad: Color::Red,
        },
        ThemeMode::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::Gray,
            accent: Color::Rgb(0, 110, 40),
            highlight_bg: Color::Rgb(0, 110, 40),
            highlight_fg: Color::White,
            border: Color::Gray,
            border_focus: Color::Rgb(0, 110, 40),
            good: Color::Rgb(0, 110, 40),
            warn: Color::Rgb(160, 110, 0),
            bad: Color::Rgb(170, 30, 30),
        },
    }
}
