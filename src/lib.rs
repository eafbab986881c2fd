//! Sathi - terminal gardening companion
//!
//! Exposes modules for testing

pub mod data;
pub mod i18n;
pub mod logic;
pub mod model;
pub mod prefs;

/// Top-level screens, in tab-bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Weather,
    Market,
    Decor,
    Scan,
    Social,
    Export,
    Settings,
}

impl Screen {
    /// All screens in display order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Home,
            Screen::Weather,
            Screen::Market,
            Screen::Decor,
            Screen::Scan,
            Screen::Social,
            Screen::Export,
            Screen::Settings,
        ]
    }

    /// Position in the tab bar (0-based)
    pub fn index(&self) -> usize {
        Screen::all().iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Color theme, persisted in the preference store under the `theme` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a stored preference value; unknown values fall back to default
    pub fn from_pref(value: &str) -> ThemeMode {
        match value {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}
