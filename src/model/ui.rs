//! UI sub-model: screen, theme, language, toast, alert

use std::time::Instant;

use crate::i18n::{Key, Language};
use crate::{Screen, ThemeMode};

/// Cross-screen UI state and user preferences
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Screen currently shown
    pub active_screen: Screen,

    /// Color theme (persisted preference)
    pub theme: ThemeMode,

    /// Display language (persisted preference)
    pub language: Language,

    /// Brief pop-up message with its creation time, auto-dismissed
    pub toast: Option<(String, Instant)>,

    /// Modal alert dialog (e.g. sensor permission denied)
    pub alert: Option<String>,

    /// Set to exit the main loop
    pub should_quit: bool,

    /// Vim-style navigation keys enabled
    pub vim_mode: bool,
}

impl UiModel {
    pub fn new(theme: ThemeMode, language: Language) -> Self {
        Self {
            active_screen: Screen::Home,
            theme,
            language,
            toast: None,
            alert: None,
            should_quit: false,
            vim_mode: false,
        }
    }

    /// Translate a key in the current language
    pub fn tr(&self, key: Key) -> &'static str {
        crate::i18n::tr(self.language, key)
    }

    /// Show a toast message, replacing any existing one
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some((message.into(), Instant::now()));
    }

    /// Show a modal alert dialog
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Dismiss the alert dialog
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
