//! UI state transition logic
//!
//! Pure functions for cycling screens, moods, theme, and language, plus the
//! toast dismissal rule.

use crate::i18n::Language;
use crate::model::types::Mood;
use crate::{Screen, ThemeMode};

/// Toast lifetime in milliseconds
pub const TOAST_DURATION_MS: u128 = 1500;

/// Whether a toast should be dismissed given its age
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Next screen in tab order, wrapping
pub fn next_screen(current: Screen) -> Screen {
    let all = Screen::all();
    all[(current.index() + 1) % all.len()]
}

/// Previous screen in tab order, wrapping
pub fn prev_screen(current: Screen) -> Screen {
    let all = Screen::all();
    all[(current.index() + all.len() - 1) % all.len()]
}

/// Next mood in display order, wrapping
pub fn next_mood(current: Mood) -> Mood {
    let all = Mood::all();
    let idx = all.iter().position(|m| *m == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

/// Previous mood in display order, wrapping
pub fn prev_mood(current: Mood) -> Mood {
    let all = Mood::all();
    let idx = all.iter().position(|m| *m == current).unwrap_or(0);
    all[(idx + all.len() - 1) % all.len()]
}

/// Toggle the color theme
pub fn toggle_theme(current: ThemeMode) -> ThemeMode {
    match current {
        ThemeMode::Dark => ThemeMode::Light,
        ThemeMode::Light => ThemeMode::Dark,
    }
}

/// Cycle to the next language
pub fn next_language(current: Language) -> Language {
    let all = Language::all();
    let idx = all.iter().position(|l| *l == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

/// Move a list selection by delta, clamped to the list bounds
pub fn move_selection(selected: Option<usize>, len: usize, delta: i64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = selected.unwrap_or(0) as i64;
    let next = (current + delta).clamp(0, len as i64 - 1);
    Some(next as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismissal_threshold() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(1499));
        assert!(should_dismiss_toast(1500));
        assert!(should_dismiss_toast(10_000));
    }

    #[test]
    fn test_screen_cycle_covers_all_and_wraps() {
        let mut screen = Screen::Home;
        for _ in 0..Screen::all().len() {
            screen = next_screen(screen);
        }
        assert_eq!(screen, Screen::Home);

        assert_eq!(prev_screen(Screen::Home), Screen::Settings);
        assert_eq!(next_screen(Screen::Settings), Screen::Home);
    }

    #[test]
    fn test_mood_cycle_is_inverse() {
        for &mood in Mood::all() {
            assert_eq!(prev_mood(next_mood(mood)), mood);
        }
    }

    #[test]
    fn test_theme_toggle_roundtrip() {
        assert_eq!(toggle_theme(toggle_theme(ThemeMode::Dark)), ThemeMode::Dark);
        assert_eq!(toggle_theme(ThemeMode::Dark), ThemeMode::Light);
    }

    #[test]
    fn test_language_cycle_wraps() {
        let mut lang = Language::English;
        for _ in 0..Language::all().len() {
            lang = next_language(lang);
        }
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_move_selection_clamps() {
        assert_eq!(move_selection(Some(0), 3, -1), Some(0));
        assert_eq!(move_selection(Some(2), 3, 1), Some(2));
        assert_eq!(move_selection(Some(1), 3, 1), Some(2));
        assert_eq!(move_selection(None, 3, 1), Some(1));
        assert_eq!(move_selection(Some(0), 0, 1), None);
    }
}
