//! Tests for preference persistence
//!
//! Property: writing a theme value and reloading yields the same value;
//! absence of a stored value falls back to the built-in default.

use sathi::i18n::Language;
use sathi::prefs::{PrefsDb, KEY_LANGUAGE, KEY_THEME};
use sathi::ThemeMode;

#[test]
fn test_theme_roundtrip_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("prefs.db");

    {
        let db = PrefsDb::open_at(&db_path).unwrap();
        db.set(KEY_THEME, "light").unwrap();
    }

    // Reopen: same value comes back
    let db = PrefsDb::open_at(&db_path).unwrap();
    let stored = db.get(KEY_THEME).unwrap();
    assert_eq!(stored.as_deref(), Some("light"));
    assert_eq!(ThemeMode::from_pref(stored.as_deref().unwrap()), ThemeMode::Light);
}

#[test]
fn test_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let db = PrefsDb::open_at(&dir.path().join("prefs.db")).unwrap();

    db.set(KEY_LANGUAGE, "en").unwrap();
    db.set(KEY_LANGUAGE, "hi").unwrap();

    assert_eq!(db.get(KEY_LANGUAGE).unwrap().as_deref(), Some("hi"));
}

#[test]
fn test_absent_value_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let db = PrefsDb::open_at(&dir.path().join("prefs.db")).unwrap();

    assert_eq!(db.get(KEY_THEME).unwrap(), None);

    // The fallback chain ends at the built-in defaults
    let theme = db
        .get(KEY_THEME)
        .unwrap()
        .map(|v| ThemeMode::from_pref(&v))
        .unwrap_or_default();
    assert_eq!(theme, ThemeMode::Dark);

    let lang = db
        .get(KEY_LANGUAGE)
        .unwrap()
        .map(|v| Language::from_pref(&v))
        .unwrap_or_default();
    assert_eq!(lang, Language::English);
}

#[test]
fn test_corrupt_value_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let db = PrefsDb::open_at(&dir.path().join("prefs.db")).unwrap();

    db.set(KEY_THEME, "mauve").unwrap();
    let theme = ThemeMode::from_pref(&db.get(KEY_THEME).unwrap().unwrap());
    assert_eq!(theme, ThemeMode::Dark);
}
