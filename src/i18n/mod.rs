//! Internationalization support
//!
//! Structure:
//! - mod.rs: Core types (Language, Key) and translation lookup
//! - en.rs: English translations
//! - hi.rs: Hindi translations

mod en;
mod hi;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
        }
    }

    /// Get language code, as stored in the preference store
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    /// Parse a stored preference value; unknown codes fall back to default
    pub fn from_pref(value: &str) -> Language {
        match value {
            "hi" => Language::Hindi,
            _ => Language::English,
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Hindi]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,
    Tagline,

    // Screen titles
    ScreenHome,
    ScreenWeather,
    ScreenMarket,
    ScreenDecor,
    ScreenScan,
    ScreenSocial,
    ScreenExport,
    ScreenSettings,

    // Moods
    MoodStressed,
    MoodTired,
    MoodSad,
    MoodRestless,

    // Home screen
    HomePickMood,
    HomeRecommended,
    HomeEffectiveness,
    HomeCareLevel,
    HomeWater,
    HomeSunlight,

    // Weather screen
    WeatherForecast,
    WeatherHumidity,
    WeatherRainChance,
    WeatherCareTip,
    WeatherLoading,
    WeatherNotLoaded,

    // Market screen
    MarketPrices,
    MarketCommodity,
    MarketModalPrice,
    MarketRange,
    MarketYard,
    MarketLoading,
    MarketNotLoaded,

    // Decor screen
    DecorUpcoming,
    DecorSeasonNow,
    DecorIdeas,

    // Scan screen
    ScanPrompt,
    ScanScanning,
    ScanResult,
    ScanAverage,
    ScanSuggestion,
    ScanPermissionDenied,

    // Light quality labels
    LightVeryLow,
    LightLow,
    LightModerate,
    LightBright,
    LightVeryBright,

    // Social screen
    SocialNearby,
    SocialRadius,
    SocialExperience,
    SocialGardenType,
    SocialDistance,
    SocialNoMatches,
    FilterAll,
    ExpBeginner,
    ExpIntermediate,
    ExpExpert,
    TypeIndoor,
    TypeOutdoor,
    TypeBoth,

    // Export screen
    ExportPrompt,
    ExportDone,
    ExportFailed,

    // Settings screen
    SettingsTheme,
    SettingsLanguage,
    ThemeDark,
    ThemeLight,
    SettingsSaved,

    // Legend
    LegendQuit,
    LegendTabs,
    LegendNavigate,
    LegendRefresh,
    LegendScan,
    LegendExport,
    LegendMood,
    LegendTheme,
    LegendLanguage,
    LegendDismiss,
}

/// Look up the translation for a key in the given language
///
/// Falls back to English when a language table has no entry.
pub fn tr(lang: Language, key: Key) -> &'static str {
    match lang {
        Language::English => en::lookup(key),
        Language::Hindi => hi::lookup(key).unwrap_or_else(|| en::lookup(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_roundtrip() {
        for lang in Language::all() {
            assert_eq!(Language::from_pref(lang.code()), *lang);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_pref("zz"), Language::English);
        assert_eq!(Language::from_pref(""), Language::English);
    }

    #[test]
    fn test_tr_never_empty() {
        for lang in Language::all() {
            assert!(!tr(*lang, Key::AppName).is_empty());
            assert!(!tr(*lang, Key::ScreenHome).is_empty());
            assert!(!tr(*lang, Key::ScanPermissionDenied).is_empty());
        }
    }
}
