//! English translations

use super::Key;

pub(super) fn lookup(key: Key) -> &'static str {
    match key {
        // App
        Key::AppName => "Sathi",
        Key::Tagline => "Your gardening companion",

        // Screen titles
        Key::ScreenHome => "Home",
        Key::ScreenWeather => "Weather",
        Key::ScreenMarket => "Market",
        Key::ScreenDecor => "Decor",
        Key::ScreenScan => "Light Scan",
        Key::ScreenSocial => "Gardeners",
        Key::ScreenExport => "Export",
        Key::ScreenSettings => "Settings",

        // Moods
        Key::MoodStressed => "Stressed",
        Key::MoodTired => "Tired",
        Key::MoodSad => "Feeling low",
        Key::MoodRestless => "Restless",

        // Home screen
        Key::HomePickMood => "How are you feeling today?",
        Key::HomeRecommended => "Recommended plants",
        Key::HomeEffectiveness => "Effect",
        Key::HomeCareLevel => "Care",
        Key::HomeWater => "Water",
        Key::HomeSunlight => "Sunlight",

        // Weather screen
        Key::WeatherForecast => "5-day forecast",
        Key::WeatherHumidity => "Humidity",
        Key::WeatherRainChance => "Rain",
        Key::WeatherCareTip => "Care tip",
        Key::WeatherLoading => "Fetching forecast...",
        Key::WeatherNotLoaded => "Press r to fetch the forecast",

        // Market screen
        Key::MarketPrices => "Mandi prices",
        Key::MarketCommodity => "Commodity",
        Key::MarketModalPrice => "Modal",
        Key::MarketRange => "Min-Max",
        Key::MarketYard => "Market yard",
        Key::MarketLoading => "Fetching prices...",
        Key::MarketNotLoaded => "Press r to fetch today's prices",

        // Decor screen
        Key::DecorUpcoming => "Upcoming festivals",
        Key::DecorSeasonNow => "Season",
        Key::DecorIdeas => "Decoration ideas",

        // Scan screen
        Key::ScanPrompt => "Press s to scan the light at this spot",
        Key::ScanScanning => "Reading light sensor...",
        Key::ScanResult => "Readings",
        Key::ScanAverage => "Average",
        Key::ScanSuggestion => "Good for",
        Key::ScanPermissionDenied => {
            "Sensor permission denied. Allow sensor access in device settings and try again."
        }

        // Light quality labels
        Key::LightVeryLow => "Very low",
        Key::LightLow => "Low",
        Key::LightModerate => "Moderate",
        Key::LightBright => "Bright",
        Key::LightVeryBright => "Very bright",

        // Social screen
        Key::SocialNearby => "Gardeners near you",
        Key::SocialRadius => "Radius",
        Key::SocialExperience => "Experience",
        Key::SocialGardenType => "Garden",
        Key::SocialDistance => "away",
        Key::SocialNoMatches => "No gardeners match the current filters",
        Key::FilterAll => "All",
        Key::ExpBeginner => "Beginner",
        Key::ExpIntermediate => "Intermediate",
        Key::ExpExpert => "Expert",
        Key::TypeIndoor => "Indoor",
        Key::TypeOutdoor => "Outdoor",
        Key::TypeBoth => "Both",

        // Export screen
        Key::ExportPrompt => "Press Enter to export your garden snapshot as JSON",
        Key::ExportDone => "Exported to",
        Key::ExportFailed => "Error: export failed",

        // Settings screen
        Key::SettingsTheme => "Theme",
        Key::SettingsLanguage => "Language",
        Key::ThemeDark => "Dark",
        Key::ThemeLight => "Light",
        Key::SettingsSaved => "Preference saved",

        // Legend
        Key::LegendQuit => "Quit",
        Key::LegendTabs => "Screens",
        Key::LegendNavigate => "Nav",
        Key::LegendRefresh => "Refresh",
        Key::LegendScan => "Scan",
        Key::LegendExport => "Export",
        Key::LegendMood => "Mood",
        Key::LegendTheme => "Theme",
        Key::LegendLanguage => "Language",
        Key::LegendDismiss => "Dismiss",
    }
}
