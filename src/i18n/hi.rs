//! Hindi translations
//!
//! Returns None for keys without a Hindi entry; the lookup in mod.rs falls
//! back to English.

use super::Key;

pub(super) fn lookup(key: Key) -> Option<&'static str> {
    let s = match key {
        // App
        Key::AppName => "साथी",
        Key::Tagline => "आपका बागवानी साथी",

        // Screen titles
        Key::ScreenHome => "होम",
        Key::ScreenWeather => "मौसम",
        Key::ScreenMarket => "मंडी",
        Key::ScreenDecor => "सजावट",
        Key::ScreenScan => "रोशनी जांच",
        Key::ScreenSocial => "माली",
        Key::ScreenExport => "निर्यात",
        Key::ScreenSettings => "सेटिंग्स",

        // Moods
        Key::MoodStressed => "तनाव में",
        Key::MoodTired => "थके हुए",
        Key::MoodSad => "उदास",
        Key::MoodRestless => "बेचैन",

        // Home screen
        Key::HomePickMood => "आज आप कैसा महसूस कर रहे हैं?",
        Key::HomeRecommended => "सुझाए गए पौधे",
        Key::HomeEffectiveness => "असर",
        Key::HomeCareLevel => "देखभाल",
        Key::HomeWater => "पानी",
        Key::HomeSunlight => "धूप",

        // Weather screen
        Key::WeatherForecast => "5 दिन का पूर्वानुमान",
        Key::WeatherHumidity => "नमी",
        Key::WeatherRainChance => "बारिश",
        Key::WeatherCareTip => "देखभाल सुझाव",
        Key::WeatherLoading => "पूर्वानुमान लाया जा रहा है...",
        Key::WeatherNotLoaded => "पूर्वानुमान के लिए r दबाएं",

        // Market screen
        Key::MarketPrices => "मंडी भाव",
        Key::MarketCommodity => "फसल",
        Key::MarketModalPrice => "मोडल भाव",
        Key::MarketRange => "न्यूनतम-अधिकतम",
        Key::MarketYard => "मंडी",
        Key::MarketLoading => "भाव लाए जा रहे हैं...",
        Key::MarketNotLoaded => "आज के भाव के लिए r दबाएं",

        // Decor screen
        Key::DecorUpcoming => "आने वाले त्योहार",
        Key::DecorSeasonNow => "मौसम",
        Key::DecorIdeas => "सजावट के सुझाव",

        // Scan screen
        Key::ScanPrompt => "इस जगह की रोशनी जांचने के लिए s दबाएं",
        Key::ScanScanning => "रोशनी मापी जा रही है...",
        Key::ScanResult => "माप",
        Key::ScanAverage => "औसत",
        Key::ScanSuggestion => "उपयुक्त पौधे",
        Key::ScanPermissionDenied => {
            "सेंसर की अनुमति नहीं मिली। डिवाइस सेटिंग्स में अनुमति देकर फिर से कोशिश करें।"
        }

        // Light quality labels
        Key::LightVeryLow => "बहुत कम",
        Key::LightLow => "कम",
        Key::LightModerate => "मध्यम",
        Key::LightBright => "अच्छी",
        Key::LightVeryBright => "बहुत तेज",

        // Social screen
        Key::SocialNearby => "आपके पास के माली",
        Key::SocialRadius => "दायरा",
        Key::SocialExperience => "अनुभव",
        Key::SocialGardenType => "बगीचा",
        Key::SocialDistance => "दूर",
        Key::SocialNoMatches => "इन फ़िल्टरों से कोई माली नहीं मिला",
        Key::FilterAll => "सभी",
        Key::ExpBeginner => "नौसिखिया",
        Key::ExpIntermediate => "मध्यम",
        Key::ExpExpert => "अनुभवी",
        Key::TypeIndoor => "भीतरी",
        Key::TypeOutdoor => "बाहरी",
        Key::TypeBoth => "दोनों",

        // Export screen
        Key::ExportPrompt => "अपने बगीचे का स्नैपशॉट JSON में निर्यात करने के लिए Enter दबाएं",
        Key::ExportDone => "निर्यात हुआ:",
        Key::ExportFailed => "Error: निर्यात विफल",

        // Settings screen
        Key::SettingsTheme => "थीम",
        Key::SettingsLanguage => "भाषा",
        Key::ThemeDark => "डार्क",
        Key::ThemeLight => "लाइट",
        Key::SettingsSaved => "पसंद सहेजी गई",

        // Legend
        Key::LegendQuit => "बाहर",
        Key::LegendTabs => "स्क्रीन",
        Key::LegendNavigate => "चुनें",
        Key::LegendRefresh => "ताज़ा करें",
        Key::LegendScan => "जांच",
        Key::LegendExport => "निर्यात",
        Key::LegendMood => "मनोदशा",
        Key::LegendTheme => "थीम",
        Key::LegendLanguage => "भाषा",
        Key::LegendDismiss => "बंद करें",
    };
    Some(s)
}
