//! Care tips keyed to weather and light conditions

use crate::model::types::{LightQuality, WeatherCondition};

/// Care tip shown next to a forecast day
pub fn care_tip_for(condition: WeatherCondition) -> &'static str {
    match condition {
        WeatherCondition::Sunny => "Water early morning; shade tender seedlings at noon",
        WeatherCondition::PartlyCloudy => "Good day for repotting and pruning",
        WeatherCondition::Cloudy => "Hold off on watering; check soil moisture first",
        WeatherCondition::Rain => "Skip watering; clear drainage holes and saucers",
        WeatherCondition::Thunderstorm => "Move balcony pots in; stake tall plants",
    }
}

/// Which plants suit a light quality bucket
pub fn suggestion_for_light(quality: LightQuality) -> &'static str {
    match quality {
        LightQuality::VeryLow => "Snake plant, ZZ plant",
        LightQuality::Low => "Peace lily, pothos",
        LightQuality::Moderate => "Areca palm, ferns",
        LightQuality::Bright => "Tulsi, jasmine",
        LightQuality::VeryBright => "Marigold, aloe vera, bougainvillea",
    }
}
