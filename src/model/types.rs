//! Domain value types shared across model, logic, data, and ui

use serde::Serialize;

use crate::i18n::Key;

/// User mood driving plant recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mood {
    Stressed,
    Tired,
    Sad,
    Restless,
}

impl Mood {
    pub fn all() -> &'static [Mood] {
        &[Mood::Stressed, Mood::Tired, Mood::Sad, Mood::Restless]
    }

    pub fn label_key(&self) -> Key {
        match self {
            Mood::Stressed => Key::MoodStressed,
            Mood::Tired => Key::MoodTired,
            Mood::Sad => Key::MoodSad,
            Mood::Restless => Key::MoodRestless,
        }
    }
}

/// How demanding a plant is to keep alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CareLevel {
    Easy,
    Moderate,
    Demanding,
}

impl CareLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareLevel::Easy => "Easy",
            CareLevel::Moderate => "Moderate",
            CareLevel::Demanding => "Demanding",
        }
    }
}

/// Sunlight a plant needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sunlight {
    Low,
    Indirect,
    Direct,
}

impl Sunlight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sunlight::Low => "Low light",
            Sunlight::Indirect => "Indirect",
            Sunlight::Direct => "Direct sun",
        }
    }
}

/// One entry in the static plant table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plant {
    pub name: &'static str,
    pub species: &'static str,
    /// Moods this plant is tagged for
    pub moods: &'static [Mood],
    /// Per-mood effectiveness, 0-100
    pub calming: u8,
    pub energizing: u8,
    pub cheering: u8,
    pub grounding: u8,
    pub care_level: CareLevel,
    /// Days between waterings
    pub water_every_days: u8,
    pub sunlight: Sunlight,
}

impl Plant {
    /// Effectiveness score for the given mood (0-100)
    pub fn effectiveness(&self, mood: Mood) -> u8 {
        match mood {
            Mood::Stressed => self.calming,
            Mood::Tired => self.energizing,
            Mood::Sad => self.cheering,
            Mood::Restless => self.grounding,
        }
    }
}

/// A recommended plant with its score for the selected mood
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub plant: Plant,
    pub score: u8,
}

/// Simulated weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
    Thunderstorm,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Thunderstorm => "Thunderstorm",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀",
            WeatherCondition::PartlyCloudy => "⛅",
            WeatherCondition::Cloudy => "☁",
            WeatherCondition::Rain => "🌧",
            WeatherCondition::Thunderstorm => "⛈",
        }
    }
}

/// One day in the simulated forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayForecast {
    pub day: String,
    pub condition: WeatherCondition,
    pub high_c: i8,
    pub low_c: i8,
    pub humidity_pct: u8,
    pub rain_pct: u8,
    pub tip: String,
}

/// One simulated mandi price quote (rupees per quintal)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub commodity: String,
    pub yard: String,
    pub min_rs: u32,
    pub max_rs: u32,
    pub modal_rs: u32,
}

/// Gardener experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Experience {
    Beginner,
    Intermediate,
    Expert,
}

impl Experience {
    pub fn label_key(&self) -> Key {
        match self {
            Experience::Beginner => Key::ExpBeginner,
            Experience::Intermediate => Key::ExpIntermediate,
            Experience::Expert => Key::ExpExpert,
        }
    }
}

/// What kind of garden a gardener keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GardenType {
    Indoor,
    Outdoor,
    Both,
}

impl GardenType {
    pub fn label_key(&self) -> Key {
        match self {
            GardenType::Indoor => Key::TypeIndoor,
            GardenType::Outdoor => Key::TypeOutdoor,
            GardenType::Both => Key::TypeBoth,
        }
    }
}

/// One entry in the mock gardener directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gardener {
    pub name: &'static str,
    pub distance_km: f64,
    pub experience: Experience,
    pub garden_type: GardenType,
    pub specialty: &'static str,
    pub plant_count: u16,
}

/// Experience filter on the social screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceFilter {
    #[default]
    All,
    Only(Experience),
}

/// Garden-type filter on the social screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GardenTypeFilter {
    #[default]
    All,
    Only(GardenType),
}

/// Light quality bucket, ordered from darkest to brightest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LightQuality {
    VeryLow,
    Low,
    Moderate,
    Bright,
    VeryBright,
}

impl LightQuality {
    /// Ordinal position, 0 = darkest
    pub fn ordinal(&self) -> u8 {
        match self {
            LightQuality::VeryLow => 0,
            LightQuality::Low => 1,
            LightQuality::Moderate => 2,
            LightQuality::Bright => 3,
            LightQuality::VeryBright => 4,
        }
    }

    pub fn label_key(&self) -> Key {
        match self {
            LightQuality::VeryLow => Key::LightVeryLow,
            LightQuality::Low => Key::LightLow,
            LightQuality::Moderate => Key::LightModerate,
            LightQuality::Bright => Key::LightBright,
            LightQuality::VeryBright => Key::LightVeryBright,
        }
    }
}

/// Indian season, derived from the calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
    PostMonsoon,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::PostMonsoon => "Post-monsoon",
        }
    }
}

/// A festival with decoration suggestions
#[derive(Debug, Clone, PartialEq)]
pub struct FestivalEvent {
    pub name: &'static str,
    /// Calendar month (1-12) the festival usually falls in
    pub month: u32,
    pub plants: &'static [&'static str],
    pub idea: &'static str,
}
