//! The plant table behind mood recommendations

use crate::model::types::{CareLevel, Mood, Plant, Sunlight};

use Mood::{Restless, Sad, Stressed, Tired};

static PLANTS: &[Plant] = &[
    Plant {
        name: "Tulsi",
        species: "Ocimum tenuiflorum",
        moods: &[Stressed, Restless],
        calming: 92,
        energizing: 40,
        cheering: 55,
        grounding: 88,
        care_level: CareLevel::Easy,
        water_every_days: 2,
        sunlight: Sunlight::Direct,
    },
    Plant {
        name: "Lavender",
        species: "Lavandula angustifolia",
        moods: &[Stressed, Restless],
        calming: 95,
        energizing: 30,
        cheering: 60,
        grounding: 70,
        care_level: CareLevel::Moderate,
        water_every_days: 4,
        sunlight: Sunlight::Direct,
    },
    Plant {
        name: "Snake Plant",
        species: "Dracaena trifasciata",
        moods: &[Stressed, Tired],
        calming: 70,
        energizing: 65,
        cheering: 40,
        grounding: 60,
        care_level: CareLevel::Easy,
        water_every_days: 10,
        sunlight: Sunlight::Low,
    },
    Plant {
        name: "Areca Palm",
        species: "Dypsis lutescens",
        moods: &[Tired, Sad],
        calming: 55,
        energizing: 85,
        cheering: 75,
        grounding: 45,
        care_level: CareLevel::Moderate,
        water_every_days: 3,
        sunlight: Sunlight::Indirect,
    },
    Plant {
        name: "Jasmine",
        species: "Jasminum sambac",
        moods: &[Sad, Stressed],
        calming: 80,
        energizing: 50,
        cheering: 90,
        grounding: 55,
        care_level: CareLevel::Moderate,
        water_every_days: 2,
        sunlight: Sunlight::Direct,
    },
    Plant {
        name: "Marigold",
        species: "Tagetes erecta",
        moods: &[Sad, Tired],
        calming: 45,
        energizing: 75,
        cheering: 95,
        grounding: 40,
        care_level: CareLevel::Easy,
        water_every_days: 2,
        sunlight: Sunlight::Direct,
    },
    Plant {
        name: "Aloe Vera",
        species: "Aloe barbadensis",
        moods: &[Tired, Restless],
        calming: 50,
        energizing: 70,
        cheering: 45,
        grounding: 75,
        care_level: CareLevel::Easy,
        water_every_days: 14,
        sunlight: Sunlight::Indirect,
    },
    Plant {
        name: "Peace Lily",
        species: "Spathiphyllum wallisii",
        moods: &[Stressed, Sad, Restless],
        calming: 85,
        energizing: 35,
        cheering: 70,
        grounding: 80,
        care_level: CareLevel::Easy,
        water_every_days: 5,
        sunlight: Sunlight::Low,
    },
];

/// The full static plant table
pub fn plants() -> &'static [Plant] {
    PLANTS
}
