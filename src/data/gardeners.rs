//! Mock gardener directory for the social screen

use crate::model::types::{Experience, Gardener, GardenType};

static GARDENERS: &[Gardener] = &[
    Gardener {
        name: "Asha Patil",
        distance_km: 1.2,
        experience: Experience::Expert,
        garden_type: GardenType::Outdoor,
        specialty: "Roses and seasonal flowers",
        plant_count: 64,
    },
    Gardener {
        name: "Ravi Kumar",
        distance_km: 2.8,
        experience: Experience::Beginner,
        garden_type: GardenType::Indoor,
        specialty: "Succulents",
        plant_count: 12,
    },
    Gardener {
        name: "Meera Joshi",
        distance_km: 4.5,
        experience: Experience::Intermediate,
        garden_type: GardenType::Both,
        specialty: "Kitchen herbs",
        plant_count: 30,
    },
    Gardener {
        name: "Suresh Babu",
        distance_km: 6.1,
        experience: Experience::Expert,
        garden_type: GardenType::Outdoor,
        specialty: "Vegetable beds",
        plant_count: 85,
    },
    Gardener {
        name: "Fatima Shaikh",
        distance_km: 7.9,
        experience: Experience::Intermediate,
        garden_type: GardenType::Indoor,
        specialty: "Air-purifying plants",
        plant_count: 22,
    },
    Gardener {
        name: "Dilip Nair",
        distance_km: 9.4,
        experience: Experience::Beginner,
        garden_type: GardenType::Both,
        specialty: "Balcony containers",
        plant_count: 18,
    },
    Gardener {
        name: "Kavita Rao",
        distance_km: 12.3,
        experience: Experience::Expert,
        garden_type: GardenType::Indoor,
        specialty: "Orchids",
        plant_count: 47,
    },
    Gardener {
        name: "Harpreet Singh",
        distance_km: 15.0,
        experience: Experience::Intermediate,
        garden_type: GardenType::Outdoor,
        specialty: "Fruit trees",
        plant_count: 39,
    },
    Gardener {
        name: "Lata Deshmukh",
        distance_km: 18.7,
        experience: Experience::Beginner,
        garden_type: GardenType::Indoor,
        specialty: "Low-light foliage",
        plant_count: 9,
    },
    Gardener {
        name: "Thomas George",
        distance_km: 24.2,
        experience: Experience::Expert,
        garden_type: GardenType::Both,
        specialty: "Bonsai",
        plant_count: 53,
    },
];

/// The full mock gardener directory
pub fn gardeners() -> &'static [Gardener] {
    GARDENERS
}
