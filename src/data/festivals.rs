//! Festival calendar with decoration suggestions

use crate::model::types::FestivalEvent;

static FESTIVALS: &[FestivalEvent] = &[
    FestivalEvent {
        name: "Makar Sankranti",
        month: 1,
        plants: &["Marigold", "Sugarcane stalks"],
        idea: "Tie marigold garlands with sugarcane at the entrance",
    },
    FestivalEvent {
        name: "Holi",
        month: 3,
        plants: &["Palash", "Marigold"],
        idea: "A bowl of floating palash blooms doubles as natural colour",
    },
    FestivalEvent {
        name: "Onam",
        month: 8,
        plants: &["Marigold", "Chrysanthemum", "Rose petals"],
        idea: "Lay a pookalam of concentric petal rings at the doorstep",
    },
    FestivalEvent {
        name: "Ganesh Chaturthi",
        month: 9,
        plants: &["Hibiscus", "Durva grass", "Marigold"],
        idea: "Frame the idol nook with hibiscus and durva bundles",
    },
    FestivalEvent {
        name: "Navratri",
        month: 10,
        plants: &["Barley sprouts", "Jasmine"],
        idea: "Sprout barley in a clay tray for the nine nights",
    },
    FestivalEvent {
        name: "Diwali",
        month: 11,
        plants: &["Marigold", "Mango leaves", "Rose petals"],
        idea: "String mango-leaf torans above doors, rangoli ringed with diyas",
    },
    FestivalEvent {
        name: "Christmas",
        month: 12,
        plants: &["Poinsettia", "Araucaria"],
        idea: "A potted araucaria takes fairy lights better than cut trees",
    },
];

/// Festival calendar ordered by month
pub fn festivals() -> &'static [FestivalEvent] {
    FESTIVALS
}
