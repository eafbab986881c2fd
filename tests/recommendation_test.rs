//! Tests for mood-based plant recommendations
//!
//! Property: for every mood, the recommended list is a subset of the static
//! plant table, sorted descending by the mood-specific effectiveness field,
//! and at most 6 entries long.

use sathi::data;
use sathi::logic::recommend::{recommend, MAX_RECOMMENDATIONS};
use sathi::model::types::Mood;
use sathi::model::GardenModel;

#[test]
fn test_recommendations_are_subset_sorted_and_capped() {
    let table = data::plants();

    for &mood in Mood::all() {
        let recs = recommend(table, mood);

        assert!(recs.len() <= MAX_RECOMMENDATIONS);

        for rec in &recs {
            let original = table
                .iter()
                .find(|p| p.name == rec.plant.name)
                .expect("recommendation not in the plant table");
            assert_eq!(&rec.plant, original);
            assert_eq!(rec.score, original.effectiveness(mood));
        }

        for pair in recs.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "recommendations not sorted descending for {:?}",
                mood
            );
        }
    }
}

#[test]
fn test_untagged_plants_never_recommended() {
    let table = data::plants();

    for &mood in Mood::all() {
        for rec in recommend(table, mood) {
            assert!(
                rec.plant.moods.contains(&mood),
                "{} recommended for {:?} without the tag",
                rec.plant.name,
                mood
            );
        }
    }
}

#[test]
fn test_mood_switch_recomputes_recommendations() {
    let mut garden = GardenModel::new();
    assert_eq!(garden.mood, Mood::Stressed);
    let stressed_recs = garden.recommendations.clone();

    garden.set_mood(Mood::Tired);
    assert_eq!(garden.mood, Mood::Tired);
    assert_ne!(garden.recommendations, stressed_recs);

    // Switching back restores the original list (pure function of mood)
    garden.set_mood(Mood::Stressed);
    assert_eq!(garden.recommendations, stressed_recs);
}
