//! Mood-based plant recommendation
//!
//! Pure filter-and-sort over the static plant table.

use crate::model::types::{Mood, Plant, Recommendation};

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Recommend plants for a mood
///
/// Filters the table to plants tagged with the mood, sorts descending by the
/// mood-specific effectiveness score with an alphabetical tie-break, and
/// returns at most [`MAX_RECOMMENDATIONS`] entries.
pub fn recommend(plants: &[Plant], mood: Mood) -> Vec<Recommendation> {
    let mut matches: Vec<Recommendation> = plants
        .iter()
        .filter(|p| p.moods.contains(&mood))
        .map(|p| Recommendation {
            plant: p.clone(),
            score: p.effectiveness(mood),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.plant.name.to_lowercase().cmp(&b.plant.name.to_lowercase()))
    });

    matches.truncate(MAX_RECOMMENDATIONS);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{CareLevel, Sunlight};

    fn make_plant(
        name: &'static str,
        moods: &'static [Mood],
        calming: u8,
        energizing: u8,
    ) -> Plant {
        Plant {
            name,
            species: "Testus plantus",
            moods,
            calming,
            energizing,
            cheering: 0,
            grounding: 0,
            care_level: CareLevel::Easy,
            water_every_days: 3,
            sunlight: Sunlight::Indirect,
        }
    }

    #[test]
    fn test_only_tagged_plants_are_recommended() {
        let plants = vec![
            make_plant("a", &[Mood::Stressed], 50, 0),
            make_plant("b", &[Mood::Tired], 0, 80),
        ];

        let recs = recommend(&plants, Mood::Stressed);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].plant.name, "a");
    }

    #[test]
    fn test_sorted_descending_by_mood_score() {
        let plants = vec![
            make_plant("weak", &[Mood::Stressed], 10, 0),
            make_plant("strong", &[Mood::Stressed], 90, 0),
            make_plant("mid", &[Mood::Stressed], 50, 0),
        ];

        let recs = recommend(&plants, Mood::Stressed);
        let scores: Vec<u8> = recs.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![90, 50, 10]);
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let plants = vec![
            make_plant("zinnia", &[Mood::Stressed], 50, 0),
            make_plant("aster", &[Mood::Stressed], 50, 0),
        ];

        let recs = recommend(&plants, Mood::Stressed);
        assert_eq!(recs[0].plant.name, "aster");
        assert_eq!(recs[1].plant.name, "zinnia");
    }

    #[test]
    fn test_capped_at_six() {
        let plants: Vec<Plant> = (0..10)
            .map(|i| {
                let name: &'static str =
                    Box::leak(format!("plant{}", i).into_boxed_str());
                make_plant(name, &[Mood::Tired], 0, i as u8)
            })
            .collect();

        let recs = recommend(&plants, Mood::Tired);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_real_table_holds_for_every_mood() {
        let table = crate::data::plants();
        for &mood in Mood::all() {
            let recs = recommend(table, mood);
            assert!(recs.len() <= MAX_RECOMMENDATIONS);

            for rec in &recs {
                // Subset of the table
                assert!(table.iter().any(|p| p.name == rec.plant.name));
                // Score matches the mood field
                assert_eq!(rec.score, rec.plant.effectiveness(mood));
                // Tagged for the mood
                assert!(rec.plant.moods.contains(&mood));
            }

            // Descending by score
            for pair in recs.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
