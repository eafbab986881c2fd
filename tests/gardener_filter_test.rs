//! Tests for gardener matching
//!
//! Property: for every filter combination, the result is exactly the set of
//! records satisfying distance <= radius AND (experience filter is All OR
//! matches) AND (type filter is All OR matches OR record type is Both).

use sathi::data;
use sathi::logic::social::{filter_gardeners, gardener_matches};
use sathi::model::types::{Experience, ExperienceFilter, GardenType, GardenTypeFilter};
use sathi::model::SocialModel;

fn experience_filters() -> Vec<ExperienceFilter> {
    vec![
        ExperienceFilter::All,
        ExperienceFilter::Only(Experience::Beginner),
        ExperienceFilter::Only(Experience::Intermediate),
        ExperienceFilter::Only(Experience::Expert),
    ]
}

fn type_filters() -> Vec<GardenTypeFilter> {
    vec![
        GardenTypeFilter::All,
        GardenTypeFilter::Only(GardenType::Indoor),
        GardenTypeFilter::Only(GardenType::Outdoor),
        GardenTypeFilter::Only(GardenType::Both),
    ]
}

#[test]
fn test_result_is_exactly_the_predicate_set() {
    let directory = data::gardeners();

    for radius in [0.0, 2.0, 7.9, 10.0, 18.7, 100.0] {
        for exp in experience_filters() {
            for ty in type_filters() {
                let result = filter_gardeners(directory, radius, exp, ty);

                for gardener in directory {
                    let expected = gardener.distance_km <= radius
                        && match exp {
                            ExperienceFilter::All => true,
                            ExperienceFilter::Only(e) => gardener.experience == e,
                        }
                        && match ty {
                            GardenTypeFilter::All => true,
                            GardenTypeFilter::Only(t) => {
                                gardener.garden_type == t
                                    || gardener.garden_type == GardenType::Both
                            }
                        };

                    let actual = result.iter().any(|g| g.name == gardener.name);
                    assert_eq!(
                        actual, expected,
                        "wrong verdict for {} (radius {}, {:?}, {:?})",
                        gardener.name, radius, exp, ty
                    );

                    assert_eq!(
                        expected,
                        gardener_matches(gardener, radius, exp, ty),
                        "predicate disagrees with spec for {}",
                        gardener.name
                    );
                }
            }
        }
    }
}

#[test]
fn test_zero_radius_matches_nobody() {
    let result = filter_gardeners(
        data::gardeners(),
        0.0,
        ExperienceFilter::All,
        GardenTypeFilter::All,
    );
    assert!(result.is_empty());
}

#[test]
fn test_model_refilter_tracks_filters() {
    let mut social = SocialModel::new();
    let all_within_default = social.matches.len();
    assert!(all_within_default > 0);

    // Widening the radius can only grow the match set
    social.radius_km = 100.0;
    social.refilter();
    assert!(social.matches.len() >= all_within_default);
    assert_eq!(social.matches.len(), social.gardeners.len());

    // Narrow filter shrinks it again and resets the selection
    social.experience_filter = ExperienceFilter::Only(Experience::Expert);
    social.refilter();
    assert!(social.matches.len() < social.gardeners.len());
    assert!(social.matches.iter().all(|g| g.experience == Experience::Expert));
    assert_eq!(social.selected, Some(0));
}
