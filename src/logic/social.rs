//! Gardener directory filtering
//!
//! A record passes when it satisfies all three predicates: within radius,
//! experience filter matches (or is All), garden type matches (or is All,
//! or the record keeps Both).

use crate::model::types::{Experience, ExperienceFilter, Gardener, GardenType, GardenTypeFilter};

/// Check a single gardener against the filters
pub fn gardener_matches(
    gardener: &Gardener,
    radius_km: f64,
    experience: ExperienceFilter,
    garden_type: GardenTypeFilter,
) -> bool {
    if gardener.distance_km > radius_km {
        return false;
    }

    let exp_ok = match experience {
        ExperienceFilter::All => true,
        ExperienceFilter::Only(wanted) => gardener.experience == wanted,
    };
    if !exp_ok {
        return false;
    }

    match garden_type {
        GardenTypeFilter::All => true,
        GardenTypeFilter::Only(wanted) => {
            gardener.garden_type == wanted || gardener.garden_type == GardenType::Both
        }
    }
}

/// Filter the directory, preserving its order (nearest first in the mock data)
pub fn filter_gardeners(
    gardeners: &[Gardener],
    radius_km: f64,
    experience: ExperienceFilter,
    garden_type: GardenTypeFilter,
) -> Vec<Gardener> {
    gardeners
        .iter()
        .filter(|g| gardener_matches(g, radius_km, experience, garden_type))
        .cloned()
        .collect()
}

/// Cycle the experience filter: All → Beginner → Intermediate → Expert → All
pub fn cycle_experience_filter(current: ExperienceFilter) -> ExperienceFilter {
    match current {
        ExperienceFilter::All => ExperienceFilter::Only(Experience::Beginner),
        ExperienceFilter::Only(Experience::Beginner) => {
            ExperienceFilter::Only(Experience::Intermediate)
        }
        ExperienceFilter::Only(Experience::Intermediate) => {
            ExperienceFilter::Only(Experience::Expert)
        }
        ExperienceFilter::Only(Experience::Expert) => ExperienceFilter::All,
    }
}

/// Cycle the garden-type filter: All → Indoor → Outdoor → Both → All
pub fn cycle_type_filter(current: GardenTypeFilter) -> GardenTypeFilter {
    match current {
        GardenTypeFilter::All => GardenTypeFilter::Only(GardenType::Indoor),
        GardenTypeFilter::Only(GardenType::Indoor) => GardenTypeFilter::Only(GardenType::Outdoor),
        GardenTypeFilter::Only(GardenType::Outdoor) => GardenTypeFilter::Only(GardenType::Both),
        GardenTypeFilter::Only(GardenType::Both) => GardenTypeFilter::All,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_gardener(
        name: &'static str,
        distance_km: f64,
        experience: Experience,
        garden_type: GardenType,
    ) -> Gardener {
        Gardener {
            name,
            distance_km,
            experience,
            garden_type,
            specialty: "Test beds",
            plant_count: 1,
        }
    }

    #[test]
    fn test_radius_is_inclusive() {
        let g = make_gardener("edge", 10.0, Experience::Beginner, GardenType::Indoor);
        assert!(gardener_matches(
            &g,
            10.0,
            ExperienceFilter::All,
            GardenTypeFilter::All
        ));
        assert!(!gardener_matches(
            &g,
            9.99,
            ExperienceFilter::All,
            GardenTypeFilter::All
        ));
    }

    #[test]
    fn test_experience_filter() {
        let g = make_gardener("b", 1.0, Experience::Beginner, GardenType::Indoor);
        assert!(gardener_matches(
            &g,
            5.0,
            ExperienceFilter::Only(Experience::Beginner),
            GardenTypeFilter::All
        ));
        assert!(!gardener_matches(
            &g,
            5.0,
            ExperienceFilter::Only(Experience::Expert),
            GardenTypeFilter::All
        ));
    }

    #[test]
    fn test_both_type_matches_any_type_filter() {
        let g = make_gardener("both", 1.0, Experience::Expert, GardenType::Both);
        for filter in [
            GardenTypeFilter::All,
            GardenTypeFilter::Only(GardenType::Indoor),
            GardenTypeFilter::Only(GardenType::Outdoor),
            GardenTypeFilter::Only(GardenType::Both),
        ] {
            assert!(gardener_matches(&g, 5.0, ExperienceFilter::All, filter));
        }
    }

    #[test]
    fn test_indoor_record_fails_outdoor_filter() {
        let g = make_gardener("in", 1.0, Experience::Expert, GardenType::Indoor);
        assert!(!gardener_matches(
            &g,
            5.0,
            ExperienceFilter::All,
            GardenTypeFilter::Only(GardenType::Outdoor)
        ));
    }

    #[test]
    fn test_filter_is_exactly_the_predicate_set() {
        let directory = crate::data::gardeners();

        for radius in [0.0, 5.0, 10.0, 30.0] {
            for exp in [
                ExperienceFilter::All,
                ExperienceFilter::Only(Experience::Beginner),
                ExperienceFilter::Only(Experience::Intermediate),
                ExperienceFilter::Only(Experience::Expert),
            ] {
                for ty in [
                    GardenTypeFilter::All,
                    GardenTypeFilter::Only(GardenType::Indoor),
                    GardenTypeFilter::Only(GardenType::Outdoor),
                    GardenTypeFilter::Only(GardenType::Both),
                ] {
                    let result = filter_gardeners(directory, radius, exp, ty);
                    for g in directory {
                        let in_result = result.iter().any(|r| r.name == g.name);
                        assert_eq!(
                            in_result,
                            gardener_matches(g, radius, exp, ty),
                            "mismatch for {} r={} {:?} {:?}",
                            g.name,
                            radius,
                            exp,
                            ty
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_experience_cycle_returns_to_all() {
        let mut f = ExperienceFilter::All;
        for _ in 0..4 {
            f = cycle_experience_filter(f);
        }
        assert_eq!(f, ExperienceFilter::All);
    }

    #[test]
    fn test_type_cycle_returns_to_all() {
        let mut f = GardenTypeFilter::All;
        for _ in 0..4 {
            f = cycle_type_filter(f);
        }
        assert_eq!(f, GardenTypeFilter::All);
    }
}
