//! Season and festival window mapping

use crate::model::types::{FestivalEvent, Season};

/// Map a calendar month (1-12) to the Indian season
pub fn season_for_month(month: u32) -> Season {
    match month {
        12 | 1 | 2 => Season::Winter,
        3..=5 => Season::Summer,
        6..=9 => Season::Monsoon,
        _ => Season::PostMonsoon,
    }
}

/// Festivals falling this month or next, wrapping over the year end
///
/// Order: this month's festivals first, then next month's.
pub fn upcoming_festivals(festivals: &[FestivalEvent], month: u32) -> Vec<FestivalEvent> {
    let next = if month == 12 { 1 } else { month + 1 };

    let mut result: Vec<FestivalEvent> = festivals
        .iter()
        .filter(|f| f.month == month)
        .cloned()
        .collect();
    result.extend(festivals.iter().filter(|f| f.month == next).cloned());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_month_has_a_season() {
        for month in 1..=12 {
            // Must not panic; spot-check the boundaries
            let _ = season_for_month(month);
        }
        assert_eq!(season_for_month(1), Season::Winter);
        assert_eq!(season_for_month(4), Season::Summer);
        assert_eq!(season_for_month(7), Season::Monsoon);
        assert_eq!(season_for_month(10), Season::PostMonsoon);
        assert_eq!(season_for_month(12), Season::Winter);
    }

    #[test]
    fn test_upcoming_wraps_december_to_january() {
        let fests = crate::data::festivals();
        let upcoming = upcoming_festivals(fests, 12);
        assert!(upcoming.iter().any(|f| f.name == "Christmas"));
        assert!(upcoming.iter().any(|f| f.name == "Makar Sankranti"));
    }

    #[test]
    fn test_upcoming_only_covers_two_months() {
        let fests = crate::data::festivals();
        for month in 1..=12 {
            let next = if month == 12 { 1 } else { month + 1 };
            for f in upcoming_festivals(fests, month) {
                assert!(f.month == month || f.month == next);
            }
        }
    }
}
