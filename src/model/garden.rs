//! Garden sub-model: selected mood and its plant recommendations

use crate::model::types::{Mood, Recommendation};

#[derive(Clone, Debug)]
pub struct GardenModel {
    /// Mood the user picked
    pub mood: Mood,

    /// Recommendations for the current mood, recomputed on mood change
    pub recommendations: Vec<Recommendation>,

    /// Selected row in the recommendation list
    pub selected: Option<usize>,
}

impl GardenModel {
    pub fn new() -> Self {
        let mood = Mood::Stressed;
        let recommendations = crate::logic::recommend::recommend(crate::data::plants(), mood);
        Self {
            mood,
            recommendations,
            selected: Some(0),
        }
    }

    /// Switch mood and recompute recommendations
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
        self.recommendations = crate::logic::recommend::recommend(crate::data::plants(), mood);
        self.selected = if self.recommendations.is_empty() {
            None
        } else {
            Some(0)
        };
    }
}

impl Default for GardenModel {
    fn default() -> Self {
        Self::new()
    }
}
