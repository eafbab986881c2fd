//! Social sub-model: gardener directory and match filters

use crate::model::types::{ExperienceFilter, Gardener, GardenTypeFilter};

/// Default search radius in kilometres
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Radius adjustment step
pub const RADIUS_STEP_KM: f64 = 2.5;

#[derive(Clone, Debug)]
pub struct SocialModel {
    /// Full mock directory, never mutated
    pub gardeners: Vec<Gardener>,

    /// Search radius in kilometres
    pub radius_km: f64,

    pub experience_filter: ExperienceFilter,
    pub type_filter: GardenTypeFilter,

    /// Records passing the current filters, recomputed on filter change
    pub matches: Vec<Gardener>,

    /// Selected row in the match list
    pub selected: Option<usize>,
}

impl SocialModel {
    pub fn new() -> Self {
        let gardeners = crate::data::gardeners().to_vec();
        let mut model = Self {
            gardeners,
            radius_km: DEFAULT_RADIUS_KM,
            experience_filter: ExperienceFilter::All,
            type_filter: GardenTypeFilter::All,
            matches: Vec::new(),
            selected: None,
        };
        model.refilter();
        model
    }

    /// Recompute matches from the current filters
    pub fn refilter(&mut self) {
        self.matches = crate::logic::social::filter_gardeners(
            &self.gardeners,
            self.radius_km,
            self.experience_filter,
            self.type_filter,
        );
        self.selected = if self.matches.is_empty() { None } else { Some(0) };
    }
}

impl Default for SocialModel {
    fn default() -> Self {
        Self::new()
    }
}
