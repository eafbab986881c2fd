//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application,
//! organized into focused sub-models:
//!
//! - **UiModel**: active screen, theme, language, toast, alert dialog
//! - **GardenModel**: selected mood and plant recommendations
//! - **OutlookModel**: simulated weather forecast and market prices
//! - **SocialModel**: gardener directory and match filters
//! - **ScanModel**: light scan state and readings
//!
//! Key principles:
//! - Clone + Debug: state can be snapshotted in tests
//! - No services: all I/O lives in the App runtime
//! - Pure accessors: helper methods are side-effect free

pub mod garden;
pub mod outlook;
pub mod scan;
pub mod social;
pub mod types;
pub mod ui;

pub use garden::GardenModel;
pub use outlook::OutlookModel;
pub use scan::ScanModel;
pub use social::SocialModel;
pub use types::*;
pub use ui::UiModel;

use crate::i18n::Language;
use crate::{Screen, ThemeMode};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub ui: UiModel,
    pub garden: GardenModel,
    pub outlook: OutlookModel,
    pub social: SocialModel,
    pub scan: ScanModel,
}

impl Model {
    /// Create the initial model with persisted preferences applied
    pub fn new(theme: ThemeMode, language: Language) -> Self {
        Self {
            ui: UiModel::new(theme, language),
            garden: GardenModel::new(),
            outlook: OutlookModel::new(),
            social: SocialModel::new(),
            scan: ScanModel::new(),
        }
    }

    /// Currently active screen
    pub fn screen(&self) -> Screen {
        self.ui.active_screen
    }

    /// Check if a modal alert is showing
    pub fn has_alert(&self) -> bool {
        self.ui.alert.is_some()
    }
}
