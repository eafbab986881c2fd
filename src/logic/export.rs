//! Garden snapshot export payload

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::model::scan::ScanState;
use crate::model::types::{Gardener, LightQuality, Mood, Recommendation};
use crate::model::Model;

/// Everything a user can take away from the app, serialized as JSON
#[derive(Debug, Serialize)]
pub struct GardenSnapshot {
    pub generated_at: String,
    pub theme: &'static str,
    pub language: &'static str,
    pub mood: Mood,
    pub recommendations: Vec<Recommendation>,
    pub matched_gardeners: Vec<Gardener>,
    pub last_scan: Option<ScanSummary>,
}

#[derive(Debug, Serialize)]
pub struct ScanSummary {
    pub average_lux: f64,
    pub quality: LightQuality,
    pub readings: Vec<f64>,
}

/// Build the snapshot from the current model
pub fn build_snapshot(model: &Model, now: DateTime<Local>) -> GardenSnapshot {
    let last_scan = match &model.scan.state {
        ScanState::Done {
            readings,
            average_lux,
            quality,
        } => Some(ScanSummary {
            average_lux: *average_lux,
            quality: *quality,
            readings: readings.iter().map(|(lux, _)| *lux).collect(),
        }),
        _ => None,
    };

    GardenSnapshot {
        generated_at: now.to_rfc3339(),
        theme: model.ui.theme.as_str(),
        language: model.ui.language.code(),
        mood: model.garden.mood,
        recommendations: model.garden.recommendations.clone(),
        matched_gardeners: model.social.matches.clone(),
        last_scan,
    }
}

/// File name for an export taken at `now`, e.g. `sathi-export-20260828-161500.json`
pub fn export_file_name(now: DateTime<Local>) -> String {
    format!("sathi-export-{}.json", now.format("%Y%m%d-%H%M%S"))
}

/// Serialize the snapshot to pretty JSON
pub fn to_json(snapshot: &GardenSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::ThemeMode;
    use chrono::TimeZone;

    #[test]
    fn test_export_file_name_is_timestamped() {
        let now = Local.with_ymd_and_hms(2026, 8, 28, 16, 15, 0).unwrap();
        assert_eq!(export_file_name(now), "sathi-export-20260828-161500.json");
    }

    #[test]
    fn test_snapshot_reflects_model() {
        let model = Model::new(ThemeMode::Light, Language::Hindi);
        let now = Local.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap();

        let snapshot = build_snapshot(&model, now);
        assert_eq!(snapshot.theme, "light");
        assert_eq!(snapshot.language, "hi");
        assert_eq!(snapshot.mood, model.garden.mood);
        assert_eq!(
            snapshot.recommendations.len(),
            model.garden.recommendations.len()
        );
        assert!(snapshot.last_scan.is_none());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut model = Model::new(ThemeMode::Dark, Language::English);
        model.scan.complete(&[120.0, 800.0, 2500.0]);

        let now = Local.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap();
        let snapshot = build_snapshot(&model, now);
        let json = to_json(&snapshot).unwrap();

        assert!(json.contains("\"generated_at\""));
        assert!(json.contains("\"last_scan\""));
        assert!(json.contains("\"average_lux\""));
    }
}
