//! Tests for the garden snapshot export

use chrono::{Local, TimeZone};
use sathi::i18n::Language;
use sathi::logic::export::{build_snapshot, export_file_name, to_json};
use sathi::model::Model;
use sathi::ThemeMode;

#[test]
fn test_snapshot_json_contains_all_sections() {
    let mut model = Model::new(ThemeMode::Dark, Language::English);
    model.scan.complete(&[450.0, 520.0, 610.0]);

    let now = Local.with_ymd_and_hms(2026, 8, 28, 9, 30, 0).unwrap();
    let snapshot = build_snapshot(&model, now);
    let json = to_json(&snapshot).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["theme"], "dark");
    assert_eq!(value["language"], "en");
    assert!(value["recommendations"].as_array().unwrap().len() <= 6);
    assert!(value["matched_gardeners"].is_array());

    let scan = &value["last_scan"];
    assert_eq!(scan["readings"].as_array().unwrap().len(), 3);
    assert!(scan["average_lux"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_snapshot_without_scan_has_null_scan_section() {
    let model = Model::new(ThemeMode::Light, Language::Hindi);
    let now = Local.with_ymd_and_hms(2026, 8, 28, 9, 30, 0).unwrap();

    let json = to_json(&build_snapshot(&model, now)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["theme"], "light");
    assert_eq!(value["language"], "hi");
    assert!(value["last_scan"].is_null());
}

#[test]
fn test_file_name_encodes_timestamp() {
    let now = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(export_file_name(now), "sathi-export-20260102-030405.json");
}
