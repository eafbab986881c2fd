//! Business Logic
//!
//! Pure functions that can be unit tested in isolation:
//! - recommend: mood-based plant recommendation (filter + sort + cap)
//! - light: lux reading bucketing into quality labels
//! - social: gardener directory filtering
//! - season: month to season and festival window mapping
//! - ui: UI state cycling and toast transitions
//! - formatting: display string helpers
//! - export: garden snapshot payload building

pub mod export;
pub mod formatting;
pub mod light;
pub mod recommend;
pub mod season;
pub mod social;
pub mod ui;
