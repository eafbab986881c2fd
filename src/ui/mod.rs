// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Color palettes for dark and light mode
// - layout: Calculates screen layout (tab bar, body, legend)
// - render: Main orchestration function that coordinates all rendering
// - tabs: Renders the top tab bar
// - legend: Renders hotkey legend
// - toast: Renders toast notifications (brief pop-up messages)
// - dialogs: Renders modal alert dialogs
// - one module per screen: home, weather, market, decor, scan, social,
//   export_screen, settings

pub mod decor;
pub mod dialogs;
pub mod export_screen;
pub mod home;
pub mod layout;
pub mod legend;
pub mod market;
pub mod render;
pub mod scan;
pub mod settings;
pub mod social;
pub mod tabs;
pub mod theme;
pub mod toast;
pub mod weather;

// Re-export main render function for convenience
pub use render::render;
