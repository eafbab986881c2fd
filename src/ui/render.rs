//! Main render orchestration

use ratatui::Frame;

use super::{
    decor, dialogs, export_screen, home, layout, legend, market, scan, settings, social, tabs,
    theme, toast, weather,
};
use crate::model::Model;
use crate::Screen;

/// Render the whole frame from the model
pub fn render(f: &mut Frame, model: &Model) {
    let size = f.area();
    let palette = theme::palette(model.ui.theme);
    let layout_info = layout::calculate_layout(size);

    tabs::render_tabs(f, layout_info.tabs_area, &model.ui, &palette);

    match model.screen() {
        Screen::Home => home::render_home(f, layout_info.body_area, &model.garden, &model.ui, &palette),
        Screen::Weather => {
            weather::render_weather(f, layout_info.body_area, &model.outlook, &model.ui, &palette)
        }
        Screen::Market => {
            market::render_market(f, layout_info.body_area, &model.outlook, &model.ui, &palette)
        }
        Screen::Decor => decor::render_decor(f, layout_info.body_area, &model.ui, &palette),
        Screen::Scan => scan::render_scan(f, layout_info.body_area, &model.scan, &model.ui, &palette),
        Screen::Social => {
            social::render_social(f, layout_info.body_area, &model.social, &model.ui, &palette)
        }
        Screen::Export => export_screen::render_export(f, layout_info.body_area, model, &palette),
        Screen::Settings => settings::render_settings(f, layout_info.body_area, &model.ui, &palette),
    }

    if let Some(legend_area) = layout_info.legend_area {
        legend::render_legend(f, legend_area, &model.ui, &palette);
    }

    // Overlays last so they sit on top
    if let Some(message) = &model.ui.alert {
        dialogs::render_alert(f, size, message, &model.ui, &palette);
    }

    if let Some((message, _)) = &model.ui.toast {
        toast::render_toast(f, size, message, &palette);
    }
}
