//! Keyboard Input Handler
//!
//! Processes all keyboard events and dispatches to the active screen.

use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};

use crate::i18n::Key;
use crate::logic;
use crate::model::scan::ScanState;
use crate::model::social::RADIUS_STEP_KM;
use crate::prefs;
use crate::services::FetchRequest;
use crate::{App, Screen};

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Alert dialog swallows everything except dismissal
    if app.model.ui.alert.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.model.ui.dismiss_alert();
        }
        return Ok(());
    }

    let vim = app.model.ui.vim_mode;

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            return Ok(());
        }
        KeyCode::Tab => {
            app.model.ui.active_screen = logic::ui::next_screen(app.model.screen());
            return Ok(());
        }
        KeyCode::BackTab => {
            app.model.ui.active_screen = logic::ui::prev_screen(app.model.screen());
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='8') => {
            let idx = (c as usize) - ('1' as usize);
            app.model.ui.active_screen = Screen::all()[idx];
            return Ok(());
        }
        _ => {}
    }

    match app.model.screen() {
        Screen::Home => handle_home_key(app, key, vim),
        Screen::Weather => handle_weather_key(app, key),
        Screen::Market => handle_market_key(app, key, vim),
        Screen::Decor => {}
        Screen::Scan => handle_scan_key(app, key),
        Screen::Social => handle_social_key(app, key, vim),
        Screen::Export => handle_export_key(app, key),
        Screen::Settings => handle_settings_key(app, key),
    }

    Ok(())
}

fn handle_home_key(app: &mut App, key: KeyEvent, vim: bool) {
    let garden = &mut app.model.garden;
    match key.code {
        KeyCode::Left => garden.set_mood(logic::ui::prev_mood(garden.mood)),
        KeyCode::Right => garden.set_mood(logic::ui::next_mood(garden.mood)),
        KeyCode::Char('h') if vim => garden.set_mood(logic::ui::prev_mood(garden.mood)),
        KeyCode::Char('l') if vim => garden.set_mood(logic::ui::next_mood(garden.mood)),
        KeyCode::Up => {
            garden.selected =
                logic::ui::move_selection(garden.selected, garden.recommendations.len(), -1)
        }
        KeyCode::Down => {
            garden.selected =
                logic::ui::move_selection(garden.selected, garden.recommendations.len(), 1)
        }
        KeyCode::Char('k') if vim => {
            garden.selected =
                logic::ui::move_selection(garden.selected, garden.recommendations.len(), -1)
        }
        KeyCode::Char('j') if vim => {
            garden.selected =
                logic::ui::move_selection(garden.selected, garden.recommendations.len(), 1)
        }
        _ => {}
    }
}

fn handle_weather_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('r') && !app.model.outlook.forecast_loading {
        app.model.outlook.forecast_loading = true;
        let _ = app.fetch_tx.send(FetchRequest::Weather);
    }
}

fn handle_market_key(app: &mut App, key: KeyEvent, vim: bool) {
    let len = app
        .model
        .outlook
        .prices
        .as_ref()
        .map(|p| p.len())
        .unwrap_or(0);
    let outlook = &mut app.model.outlook;

    match key.code {
        KeyCode::Char('r') => {
            if !outlook.prices_loading {
                outlook.prices_loading = true;
                let _ = app.fetch_tx.send(FetchRequest::Prices);
            }
        }
        KeyCode::Up => outlook.selected_price = logic::ui::move_selection(outlook.selected_price, len, -1),
        KeyCode::Down => outlook.selected_price = logic::ui::move_selection(outlook.selected_price, len, 1),
        KeyCode::Char('k') if vim => {
            outlook.selected_price = logic::ui::move_selection(outlook.selected_price, len, -1)
        }
        KeyCode::Char('j') if vim => {
            outlook.selected_price = logic::ui::move_selection(outlook.selected_price, len, 1)
        }
        _ => {}
    }
}

fn handle_scan_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('s') && app.model.scan.state != ScanState::Scanning {
        app.model.scan.state = ScanState::Scanning;
        let _ = app.fetch_tx.send(FetchRequest::LuxScan);
    }
}

fn handle_social_key(app: &mut App, key: KeyEvent, vim: bool) {
    let social = &mut app.model.social;
    match key.code {
        KeyCode::Up => social.selected = logic::ui::move_selection(social.selected, social.matches.len(), -1),
        KeyCode::Down => social.selected = logic::ui::move_selection(social.selected, social.matches.len(), 1),
        KeyCode::Char('k') if vim => {
            social.selected = logic::ui::move_selection(social.selected, social.matches.len(), -1)
        }
        KeyCode::Char('j') if vim => {
            social.selected = logic::ui::move_selection(social.selected, social.matches.len(), 1)
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            social.radius_km += RADIUS_STEP_KM;
            social.refilter();
        }
        KeyCode::Char('-') => {
            social.radius_km = (social.radius_km - RADIUS_STEP_KM).max(0.0);
            social.refilter();
        }
        KeyCode::Char('e') => {
            social.experience_filter = logic::social::cycle_experience_filter(social.experience_filter);
            social.refilter();
        }
        KeyCode::Char('g') => {
            social.type_filter = logic::social::cycle_type_filter(social.type_filter);
            social.refilter();
        }
        _ => {}
    }
}

fn handle_export_key(app: &mut App, key: KeyEvent) {
    if key.code != KeyCode::Enter {
        return;
    }

    let now = Local::now();
    let snapshot = logic::export::build_snapshot(&app.model, now);
    let file_name = logic::export::export_file_name(now);

    let result = logic::export::to_json(&snapshot)
        .and_then(|json| std::fs::write(&file_name, json).map_err(Into::into));

    match result {
        Ok(()) => {
            let done = app.model.ui.tr(Key::ExportDone);
            app.model.ui.show_toast(format!("{} {}", done, file_name));
        }
        Err(e) => {
            crate::log_debug(&format!("Export failed: {}", e));
            let failed = app.model.ui.tr(Key::ExportFailed).to_string();
            app.model.ui.show_toast(failed);
        }
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') => {
            app.model.ui.theme = logic::ui::toggle_theme(app.model.ui.theme);
            let value = app.model.ui.theme.as_str();
            app.write_pref(prefs::KEY_THEME, value);
            let saved = app.model.ui.tr(Key::SettingsSaved).to_string();
            app.model.ui.show_toast(saved);
        }
        KeyCode::Char('l') => {
            app.model.ui.language = logic::ui::next_language(app.model.ui.language);
            let value = app.model.ui.language.code();
            app.write_pref(prefs::KEY_LANGUAGE, value);
            let saved = app.model.ui.tr(Key::SettingsSaved).to_string();
            app.model.ui.show_toast(saved);
        }
        _ => {}
    }
}
