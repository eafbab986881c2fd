//! Top tab bar with the eight screens

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::theme::Palette;
use crate::i18n::Key;
use crate::model::UiModel;
use crate::Screen;

fn title_key(screen: Screen) -> Key {
    match screen {
        Screen::Home => Key::ScreenHome,
        Screen::Weather => Key::ScreenWeather,
        Screen::Market => Key::ScreenMarket,
        Screen::Decor => Key::ScreenDecor,
        Screen::Scan => Key::ScreenScan,
        Screen::Social => Key::ScreenSocial,
        Screen::Export => Key::ScreenExport,
        Screen::Settings => Key::ScreenSettings,
    }
}

pub fn render_tabs(f: &mut Frame, area: Rect, ui: &UiModel, palette: &Palette) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, screen)| Line::from(format!("{} {}", i + 1, ui.tr(title_key(*screen)))))
        .collect();

    let tabs = Tabs::new(titles)
        .select(ui.active_screen.index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(format!(" {} ", ui.tr(Key::AppName))),
        );

    f.render_widget(tabs, area);
}
