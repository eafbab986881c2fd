//! Settings screen: theme and language preferences

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::i18n::Key;
use crate::model::UiModel;
use crate::ThemeMode;

pub fn render_settings(f: &mut Frame, area: Rect, ui: &UiModel, palette: &Palette) {
    let theme_label = match ui.theme {
        ThemeMode::Dark => ui.tr(Key::ThemeDark),
        ThemeMode::Light => ui.tr(Key::ThemeLight),
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("t  ", Style::default().fg(palette.warn)),
            Span::styled(
                format!("{}: ", ui.tr(Key::SettingsTheme)),
                Style::default().fg(palette.muted),
            ),
            Span::styled(
                theme_label,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("l  ", Style::default().fg(palette.warn)),
            Span::styled(
                format!("{}: ", ui.tr(Key::SettingsLanguage)),
                Style::default().fg(palette.muted),
            ),
            Span::styled(
                ui.language.display_name(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::styled(ui.tr(Key::Tagline), Style::default().fg(palette.muted)),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border_focus))
            .title(format!(" {} ", ui.tr(Key::ScreenSettings))),
    );

    f.render_widget(paragraph, area);
}
