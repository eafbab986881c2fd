//! Decor screen: season and upcoming festival decoration ideas

use chrono::{Datelike, Local};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::Palette;
use crate::data;
use crate::i18n::Key;
use crate::logic::season;
use crate::model::UiModel;

pub fn render_decor(f: &mut Frame, area: Rect, ui: &UiModel, palette: &Palette) {
    let month = Local::now().month();
    let current_season = season::season_for_month(month);
    let upcoming = season::upcoming_festivals(data::festivals(), month);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", ui.tr(Key::DecorSeasonNow)),
                Style::default().fg(palette.muted),
            ),
            Span::styled(
                current_season.as_str(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for event in &upcoming {
        lines.push(Line::styled(
            event.name,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(vec![
            Span::styled("  🌼 ", Style::default().fg(palette.warn)),
            Span::raw(event.plants.join(", ")),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}: ", ui.tr(Key::DecorIdeas)),
                Style::default().fg(palette.muted),
            ),
            Span::raw(event.idea),
        ]));
        lines.push(Line::from(""));
    }

    if upcoming.is_empty() {
        lines.push(Line::styled(
            ui.tr(Key::DecorUpcoming),
            Style::default().fg(palette.muted),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border_focus))
                .title(format!(" {} ", ui.tr(Key::DecorUpcoming))),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
