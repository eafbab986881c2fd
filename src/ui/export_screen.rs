//! Export screen: one-shot JSON export of the garden snapshot

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::Palette;
use crate::i18n::Key;
use crate::model::{Model, UiModel};

pub fn render_export(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) {
    let ui: &UiModel = &model.ui;

    let lines = vec![
        Line::from(""),
        Line::styled(ui.tr(Key::ExportPrompt), Style::default().fg(palette.fg)),
        Line::from(""),
        Line::from(vec![
            Span::styled("• ", Style::default().fg(palette.accent)),
            Span::raw(format!(
                "{}: {}",
                ui.tr(Key::HomeRecommended),
                model.garden.recommendations.len()
            )),
        ]),
        Line::from(vec![
            Span::styled("• ", Style::default().fg(palette.accent)),
            Span::raw(format!(
                "{}: {}",
                ui.tr(Key::SocialNearby),
                model.social.matches.len()
            )),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border_focus))
                .title(format!(" {} ", ui.tr(Key::ScreenExport))),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
