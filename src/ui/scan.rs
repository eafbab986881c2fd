//! Scan screen: simulated indoor light readings

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::data;
use crate::i18n::Key;
use crate::logic::formatting::format_lux;
use crate::model::scan::ScanState;
use crate::model::{ScanModel, UiModel};

pub fn render_scan(
    f: &mut Frame,
    area: Rect,
    scan: &ScanModel,
    ui: &UiModel,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_focus))
        .title(format!(" {} ", ui.tr(Key::ScreenScan)));

    let lines: Vec<Line> = match &scan.state {
        ScanState::Idle => vec![
            Line::from(""),
            Line::styled(ui.tr(Key::ScanPrompt), Style::default().fg(palette.muted)),
        ],
        ScanState::Scanning => vec![
            Line::from(""),
            Line::styled(ui.tr(Key::ScanScanning), Style::default().fg(palette.warn)),
        ],
        ScanState::Done {
            readings,
            average_lux,
            quality,
        } => {
            let mut lines = vec![Line::styled(
                format!("{}:", ui.tr(Key::ScanResult)),
                Style::default().fg(palette.muted),
            )];

            for (lux, bucket) in readings {
                lines.push(Line::from(vec![
                    Span::raw(format!("  {:>10}  ", format_lux(*lux))),
                    Span::styled(
                        ui.tr(bucket.label_key()),
                        Style::default().fg(palette.accent),
                    ),
                ]));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", ui.tr(Key::ScanAverage)),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(
                    format!("{} ({})", format_lux(*average_lux), ui.tr(quality.label_key())),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", ui.tr(Key::ScanSuggestion)),
                    Style::default().fg(palette.muted),
                ),
                Span::raw(data::suggestion_for_light(*quality)),
            ]));
            lines
        }
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
