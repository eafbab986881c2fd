//! Modal alert dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;
use super::theme::Palette;
use crate::i18n::Key;
use crate::model::UiModel;

/// Render the alert dialog (e.g. sensor permission denied)
pub fn render_alert(f: &mut Frame, area: Rect, message: &str, ui: &UiModel, palette: &Palette) {
    let width = 50.min(area.width.saturating_sub(4));
    let dialog_area = centered_rect(width, 7, area);

    f.render_widget(Clear, dialog_area);

    let lines = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled(
            format!("Esc: {}", ui.tr(Key::LegendDismiss)),
            Style::default().fg(palette.muted),
        ),
    ];

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(
                    Style::default()
                        .fg(palette.bad)
                        .add_modifier(Modifier::BOLD),
                )
                .title(" ! "),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(dialog, dialog_area);
}
