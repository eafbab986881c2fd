//! Market screen: simulated mandi price table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use super::theme::Palette;
use crate::i18n::Key;
use crate::logic::formatting::format_rupees;
use crate::model::{OutlookModel, UiModel};

pub fn render_market(
    f: &mut Frame,
    area: Rect,
    outlook: &OutlookModel,
    ui: &UiModel,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_focus))
        .title(format!(" {} ", ui.tr(Key::MarketPrices)));

    if outlook.prices_loading {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::styled(ui.tr(Key::MarketLoading), Style::default().fg(palette.muted)),
        ])
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let Some(prices) = &outlook.prices else {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                ui.tr(Key::MarketNotLoaded),
                Style::default().fg(palette.muted),
            ),
        ])
        .block(block);
        f.render_widget(msg, area);
        return;
    };

    let header = Row::new(vec![
        ui.tr(Key::MarketCommodity),
        ui.tr(Key::MarketModalPrice),
        ui.tr(Key::MarketRange),
        ui.tr(Key::MarketYard),
    ])
    .style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = prices
        .iter()
        .enumerate()
        .map(|(i, quote)| {
            let row = Row::new(vec![
                quote.commodity.clone(),
                format_rupees(quote.modal_rs),
                format!(
                    "{} - {}",
                    format_rupees(quote.min_rs),
                    format_rupees(quote.max_rs)
                ),
                quote.yard.clone(),
            ]);
            if Some(i) == outlook.selected_price {
                row.style(
                    Style::default()
                        .bg(palette.highlight_bg)
                        .fg(palette.highlight_fg),
                )
            } else {
                row.style(Style::default().fg(palette.fg))
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Length(20),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}
