//! Weather screen: simulated 5-day forecast

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::i18n::Key;
use crate::logic::formatting::format_temp_range;
use crate::model::{OutlookModel, UiModel};

pub fn render_weather(
    f: &mut Frame,
    area: Rect,
    outlook: &OutlookModel,
    ui: &UiModel,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_focus))
        .title(format!(" {} ", ui.tr(Key::WeatherForecast)));

    let lines: Vec<Line> = if outlook.forecast_loading {
        vec![
            Line::from(""),
            Line::styled(ui.tr(Key::WeatherLoading), Style::default().fg(palette.muted)),
        ]
    } else if let Some(forecast) = &outlook.forecast {
        let mut lines = Vec::with_capacity(forecast.len() * 3 + 1);
        for day in forecast {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<8}", day.day),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{} {:<14}", day.condition.symbol(), day.condition.as_str())),
                Span::raw(format!("{:<10}", format_temp_range(day.low_c, day.high_c))),
                Span::styled(
                    format!(
                        "{} {}%  {} {}%",
                        ui.tr(Key::WeatherHumidity),
                        day.humidity_pct,
                        ui.tr(Key::WeatherRainChance),
                        day.rain_pct
                    ),
                    Style::default().fg(palette.muted),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("         {}: ", ui.tr(Key::WeatherCareTip)),
                    Style::default().fg(palette.muted),
                ),
                Span::raw(day.tip.clone()),
            ]));
            lines.push(Line::from(""));
        }
        lines
    } else {
        vec![
            Line::from(""),
            Line::styled(
                ui.tr(Key::WeatherNotLoaded),
                Style::default().fg(palette.muted),
            ),
        ]
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
