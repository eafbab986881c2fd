//! Home screen: mood picker and plant recommendations

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Row, Table},
    Frame,
};

use super::theme::Palette;
use crate::i18n::Key;
use crate::model::types::Mood;
use crate::model::{GardenModel, UiModel};

pub fn render_home(
    f: &mut Frame,
    area: Rect,
    garden: &GardenModel,
    ui: &UiModel,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    render_mood_list(f, chunks[0], garden, ui, palette);
    render_recommendations(f, chunks[1], garden, ui, palette);
}

fn render_mood_list(
    f: &mut Frame,
    area: Rect,
    garden: &GardenModel,
    ui: &UiModel,
    palette: &Palette,
) {
    let items: Vec<ListItem> = Mood::all()
        .iter()
        .map(|mood| {
            let marker = if *mood == garden.mood { "● " } else { "○ " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::raw(ui.tr(mood.label_key())),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Mood::all().iter().position(|m| *m == garden.mood));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border_focus))
                .title(format!(" {} ", ui.tr(Key::HomePickMood))),
        )
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .fg(palette.highlight_fg)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, &mut state);
}

fn render_recommendations(
    f: &mut Frame,
    area: Rect,
    garden: &GardenModel,
    ui: &UiModel,
    palette: &Palette,
) {
    let header = Row::new(vec![
        ui.tr(Key::HomeRecommended),
        ui.tr(Key::HomeEffectiveness),
        ui.tr(Key::HomeCareLevel),
        ui.tr(Key::HomeWater),
        ui.tr(Key::HomeSunlight),
    ])
    .style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = garden
        .recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let row = Row::new(vec![
                format!("{} ({})", rec.plant.name, rec.plant.species),
                format!("{}%", rec.score),
                rec.plant.care_level.as_str().to_string(),
                format!("every {}d", rec.plant.water_every_days),
                rec.plant.sunlight.as_str().to_string(),
            ]);
            if Some(i) == garden.selected {
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
            Constraint::Percentage(40),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!(" {} ", ui.tr(Key::HomeRecommended))),
    );

    f.render_widget(table, area);
}
