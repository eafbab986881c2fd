//! Social screen: gardener matching with filters

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::i18n::Key;
use crate::logic::formatting::{format_distance_km, truncate_with_ellipsis};
use crate::model::types::{ExperienceFilter, GardenTypeFilter};
use crate::model::{SocialModel, UiModel};

pub fn render_social(
    f: &mut Frame,
    area: Rect,
    social: &SocialModel,
    ui: &UiModel,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filter_bar(f, chunks[0], social, ui, palette);
    render_match_list(f, chunks[1], social, ui, palette);
}

fn filter_label(ui: &UiModel, social: &SocialModel) -> (String, String) {
    let exp = match social.experience_filter {
        ExperienceFilter::All => ui.tr(Key::FilterAll),
        ExperienceFilter::Only(e) => ui.tr(e.label_key()),
    };
    let ty = match social.type_filter {
        GardenTypeFilter::All => ui.tr(Key::FilterAll),
        GardenTypeFilter::Only(t) => ui.tr(t.label_key()),
    };
    (exp.to_string(), ty.to_string())
}

fn render_filter_bar(
    f: &mut Frame,
    area: Rect,
    social: &SocialModel,
    ui: &UiModel,
    palette: &Palette,
) {
    let (exp, ty) = filter_label(ui, social);

    let line = Line::from(vec![
        Span::styled(
            format!("{}: ", ui.tr(Key::SocialRadius)),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format_distance_km(social.radius_km),
            Style::default().fg(palette.accent),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}: ", ui.tr(Key::SocialExperience)),
            Style::default().fg(palette.muted),
        ),
        Span::styled(exp, Style::default().fg(palette.accent)),
        Span::raw("   "),
        Span::styled(
            format!("{}: ", ui.tr(Key::SocialGardenType)),
            Style::default().fg(palette.muted),
        ),
        Span::styled(ty, Style::default().fg(palette.accent)),
    ]);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(bar, area);
}

fn render_match_list(
    f: &mut Frame,
    area: Rect,
    social: &SocialModel,
    ui: &UiModel,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_focus))
        .title(format!(
            " {} ({}) ",
            ui.tr(Key::SocialNearby),
            social.matches.len()
        ));

    if social.matches.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                ui.tr(Key::SocialNoMatches),
                Style::default().fg(palette.muted),
            ),
        ])
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let detail_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = social
        .matches
        .iter()
        .map(|g| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        g.name,
                        Style::default()
                            .fg(palette.fg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(
                            "  {} {}",
                            format_distance_km(g.distance_km),
                            ui.tr(Key::SocialDistance)
                        ),
                        Style::default().fg(palette.muted),
                    ),
                ]),
                Line::from(vec![Span::styled(
                    truncate_with_ellipsis(
                        &format!(
                            "  {} · {} · {} 🌱 · {}",
                            ui.tr(g.experience.label_key()),
                            ui.tr(g.garden_type.label_key()),
                            g.plant_count,
                            g.specialty
                        ),
                        detail_width,
                    ),
                    Style::default().fg(palette.muted),
                )]),
            ])
        })
        .collect();

    let mut state = ListState::default();
    state.select(social.selected);

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(palette.highlight_bg)
            .fg(palette.highlight_fg),
    );

    f.render_stateful_widget(list, area, &mut state);
}
