//! Hotkey legend at the bottom of the screen

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::i18n::Key;
use crate::model::UiModel;
use crate::Screen;

/// Build hotkey spans for the active screen (extracted for testability)
fn build_hotkey_spans(ui: &UiModel, palette: &Palette) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(palette.warn);
    let mut spans = vec![
        Span::styled("q", key_style),
        Span::raw(format!(":{}  ", ui.tr(Key::LegendQuit))),
        Span::styled("Tab/1-8", key_style),
        Span::raw(format!(":{}  ", ui.tr(Key::LegendTabs))),
    ];

    if ui.alert.is_some() {
        spans.push(Span::styled("Esc", key_style));
        spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendDismiss))));
        return spans;
    }

    let nav_keys = if ui.vim_mode { "j/k" } else { "↑/↓" };
    let mood_keys = if ui.vim_mode { "h/l" } else { "←/→" };

    match ui.active_screen {
        Screen::Home => {
            spans.push(Span::styled(mood_keys, key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendMood))));
            spans.push(Span::styled(nav_keys, key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendNavigate))));
        }
        Screen::Weather | Screen::Market => {
            spans.push(Span::styled("r", key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendRefresh))));
            if ui.active_screen == Screen::Market {
                spans.push(Span::styled(nav_keys, key_style));
                spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendNavigate))));
            }
        }
        Screen::Decor => {}
        Screen::Scan => {
            spans.push(Span::styled("s", key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendScan))));
        }
        Screen::Social => {
            spans.push(Span::styled(nav_keys, key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendNavigate))));
            spans.push(Span::styled("+/-", key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::SocialRadius))));
            spans.push(Span::styled("e", key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::SocialExperience))));
            spans.push(Span::styled("g", key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::SocialGardenType))));
        }
        Screen::Export => {
            spans.push(Span::styled("Enter", key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendExport))));
        }
        Screen::Settings => {
            spans.push(Span::styled("t", key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendTheme))));
            spans.push(Span::styled("l", key_style));
            spans.push(Span::raw(format!(":{}  ", ui.tr(Key::LegendLanguage))));
        }
    }

    spans
}

pub fn render_legend(f: &mut Frame, area: Rect, ui: &UiModel, palette: &Palette) {
    let spans = build_hotkey_spans(ui, palette);

    let legend = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );

    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::ui::theme::palette;
    use crate::ThemeMode;

    #[test]
    fn test_alert_legend_only_shows_dismiss_hint() {
        let mut ui = UiModel::new(ThemeMode::Dark, Language::English);
        ui.show_alert("denied");
        let spans = build_hotkey_spans(&ui, &palette(ThemeMode::Dark));
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Esc"));
        assert!(!text.contains("Mood"));
    }

    #[test]
    fn test_scan_legend_mentions_scan_key() {
        let mut ui = UiModel::new(ThemeMode::Dark, Language::English);
        ui.active_screen = Screen::Scan;
        let spans = build_hotkey_spans(&ui, &palette(ThemeMode::Dark));
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Scan"));
    }
}
