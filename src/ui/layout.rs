//! Screen layout calculation

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the three fixed chrome rows plus the screen body
#[derive(Debug, Clone, Copy)]
pub struct LayoutInfo {
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub legend_area: Option<Rect>,
}

/// Split the terminal into tab bar, body, and (if it fits) legend
pub fn calculate_layout(size: Rect) -> LayoutInfo {
    // Legend needs at least a few body rows left over to be worth showing
    let show_legend = size.height >= 12;

    let constraints = if show_legend {
        vec![
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ]
    } else {
        vec![Constraint::Length(3), Constraint::Min(0)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    LayoutInfo {
        tabs_area: chunks[0],
        body_area: chunks[1],
        legend_area: if show_legend { Some(chunks[2]) } else { None },
    }
}

/// Centered rectangle for modal dialogs
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_hidden_on_short_terminals() {
        let info = calculate_layout(Rect::new(0, 0, 80, 10));
        assert!(info.legend_area.is_none());

        let info = calculate_layout(Rect::new(0, 0, 80, 24));
        assert!(info.legend_area.is_some());
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(50, 8, area);
        assert!(rect.x + rect.width <= area.width);
        assert!(rect.y + rect.height <= area.height);
    }
}
