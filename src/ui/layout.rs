//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Scrollable page area.
    pub page_area: Rect,
    /// Key hint bar (bottom).
    pub help_area: Rect,
    /// Toast stack, top-right over the page.
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, show_status_bar: bool, show_help_bar: bool) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(u16::from(show_status_bar)), // Status bar
                Constraint::Min(0),                             // Page
                Constraint::Length(u16::from(show_help_bar)),   // Help bar
            ])
            .split(area);

        let page_area = chunks[1];
        let width = page_area.width.min(48);
        let notification_area = Rect {
            x: page_area.right().saturating_sub(width),
            y: page_area.y,
            width,
            height: page_area.height,
        };

        Self {
            status_area: chunks[0],
            page_area,
            help_area: chunks[2],
            notification_area,
        }
    }
}

/// A popup of fixed size centered in `area`, shrunk to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_can_be_hidden() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = Layout::new(area, false, true);
        assert_eq!(layout.status_area.height, 0);
        assert_eq!(layout.page_area.height, 39);
        assert_eq!(layout.help_area.y, 39);
    }

    #[test]
    fn test_centered_fixed_clamps() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_fixed(60, 20, area);
        assert_eq!(popup, area);

        let popup = centered_fixed(10, 4, area);
        assert_eq!(popup, Rect::new(10, 3, 10, 4));
    }
}
