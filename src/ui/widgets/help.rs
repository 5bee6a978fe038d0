//! Help panel widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::KeyBindings;
use crate::ui::layout::centered_fixed;
use crate::ui::theme::Theme;

/// Width of the key column, indentation excluded.
const KEY_WIDTH: usize = 14;
/// Width of one column of sections.
const COLUMN_WIDTH: u16 = 42;
/// Sections shown in the left column; the rest go right.
const LEFT_SECTIONS: usize = 2;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    fn sections(kb: &KeyBindings) -> Vec<(&'static str, Vec<(String, &'static str)>)> {
        vec![
            (
                "Navigation",
                vec![
                    (format!("{}/↓ {}/↑", kb.down, kb.up), "Move / scroll"),
                    (format!("{}/{}", kb.left, kb.right), "Move left / right"),
                    (format!("{}/S-Tab", kb.focus_next), "Next / previous section"),
                    ("1 2 3".to_string(), "Jump to section"),
                    ("PgUp/PgDn".to_string(), "Scroll a page"),
                    ("Home/End".to_string(), "Top / bottom"),
                    (format!("{}/{}", kb.select, kb.toggle), "Select / toggle"),
                    (kb.back.clone(), "Close / dismiss toast"),
                ],
            ),
            (
                "Page",
                vec![
                    (kb.launch_app.clone(), "Launch app"),
                    (kb.view_demo.clone(), "View live demo"),
                    (kb.connect_wallet.clone(), "Connect wallet"),
                ],
            ),
            (
                "Strategy Builder",
                vec![
                    (kb.edit_goal.clone(), "Edit financial goal"),
                    (kb.edit_target.clone(), "Edit target investment"),
                    (kb.cycle_risk.clone(), "Cycle risk tolerance"),
                    (kb.generate_strategy.clone(), "Generate AI strategy"),
                    (kb.deploy_strategy.clone(), "Deploy & auto-rebalance"),
                ],
            ),
            (
                "Portfolio",
                vec![
                    (kb.view_strategy.clone(), "View strategy"),
                    (kb.configure_strategy.clone(), "Configure strategy"),
                    (kb.apply_recommendations.clone(), "Apply AI recommendations"),
                ],
            ),
            (
                "General",
                vec![
                    (kb.help.clone(), "Toggle help"),
                    (kb.quit.clone(), "Quit"),
                ],
            ),
        ]
    }

    fn column(
        sections: &[(&'static str, Vec<(String, &'static str)>)],
        theme: &Theme,
    ) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (title, entries) in sections {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in entries {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<KEY_WIDTH$}"), theme.key_hint()),
                    Span::styled(*description, theme.text()),
                ]));
            }
        }
        lines
    }

    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keybindings: &KeyBindings, theme: &Theme) {
        let sections = Self::sections(keybindings);
        let (left, right) = sections.split_at(LEFT_SECTIONS);
        let left = Self::column(left, theme);
        let right = Self::column(right, theme);

        let rows = left.len().max(right.len()) as u16;
        let popup_area = centered_fixed(COLUMN_WIDTH * 2 + 4, rows + 2, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.warning))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .horizontal_margin(1)
            .constraints([Constraint::Length(COLUMN_WIDTH), Constraint::Min(0)])
            .split(inner);
        frame.render_widget(Paragraph::new(left), columns[0]);
        frame.render_widget(Paragraph::new(right), columns[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_help_lists_configured_keys() {
        let keybindings = KeyBindings {
            deploy_strategy: "X".to_string(),
            ..KeyBindings::default()
        };
        let mut terminal = Terminal::new(TestBackend::new(100, 60)).unwrap();
        terminal
            .draw(|frame| HelpPanel::render(frame, frame.area(), &keybindings, &Theme::default()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("X             Deploy & auto-rebalance"));
        assert!(text.contains("Apply AI recommendations"));
    }

    #[test]
    fn test_every_section_fits_a_short_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal
            .draw(|frame| {
                HelpPanel::render(frame, frame.area(), &KeyBindings::default(), &Theme::default())
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        for heading in ["Navigation", "Page", "Strategy Builder", "Portfolio", "General"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("Toggle help"));
        assert!(text.contains("Quit"));
    }
}
