//! Strategy detail popup, in view or configure mode.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{InspectorMode, Store};
use crate::ui::layout::centered_fixed;
use crate::ui::theme::Theme;

/// Strategy inspector popup.
pub struct InspectorModal;

impl InspectorModal {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let Some(session) = store.inspector.session() else {
            return;
        };
        let strategy = &session.strategy;

        let popup = centered_fixed(72, 18, area);
        frame.render_widget(Clear, popup);

        let mode_label = match session.mode {
            InspectorMode::View => "View",
            InspectorMode::Configure => "Configure",
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(format!(" {} ", strategy.name), theme.heading()),
                Span::styled(format!("· {mode_label} "), theme.dim()),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        let label = |text: &'static str| Span::styled(text, theme.dim());
        let join = |items: &[String]| items.join(", ");

        let mut lines = vec![
            Line::from(Span::styled(session.mode.description(), theme.dim())),
            Line::from(""),
            Line::from(Span::styled(
                "Performance Overview",
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                label("Current Value  "),
                Span::styled(strategy.value.as_str(), theme.text()),
                label("    Total Yield  "),
                Span::styled(
                    strategy.yield_amount.as_str(),
                    Style::default().fg(theme.success),
                ),
            ]),
            Line::from(vec![
                label("APY            "),
                Span::styled(strategy.apy.as_str(), Style::default().fg(theme.success)),
                label("    Risk Level   "),
                Span::styled(
                    strategy.risk.as_str(),
                    Style::default().fg(theme.tone(strategy.risk_tone())),
                ),
            ]),
            Line::from(vec![
                label("Status         "),
                Span::styled(
                    strategy.status.as_str(),
                    Style::default().fg(theme.tone(strategy.status_tone())),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                label("Active Chains  "),
                Span::styled(join(&strategy.chains), theme.text()),
            ]),
            Line::from(vec![
                label("ADO Modules    "),
                Span::styled(join(&strategy.modules), theme.text()),
            ]),
            Line::from(""),
        ];

        let mut buttons = Vec::new();
        for (index, action) in session.actions().iter().enumerate() {
            let style = if index == session.cursor() {
                theme.highlight().fg(theme.foreground)
            } else {
                Style::default().fg(theme.accent)
            };
            buttons.push(Span::styled(format!("[ {} ]", action.label()), style));
            buttons.push(Span::raw("  "));
        }
        lines.push(Line::from(buttons));

        if session.mode == InspectorMode::View {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                label("Explorer  "),
                Span::styled(
                    store.explorer_link(strategy),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("←/→", theme.key_hint()),
            Span::styled(" choose  ", theme.dim()),
            Span::styled("Enter", theme.key_hint()),
            Span::styled(" activate  ", theme.dim()),
            Span::styled("Esc", theme.key_hint()),
            Span::styled(" close", theme.dim()),
        ]));

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            popup,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::Action;
    use crate::ui::widgets::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(store: &Store) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| InspectorModal::render(frame, frame.area(), store, &Theme::default()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_view_mode_offers_only_view_actions() {
        let mut store = Store::new(&Config::default());
        store.reduce(Action::ViewStrategy(0));
        let text = draw(&store);

        assert!(text.contains("View on Explorer"));
        assert!(text.contains("Configure"));
        assert!(!text.contains("Pause Strategy"));
        assert!(!text.contains("Rebalance Now"));
    }

    #[test]
    fn test_configure_mode_offers_only_lifecycle_actions() {
        let mut store = Store::new(&Config::default());
        store.reduce(Action::ConfigureStrategy(1));
        let text = draw(&store);

        assert!(text.contains("Pause Strategy"));
        assert!(text.contains("Rebalance Now"));
        assert!(text.contains("Resume"));
        assert!(!text.contains("View on Explorer"));
    }

    #[test]
    fn test_closed_inspector_draws_nothing() {
        let store = Store::new(&Config::default());
        let text = draw(&store);
        assert!(text.trim().is_empty());
    }
}
