//! Status bar and key hint bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Focus, InputMode, Overlay, Store};
use crate::ui::theme::Theme;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let wallet = match &store.app.connected_wallet {
            Some(name) => Span::styled(format!("● {name}"), Style::default().fg(theme.success)),
            None => Span::styled("○ No wallet", theme.dim()),
        };

        let mut left = vec![
            Span::styled(
                " ✦ AI Yield Architect ",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            wallet,
            Span::raw(" | "),
        ];
        for focus in Focus::ALL {
            let style = if focus == store.app.focus {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                theme.dim()
            };
            left.push(Span::styled(format!(" {} ", focus.title()), style));
        }
        if store.portfolio.recommendations() != crate::state::RecommendationRun::Idle {
            left.push(Span::styled(
                " Optimizing... ",
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        let scroll = Span::styled(
            format!(" {}/{} ", store.scroll.offset(), store.scroll.max_offset()),
            theme.dim(),
        );

        let left_len: usize = left.iter().map(|s| s.width()).sum();
        let padding = (area.width as usize).saturating_sub(left_len + scroll.width());
        left.push(Span::raw(" ".repeat(padding)));
        left.push(scroll);

        frame.render_widget(
            Paragraph::new(Line::from(left)).style(Style::default().bg(theme.selection)),
            area,
        );
    }
}

/// One-line context help at the bottom of the screen.
pub struct HintBar;

impl HintBar {
    fn hints(store: &Store) -> &'static [(&'static str, &'static str)] {
        if let InputMode::Editing(_) = store.app.input_mode {
            return &[("Enter/Esc", "done"), ("Backspace", "delete")];
        }
        match store.overlay() {
            Overlay::Help => &[("?/Esc", "close help"), ("q", "quit")],
            Overlay::Wallet => &[("↑↓", "choose"), ("1-4", "select"), ("Enter", "connect"), ("Esc", "close")],
            Overlay::Inspector => &[("←→", "choose"), ("Enter", "activate"), ("Esc", "close")],
            Overlay::None => match store.app.focus {
                Focus::Hero => &[("Enter", "start building"), ("L", "launch app"), ("d", "demo"), ("w", "wallet"), ("Tab", "next"), ("?", "help"), ("q", "quit")],
                Focus::Builder => &[("hjkl", "move"), ("Space", "toggle"), ("i", "goal"), ("t", "target"), ("r", "risk"), ("g", "generate"), ("D", "deploy")],
                Focus::Portfolio => &[("↑↓", "select"), ("v", "view"), ("c", "configure"), ("a", "apply AI"), ("Tab", "next")],
            },
        }
    }

    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let mut spans = Vec::new();
        for (key, label) in Self::hints(store) {
            spans.push(Span::styled(format!(" {key}"), theme.key_hint()));
            spans.push(Span::styled(format!(" {label} "), theme.dim()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
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
        let mut terminal = Terminal::new(TestBackend::new(120, 2)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                StatusBar::render(frame, Rect { height: 1, ..area }, store, &Theme::default());
                HintBar::render(
                    frame,
                    Rect { y: 1, height: 1, ..area },
                    store,
                    &Theme::default(),
                );
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_status_shows_wallet_and_sections() {
        let mut store = Store::new(&Config::default());
        store.app.connected_wallet = Some("Cosmostation".to_string());
        let text = draw(&store);

        assert!(text.contains("● Cosmostation"));
        assert!(text.contains("Strategy Builder"));
    }

    #[test]
    fn test_hints_follow_overlay() {
        let mut store = Store::new(&Config::default());
        store.reduce(Action::OpenWallet);
        let text = draw(&store);
        assert!(text.contains("connect"));
        assert!(!text.contains("launch app"));
    }
}
