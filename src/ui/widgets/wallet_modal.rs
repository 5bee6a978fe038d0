//! Connect-wallet modal.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::{Store, WALLETS};
use crate::ui::layout::centered_fixed;
use crate::ui::theme::Theme;

const ROW_HEIGHT: u16 = 2;

/// Wallet picker popup.
pub struct WalletModal;

impl WalletModal {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let height = 2 + 2 + WALLETS.len() as u16 * ROW_HEIGHT + 3;
        let popup = centered_fixed(60, height, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Connect Your Wallet ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(WALLETS.len() as u16 * ROW_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Choose a wallet to connect to AI Yield Architect",
                theme.dim(),
            )),
            chunks[0],
        );

        let flow = &store.wallet;
        let mut lines = Vec::with_capacity(WALLETS.len() * 2);
        for (index, wallet) in WALLETS.iter().enumerate() {
            let under_cursor = flow.cursor() == index;
            let status = if !wallet.supported {
                Span::styled("Coming Soon", theme.dim())
            } else if flow.connecting_wallet() == Some(wallet.id) {
                Span::styled(
                    "Connecting...",
                    Style::default()
                        .fg(theme.warning)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::styled("Connect", Style::default().fg(theme.accent))
            };

            let name_style = if !wallet.supported {
                theme.dim()
            } else if under_cursor {
                theme.highlight().fg(theme.foreground)
            } else {
                theme.text().add_modifier(Modifier::BOLD)
            };
            let pointer = if under_cursor { "▶ " } else { "  " };

            lines.push(Line::from(vec![
                Span::styled(pointer, Style::default().fg(theme.primary)),
                Span::styled(format!("{} ", index + 1), theme.key_hint()),
                Span::styled(format!("{} {}", wallet.icon, wallet.name), name_style),
                Span::raw("  "),
                status,
            ]));
            lines.push(Line::from(Span::styled(
                format!("      {}", wallet.description),
                theme.dim(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), chunks[1]);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Enter", theme.key_hint()),
                Span::styled(" connect  ", theme.dim()),
                Span::styled("Esc", theme.key_hint()),
                Span::styled(" close", theme.dim()),
            ])),
            chunks[2],
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
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| WalletModal::render(frame, frame.area(), store, &Theme::default()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_unsupported_wallet_marked_coming_soon() {
        let mut store = Store::new(&Config::default());
        store.reduce(Action::OpenWallet);
        let text = draw(&store);

        assert!(text.contains("Connect Your Wallet"));
        assert!(text.contains("MetaMask"));
        assert!(text.contains("Coming Soon"));
    }

    #[test]
    fn test_connecting_wallet_shows_progress() {
        let mut store = Store::new(&Config::default());
        store.reduce(Action::OpenWallet);
        store.reduce(Action::SelectWallet(1));
        let text = draw(&store);

        assert_eq!(text.matches("Connecting...").count(), 1);
        assert!(text.contains("Leap Wallet"));
    }
}
