//! Landing section.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::section_block;
use crate::state::Store;
use crate::ui::theme::Theme;

const STATS: [(&str, &str); 4] = [
    ("$12.5M", "Total Value Locked"),
    ("15+", "Chains Supported"),
    ("2,847", "Strategies Active"),
    ("50K+", "Auto Rebalances"),
];

const FEATURES: [(&str, &str); 3] = [
    (
        "AI Strategy Engine",
        "Suggests ADO combinations for your goals",
    ),
    (
        "Cross-Chain Deployment",
        "Deploys across 15+ chains via Pulsar",
    ),
    (
        "Auto Rebalancing",
        "Monitors markets 24/7 and rebalances",
    ),
];

/// Hero section with calls to action.
pub struct HeroSection;

impl HeroSection {
    pub fn height() -> u16 {
        18
    }

    pub fn render(buf: &mut Buffer, area: Rect, store: &Store, theme: &Theme, focused: bool) {
        let block = section_block(" AI Yield Architect ", theme, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Badge
                Constraint::Length(2), // Headline
                Constraint::Length(1),
                Constraint::Length(2), // Pitch
                Constraint::Length(1),
                Constraint::Length(1), // Calls to action
                Constraint::Length(1),
                Constraint::Length(2), // Stats
                Constraint::Length(1),
                Constraint::Length(3), // Features
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            "✦ Powered by Andromeda ADO + aOS",
            Style::default().fg(theme.accent),
        )))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        Paragraph::new(vec![
            Line::from(Span::styled("Automated Cross-Chain", theme.heading())),
            Line::from(Span::styled(
                "DeFi Strategy Builder",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .render(rows[1], buf);

        Paragraph::new(
            "AI-powered DeFi strategy creation using modular ADOs. Describe your financial \
             goals, and the AI builds, deploys, and rebalances cross-chain yield strategies.",
        )
        .style(theme.dim())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(rows[3], buf);

        let wallet = match &store.app.connected_wallet {
            Some(name) => Span::styled(format!("● {name}"), Style::default().fg(theme.success)),
            None => Span::styled("Connect Wallet", theme.text()),
        };
        Paragraph::new(Line::from(vec![
            Span::styled("[L] ", theme.key_hint()),
            Span::styled("Launch App", theme.text()),
            Span::raw("    "),
            Span::styled("[d] ", theme.key_hint()),
            Span::styled("View Live Demo", theme.text()),
            Span::raw("    "),
            Span::styled("[Enter] ", theme.key_hint()),
            Span::styled("Start Building", theme.text()),
            Span::raw("    "),
            Span::styled("[w] ", theme.key_hint()),
            wallet,
        ]))
        .alignment(Alignment::Center)
        .render(rows[5], buf);

        let stat_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[7]);
        for ((value, label), cell) in STATS.iter().zip(stat_areas.iter()) {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    *value,
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*label, theme.dim())),
            ])
            .alignment(Alignment::Center)
            .render(*cell, buf);
        }

        let feature_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[9]);
        for ((title, detail), cell) in FEATURES.iter().zip(feature_areas.iter()) {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    *title,
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*detail, theme.dim())),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(*cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::widgets::buffer_text;

    #[test]
    fn test_hero_shows_calls_to_action() {
        let store = Store::new(&Config::default());
        let area = Rect::new(0, 0, 100, HeroSection::height());
        let mut buf = Buffer::empty(area);

        HeroSection::render(&mut buf, area, &store, &Theme::default(), true);

        let text = buffer_text(&buf);
        assert!(text.contains("Launch App"));
        assert!(text.contains("View Live Demo"));
        assert!(text.contains("Start Building"));
        assert!(text.contains("Connect Wallet"));
        assert!(text.contains("2,847"));
    }

    #[test]
    fn test_connected_wallet_replaces_prompt() {
        let mut store = Store::new(&Config::default());
        store.app.connected_wallet = Some("Keplr Wallet".to_string());
        let area = Rect::new(0, 0, 100, HeroSection::height());
        let mut buf = Buffer::empty(area);

        HeroSection::render(&mut buf, area, &store, &Theme::default(), false);

        let text = buffer_text(&buf);
        assert!(text.contains("Keplr Wallet"));
        assert!(!text.contains("Connect Wallet"));
    }
}
