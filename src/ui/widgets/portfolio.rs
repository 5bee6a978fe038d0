//! Live portfolio dashboard section.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::section_block;
use crate::state::{RecommendationRun, Store, Strategy};
use crate::ui::theme::Theme;

const HEADER_HEIGHT: u16 = 3;
const SUMMARY_HEIGHT: u16 = 4;
const CARD_HEIGHT: u16 = 8;

/// Portfolio overview, strategy cards and AI insights.
pub struct PortfolioSection;

impl PortfolioSection {
    fn insights_height(store: &Store) -> u16 {
        store.portfolio.insights.len() as u16 + 4
    }

    pub fn height(store: &Store) -> u16 {
        2 + HEADER_HEIGHT
            + SUMMARY_HEIGHT
            + store.portfolio.strategies.len() as u16 * CARD_HEIGHT
            + Self::insights_height(store)
    }

    pub fn render(buf: &mut Buffer, area: Rect, store: &Store, theme: &Theme, focused: bool) {
        let block = section_block(" Portfolio ", theme, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut constraints = vec![
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SUMMARY_HEIGHT),
        ];
        constraints.extend(
            store
                .portfolio
                .strategies
                .iter()
                .map(|_| Constraint::Length(CARD_HEIGHT)),
        );
        constraints.push(Constraint::Length(Self::insights_height(store)));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "● Live Portfolio Dashboard",
                Style::default().fg(theme.success),
            )),
            Line::from(Span::styled("Your DeFi Portfolio", theme.heading())),
            Line::from(Span::styled(
                "Real-time tracking of your AI-managed yield strategies",
                theme.dim(),
            )),
        ])
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        render_summary(buf, rows[1], store, theme);

        for (index, strategy) in store.portfolio.strategies.iter().enumerate() {
            let selected = focused && store.portfolio.selected == Some(index);
            render_strategy(buf, rows[2 + index], strategy, selected, theme);
        }

        let insights_row = rows[2 + store.portfolio.strategies.len()];
        render_insights(buf, insights_row, store, theme);
    }
}

fn render_summary(buf: &mut Buffer, area: Rect, store: &Store, theme: &Theme) {
    let summary = &store.portfolio.summary;
    let cards: [(String, &str, Color); 4] = [
        (summary.total_value.clone(), "Total Portfolio Value", theme.success),
        (summary.total_yield.clone(), "Total Yield Generated", theme.primary),
        (summary.average_apy.clone(), "Average APY", theme.accent),
        (
            summary.active_strategies.to_string(),
            "Active Strategies",
            theme.warning,
        ),
    ];

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((value, label, color), cell) in cards.into_iter().zip(cells.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, theme.dim())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .render(*cell, buf);
    }
}

fn badges<'a>(items: &'a [String], theme: &Theme) -> Vec<Span<'a>> {
    items
        .iter()
        .flat_map(|item| {
            [
                Span::styled(format!("[{item}]"), theme.text()),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn render_strategy(buf: &mut Buffer, area: Rect, strategy: &Strategy, selected: bool, theme: &Theme) {
    let status_color = theme.tone(strategy.status_tone());
    let border = if selected {
        Style::default().fg(theme.primary)
    } else {
        Style::default().fg(theme.border)
    };
    let marker = if selected { "▶ " } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Line::from(vec![
            Span::styled(format!(" {marker}{} ", strategy.name), theme.heading()),
        ]))
        .title(
            Line::from(Span::styled(
                format!(" {} ", strategy.status),
                Style::default().fg(status_color),
            ))
            .right_aligned(),
        );

    let mut chains = vec![Span::styled("Active Chains  ", theme.dim())];
    chains.extend(badges(&strategy.chains, theme));
    let mut modules = vec![Span::styled("ADO Modules    ", theme.dim())];
    modules.extend(badges(&strategy.modules, theme));

    let actions = if selected {
        Line::from(vec![
            Span::styled("[v] ", theme.key_hint()),
            Span::styled("View", theme.text()),
            Span::raw("   "),
            Span::styled("[c] ", theme.key_hint()),
            Span::styled("Configure", theme.text()),
        ])
    } else {
        Line::from("")
    };

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                strategy.value.as_str(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} ({})", strategy.yield_amount, strategy.apy),
                Style::default().fg(theme.success),
            ),
        ]),
        Line::from(vec![
            Span::styled("Risk Level  ", theme.dim()),
            Span::styled(
                strategy.risk.as_str(),
                Style::default().fg(theme.tone(strategy.risk_tone())),
            ),
            Span::raw("    "),
            Span::styled(
                format!("{} ADO modules active", strategy.modules.len()),
                theme.dim(),
            ),
        ]),
        Line::from(chains),
        Line::from(modules),
        Line::from(""),
        actions,
    ])
    .block(block)
    .render(area, buf);
}

fn render_insights(buf: &mut Buffer, area: Rect, store: &Store, theme: &Theme) {
    let block = Block::default()
        .title(" AI Portfolio Insights ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    let mut lines: Vec<Line> = store
        .portfolio
        .insights
        .iter()
        .map(|insight| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(theme.tone(insight.kind.tone()))),
                Span::styled(
                    format!("{}: ", insight.kind.title()),
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(insight.detail.as_str(), theme.dim()),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(match store.portfolio.recommendations() {
        RecommendationRun::Idle => Line::from(vec![
            Span::styled("[a] ", theme.key_hint()),
            Span::styled("Apply AI Recommendations", theme.text()),
        ]),
        RecommendationRun::Applying(_) => Line::from(Span::styled(
            "⟳ Applying Recommendations...",
            theme.dim().add_modifier(Modifier::ITALIC),
        )),
    });

    Paragraph::new(lines).block(block).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::widgets::buffer_text;

    fn render(store: &Store) -> String {
        let area = Rect::new(0, 0, 120, PortfolioSection::height(store));
        let mut buf = Buffer::empty(area);
        PortfolioSection::render(&mut buf, area, store, &Theme::default(), true);
        buffer_text(&buf)
    }

    #[test]
    fn test_demo_portfolio_renders_cards() {
        let store = Store::new(&Config::default());
        let text = render(&store);

        assert!(text.contains("$47,523.67"));
        assert!(text.contains("Conservative Staking Pool"));
        assert!(text.contains("Medium-High"));
        assert!(text.contains("Rebalancing"));
        assert!(text.contains("Apply AI Recommendations"));
    }

    #[test]
    fn test_apply_button_disabled_while_running() {
        let mut store = Store::new(&Config::default());
        store.portfolio.begin_recommendations();
        let text = render(&store);

        assert!(text.contains("Applying Recommendations..."));
        assert!(!text.contains("[a] Apply AI Recommendations"));
    }

    #[test]
    fn test_unknown_status_still_renders() {
        let mut store = Store::new(&Config::default());
        store.portfolio.strategies[0].status =
            crate::state::StrategyStatus::parse("Liquidating");
        let text = render(&store);
        assert!(text.contains("Liquidating"));
    }
}
