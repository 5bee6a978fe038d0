//! Strategy builder section: goal form, module grid, preview and deploy panel.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::section_block;
use crate::state::{
    BuilderField, MODULE_CATALOG, MODULE_GRID_COLUMNS, RiskTolerance, Store,
};
use crate::ui::theme::Theme;

const HEADER_HEIGHT: u16 = 3;
const GENERATOR_HEIGHT: u16 = 9;
const CARD_HEIGHT: u16 = 4;
const PREVIEW_HEIGHT: u16 = 4;
const DEPLOY_HEIGHT: u16 = 5;

const GOAL_PLACEHOLDER: &str =
    "e.g., I want passive yield with low risk, targeting 8-12% APY across multiple chains...";
const TARGET_PLACEHOLDER: &str = "10,000 USDC";

/// Interactive strategy builder.
pub struct BuilderSection;

impl BuilderSection {
    fn grid_height() -> u16 {
        let rows = MODULE_CATALOG.len().div_ceil(MODULE_GRID_COLUMNS) as u16;
        rows * CARD_HEIGHT + 2
    }

    pub fn height(store: &Store) -> u16 {
        let mut height = 2 + HEADER_HEIGHT + GENERATOR_HEIGHT + Self::grid_height();
        if !store.builder.modules.selection().is_empty() {
            height += PREVIEW_HEIGHT;
        }
        if store.builder.ready_to_deploy() {
            height += DEPLOY_HEIGHT;
        }
        height
    }

    pub fn render(buf: &mut Buffer, area: Rect, store: &Store, theme: &Theme, focused: bool) {
        let block = section_block(" Strategy Builder ", theme, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let show_preview = !store.builder.modules.selection().is_empty();
        let show_deploy = store.builder.ready_to_deploy();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(GENERATOR_HEIGHT),
                Constraint::Length(Self::grid_height()),
                Constraint::Length(if show_preview { PREVIEW_HEIGHT } else { 0 }),
                Constraint::Length(if show_deploy { DEPLOY_HEIGHT } else { 0 }),
                Constraint::Min(0),
            ])
            .split(inner);

        render_header(buf, rows[0], theme);
        render_generator(buf, rows[1], store, theme);
        render_module_grid(buf, rows[2], store, theme, focused);
        if show_preview {
            render_preview(buf, rows[3], store, theme);
        }
        if show_deploy {
            render_deploy(buf, rows[4], theme);
        }
    }
}

fn render_header(buf: &mut Buffer, area: Rect, theme: &Theme) {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Interactive Strategy Builder",
            Style::default().fg(theme.accent),
        )),
        Line::from(Span::styled("Build Your DeFi Strategy", theme.heading())),
        Line::from(Span::styled(
            "Describe your financial goals and pick ADO modules to compose your yield strategy",
            theme.dim(),
        )),
    ])
    .alignment(Alignment::Center)
    .render(area, buf);
}

fn field_line<'a>(
    store: &'a Store,
    field: BuilderField,
    placeholder: &'a str,
    theme: &Theme,
) -> Vec<Span<'a>> {
    let value = store.builder.field(field);
    let editing = store.app.editing_field() == Some(field);
    let mut spans = Vec::new();
    if value.is_empty() && !editing {
        spans.push(Span::styled(placeholder, theme.dim().add_modifier(Modifier::ITALIC)));
    } else {
        spans.push(Span::styled(value, theme.text()));
    }
    if editing {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }
    spans
}

fn render_generator(buf: &mut Buffer, area: Rect, store: &Store, theme: &Theme) {
    let editing = store.app.is_editing();
    let block = Block::default()
        .title(" AI Strategy Generator ")
        .borders(Borders::ALL)
        .border_style(if editing {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.border)
        });

    let mut risk = vec![Span::styled("Risk Tolerance  ", theme.dim())];
    for level in RiskTolerance::ALL {
        let selected = level == store.builder.risk_tolerance;
        let (marker, style) = if selected {
            ("(•) ", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        } else {
            ("( ) ", theme.text())
        };
        risk.push(Span::styled(format!("{marker}{}   ", level.label()), style));
    }
    risk.push(Span::styled("[r]", theme.key_hint()));

    let mut goal = vec![Span::styled("[i] ", theme.key_hint())];
    goal.extend(field_line(store, BuilderField::Goal, GOAL_PLACEHOLDER, theme));

    let mut target = vec![
        Span::styled("Target Investment  ", theme.dim()),
        Span::styled("[t] ", theme.key_hint()),
    ];
    target.extend(field_line(
        store,
        BuilderField::TargetInvestment,
        TARGET_PLACEHOLDER,
        theme,
    ));

    let lines = vec![
        Line::from(Span::styled(
            "Financial Goal",
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(goal),
        Line::from(""),
        Line::from(risk),
        Line::from(target),
        Line::from(""),
        Line::from(vec![
            Span::styled("[g] ", theme.key_hint()),
            Span::styled("Generate AI Strategy", theme.text()),
        ]),
    ];

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_module_grid(buf: &mut Buffer, area: Rect, store: &Store, theme: &Theme, focused: bool) {
    let block = Block::default()
        .title(" ADO Module Library ")
        .title_bottom(Line::from(" Enter/Space toggle ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    block.render(area, buf);

    let panel = &store.builder.modules;
    let row_count = MODULE_CATALOG.len().div_ceil(MODULE_GRID_COLUMNS);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); row_count])
        .split(inner);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, MODULE_GRID_COLUMNS as u32);
                MODULE_GRID_COLUMNS
            ])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row_index * MODULE_GRID_COLUMNS + col;
            let Some(entry) = MODULE_CATALOG.get(index) else {
                continue;
            };
            let selected = panel.is_selected(entry.id);
            let under_cursor = focused && panel.cursor() == index;

            let border = if selected {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.border)
            };
            let mut card = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} {} ", entry.icon, entry.name))
                .title_bottom(Line::from(format!(" {} ", entry.category)).right_aligned());
            if under_cursor {
                card = card.style(theme.highlight());
            }

            let check = if selected {
                Span::styled("✓ ", Style::default().fg(theme.success))
            } else {
                Span::raw("")
            };
            Paragraph::new(Line::from(vec![
                check,
                Span::styled(entry.description, theme.dim()),
            ]))
            .block(card)
            .render(*cell, buf);
        }
    }
}

fn render_preview(buf: &mut Buffer, area: Rect, store: &Store, theme: &Theme) {
    let preview = store.builder.modules.preview();
    let block = Block::default()
        .title(" Strategy Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success));

    let mut names = Vec::with_capacity(preview.len() * 2);
    for item in &preview {
        let span = match item.name {
            Some(name) => Span::styled(format!("[{name}]"), theme.text()),
            None => Span::styled(
                format!("[{} ?]", item.id),
                Style::default().fg(theme.warning),
            ),
        };
        names.push(span);
        names.push(Span::raw(" "));
    }

    Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Selected {} modules for your strategy", preview.len()),
            theme.dim(),
        )),
        Line::from(names),
    ])
    .block(block)
    .render(area, buf);
}

fn render_deploy(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success));

    Paragraph::new(vec![
        Line::from(Span::styled(
            "Ready to Deploy?",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your strategy will be deployed across multiple chains using aOS workflows and Pulsar",
            theme.dim(),
        )),
        Line::from(vec![
            Span::styled("[D] ", theme.key_hint()),
            Span::styled("Deploy & Auto-Rebalance", theme.text()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(block)
    .render(area, buf);
}
