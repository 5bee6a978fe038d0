//! Toast rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{NotificationLevel, Store};
use crate::ui::theme::Theme;

const TOAST_HEIGHT: u16 = 4;

/// Stack of live toasts, newest on top.
pub struct ToastStack;

impl ToastStack {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let mut y = area.y;
        for notification in store.notifications.iter().rev() {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let toast_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: TOAST_HEIGHT,
            };
            y += TOAST_HEIGHT;

            frame.render_widget(Clear, toast_area);

            let color = theme.level(notification.level);
            let icon = match notification.level {
                NotificationLevel::Info => "ℹ",
                NotificationLevel::Success => "✓",
                NotificationLevel::Warning => "⚠",
                NotificationLevel::Error => "✗",
            };

            let content = vec![
                Line::from(vec![
                    Span::styled(format!("{icon} "), Style::default().fg(color)),
                    Span::styled(
                        notification.title.as_str(),
                        Style::default()
                            .fg(theme.foreground)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(notification.description.as_str(), theme.dim())),
            ];

            let paragraph = Paragraph::new(content)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(theme.background)),
                )
                .wrap(Wrap { trim: true });

            frame.render_widget(paragraph, toast_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::Notification;
    use crate::ui::widgets::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_newest_toast_on_top_and_overflow_clipped() {
        let mut store = Store::new(&Config::default());
        store.notifications.push(Notification::info("first", "a"));
        store.notifications.push(Notification::error("second", "b"));
        store.notifications.push(Notification::success("third", "c"));

        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| ToastStack::render(frame, frame.area(), &store, &Theme::default()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        let third = text.find("third").unwrap();
        let second = text.find("second").unwrap();
        assert!(third < second);
        assert!(!text.contains("first"));
    }
}
