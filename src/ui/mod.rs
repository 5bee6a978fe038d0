//! UI rendering using ratatui.
//!
//! The page (hero, strategy builder, portfolio) is composed off-screen and
//! scrolled through the page area; modals, help and toasts are drawn on top.

mod layout;
mod page;
mod theme;
mod widgets;

pub use layout::{Layout, centered_fixed};
pub use page::{PageLayout, Section, render_page};
pub use theme::Theme;
pub use widgets::{
    BuilderSection, HelpPanel, HeroSection, HintBar, InspectorModal, PortfolioSection, StatusBar,
    ToastStack, WalletModal,
};

use crate::config::{Config, KeyBindings};
use crate::state::{Overlay, Store};
use ratatui::{Frame, layout::Rect, style::Style, widgets::Block};

/// Main UI renderer.
pub struct Ui {
    theme: Theme,
    keybindings: KeyBindings,
    show_status_bar: bool,
    show_help_bar: bool,
}

impl Ui {
    pub fn new(config: &Config) -> Self {
        Self {
            theme: Theme::from_config(&config.theme),
            keybindings: config.keybindings.clone(),
            show_status_bar: config.ui.show_status_bar,
            show_help_bar: config.ui.show_help_bar,
        }
    }

    pub fn layout(&self, area: Rect) -> Layout {
        Layout::new(area, self.show_status_bar, self.show_help_bar)
    }

    /// Render the entire UI.
    pub fn render(&self, frame: &mut Frame, store: &Store) {
        let theme = &self.theme;
        let layout = self.layout(frame.area());

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
            frame.area(),
        );

        if self.show_status_bar {
            StatusBar::render(frame, layout.status_area, store, theme);
        }

        render_page(frame, layout.page_area, store, theme);

        if self.show_help_bar {
            HintBar::render(frame, layout.help_area, store, theme);
        }

        match store.overlay() {
            Overlay::Help => HelpPanel::render(frame, frame.area(), &self.keybindings, theme),
            Overlay::Wallet => WalletModal::render(frame, layout.page_area, store, theme),
            Overlay::Inspector => InspectorModal::render(frame, layout.page_area, store, theme),
            Overlay::None => {}
        }

        // Toasts stay visible above every overlay
        ToastStack::render(frame, layout.notification_area, store, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;
    use crate::ui::widgets::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(store: &mut Store, config: &Config) -> String {
        let ui = Ui::new(config);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let area = Rect::new(0, 0, 100, 30);
        PageLayout::new(store).register(&mut store.scroll, ui.layout(area).page_area.height);
        terminal.draw(|frame| ui.render(frame, store)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_first_screen_shows_hero() {
        let config = Config::default();
        let mut store = Store::new(&config);
        let text = draw(&mut store, &config);

        assert!(text.contains("Automated Cross-Chain"));
        assert!(!text.contains("AI Portfolio Insights"));
    }

    #[test]
    fn test_view_demo_scrolls_portfolio_into_view() {
        let mut config = Config::default();
        config.ui.smooth_scroll = false;
        let mut store = Store::new(&config);
        draw(&mut store, &config);

        store.reduce(Action::ViewDemo);
        let text = draw(&mut store, &config);

        assert!(text.contains("Total Portfolio Value"));
        assert!(text.contains("Conservative Staking Pool"));
        assert!(text.contains("Live Portfolio Demo"));
        assert!(!text.contains("Automated Cross-Chain"));
    }

    #[test]
    fn test_help_overlay_drawn_on_top() {
        let config = Config::default();
        let mut store = Store::new(&config);
        store.reduce(Action::ToggleHelp);
        let text = draw(&mut store, &config);
        assert!(text.contains("Toggle help"));
    }
}
