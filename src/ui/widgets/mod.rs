//! TUI widgets.
//!
//! Page sections render into an off-screen [`Buffer`](ratatui::buffer::Buffer)
//! that is scrolled by the page compositor; overlays and bars render
//! straight into the frame.

mod builder;
mod help;
mod hero;
mod inspector_modal;
mod notifications;
mod portfolio;
mod status_bar;
mod wallet_modal;

pub use builder::BuilderSection;
pub use help::HelpPanel;
pub use hero::HeroSection;
pub use inspector_modal::InspectorModal;
pub use notifications::ToastStack;
pub use portfolio::PortfolioSection;
pub use status_bar::{HintBar, StatusBar};
pub use wallet_modal::WalletModal;

use super::theme::Theme;
use ratatui::widgets::{Block, BorderType, Borders};

/// Outer frame of a page section.
fn section_block<'a>(title: &'a str, theme: &Theme, focused: bool) -> Block<'a> {
    let border_type = if focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    Block::default()
        .title(title)
        .title_style(theme.heading())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(theme.section_border(focused))
}

/// Buffer contents as text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
