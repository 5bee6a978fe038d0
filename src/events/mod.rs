//! Event handling for Yield Architect.
//!
//! Terminal input is translated into store [`Action`](crate::state::Action)s
//! according to the configured key bindings and whichever layer currently
//! owns input.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};

use crate::config::UiConfig;
use std::time::Duration;

/// Configuration for the event handler.
#[derive(Debug, Clone)]
pub struct EventConfig {
    /// Interval between `Tick` actions.
    pub tick_rate: Duration,
    /// Whether mouse wheel events scroll the page.
    pub mouse_capture: bool,
    /// Rows moved per mouse wheel notch.
    pub scroll_step: u16,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(50),
            mouse_capture: true,
            scroll_step: 2,
        }
    }
}

impl From<&UiConfig> for EventConfig {
    fn from(ui: &UiConfig) -> Self {
        Self {
            tick_rate: ui.tick_rate(),
            mouse_capture: ui.mouse_support,
            scroll_step: ui.scroll_step.max(1),
        }
    }
}
