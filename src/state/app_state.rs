//! Application-level state.

use super::builder_state::BuilderField;
use super::scroll::{HERO_ANCHOR, PORTFOLIO_DASHBOARD_ANCHOR, STRATEGY_BUILDER_ANCHOR};

/// Page section holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Hero,
    Builder,
    Portfolio,
}

impl Focus {
    pub const ALL: [Focus; 3] = [Self::Hero, Self::Builder, Self::Portfolio];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => HERO_ANCHOR,
            Self::Builder => STRATEGY_BUILDER_ANCHOR,
            Self::Portfolio => PORTFOLIO_DASHBOARD_ANCHOR,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Builder => "Strategy Builder",
            Self::Portfolio => "Portfolio",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Hero => Self::Builder,
            Self::Builder => Self::Portfolio,
            Self::Portfolio => Self::Hero,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Hero => Self::Portfolio,
            Self::Builder => Self::Hero,
            Self::Portfolio => Self::Builder,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into a builder text field.
    Editing(BuilderField),
}

/// Topmost layer receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Wallet,
    Inspector,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Section with keyboard focus.
    pub focus: Focus,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Name of the wallet connected in this session.
    pub connected_wallet: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Check if in an input mode.
    pub fn is_editing(&self) -> bool {
        matches!(self.input_mode, InputMode::Editing(_))
    }

    pub fn editing_field(&self) -> Option<BuilderField> {
        match self.input_mode {
            InputMode::Editing(field) => Some(field),
            InputMode::Normal => None,
        }
    }
}
