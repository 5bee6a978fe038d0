//! Strategy inspector overlay state.

use super::portfolio_state::Strategy;

/// How the inspector was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorMode {
    View,
    Configure,
}

/// A button offered by the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorAction {
    ViewOnExplorer,
    Configure,
    Pause,
    RebalanceNow,
    Resume,
}

impl InspectorMode {
    /// Actions available in this mode. View and configure sets are disjoint.
    pub fn actions(self) -> &'static [InspectorAction] {
        match self {
            Self::View => &[InspectorAction::ViewOnExplorer, InspectorAction::Configure],
            Self::Configure => &[
                InspectorAction::Pause,
                InspectorAction::RebalanceNow,
                InspectorAction::Resume,
            ],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::View => "Strategy performance and details",
            Self::Configure => "Configure strategy settings",
        }
    }
}

impl InspectorAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::ViewOnExplorer => "View on Explorer",
            Self::Configure => "Configure",
            Self::Pause => "Pause Strategy",
            Self::RebalanceNow => "Rebalance Now",
            Self::Resume => "Resume",
        }
    }

    /// Whether the action changes a strategy and must go to the backend.
    pub fn is_lifecycle(self) -> bool {
        matches!(self, Self::Pause | Self::RebalanceNow | Self::Resume)
    }
}

/// An open inspector. Holding a session implies a strategy is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorSession {
    pub strategy: Strategy,
    pub mode: InspectorMode,
    cursor: usize,
}

impl InspectorSession {
    pub fn actions(&self) -> &'static [InspectorAction] {
        self.mode.actions()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_action(&self) -> Option<InspectorAction> {
        self.actions().get(self.cursor).copied()
    }
}

/// The strategy detail overlay.
#[derive(Debug, Clone, Default)]
pub struct StrategyInspector {
    session: Option<InspectorSession>,
}

impl StrategyInspector {
    pub fn open(&mut self, strategy: Strategy, mode: InspectorMode) {
        tracing::debug!(strategy = %strategy.name, ?mode, "inspector opened");
        self.session = Some(InspectorSession {
            strategy,
            mode,
            cursor: 0,
        });
    }

    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&InspectorSession> {
        self.session.as_ref()
    }

    /// Actions offered right now; empty when closed.
    pub fn actions(&self) -> &'static [InspectorAction] {
        self.session.as_ref().map(|s| s.actions()).unwrap_or(&[])
    }

    /// Switch an open view session to configure mode.
    pub fn switch_to_configure(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) if session.mode == InspectorMode::View => {
                session.mode = InspectorMode::Configure;
                session.cursor = 0;
                true
            }
            _ => false,
        }
    }

    pub fn move_cursor(&mut self, delta: i32) {
        if let Some(session) = self.session.as_mut() {
            let max = session.actions().len() as i32 - 1;
            session.cursor = (session.cursor as i32 + delta).clamp(0, max.max(0)) as usize;
        }
    }
}
