//! Strategy-management backend boundary.
//!
//! Every action that would change a strategy on chain is expressed as an
//! [`Intent`] and handed to a [`StrategyManager`]. The UI never applies such
//! changes locally.

use crate::error::Result;
use crate::state::StrategyDraft;
use async_trait::async_trait;
use serde::Serialize;

/// Lifecycle change requested for a deployed strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    Pause,
    Rebalance,
    Resume,
}

impl LifecycleAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Rebalance => "Rebalance",
            Self::Resume => "Resume",
        }
    }
}

/// A user intent addressed to the strategy backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Lifecycle {
        strategy: String,
        action: LifecycleAction,
    },
    ApplyRecommendations,
    GenerateStrategy {
        draft: StrategyDraft,
    },
    DeployStrategy {
        draft: StrategyDraft,
    },
}

impl Intent {
    /// Short human description, used in notifications.
    pub fn summary(&self) -> String {
        match self {
            Self::Lifecycle { strategy, action } => {
                format!("{} requested for {}", action.label(), strategy)
            }
            Self::ApplyRecommendations => "Apply AI recommendations".to_string(),
            Self::GenerateStrategy { draft } => {
                format!("AI strategy requested ({})", draft.risk_tolerance.label())
            }
            Self::DeployStrategy { draft } => {
                format!("Deployment of {} modules requested", draft.modules.len())
            }
        }
    }
}

/// External collaborator that executes strategy intents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StrategyManager: Send + Sync {
    /// Submit an intent. An error means the backend refused it.
    async fn submit(&self, intent: Intent) -> Result<()>;
}

/// Default manager: records each intent in the log and acknowledges it
/// without touching any state.
#[derive(Debug, Default, Clone)]
pub struct LoggingStrategyManager;

#[async_trait]
impl StrategyManager for LoggingStrategyManager {
    async fn submit(&self, intent: Intent) -> Result<()> {
        let payload = serde_json::to_string(&intent)?;
        tracing::info!(%payload, "strategy intent submitted");
        Ok(())
    }
}
