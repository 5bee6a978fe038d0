//! Portfolio and strategy state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual tone derived from a strategy attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Low risk / healthy.
    Positive,
    Caution,
    Danger,
    Neutral,
}

/// Risk level of a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    MediumHigh,
    High,
    /// Any value the fixture or a backend sends that we do not know.
    Unrecognized(String),
}

impl RiskLevel {
    pub fn parse(value: &str) -> Self {
        match value {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "Medium-High" => Self::MediumHigh,
            "High" => Self::High,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
            Self::Unrecognized(other) => other,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Low => Tone::Positive,
            Self::Medium | Self::MediumHigh => Tone::Caution,
            Self::High => Tone::Danger,
            Self::Unrecognized(_) => Tone::Neutral,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<RiskLevel> for String {
    fn from(value: RiskLevel) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a strategy. Display only; never transitions here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StrategyStatus {
    Active,
    Rebalancing,
    Paused,
    Unrecognized(String),
}

impl StrategyStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "Active" => Self::Active,
            "Rebalancing" => Self::Rebalancing,
            "Paused" => Self::Paused,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Rebalancing => "Rebalancing",
            Self::Paused => "Paused",
            Self::Unrecognized(other) => other,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Positive,
            Self::Rebalancing => Tone::Caution,
            Self::Paused | Self::Unrecognized(_) => Tone::Neutral,
        }
    }
}

impl From<String> for StrategyStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<StrategyStatus> for String {
    fn from(value: StrategyStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for StrategyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named yield strategy with its (display-only) performance figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub name: String,
    pub value: String,
    #[serde(rename = "yield")]
    pub yield_amount: String,
    pub apy: String,
    pub risk: RiskLevel,
    pub status: StrategyStatus,
    pub chains: Vec<String>,
    pub modules: Vec<String>,
}

impl Strategy {
    #[allow(clippy::too_many_arguments)]
    fn fixture(
        name: &str,
        value: &str,
        yield_amount: &str,
        apy: &str,
        risk: &str,
        status: &str,
        chains: &[&str],
        modules: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            yield_amount: yield_amount.to_string(),
            apy: apy.to_string(),
            risk: RiskLevel::parse(risk),
            status: StrategyStatus::parse(status),
            chains: chains.iter().map(|c| c.to_string()).collect(),
            modules: modules.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn risk_tone(&self) -> Tone {
        self.risk.tone()
    }

    pub fn status_tone(&self) -> Tone {
        self.status.tone()
    }

    /// URL-safe form of the name, used for explorer links.
    pub fn slug(&self) -> String {
        self.name
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Headline figures for the whole portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSummary {
    pub total_value: String,
    pub total_yield: String,
    pub average_apy: String,
    pub active_strategies: u32,
    pub chains: Vec<String>,
}

/// Kind of AI insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Optimization,
    RiskAlert,
    Opportunity,
}

impl InsightKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Optimization => "Optimization Found",
            Self::RiskAlert => "Risk Alert",
            Self::Opportunity => "New Opportunity",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Optimization => Tone::Positive,
            Self::RiskAlert => Tone::Caution,
            Self::Opportunity => Tone::Neutral,
        }
    }
}

/// A static insight shown in the portfolio insights panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub detail: String,
}

/// Identifies one run of "apply recommendations".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationTicket {
    pub run: u64,
}

/// Progress of the "apply recommendations" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendationRun {
    #[default]
    Idle,
    Applying(RecommendationTicket),
}

/// Portfolio dashboard state.
#[derive(Debug, Clone)]
pub struct PortfolioState {
    pub summary: PortfolioSummary,
    pub strategies: Vec<Strategy>,
    pub insights: Vec<Insight>,
    /// Currently highlighted strategy card.
    pub selected: Option<usize>,
    recommendations: RecommendationRun,
    runs: u64,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::demo()
    }
}

impl PortfolioState {
    /// The demo portfolio.
    pub fn demo() -> Self {
        let strategies = vec![
            Strategy::fixture(
                "Conservative Staking Pool",
                "$15,420.00",
                "+$892.34",
                "12.4%",
                "Low",
                "Active",
                &["Cosmos", "Osmosis"],
                &["CW20", "Staking", "Splitter"],
            ),
            Strategy::fixture(
                "Multi-Chain Liquidity",
                "$18,750.50",
                "+$1,234.56",
                "15.8%",
                "Medium",
                "Rebalancing",
                &["Terra", "Juno"],
                &["Vault", "Weighted Distribution", "Auction"],
            ),
            Strategy::fixture(
                "AI Yield Optimizer",
                "$13,353.17",
                "+$1,120.99",
                "18.2%",
                "Medium-High",
                "Active",
                &["Cosmos", "Terra", "Osmosis"],
                &["CW20", "Conditional Splitter", "Crowdfund v2.0"],
            ),
        ];

        Self::new(
            PortfolioSummary {
                total_value: "$47,523.67".to_string(),
                total_yield: "+$3,247.89".to_string(),
                average_apy: "+7.33%".to_string(),
                active_strategies: 5,
                chains: ["Cosmos", "Osmosis", "Terra", "Juno"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            },
            strategies,
        )
    }

    pub fn new(summary: PortfolioSummary, strategies: Vec<Strategy>) -> Self {
        let insights = vec![
            Insight {
                kind: InsightKind::Optimization,
                detail: "Rebalancing Conservative Pool could increase APY by 2.1%".to_string(),
            },
            Insight {
                kind: InsightKind::RiskAlert,
                detail: "Consider diversifying Terra exposure across more chains".to_string(),
            },
            Insight {
                kind: InsightKind::Opportunity,
                detail: "Neutron chain integration available - 16.5% APY potential".to_string(),
            },
        ];
        let selected = if strategies.is_empty() { None } else { Some(0) };

        Self {
            summary,
            strategies,
            insights,
            selected,
            recommendations: RecommendationRun::Idle,
            runs: 0,
        }
    }

    pub fn strategy(&self, index: usize) -> Option<&Strategy> {
        self.strategies.get(index)
    }

    pub fn selected_strategy(&self) -> Option<&Strategy> {
        self.selected.and_then(|i| self.strategies.get(i))
    }

    /// Move the highlighted card by `delta`, clamped to the list.
    pub fn select_relative(&mut self, delta: i32) {
        if self.strategies.is_empty() {
            self.selected = None;
            return;
        }
        let max = self.strategies.len() as i32 - 1;
        let current = self.selected.unwrap_or(0) as i32;
        self.selected = Some((current + delta).clamp(0, max) as usize);
    }

    pub fn recommendations(&self) -> RecommendationRun {
        self.recommendations
    }

    pub fn can_apply_recommendations(&self) -> bool {
        self.recommendations == RecommendationRun::Idle
    }

    /// Start a run; `None` while one is already in flight.
    pub fn begin_recommendations(&mut self) -> Option<RecommendationTicket> {
        if !self.can_apply_recommendations() {
            tracing::debug!("apply recommendations ignored: run in progress");
            return None;
        }
        self.runs += 1;
        let ticket = RecommendationTicket { run: self.runs };
        self.recommendations = RecommendationRun::Applying(ticket);
        Some(ticket)
    }

    /// Finish the run identified by `ticket`. Returns `false` for stale tickets.
    pub fn finish_recommendations(&mut self, ticket: RecommendationTicket) -> bool {
        if self.recommendations != RecommendationRun::Applying(ticket) {
            tracing::debug!(run = ticket.run, "stale recommendation completion dropped");
            return false;
        }
        self.recommendations = RecommendationRun::Idle;
        true
    }

    /// Abandon the current run; a late completion will be ignored.
    pub fn cancel_recommendations(&mut self) -> bool {
        let was_running = !self.can_apply_recommendations();
        self.recommendations = RecommendationRun::Idle;
        was_running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_medium_and_medium_high_share_tone() {
        assert_eq!(
            RiskLevel::parse("Medium-High").tone(),
            RiskLevel::parse("Medium").tone()
        );
        assert_eq!(RiskLevel::MediumHigh.tone(), Tone::Caution);
    }

    #[test]
    fn test_risk_tones() {
        assert_eq!(RiskLevel::Low.tone(), Tone::Positive);
        assert_eq!(RiskLevel::High.tone(), Tone::Danger);
        assert_eq!(RiskLevel::parse("Extreme").tone(), Tone::Neutral);
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        let status = StrategyStatus::parse("Liquidating");
        assert_eq!(status, StrategyStatus::Unrecognized("Liquidating".to_string()));
        assert_eq!(status.tone(), Tone::Neutral);
        assert_eq!(status.as_str(), "Liquidating");
        assert_eq!(StrategyStatus::Active.tone(), Tone::Positive);
        assert_eq!(StrategyStatus::Rebalancing.tone(), Tone::Caution);
        assert_eq!(StrategyStatus::Paused.tone(), Tone::Neutral);
    }

    #[test]
    fn test_strategy_serde_uses_display_strings() {
        let portfolio = PortfolioState::demo();
        let json = serde_json::to_value(&portfolio.strategies[2]).unwrap();
        assert_eq!(json["risk"], "Medium-High");
        assert_eq!(json["yield"], "+$1,120.99");

        let back: Strategy = serde_json::from_value(json).unwrap();
        assert_eq!(back, portfolio.strategies[2]);
    }

    #[test]
    fn test_slug() {
        let portfolio = PortfolioState::demo();
        assert_eq!(portfolio.strategies[1].slug(), "multi-chain-liquidity");
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut portfolio = PortfolioState::demo();
        assert_eq!(portfolio.selected, Some(0));
        portfolio.select_relative(-1);
        assert_eq!(portfolio.selected, Some(0));
        portfolio.select_relative(10);
        assert_eq!(portfolio.selected, Some(2));
    }

    #[test]
    fn test_recommendation_run_guards() {
        let mut portfolio = PortfolioState::demo();
        let ticket = portfolio.begin_recommendations().unwrap();
        assert!(portfolio.begin_recommendations().is_none());
        assert!(!portfolio.can_apply_recommendations());

        assert!(!portfolio.finish_recommendations(RecommendationTicket { run: 99 }));
        assert!(portfolio.finish_recommendations(ticket));
        assert!(portfolio.can_apply_recommendations());
        assert!(!portfolio.finish_recommendations(ticket));
    }

    #[test]
    fn test_cancelled_run_ignores_late_completion() {
        let mut portfolio = PortfolioState::demo();
        let ticket = portfolio.begin_recommendations().unwrap();
        assert!(portfolio.cancel_recommendations());
        assert!(!portfolio.finish_recommendations(ticket));

        let next = portfolio.begin_recommendations().unwrap();
        assert_ne!(next, ticket);
    }
}
