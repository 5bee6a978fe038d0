//! Strategy builder state: module selection and the draft form.

use super::catalog::{self, MODULE_CATALOG, ModuleCatalogEntry};
use serde::{Deserialize, Serialize};

/// Columns in the module grid.
pub const MODULE_GRID_COLUMNS: usize = 3;

/// Risk appetite chosen in the AI generator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Free-text fields of the draft form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderField {
    Goal,
    TargetInvestment,
}

impl BuilderField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Goal => "Financial Goal",
            Self::TargetInvestment => "Target Investment",
        }
    }
}

/// One badge in the selection preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem<'a> {
    pub id: &'a str,
    /// `None` when the id is not in the catalog.
    pub name: Option<&'static str>,
}

/// Toggle-select set of catalog modules.
#[derive(Debug, Clone, Default)]
pub struct ModuleSelectionPanel {
    /// Selected ids in the order they were picked.
    selected: Vec<String>,
    /// Grid cursor into [`MODULE_CATALOG`].
    cursor: usize,
}

impl ModuleSelectionPanel {
    /// Add `id` if absent, remove it if present.
    pub fn toggle_module(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            tracing::debug!(module = id, "module deselected");
        } else {
            self.selected.push(id.to_string());
            tracing::debug!(module = id, "module selected");
        }
    }

    pub fn selection(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// The selection resolved against the catalog.
    pub fn preview(&self) -> Vec<PreviewItem<'_>> {
        self.selected
            .iter()
            .map(|id| PreviewItem {
                id,
                name: catalog::find(id).map(|entry| entry.name),
            })
            .collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entry_at_cursor(&self) -> Option<&'static ModuleCatalogEntry> {
        MODULE_CATALOG.get(self.cursor)
    }

    pub fn toggle_at_cursor(&mut self) {
        if let Some(entry) = self.entry_at_cursor() {
            self.toggle_module(entry.id);
        }
    }

    /// Move the grid cursor, staying inside the catalog.
    pub fn move_cursor(&mut self, rows: i32, cols: i32) {
        let len = MODULE_CATALOG.len() as i32;
        if len == 0 {
            return;
        }
        let columns = MODULE_GRID_COLUMNS as i32;
        let current = self.cursor as i32;
        let row = current / columns + rows;
        let col = (current % columns + cols).clamp(0, columns - 1);
        let next = (row * columns + col).clamp(0, len - 1);
        self.cursor = next as usize;
    }
}

/// Everything the user entered in the builder, as sent with intents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyDraft {
    pub goal: String,
    pub risk_tolerance: RiskTolerance,
    pub target_investment: String,
    pub modules: Vec<String>,
}

/// State of the strategy builder section.
#[derive(Debug, Clone, Default)]
pub struct BuilderState {
    pub modules: ModuleSelectionPanel,
    pub goal: String,
    pub risk_tolerance: RiskTolerance,
    pub target_investment: String,
}

impl BuilderState {
    /// Whether the deploy panel is shown.
    pub fn ready_to_deploy(&self) -> bool {
        !self.goal.is_empty() || !self.modules.selection().is_empty()
    }

    pub fn field(&self, field: BuilderField) -> &str {
        match field {
            BuilderField::Goal => &self.goal,
            BuilderField::TargetInvestment => &self.target_investment,
        }
    }

    pub fn field_mut(&mut self, field: BuilderField) -> &mut String {
        match field {
            BuilderField::Goal => &mut self.goal,
            BuilderField::TargetInvestment => &mut self.target_investment,
        }
    }

    pub fn draft(&self) -> StrategyDraft {
        StrategyDraft {
            goal: self.goal.trim().to_string(),
            risk_tolerance: self.risk_tolerance,
            target_investment: self.target_investment.trim().to_string(),
            modules: self.modules.selection().to_vec(),
        }
    }
}
