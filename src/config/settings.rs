//! Configuration settings for Yield Architect.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Toast behaviour.
    pub notifications: NotificationConfig,
    /// Latencies and links used by the simulated collaborators.
    pub simulation: SimulationConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from a TOML file layered with environment overrides.
    ///
    /// A missing file is not an error; every section falls back to its
    /// defaults.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(super::default_config_path);

        tracing::debug!("Loading configuration from {}", config_path.display());

        config::Config::builder()
            .add_source(
                config::File::from(config_path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(super::ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|layered| layered.try_deserialize::<Self>())
            .map_err(|e| crate::Error::config(e.to_string()))
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<&Path>) -> crate::Result<()> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(super::default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Animate anchor jumps instead of snapping.
    pub smooth_scroll: bool,
    /// Lines moved per scroll step.
    pub scroll_step: u16,
    /// Show status bar.
    pub show_status_bar: bool,
    /// Show help bar.
    pub show_help_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_support: true,
            smooth_scroll: true,
            scroll_step: 2,
            show_status_bar: true,
            show_help_bar: true,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Navigate left.
    pub left: String,
    /// Navigate right.
    pub right: String,
    /// Select/confirm.
    pub select: String,
    /// Cancel/back.
    pub back: String,
    /// Toggle the module under the cursor.
    pub toggle: String,
    /// Move focus to the next page section.
    pub focus_next: String,
    /// Open the wallet modal.
    pub connect_wallet: String,
    /// Jump to the strategy builder with a welcome message.
    pub launch_app: String,
    /// Jump to the portfolio dashboard with a demo message.
    pub view_demo: String,
    /// Inspect the selected strategy.
    pub view_strategy: String,
    /// Configure the selected strategy.
    pub configure_strategy: String,
    /// Apply AI recommendations.
    pub apply_recommendations: String,
    /// Cycle the risk tolerance of the draft.
    pub cycle_risk: String,
    /// Edit the financial goal.
    pub edit_goal: String,
    /// Edit the target investment.
    pub edit_target: String,
    /// Request an AI generated strategy.
    pub generate_strategy: String,
    /// Deploy the current draft.
    pub deploy_strategy: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            left: "h".to_string(),
            right: "l".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            toggle: "Space".to_string(),
            focus_next: "Tab".to_string(),
            connect_wallet: "w".to_string(),
            launch_app: "L".to_string(),
            view_demo: "d".to_string(),
            view_strategy: "v".to_string(),
            configure_strategy: "c".to_string(),
            apply_recommendations: "a".to_string(),
            cycle_risk: "r".to_string(),
            edit_goal: "i".to_string(),
            edit_target: "t".to_string(),
            generate_strategy: "g".to_string(),
            deploy_strategy: "D".to_string(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary color (hex).
    pub primary: String,
    /// Accent color (hex).
    pub accent: String,
    /// Success color (hex).
    pub success: String,
    /// Warning color (hex).
    pub warning: String,
    /// Error color (hex).
    pub error: String,
    /// Background color (hex).
    pub background: String,
    /// Foreground/text color (hex).
    pub foreground: String,
    /// Secondary text color (hex).
    pub muted: String,
    /// Border color (hex).
    pub border: String,
    /// Selection/highlight color (hex).
    pub selection: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#8b5cf6".to_string(),
            accent: "#22d3ee".to_string(),
            success: "#66bb6a".to_string(),
            warning: "#ffa726".to_string(),
            error: "#ef5350".to_string(),
            background: "#0f0f1a".to_string(),
            foreground: "#cdd6f4".to_string(),
            muted: "#7f849c".to_string(),
            border: "#45475a".to_string(),
            selection: "#585b70".to_string(),
        }
    }
}

/// Notification (toast) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Lifetime of info and success toasts in seconds.
    pub duration_secs: u64,
    /// Maximum number of toasts kept at once.
    pub max_visible: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_secs: 4,
            max_visible: 4,
        }
    }
}

/// Simulated collaborator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Latency of the simulated wallet handshake.
    pub wallet_connect_latency_ms: u64,
    /// Give up on a wallet provider after this long.
    pub wallet_connect_timeout_ms: u64,
    /// Latency of "apply recommendations".
    pub recommendations_latency_ms: u64,
    /// Base URL for "View on Explorer".
    pub explorer_url: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            wallet_connect_latency_ms: 2000,
            wallet_connect_timeout_ms: 10_000,
            recommendations_latency_ms: 3000,
            explorer_url: "https://www.mintscan.io/cosmos".to_string(),
        }
    }
}

impl SimulationConfig {
    pub fn wallet_connect_latency(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_latency_ms)
    }

    pub fn wallet_connect_timeout(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_timeout_ms)
    }

    pub fn recommendations_latency(&self) -> Duration {
        Duration::from_millis(self.recommendations_latency_ms)
    }
}
