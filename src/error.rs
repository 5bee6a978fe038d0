//! Error types for the Yield Architect application.

use thiserror::Error;

/// The main error type for Yield Architect.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The wallet provider refused the connection.
    #[error("Wallet rejected connection: {0}")]
    WalletRejected(String),

    /// The wallet provider did not answer in time.
    #[error("Wallet connection to {wallet} timed out after {timeout_ms} ms")]
    WalletTimeout { wallet: String, timeout_ms: u64 },

    /// The strategy backend refused an intent.
    #[error("Strategy action rejected: {0}")]
    StrategyRejected(String),

    /// A strategy draft references modules the catalog does not know.
    #[error("Unknown modules for catalog {catalog}: {}", unknown.join(", "))]
    CatalogMismatch {
        catalog: String,
        unknown: Vec<String>,
    },

    /// Generic application error
    #[error("{0}")]
    Application(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new wallet rejection error.
    pub fn wallet_rejected(msg: impl Into<String>) -> Self {
        Self::WalletRejected(msg.into())
    }

    /// Create a new strategy rejection error.
    pub fn strategy_rejected(msg: impl Into<String>) -> Self {
        Self::StrategyRejected(msg.into())
    }

    /// Create a new application error.
    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// Check if this error is recoverable (user can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::WalletTimeout { .. } | Self::WalletRejected(_) | Self::StrategyRejected(_)
        )
    }

    /// Text for an error notification; recoverable failures invite a retry.
    pub fn user_message(&self) -> String {
        if self.is_recoverable() {
            format!("{self}. Please try again.")
        } else {
            self.to_string()
        }
    }
}
