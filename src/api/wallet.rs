//! Wallet provider boundary.

use crate::error::Result;
use crate::state::WalletOption;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// An established wallet connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSession {
    pub wallet_id: String,
    pub connected_at: DateTime<Utc>,
}

/// External collaborator performing the wallet handshake.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn connect(&self, wallet: WalletOption) -> Result<WalletSession>;
}

/// Stand-in provider: waits for a fixed latency and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedWalletProvider {
    latency: Duration,
}

impl SimulatedWalletProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl WalletProvider for SimulatedWalletProvider {
    async fn connect(&self, wallet: WalletOption) -> Result<WalletSession> {
        tracing::debug!(
            wallet = wallet.id,
            latency_ms = self.latency.as_millis() as u64,
            "simulating handshake"
        );
        tokio::time::sleep(self.latency).await;
        Ok(WalletSession {
            wallet_id: wallet.id.to_string(),
            connected_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WALLETS;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_provider_waits_then_succeeds() {
        let provider = SimulatedWalletProvider::new(Duration::from_millis(2000));
        let start = tokio::time::Instant::now();

        let session = provider.connect(WALLETS[0]).await.unwrap();

        assert_eq!(session.wallet_id, "keplr");
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }
}
