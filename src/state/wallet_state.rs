//! Wallet connection modal state.

use super::notifications::{Notification, NotificationCenter};
use crate::error::Error;

/// A wallet the user can pick in the connect modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub supported: bool,
}

/// Wallets offered by the connect modal, in display order.
pub const WALLETS: &[WalletOption] = &[
    WalletOption {
        id: "keplr",
        name: "Keplr Wallet",
        description: "The most popular Cosmos wallet",
        icon: "⬡",
        supported: true,
    },
    WalletOption {
        id: "leap",
        name: "Leap Wallet",
        description: "Fast & secure Cosmos wallet",
        icon: "⬢",
        supported: true,
    },
    WalletOption {
        id: "cosmostation",
        name: "Cosmostation",
        description: "Multi-chain Cosmos wallet",
        icon: "✦",
        supported: true,
    },
    WalletOption {
        id: "metamask",
        name: "MetaMask",
        description: "Popular Ethereum wallet (via IBC)",
        icon: "◈",
        supported: false,
    },
];

pub fn find_wallet(id: &str) -> Option<&'static WalletOption> {
    WALLETS.iter().find(|w| w.id == id)
}

/// Phase of one modal invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletPhase {
    #[default]
    Idle,
    Connecting(String),
    Closed,
}

/// Identifies one connection attempt. Completions carrying an older ticket
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectTicket {
    pub wallet: WalletOption,
    pub attempt: u64,
}

/// The connect-wallet modal.
#[derive(Debug, Clone, Default)]
pub struct WalletConnectionFlow {
    open: bool,
    phase: WalletPhase,
    cursor: usize,
    attempts: u64,
}

impl WalletConnectionFlow {
    pub fn open(&mut self) {
        self.open = true;
        self.phase = WalletPhase::Idle;
        self.cursor = 0;
    }

    /// Close the modal. Returns `true` if a connection was in flight and
    /// has been abandoned.
    pub fn close(&mut self) -> bool {
        let abandoned = self.is_connecting();
        if abandoned {
            tracing::info!("wallet connection abandoned");
        }
        self.open = false;
        self.phase = WalletPhase::Closed;
        abandoned
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn phase(&self) -> &WalletPhase {
        &self.phase
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self.phase, WalletPhase::Connecting(_))
    }

    pub fn connecting_wallet(&self) -> Option<&str> {
        match &self.phase {
            WalletPhase::Connecting(id) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let max = WALLETS.len() as i32 - 1;
        self.cursor = (self.cursor as i32 + delta).clamp(0, max) as usize;
    }

    pub fn select_at_cursor(&mut self) -> Option<ConnectTicket> {
        self.select(self.cursor)
    }

    /// Start connecting to the wallet at `index`.
    ///
    /// Rejected (returns `None`) when the modal is closed, a connection is
    /// already in progress, or the wallet is not supported.
    pub fn select(&mut self, index: usize) -> Option<ConnectTicket> {
        let wallet = WALLETS.get(index)?;

        if !self.open {
            return None;
        }
        if let Some(current) = self.connecting_wallet() {
            tracing::debug!(
                requested = wallet.id,
                in_flight = current,
                "wallet selection rejected: connection in progress"
            );
            return None;
        }
        if !wallet.supported {
            tracing::debug!(wallet = wallet.id, "wallet selection rejected: unsupported");
            return None;
        }

        self.cursor = index;
        self.attempts += 1;
        self.phase = WalletPhase::Connecting(wallet.id.to_string());
        tracing::info!(wallet = wallet.id, attempt = self.attempts, "connecting wallet");

        Some(ConnectTicket {
            wallet: *wallet,
            attempt: self.attempts,
        })
    }

    fn is_current(&self, ticket: &ConnectTicket) -> bool {
        self.open
            && self.attempts == ticket.attempt
            && self.connecting_wallet() == Some(ticket.wallet.id)
    }

    /// Successful handshake: close the modal and announce the wallet.
    pub fn complete(
        &mut self,
        ticket: &ConnectTicket,
        notifications: &mut NotificationCenter,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(wallet = ticket.wallet.id, "stale wallet completion dropped");
            return false;
        }

        self.phase = WalletPhase::Closed;
        self.open = false;
        notifications.push(Notification::success(
            "Wallet Connected! 🎉",
            format!("Successfully connected to {}", ticket.wallet.name),
        ));
        true
    }

    /// Failed handshake: back to `Idle` so the user can pick again.
    pub fn fail(
        &mut self,
        ticket: &ConnectTicket,
        error: &Error,
        notifications: &mut NotificationCenter,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(wallet = ticket.wallet.id, "stale wallet failure dropped");
            return false;
        }

        tracing::warn!(wallet = ticket.wallet.id, %error, "wallet connection failed");
        self.phase = WalletPhase::Idle;
        notifications.push(Notification::error(
            "Wallet Connection Failed",
            format!("{}: {}", ticket.wallet.name, error.user_message()),
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opened() -> WalletConnectionFlow {
        let mut flow = WalletConnectionFlow::default();
        flow.open();
        flow
    }

    fn index_of(id: &str) -> usize {
        WALLETS.iter().position(|w| w.id == id).unwrap()
    }

    #[test]
    fn test_unsupported_wallet_stays_idle() {
        let mut flow = opened();
        assert!(flow.select(index_of("metamask")).is_none());
        assert_eq!(flow.phase(), &WalletPhase::Idle);
    }

    #[test]
    fn test_second_selection_rejected_while_connecting() {
        let mut flow = opened();
        let ticket = flow.select(index_of("keplr")).unwrap();
        assert!(flow.select(index_of("leap")).is_none());
        assert_eq!(flow.connecting_wallet(), Some("keplr"));
        assert_eq!(ticket.wallet.name, "Keplr Wallet");
    }

    #[test]
    fn test_rejected_selection_keeps_highlight() {
        let mut flow = opened();
        let ticket = flow.select(index_of("cosmostation")).unwrap();

        assert!(flow.select(index_of("leap")).is_none());
        assert_eq!(flow.cursor(), index_of("cosmostation"));

        let error = Error::wallet_rejected("declined");
        flow.fail(&ticket, &error, &mut NotificationCenter::default());
        assert!(flow.select(index_of("metamask")).is_none());
        assert_eq!(flow.cursor(), index_of("cosmostation"));
    }

    #[test]
    fn test_complete_closes_and_notifies() {
        let mut flow = opened();
        let mut notifications = NotificationCenter::default();
        let ticket = flow.select(index_of("cosmostation")).unwrap();

        assert!(flow.complete(&ticket, &mut notifications));
        assert_eq!(flow.phase(), &WalletPhase::Closed);
        assert!(!flow.is_open());
        let toast = notifications.latest().unwrap();
        assert_eq!(toast.description, "Successfully connected to Cosmostation");
    }

    #[test]
    fn test_completion_after_close_is_ignored() {
        let mut flow = opened();
        let mut notifications = NotificationCenter::default();
        let ticket = flow.select(0).unwrap();

        assert!(flow.close());
        assert!(!flow.complete(&ticket, &mut notifications));
        assert!(notifications.is_empty());

        flow.open();
        assert!(!flow.complete(&ticket, &mut notifications));
        assert_eq!(flow.phase(), &WalletPhase::Idle);
    }

    #[test]
    fn test_failure_returns_to_idle() {
        let mut flow = opened();
        let mut notifications = NotificationCenter::default();
        let ticket = flow.select(1).unwrap();

        let error = Error::wallet_rejected("request rejected");
        assert!(flow.fail(&ticket, &error, &mut notifications));
        assert_eq!(flow.phase(), &WalletPhase::Idle);
        assert!(flow.is_open());
        assert_eq!(
            notifications.latest().map(|n| n.description.as_str()),
            Some("Leap Wallet: Wallet rejected connection: request rejected. Please try again.")
        );
        assert!(flow.select(0).is_some());
    }

    #[test]
    fn test_closed_modal_rejects_selection() {
        let mut flow = WalletConnectionFlow::default();
        assert!(flow.select(0).is_none());
        assert_eq!(flow.phase(), &WalletPhase::Idle);
    }
}
