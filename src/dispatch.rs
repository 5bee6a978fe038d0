//! Glue between the store and the task runner.

use crate::state::{Action, Store};
use crate::tasks::TaskRunner;

/// Reduces actions into the store and hands resulting effects to the runner.
pub struct Dispatcher {
    pub store: Store,
    tasks: TaskRunner,
}

impl Dispatcher {
    pub fn new(store: Store, tasks: TaskRunner) -> Self {
        Self { store, tasks }
    }

    /// Apply one action.
    pub fn handle(&mut self, action: Action) {
        if !matches!(action, Action::Tick) {
            tracing::trace!(?action, "dispatch");
        }
        if let Some(effect) = self.store.reduce(action) {
            self.tasks.run(effect);
        }
    }

    pub fn tasks(&self) -> &TaskRunner {
        &self.tasks
    }

    pub fn should_quit(&self) -> bool {
        self.store.app.should_quit
    }

    /// Abort outstanding background work.
    pub fn shutdown(&mut self) {
        self.tasks.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        Intent, LifecycleAction, LoggingStrategyManager, MockStrategyManager, MockWalletProvider,
        SimulatedWalletProvider, StrategyManager, WalletProvider,
    };
    use crate::config::Config;
    use crate::error::Error;
    use crate::state::{NotificationLevel, Overlay, WalletPhase};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    struct Harness {
        dispatcher: Dispatcher,
        rx: mpsc::UnboundedReceiver<Action>,
    }

    impl Harness {
        fn new(wallet: Arc<dyn WalletProvider>, manager: Arc<dyn StrategyManager>) -> Self {
            let config = Config::default();
            let (tx, rx) = mpsc::unbounded_channel();
            let tasks = TaskRunner::new(tx, wallet, manager, config.simulation.clone());
            Self {
                dispatcher: Dispatcher::new(Store::new(&config), tasks),
                rx,
            }
        }

        fn simulated() -> Self {
            Self::new(
                Arc::new(SimulatedWalletProvider::new(Duration::from_millis(2000))),
                Arc::new(LoggingStrategyManager),
            )
        }

        fn store(&self) -> &Store {
            &self.dispatcher.store
        }

        /// Wait for the next background completion and dispatch it.
        async fn settle(&mut self) {
            let action = self.rx.recv().await.expect("channel open");
            self.dispatcher.handle(action);
        }

        /// Dispatch whatever has completed up to now without waiting.
        fn drain(&mut self) -> usize {
            let mut n = 0;
            while let Ok(action) = self.rx.try_recv() {
                self.dispatcher.handle(action);
                n += 1;
            }
            n
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_wallet_connects_after_latency() {
        let mut h = Harness::simulated();
        h.dispatcher.handle(Action::OpenWallet);
        h.dispatcher.handle(Action::SelectWallet(0));
        assert_eq!(h.store().wallet.connecting_wallet(), Some("keplr"));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(h.drain(), 0);
        assert!(h.store().wallet.is_connecting());

        h.settle().await;
        assert_eq!(h.store().wallet.phase(), &WalletPhase::Closed);
        assert_eq!(h.store().app.connected_wallet.as_deref(), Some("Keplr Wallet"));
        assert_eq!(
            h.store().notifications.latest().map(|n| n.title.as_str()),
            Some("Wallet Connected! 🎉")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_wallet_rejected_while_first_pending() {
        let mut h = Harness::simulated();
        h.dispatcher.handle(Action::OpenWallet);
        h.dispatcher.handle(Action::SelectWallet(0));
        h.dispatcher.handle(Action::SelectWallet(1));

        h.settle().await;
        assert_eq!(h.store().app.connected_wallet.as_deref(), Some("Keplr Wallet"));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(h.drain(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsupported_wallet_never_connects() {
        let mut h = Harness::simulated();
        h.dispatcher.handle(Action::OpenWallet);
        h.dispatcher.handle(Action::SelectWallet(3));

        assert_eq!(h.store().wallet.phase(), &WalletPhase::Idle);
        assert!(!h.dispatcher.tasks().wallet_in_flight());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_modal_abandons_connection() {
        let mut h = Harness::simulated();
        h.dispatcher.handle(Action::OpenWallet);
        h.dispatcher.handle(Action::SelectWallet(2));
        h.dispatcher.handle(Action::CloseWallet);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(h.drain(), 0);
        assert_eq!(h.store().app.connected_wallet, None);
        assert!(h.store().notifications.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wallet_failure_allows_retry() {
        let mut wallet = MockWalletProvider::new();
        let mut calls = 0;
        wallet.expect_connect().times(2).returning(move |w| {
            calls += 1;
            if calls == 1 {
                Err(Error::wallet_rejected("request rejected"))
            } else {
                Ok(crate::api::WalletSession {
                    wallet_id: w.id.to_string(),
                    connected_at: chrono::Utc::now(),
                })
            }
        });
        let mut h = Harness::new(Arc::new(wallet), Arc::new(LoggingStrategyManager));

        h.dispatcher.handle(Action::OpenWallet);
        h.dispatcher.handle(Action::SelectWallet(1));
        h.settle().await;

        assert_eq!(h.store().wallet.phase(), &WalletPhase::Idle);
        assert_eq!(h.store().overlay(), Overlay::Wallet);
        assert_eq!(
            h.store().notifications.latest().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
        assert!(
            h.store()
                .notifications
                .latest()
                .is_some_and(|n| n.description.ends_with("Please try again."))
        );

        h.dispatcher.handle(Action::SelectWallet(1));
        h.settle().await;
        assert_eq!(h.store().app.connected_wallet.as_deref(), Some("Leap Wallet"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_apply_recommendations_round_trip() {
        let mut h = Harness::simulated();
        let before = h.store().portfolio.strategies.clone();

        h.dispatcher.handle(Action::ApplyRecommendations);
        assert!(!h.store().portfolio.can_apply_recommendations());
        h.dispatcher.handle(Action::ApplyRecommendations);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(h.drain(), 0);
        assert!(!h.store().portfolio.can_apply_recommendations());

        h.settle().await;
        assert!(h.store().portfolio.can_apply_recommendations());
        assert_eq!(h.store().portfolio.strategies, before);
        assert_eq!(
            h.store().notifications.latest().map(|n| n.title.as_str()),
            Some("AI Recommendations Applied! 🤖✨")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_configure_actions_reach_strategy_manager() {
        let mut manager = MockStrategyManager::new();
        manager
            .expect_submit()
            .withf(|intent| {
                *intent
                    == Intent::Lifecycle {
                        strategy: "AI Yield Optimizer".to_string(),
                        action: LifecycleAction::Pause,
                    }
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut h = Harness::new(
            Arc::new(SimulatedWalletProvider::new(Duration::ZERO)),
            Arc::new(manager),
        );

        h.dispatcher.handle(Action::ConfigureStrategy(2));
        h.dispatcher.handle(Action::Confirm);
        h.settle().await;

        assert_eq!(
            h.store().notifications.latest().map(|n| n.description.as_str()),
            Some("Pause requested for AI Yield Optimizer")
        );
        assert_eq!(h.store().portfolio.strategies[2].status.as_str(), "Active");
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_mode_submits_nothing() {
        let mut manager = MockStrategyManager::new();
        manager.expect_submit().never();
        let mut h = Harness::new(
            Arc::new(SimulatedWalletProvider::new(Duration::ZERO)),
            Arc::new(manager),
        );

        h.dispatcher.handle(Action::ViewStrategy(0));
        h.dispatcher.handle(Action::Confirm);
        h.dispatcher.handle(Action::MoveDown);
        h.dispatcher.handle(Action::Confirm);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(h.drain(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_cancels_recommendations() {
        let mut h = Harness::simulated();
        h.dispatcher.handle(Action::ApplyRecommendations);
        h.dispatcher.handle(Action::Quit);

        assert!(h.dispatcher.should_quit());
        assert!(!h.dispatcher.tasks().recommendations_in_flight());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(h.drain(), 0);
    }
}
