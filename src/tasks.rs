//! Background task execution for store effects.
//!
//! Each [`Effect`] becomes a tokio task whose outcome is sent back to the
//! event loop as an [`Action`]. Tasks that can be superseded or abandoned
//! live in a [`TaskSlot`] so they are aborted instead of completing into
//! state that no longer expects them.

use crate::api::{Intent, StrategyManager, WalletProvider};
use crate::config::SimulationConfig;
use crate::error::Error;
use crate::state::{Action, ConnectTicket, Effect, RecommendationTicket};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

/// Holds at most one running task; replacing or dropping it aborts the task.
#[derive(Debug, Default)]
pub struct TaskSlot {
    handle: Option<JoinHandle<()>>,
}

impl TaskSlot {
    pub fn replace(&mut self, handle: JoinHandle<()>) {
        if let Some(old) = self.handle.replace(handle) {
            old.abort();
        }
    }

    /// Abort the running task, if any. Returns `true` if one was still running.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs effects against the wallet provider and strategy manager.
pub struct TaskRunner {
    action_tx: mpsc::UnboundedSender<Action>,
    wallet_provider: Arc<dyn WalletProvider>,
    strategy_manager: Arc<dyn StrategyManager>,
    simulation: SimulationConfig,
    wallet: TaskSlot,
    recommendations: TaskSlot,
    intents: JoinSet<()>,
}

impl TaskRunner {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        wallet_provider: Arc<dyn WalletProvider>,
        strategy_manager: Arc<dyn StrategyManager>,
        simulation: SimulationConfig,
    ) -> Self {
        Self {
            action_tx,
            wallet_provider,
            strategy_manager,
            simulation,
            wallet: TaskSlot::default(),
            recommendations: TaskSlot::default(),
            intents: JoinSet::new(),
        }
    }

    /// Start (or cancel) the work an effect describes.
    pub fn run(&mut self, effect: Effect) {
        tracing::debug!(?effect, "running effect");
        match effect {
            Effect::ConnectWallet(ticket) => {
                let handle = tokio::spawn(connect_wallet(
                    self.action_tx.clone(),
                    Arc::clone(&self.wallet_provider),
                    ticket,
                    self.simulation.wallet_connect_timeout(),
                ));
                self.wallet.replace(handle);
            }
            Effect::CancelWallet => {
                if self.wallet.cancel() {
                    tracing::info!("wallet handshake aborted");
                }
            }
            Effect::ApplyRecommendations(ticket) => {
                let handle = tokio::spawn(apply_recommendations(
                    self.action_tx.clone(),
                    Arc::clone(&self.strategy_manager),
                    ticket,
                    self.simulation.recommendations_latency(),
                ));
                self.recommendations.replace(handle);
            }
            Effect::CancelRecommendations => {
                self.recommendations.cancel();
            }
            Effect::Submit(intent) => {
                while self.intents.try_join_next().is_some() {}
                self.intents.spawn(submit_intent(
                    self.action_tx.clone(),
                    Arc::clone(&self.strategy_manager),
                    intent,
                ));
            }
        }
    }

    pub fn wallet_in_flight(&self) -> bool {
        self.wallet.is_running()
    }

    pub fn recommendations_in_flight(&self) -> bool {
        self.recommendations.is_running()
    }

    /// Abort every outstanding task.
    pub fn shutdown(&mut self) {
        self.wallet.cancel();
        self.recommendations.cancel();
        self.intents.abort_all();
    }
}

fn send(tx: &mpsc::UnboundedSender<Action>, action: Action) {
    if tx.send(action).is_err() {
        tracing::debug!("action channel closed, dropping task result");
    }
}

async fn connect_wallet(
    tx: mpsc::UnboundedSender<Action>,
    provider: Arc<dyn WalletProvider>,
    ticket: ConnectTicket,
    timeout: Duration,
) {
    let result = match tokio::time::timeout(timeout, provider.connect(ticket.wallet)).await {
        Ok(result) => result,
        Err(_) => Err(Error::WalletTimeout {
            wallet: ticket.wallet.name.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }),
    };

    match result {
        Ok(session) => {
            tracing::info!(wallet = %session.wallet_id, "wallet handshake completed");
            send(&tx, Action::WalletConnected(ticket));
        }
        Err(e) => send(&tx, Action::WalletConnectFailed(ticket, Arc::new(e))),
    }
}

async fn apply_recommendations(
    tx: mpsc::UnboundedSender<Action>,
    manager: Arc<dyn StrategyManager>,
    ticket: RecommendationTicket,
    latency: Duration,
) {
    tokio::time::sleep(latency).await;
    let result = manager
        .submit(Intent::ApplyRecommendations)
        .await
        .map_err(Arc::new);
    send(&tx, Action::RecommendationsApplied(ticket, result));
}

async fn submit_intent(
    tx: mpsc::UnboundedSender<Action>,
    manager: Arc<dyn StrategyManager>,
    intent: Intent,
) {
    let result = manager.submit(intent.clone()).await.map_err(Arc::new);
    if let Err(error) = &result {
        tracing::warn!(%error, "strategy intent rejected");
    }
    send(&tx, Action::IntentResolved(intent, result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockStrategyManager, MockWalletProvider, WalletSession};
    use crate::state::WALLETS;

    fn runner(
        wallet: MockWalletProvider,
        manager: MockStrategyManager,
    ) -> (TaskRunner, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let runner = TaskRunner::new(
            tx,
            Arc::new(wallet),
            Arc::new(manager),
            SimulationConfig::default(),
        );
        (runner, rx)
    }

    fn ticket() -> ConnectTicket {
        ConnectTicket {
            wallet: WALLETS[0],
            attempt: 1,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_wallet_failure_is_reported() {
        let mut wallet = MockWalletProvider::new();
        wallet
            .expect_connect()
            .returning(|_| Err(Error::wallet_rejected("user declined")));
        let (mut runner, mut rx) = runner(wallet, MockStrategyManager::new());

        runner.run(Effect::ConnectWallet(ticket()));

        match rx.recv().await {
            Some(Action::WalletConnectFailed(t, error)) => {
                assert_eq!(t, ticket());
                assert!(matches!(*error, Error::WalletRejected(ref r) if r == "user declined"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_wallet_times_out() {
        struct Hanging;

        #[async_trait::async_trait]
        impl WalletProvider for Hanging {
            async fn connect(
                &self,
                _wallet: crate::state::WalletOption,
            ) -> crate::Result<WalletSession> {
                std::future::pending().await
            }
        }

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut runner = TaskRunner::new(
            tx,
            Arc::new(Hanging),
            Arc::new(MockStrategyManager::new()),
            SimulationConfig::default(),
        );

        runner.run(Effect::ConnectWallet(ticket()));

        match rx.recv().await {
            Some(Action::WalletConnectFailed(_, error)) => {
                assert!(matches!(
                    *error,
                    Error::WalletTimeout {
                        timeout_ms: 10_000,
                        ..
                    }
                ));
                assert!(error.is_recoverable());
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_wallet_aborts_handshake() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut runner = TaskRunner::new(
            tx,
            Arc::new(crate::api::SimulatedWalletProvider::new(Duration::from_secs(2))),
            Arc::new(MockStrategyManager::new()),
            SimulationConfig::default(),
        );

        runner.run(Effect::ConnectWallet(ticket()));
        assert!(runner.wallet_in_flight());
        runner.run(Effect::CancelWallet);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_recommendations_wait_for_latency() {
        let mut manager = MockStrategyManager::new();
        manager
            .expect_submit()
            .withf(|intent| *intent == Intent::ApplyRecommendations)
            .times(1)
            .returning(|_| Ok(()));
        let (mut runner, mut rx) = runner(MockWalletProvider::new(), manager);
        let start = tokio::time::Instant::now();

        runner.run(Effect::ApplyRecommendations(RecommendationTicket { run: 1 }));

        match rx.recv().await {
            Some(Action::RecommendationsApplied(ticket, Ok(()))) => {
                assert_eq!(ticket.run, 1);
                assert!(start.elapsed() >= Duration::from_millis(3000));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejected_intent_is_reported() {
        let mut manager = MockStrategyManager::new();
        manager
            .expect_submit()
            .returning(|_| Err(Error::strategy_rejected("strategy is paused")));
        let (mut runner, mut rx) = runner(MockWalletProvider::new(), manager);

        runner.run(Effect::Submit(Intent::ApplyRecommendations));

        match rx.recv().await {
            Some(Action::IntentResolved(Intent::ApplyRecommendations, Err(error))) => {
                assert!(matches!(*error, Error::StrategyRejected(_)));
                assert!(error.to_string().contains("strategy is paused"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
