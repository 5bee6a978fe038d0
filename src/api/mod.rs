//! External collaborators: wallet provider and strategy backend.
//!
//! Both are traits so a real chain integration can replace the simulated
//! defaults without touching the state layer.

mod strategy;
mod wallet;

pub use strategy::{Intent, LifecycleAction, LoggingStrategyManager, StrategyManager};
pub use wallet::{SimulatedWalletProvider, WalletProvider, WalletSession};

#[cfg(test)]
pub use strategy::MockStrategyManager;
#[cfg(test)]
pub use wallet::MockWalletProvider;
