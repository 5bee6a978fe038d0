//! # Yield Architect - AI DeFi Strategy Builder TUI
//!
//! A terminal front end for designing, inspecting and managing cross-chain
//! DeFi yield strategies. Built with ratatui.
//!
//! ## Architecture
//!
//! The application follows a unidirectional data flow:
//!
//! - **App**: Terminal lifecycle and the main event loop
//! - **Events**: Key and mouse input translated into actions
//! - **State**: Centralized store reducing actions into state and effects
//! - **Tasks**: Effects executed as cancellable background tasks
//! - **API**: Wallet provider and strategy manager boundaries
//! - **UI**: Page composition, overlays and widgets
//! - **Config**: Configuration loading and persistence

pub mod api;
pub mod app;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod logging;
pub mod state;
pub mod tasks;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
