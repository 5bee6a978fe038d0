//! State management for Yield Architect.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. The store reduces
//! one [`Action`] at a time and may answer with an [`Effect`] that the task
//! runner executes asynchronously.

mod app_state;
mod builder_state;
pub mod catalog;
mod inspector_state;
mod notifications;
mod portfolio_state;
pub mod scroll;
mod wallet_state;

pub use app_state::{AppState, Focus, InputMode, Overlay};
pub use builder_state::{
    BuilderField, BuilderState, MODULE_GRID_COLUMNS, ModuleSelectionPanel, PreviewItem,
    RiskTolerance, StrategyDraft,
};
pub use catalog::{MODULE_CATALOG, ModuleCatalogEntry};
pub use inspector_state::{InspectorAction, InspectorMode, InspectorSession, StrategyInspector};
pub use notifications::{Notification, NotificationCenter, NotificationLevel};
pub use portfolio_state::{
    Insight, InsightKind, PortfolioState, PortfolioSummary, RecommendationRun,
    RecommendationTicket, RiskLevel, Strategy, StrategyStatus, Tone,
};
pub use scroll::{Anchor, ScrollCoordinator};
pub use wallet_state::{ConnectTicket, WALLETS, WalletConnectionFlow, WalletOption, WalletPhase};

use crate::api::{Intent, LifecycleAction};
use crate::config::Config;
use crate::error::Error;
use std::sync::Arc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Timing
    Tick,

    // Navigation
    ScrollUp,
    ScrollDown,
    ScrollBy(i32),
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    ScrollTo(String),
    SetFocus(Focus),
    FocusNext,
    FocusPrev,

    // Contextual input, routed by overlay and focus
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Back,

    // Hero actions
    LaunchApp,
    ViewDemo,

    // Wallet actions
    OpenWallet,
    CloseWallet,
    SelectWallet(usize),
    WalletConnected(ConnectTicket),
    WalletConnectFailed(ConnectTicket, Arc<Error>),

    // Builder actions
    ToggleModule(String),
    ToggleModuleAtCursor,
    CycleRiskTolerance,
    StartEditing(BuilderField),
    InputChar(char),
    InputBackspace,
    StopEditing,
    GenerateStrategy,
    DeployStrategy,

    // Portfolio actions
    ViewStrategy(usize),
    ConfigureStrategy(usize),
    ViewSelectedStrategy,
    ConfigureSelectedStrategy,
    ApplyRecommendations,
    RecommendationsApplied(RecommendationTicket, Result<(), Arc<Error>>),

    // Inspector actions
    CloseInspector,
    InspectorActivate,
    InspectorSwitchToConfigure,

    // Backend intents
    SubmitIntent(Intent),
    IntentResolved(Intent, Result<(), Arc<Error>>),

    // UI actions
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,

    // Quit
    Quit,
}

/// Asynchronous work requested by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ConnectWallet(ConnectTicket),
    CancelWallet,
    ApplyRecommendations(RecommendationTicket),
    CancelRecommendations,
    Submit(Intent),
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Page viewport.
    pub scroll: ScrollCoordinator,
    /// Toasts.
    pub notifications: NotificationCenter,
    /// Connect-wallet modal.
    pub wallet: WalletConnectionFlow,
    /// Strategy builder section.
    pub builder: BuilderState,
    /// Portfolio dashboard section.
    pub portfolio: PortfolioState,
    /// Strategy detail overlay.
    pub inspector: StrategyInspector,
    explorer_url: String,
}

impl Store {
    /// Create a new store configured from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            app: AppState::default(),
            scroll: ScrollCoordinator::new(config.ui.smooth_scroll),
            notifications: NotificationCenter::new(
                std::time::Duration::from_secs(config.notifications.duration_secs),
                config.notifications.max_visible,
            ),
            wallet: WalletConnectionFlow::default(),
            builder: BuilderState::default(),
            portfolio: PortfolioState::demo(),
            inspector: StrategyInspector::default(),
            explorer_url: config.simulation.explorer_url.trim_end_matches('/').to_string(),
        }
    }

    /// The topmost layer that receives input.
    pub fn overlay(&self) -> Overlay {
        if self.app.show_help {
            Overlay::Help
        } else if self.wallet.is_open() {
            Overlay::Wallet
        } else if self.inspector.is_open() {
            Overlay::Inspector
        } else {
            Overlay::None
        }
    }

    /// Explorer link for a strategy.
    pub fn explorer_link(&self, strategy: &Strategy) -> String {
        format!("{}/strategies/{}", self.explorer_url, strategy.slug())
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Tick => {
                self.scroll.tick();
                self.notifications.prune_expired(chrono::Utc::now());
            }

            // Navigation
            Action::ScrollUp => self.scroll.scroll_by(-1),
            Action::ScrollDown => self.scroll.scroll_by(1),
            Action::ScrollBy(rows) => self.scroll.scroll_by(rows),
            Action::PageUp => self.scroll_pages(-1),
            Action::PageDown => self.scroll_pages(1),
            Action::GoToTop => self.scroll.scroll_to_top(),
            Action::GoToBottom => self.scroll.scroll_to_bottom(),
            Action::ScrollTo(anchor) => self.scroll.scroll_to_element(&anchor),
            Action::SetFocus(focus) => self.set_focus(focus),
            Action::FocusNext => self.set_focus(self.app.focus.next()),
            Action::FocusPrev => self.set_focus(self.app.focus.prev()),

            // Contextual input
            Action::MoveUp => self.move_cursor(-1, 0),
            Action::MoveDown => self.move_cursor(1, 0),
            Action::MoveLeft => self.move_cursor(0, -1),
            Action::MoveRight => self.move_cursor(0, 1),
            Action::Confirm => return self.confirm(),
            Action::Back => return self.back(),

            // Hero
            Action::LaunchApp => {
                self.set_focus(Focus::Builder);
                self.notifications.push(Notification::info(
                    "Welcome to AI Yield Architect! 🚀",
                    "Start building your DeFi strategy below",
                ));
            }
            Action::ViewDemo => {
                self.set_focus(Focus::Portfolio);
                self.notifications.push(Notification::info(
                    "Live Portfolio Demo 📊",
                    "Explore our real-time portfolio tracking",
                ));
            }

            // Wallet
            Action::OpenWallet => {
                self.inspector.close();
                self.wallet.open();
            }
            Action::CloseWallet => {
                if self.wallet.close() {
                    return Some(Effect::CancelWallet);
                }
            }
            Action::SelectWallet(index) => {
                return self.wallet.select(index).map(Effect::ConnectWallet);
            }
            Action::WalletConnected(ticket) => {
                if self.wallet.complete(&ticket, &mut self.notifications) {
                    self.app.connected_wallet = Some(ticket.wallet.name.to_string());
                }
            }
            Action::WalletConnectFailed(ticket, error) => {
                self.wallet.fail(&ticket, &error, &mut self.notifications);
            }

            // Builder
            Action::ToggleModule(id) => self.builder.modules.toggle_module(&id),
            Action::ToggleModuleAtCursor => self.builder.modules.toggle_at_cursor(),
            Action::CycleRiskTolerance => {
                self.builder.risk_tolerance = self.builder.risk_tolerance.next();
            }
            Action::StartEditing(field) => {
                self.set_focus(Focus::Builder);
                self.app.input_mode = InputMode::Editing(field);
            }
            Action::InputChar(c) => {
                if let Some(field) = self.app.editing_field() {
                    self.builder.field_mut(field).push(c);
                }
            }
            Action::InputBackspace => {
                if let Some(field) = self.app.editing_field() {
                    self.builder.field_mut(field).pop();
                }
            }
            Action::StopEditing => self.app.input_mode = InputMode::Normal,
            Action::GenerateStrategy => return self.generate_strategy(),
            Action::DeployStrategy => return self.deploy_strategy(),

            // Portfolio
            Action::ViewStrategy(index) => self.open_inspector(Some(index), InspectorMode::View),
            Action::ConfigureStrategy(index) => {
                self.open_inspector(Some(index), InspectorMode::Configure)
            }
            Action::ViewSelectedStrategy => {
                self.open_inspector(self.portfolio.selected, InspectorMode::View)
            }
            Action::ConfigureSelectedStrategy => {
                self.open_inspector(self.portfolio.selected, InspectorMode::Configure)
            }
            Action::ApplyRecommendations => {
                return self
                    .portfolio
                    .begin_recommendations()
                    .map(Effect::ApplyRecommendations);
            }
            Action::RecommendationsApplied(ticket, result) => {
                if self.portfolio.finish_recommendations(ticket) {
                    let notification = match result {
                        Ok(()) => Notification::success(
                            "AI Recommendations Applied! 🤖✨",
                            "Your portfolio has been optimized for better performance",
                        ),
                        Err(error) => {
                            Notification::error("Recommendations Not Applied", error.user_message())
                        }
                    };
                    self.notifications.push(notification);
                }
            }

            // Inspector
            Action::CloseInspector => self.inspector.close(),
            Action::InspectorActivate => return self.activate_inspector_action(),
            Action::InspectorSwitchToConfigure => {
                self.inspector.switch_to_configure();
            }

            // Intents
            Action::SubmitIntent(intent) => return Some(Effect::Submit(intent)),
            Action::IntentResolved(intent, result) => {
                let notification = match result {
                    Ok(()) => Notification::info("Request Submitted", intent.summary()),
                    Err(error) => Notification::error("Request Rejected", error.user_message()),
                };
                self.notifications.push(notification);
            }

            // UI actions
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.notifications.push(notification);
            }
            Action::DismissNotification => {
                self.notifications.dismiss_latest();
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
                if self.portfolio.cancel_recommendations() {
                    return Some(Effect::CancelRecommendations);
                }
            }
        }

        None
    }

    fn scroll_pages(&mut self, pages: i32) {
        let page = i32::from(self.scroll.viewport_height().saturating_sub(2).max(1));
        self.scroll.scroll_by(pages * page);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.app.focus = focus;
        self.scroll.scroll_to_element(focus.anchor());
    }

    fn move_cursor(&mut self, rows: i32, cols: i32) {
        match self.overlay() {
            Overlay::Help => {}
            Overlay::Wallet => self.wallet.move_cursor(rows + cols),
            Overlay::Inspector => self.inspector.move_cursor(rows + cols),
            Overlay::None => match self.app.focus {
                Focus::Hero => self.scroll.scroll_by(rows),
                Focus::Builder => self.builder.modules.move_cursor(rows, cols),
                Focus::Portfolio => self.portfolio.select_relative(rows + cols),
            },
        }
    }

    fn confirm(&mut self) -> Option<Effect> {
        match self.overlay() {
            Overlay::Help => {
                self.app.show_help = false;
                None
            }
            Overlay::Wallet => self.wallet.select_at_cursor().map(Effect::ConnectWallet),
            Overlay::Inspector => self.activate_inspector_action(),
            Overlay::None => {
                match self.app.focus {
                    Focus::Hero => self.set_focus(Focus::Builder),
                    Focus::Builder => self.builder.modules.toggle_at_cursor(),
                    Focus::Portfolio => {
                        self.open_inspector(self.portfolio.selected, InspectorMode::View)
                    }
                }
                None
            }
        }
    }

    fn back(&mut self) -> Option<Effect> {
        if self.app.is_editing() {
            self.app.input_mode = InputMode::Normal;
            return None;
        }
        match self.overlay() {
            Overlay::Help => self.app.show_help = false,
            Overlay::Wallet => {
                if self.wallet.close() {
                    return Some(Effect::CancelWallet);
                }
            }
            Overlay::Inspector => self.inspector.close(),
            Overlay::None => {
                self.notifications.dismiss_latest();
            }
        }
        None
    }

    fn open_inspector(&mut self, index: Option<usize>, mode: InspectorMode) {
        match index.and_then(|i| self.portfolio.strategy(i)) {
            Some(strategy) => {
                let strategy = strategy.clone();
                self.portfolio.selected = index;
                self.inspector.open(strategy, mode);
            }
            None => tracing::debug!(?index, "inspector not opened: no strategy selected"),
        }
    }

    fn activate_inspector_action(&mut self) -> Option<Effect> {
        let session = self.inspector.session()?;
        let action = session.selected_action()?;
        let strategy = session.strategy.name.clone();

        let lifecycle = match action {
            InspectorAction::ViewOnExplorer => {
                let link = self.explorer_link(&session.strategy);
                tracing::info!(%link, "explorer link requested");
                self.notifications
                    .push(Notification::info("Open in Explorer", link));
                return None;
            }
            InspectorAction::Configure => {
                self.inspector.switch_to_configure();
                return None;
            }
            InspectorAction::Pause => LifecycleAction::Pause,
            InspectorAction::RebalanceNow => LifecycleAction::Rebalance,
            InspectorAction::Resume => LifecycleAction::Resume,
        };

        Some(Effect::Submit(Intent::Lifecycle {
            strategy,
            action: lifecycle,
        }))
    }

    fn generate_strategy(&mut self) -> Option<Effect> {
        let draft = self.builder.draft();
        if draft.goal.is_empty() {
            self.notifications.push(Notification::warning(
                "Describe Your Goal",
                "Tell the AI what you want to achieve before generating a strategy",
            ));
            return None;
        }
        Some(Effect::Submit(Intent::GenerateStrategy { draft }))
    }

    fn deploy_strategy(&mut self) -> Option<Effect> {
        if !self.builder.ready_to_deploy() {
            return None;
        }
        let draft = self.builder.draft();
        if let Err(e) = catalog::validate(&draft.modules) {
            tracing::warn!("deploy rejected: {}", e);
            self.notifications
                .push(Notification::error("Cannot Deploy Strategy", e.to_string()));
            return None;
        }
        Some(Effect::Submit(Intent::DeployStrategy { draft }))
    }
}
