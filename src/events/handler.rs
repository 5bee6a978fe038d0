//! Event handler for processing input events.

use super::{EventConfig, InputEvent};
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, BuilderField, Focus, InputMode, Overlay, Store, WALLETS};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use std::time::Instant;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    config: EventConfig,
    last_tick: Instant,
    /// Store state needed to route keys.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Copy)]
struct StoreSnapshot {
    input_mode: InputMode,
    overlay: Overlay,
    focus: Focus,
}

impl EventHandler {
    pub fn new(keybindings: KeyBindings, config: EventConfig) -> Self {
        Self {
            keybindings,
            config,
            last_tick: Instant::now(),
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = Some(StoreSnapshot {
            input_mode: store.app.input_mode,
            overlay: store.overlay(),
            focus: store.app.focus,
        });
    }

    /// Wait for the next action: user input, or a `Tick` once the tick
    /// interval has elapsed.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if self.last_tick.elapsed() >= self.config.tick_rate {
            self.last_tick = Instant::now();
            return Ok(Some(Action::Tick));
        }

        let timeout = self.config.tick_rate.saturating_sub(self.last_tick.elapsed());
        if event::poll(timeout)? {
            let action = match event::read()? {
                CrosstermEvent::Key(key) => self.handle_key(key),
                CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse),
                // The page is re-laid out on every draw.
                _ => None,
            };
            return Ok(action);
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        let snapshot = self.store_snapshot?;
        let input = InputEvent::from(key);

        if let InputMode::Editing(_) = snapshot.input_mode {
            return self.handle_editing(key, input);
        }

        match snapshot.overlay {
            Overlay::Help => self.handle_help(input),
            Overlay::Wallet => self.handle_wallet(key, input),
            Overlay::Inspector => self.handle_inspector(key, input),
            Overlay::None => self.handle_page(key, input, snapshot.focus),
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        if !self.config.mouse_capture {
            return None;
        }
        let step = i32::from(self.config.scroll_step);
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollBy(-step)),
            MouseEventKind::ScrollDown => Some(Action::ScrollBy(step)),
            _ => None,
        }
    }

    fn handle_editing(&self, key: KeyEvent, input: InputEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Some(Action::StopEditing),
            KeyCode::Backspace => Some(Action::InputBackspace),
            _ => input.text_char().map(Action::InputChar),
        }
    }

    fn handle_help(&self, input: InputEvent) -> Option<Action> {
        let kb = &self.keybindings;
        if input.matches(&kb.quit) {
            Some(Action::Quit)
        } else if input.matches(&kb.help) || input.matches(&kb.back) || input.matches(&kb.select)
        {
            Some(Action::ToggleHelp)
        } else {
            None
        }
    }

    /// Arrow keys and the hjkl bindings.
    fn direction(&self, key: KeyEvent, input: InputEvent) -> Option<Action> {
        let kb = &self.keybindings;
        if key.code == KeyCode::Up || input.matches(&kb.up) {
            Some(Action::MoveUp)
        } else if key.code == KeyCode::Down || input.matches(&kb.down) {
            Some(Action::MoveDown)
        } else if key.code == KeyCode::Left || input.matches(&kb.left) {
            Some(Action::MoveLeft)
        } else if key.code == KeyCode::Right || input.matches(&kb.right) {
            Some(Action::MoveRight)
        } else {
            None
        }
    }

    fn handle_wallet(&self, key: KeyEvent, input: InputEvent) -> Option<Action> {
        let kb = &self.keybindings;
        if input.matches(&kb.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&kb.back) {
            return Some(Action::CloseWallet);
        }
        if input.matches(&kb.select) || input.matches(&kb.toggle) {
            return Some(Action::Confirm);
        }
        if let Some(index) = input
            .text_char()
            .and_then(|c| c.to_digit(10))
            .and_then(|d| (d as usize).checked_sub(1))
            .filter(|i| *i < WALLETS.len())
        {
            return Some(Action::SelectWallet(index));
        }
        self.direction(key, input)
    }

    fn handle_inspector(&self, key: KeyEvent, input: InputEvent) -> Option<Action> {
        let kb = &self.keybindings;
        if input.matches(&kb.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&kb.back) {
            return Some(Action::CloseInspector);
        }
        if input.matches(&kb.select) || input.matches(&kb.toggle) {
            return Some(Action::InspectorActivate);
        }
        if input.matches(&kb.configure_strategy) {
            return Some(Action::InspectorSwitchToConfigure);
        }
        self.direction(key, input)
    }

    fn handle_page(&self, key: KeyEvent, input: InputEvent, focus: Focus) -> Option<Action> {
        let kb = &self.keybindings;

        // Global shortcuts
        if input.matches(&kb.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&kb.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&kb.focus_next) {
            return Some(Action::FocusNext);
        }
        if key.code == KeyCode::BackTab {
            return Some(Action::FocusPrev);
        }
        if input.matches(&kb.connect_wallet) {
            return Some(Action::OpenWallet);
        }
        if input.matches(&kb.launch_app) {
            return Some(Action::LaunchApp);
        }
        if input.matches(&kb.view_demo) {
            return Some(Action::ViewDemo);
        }
        if input.matches(&kb.back) {
            return Some(Action::Back);
        }

        // Page navigation
        match key.code {
            KeyCode::PageUp => return Some(Action::PageUp),
            KeyCode::PageDown => return Some(Action::PageDown),
            KeyCode::Home => return Some(Action::GoToTop),
            KeyCode::End => return Some(Action::GoToBottom),
            _ => {}
        }
        if let Some(section) = input
            .text_char()
            .and_then(|c| c.to_digit(10))
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|i| Focus::ALL.get(i))
        {
            return Some(Action::SetFocus(*section));
        }

        // Section-specific actions
        let section = match focus {
            Focus::Hero => None,
            Focus::Builder => self.handle_builder(input),
            Focus::Portfolio => self.handle_portfolio(input),
        };
        if section.is_some() {
            return section;
        }

        if input.matches(&kb.select) || input.matches(&kb.toggle) {
            return Some(Action::Confirm);
        }
        self.direction(key, input)
    }

    fn handle_builder(&self, input: InputEvent) -> Option<Action> {
        let kb = &self.keybindings;
        if input.matches(&kb.cycle_risk) {
            Some(Action::CycleRiskTolerance)
        } else if input.matches(&kb.edit_goal) {
            Some(Action::StartEditing(BuilderField::Goal))
        } else if input.matches(&kb.edit_target) {
            Some(Action::StartEditing(BuilderField::TargetInvestment))
        } else if input.matches(&kb.generate_strategy) {
            Some(Action::GenerateStrategy)
        } else if input.matches(&kb.deploy_strategy) {
            Some(Action::DeployStrategy)
        } else {
            None
        }
    }

    fn handle_portfolio(&self, input: InputEvent) -> Option<Action> {
        let kb = &self.keybindings;
        if input.matches(&kb.view_strategy) {
            Some(Action::ViewSelectedStrategy)
        } else if input.matches(&kb.configure_strategy) {
            Some(Action::ConfigureSelectedStrategy)
        } else if input.matches(&kb.apply_recommendations) {
            Some(Action::ApplyRecommendations)
        } else {
            None
        }
    }
}
