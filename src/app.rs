//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::api::{LoggingStrategyManager, SimulatedWalletProvider};
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::events::{EventConfig, EventHandler};
use crate::state::{Action, Store};
use crate::tasks::TaskRunner;
use crate::ui::{PageLayout, Ui};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Store plus background task runner.
    dispatcher: Dispatcher,
    /// Event handler.
    event_handler: EventHandler,
    /// Completions from background tasks.
    action_rx: mpsc::UnboundedReceiver<Action>,
    ui: Ui,
    mouse_capture: bool,
}

impl App {
    /// Create a new application.
    pub async fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.ui.mouse_support {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let tasks = TaskRunner::new(
            action_tx,
            Arc::new(SimulatedWalletProvider::new(
                config.simulation.wallet_connect_latency(),
            )),
            Arc::new(LoggingStrategyManager),
            config.simulation.clone(),
        );
        let dispatcher = Dispatcher::new(Store::new(&config), tasks);
        let event_handler =
            EventHandler::new(config.keybindings.clone(), EventConfig::from(&config.ui));

        tracing::info!(
            tick_rate_ms = config.ui.tick_rate_ms,
            smooth_scroll = config.ui.smooth_scroll,
            "application initialized"
        );

        Ok(Self {
            terminal,
            dispatcher,
            event_handler,
            action_rx,
            ui: Ui::new(&config),
            mouse_capture: config.ui.mouse_support,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Main event loop
        loop {
            self.sync_page()?;

            // Update event handler with current state
            self.event_handler
                .update_store_snapshot(&self.dispatcher.store);

            // Render UI
            let store = &self.dispatcher.store;
            let ui = &self.ui;
            self.terminal.draw(|frame| ui.render(frame, store))?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.dispatcher.handle(action);
                    }
                }

                // Handle completions from background tasks
                Some(action) = self.action_rx.recv() => {
                    self.dispatcher.handle(action);
                }
            }

            // Check if we should quit
            if self.dispatcher.should_quit() {
                break;
            }
        }

        self.dispatcher.shutdown();
        tracing::info!("application shutting down");
        Ok(())
    }

    /// Re-register section anchors and the viewport height for the current
    /// terminal size.
    fn sync_page(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let viewport = self.ui.layout(area).page_area.height;
        let store = &mut self.dispatcher.store;
        PageLayout::new(store).register(&mut store.scroll, viewport);
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        if self.mouse_capture {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
