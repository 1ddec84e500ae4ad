//! Application module
//!
//! Contains the main application loop and key handling.
//!
//! # Module Structure
//! - `state` - UI state (language, help visibility, status line)
//! - Main module - App struct and event loop
//!
//! Each key press maps to at most one engine operation, applied to completion
//! before the next event is read.

mod state;

pub use state::AppState;

use crate::components::{KeyAction, KeybindingContext};
use crate::engine::{RunState, StepEngine};
use crate::error::Result;
use crate::ui::{UiRenderer, View};
use crossterm::event::Event;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    engine: StepEngine,
    state: AppState,
    keybinding_context: KeybindingContext,
    ui_renderer: UiRenderer,
    poll_interval: Duration,
}

impl App {
    /// Create a new application instance
    pub fn new(engine: StepEngine, state: AppState, poll_interval: Duration) -> Self {
        info!("Creating new App instance");
        let keybinding_context = KeybindingContext::new();
        let ui_renderer = UiRenderer::new(&keybinding_context);

        Self {
            engine,
            state,
            keybinding_context,
            ui_renderer,
            poll_interval,
        }
    }

    pub fn engine(&self) -> &StepEngine {
        &self.engine
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one action. Returns true when the app should exit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        debug!("Handling action {:?}", action);

        // While help is open only closing it (or quitting) does anything
        if self.state.help_visible {
            match action {
                KeyAction::Help | KeyAction::Back => self.state.help_visible = false,
                KeyAction::Quit => return true,
                _ => {}
            }
            return false;
        }

        match action {
            KeyAction::Run => {
                let snapshot = self.engine.run_to_completion();
                self.state.status_message = match snapshot.error {
                    Some(_) => "Run failed; fix the first line and try again".to_string(),
                    None => format!("Ran {} iteration(s)", snapshot.output_lines().len()),
                };
            }
            KeyAction::Step => {
                let was_finished = self.engine.is_finished();
                let snapshot = self.engine.advance();
                self.state.status_message = if snapshot.error.is_some() {
                    "Cannot start stepping; fix the first line and try again".to_string()
                } else if was_finished {
                    "The loop has finished. Press 0 to start over".to_string()
                } else if snapshot.run_state == RunState::Idle {
                    "Loop finished".to_string()
                } else {
                    format!("Step {}: {}", snapshot.step_index, snapshot.step())
                };
            }
            KeyAction::Reset => {
                self.engine.reset();
                self.state.status_message = "Back to the beginning".to_string();
            }
            KeyAction::ToggleLanguage => {
                self.state.language = self.state.language.toggled();
                self.state.status_message =
                    format!("Narration language: {}", self.state.language.label());
            }
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::Back | KeyAction::Quit => return true,
        }
        false
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            let snapshot = self.engine.snapshot();
            let view = View {
                source_lines: self.engine.source_lines(),
                snapshot: &snapshot,
                state: &self.state,
            };
            terminal.draw(|f| self.ui_renderer.render(f, &view))?;

            if crossterm::event::poll(self.poll_interval)? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    let action = self.keybinding_context.action_for(&key_event);
                    if let Some(action) = action {
                        if self.handle_action(action) {
                            break;
                        }
                    }
                }
            }
        }

        info!("Application loop finished");
        Ok(())
    }
}
