//! The step engine owned by a single session.
//!
//! [`StepEngine`] holds the program text and the current [`EngineState`].
//! Every public operation runs to completion, feeds one [`Event`] through
//! [`transition`], and hands back a [`Snapshot`].

use super::snapshot::Snapshot;
use super::state::{EngineState, Environment, Event, RunState, transition};
use super::step::Step;
use crate::error::ParseError;
use crate::parser;
use tracing::{debug, info, warn};

/// Step-debugger for the `basket` / `for` / `print` program.
///
/// # Example
///
/// ```
/// use loop_explorer::engine::StepEngine;
///
/// let mut engine = StepEngine::new("basket = ['apple']\nfor hand in basket:\n    print(hand)");
/// let done = engine.run_to_completion();
/// assert_eq!(done.output_text, "apple\n");
/// ```
#[derive(Debug, Clone)]
pub struct StepEngine {
    source: String,
    state: EngineState,
}

impl StepEngine {
    /// Create an engine for `source` in the idle initial state
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            state: EngineState::default(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Program lines, split on `\n`
    pub fn source_lines(&self) -> Vec<&str> {
        self.source.split('\n').collect()
    }

    /// Replace the program; all state, including the parsed list, is dropped
    pub fn set_source(&mut self, source: impl Into<String>) -> Snapshot {
        self.source = source.into();
        self.state = EngineState::default();
        info!("Source replaced ({} lines)", self.source_lines().len());
        self.snapshot()
    }

    /// Parse the current program without touching engine state
    pub fn parse(&self) -> Result<Environment, ParseError> {
        parser::parse(&self.source_lines())
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    /// True once the loop has exited and the exit step has been shown
    pub fn is_finished(&self) -> bool {
        self.state.step.is_terminal() && self.state.run_state == RunState::Idle
    }

    /// Take exactly one micro-step.
    ///
    /// From the idle initial state the source is parsed first; a parse
    /// failure leaves the engine idle at `Init` with the error recorded.
    pub fn advance(&mut self) -> Snapshot {
        if self.state.run_state == RunState::Idle && self.state.step == Step::Init {
            match self.parse() {
                Ok(environment) => {
                    info!("Stepping started with {} element(s)", environment.len());
                    self.apply(Event::Start(environment));
                }
                Err(e) => {
                    warn!(kind = e.kind(), "Cannot start stepping: {}", e);
                    self.apply(Event::Fail(e.to_string()));
                }
            }
        } else {
            self.apply(Event::Advance);
        }
        self.snapshot()
    }

    /// Execute the whole loop at statement granularity.
    ///
    /// Always starts from a fresh parse, so output never accumulates across
    /// runs. The result matches driving [`advance`](Self::advance) to the end.
    pub fn run_to_completion(&mut self) -> Snapshot {
        self.state.run_state = RunState::Running;
        debug!("Run to completion requested");

        match self.parse() {
            Ok(environment) => {
                info!("Running loop over {} element(s)", environment.len());
                self.apply(Event::Complete(environment));
            }
            Err(e) => {
                warn!(kind = e.kind(), "Cannot run: {}", e);
                self.apply(Event::Fail(e.to_string()));
            }
        }
        self.snapshot()
    }

    /// Return to the initial state
    pub fn reset(&mut self) -> Snapshot {
        info!("Engine reset");
        self.apply(Event::Reset);
        self.snapshot()
    }

    fn apply(&mut self, event: Event) {
        let from = self.state.step;
        let state = std::mem::take(&mut self.state);
        self.state = transition(state, event);
        debug!(
            from = from.index(),
            to = self.state.step.index(),
            cursor = self.state.cursor_index(),
            line = self.state.current_line,
            "transition"
        );
    }
}
