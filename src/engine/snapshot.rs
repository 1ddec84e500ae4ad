//! Read-only view of the engine handed to narration and presentation.

use super::state::{EngineState, Environment, RunState};
use super::step::Step;
use serde::{Deserialize, Serialize};

/// Snapshot of the engine after an operation.
///
/// Serialized field names follow the camelCase contract consumed by
/// front ends (`outputText`, `currentLine`, `cursorIndex`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub output_text: String,
    pub current_line: usize,
    pub variables: Option<Environment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub run_state: RunState,
    pub step_index: u8,
    pub cursor_index: isize,
}

impl Snapshot {
    /// Step enum for `step_index`; out-of-range indices read as `Init`
    pub fn step(&self) -> Step {
        Step::from_index(self.step_index).unwrap_or_default()
    }

    /// Cursor as an element index, `None` before the first bind
    pub fn cursor(&self) -> Option<usize> {
        usize::try_from(self.cursor_index).ok()
    }

    /// Printed lines without their trailing newlines
    pub fn output_lines(&self) -> Vec<&str> {
        self.output_text.lines().collect()
    }
}

impl From<&EngineState> for Snapshot {
    fn from(state: &EngineState) -> Self {
        Self {
            output_text: state.output_text(),
            current_line: state.current_line,
            variables: state.environment.clone(),
            error: state.error.clone(),
            run_state: state.run_state,
            step_index: state.step.index(),
            cursor_index: state.cursor_index(),
        }
    }
}
