//! Step engine: the state machine that walks the loop one micro-step at a time.
//!
//! - `step` - the seven micro-steps and the fixed line numbers they highlight
//! - `state` - engine state, events, and the pure transition function
//! - `snapshot` - the read-only view handed to narration and presentation
//! - `stepper` - the owning engine with `advance` / `run_to_completion` / `reset`

pub mod snapshot;
pub mod state;
pub mod step;
pub mod stepper;

pub use snapshot::Snapshot;
pub use state::{EngineState, Environment, Event, RunState, transition};
pub use step::Step;
pub use stepper::StepEngine;
