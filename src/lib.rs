//! Loop Explorer Library
//!
//! An educational step-debugger for one fixed Python program:
//!
//! ```text
//! basket = ["apple", "banana", "cherry"]
//! for hand in basket:
//!     print(hand)
//! ```
//!
//! The core is the [`StepEngine`], which parses the list literal and walks
//! the loop one micro-step at a time. [`narration`] explains each step and
//! the [`ui`] module renders it in a terminal.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod narration;
pub mod parser;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use config_file::ExplorerConfig;
pub use engine::{EngineState, Environment, Event, RunState, Snapshot, Step, StepEngine};
pub use error::{ExplorerError, ParseError, failure_message};
pub use narration::{Language, explain, explain_snapshot};
pub use parser::{parse, parse_source};
