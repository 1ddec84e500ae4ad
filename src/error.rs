//! Error handling module for the loop explorer
//!
//! Provides centralized error types using thiserror. Source parsing has its
//! own narrow [`ParseError`]; everything the application layer can fail with
//! is folded into [`ExplorerError`].

use thiserror::Error;

/// Message shown when an error cannot be classified.
pub const GENERIC_FAILURE: &str = "An unknown error occurred";

/// Reasons the first source line could not be turned into an environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line 0 is missing or does not start with the `basket =` assignment
    #[error("The first line must be a list assignment starting with 'basket =' (found: {line:?})")]
    SyntaxMismatch { line: String },

    /// The right-hand side is not a well-formed array of strings
    #[error("Could not read the list literal {literal:?}: {reason}")]
    LiteralDecodeError { literal: String, reason: String },
}

impl ParseError {
    /// Short machine-friendly name of the failure kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SyntaxMismatch { .. } => "SyntaxMismatch",
            Self::LiteralDecodeError { .. } => "LiteralDecodeError",
        }
    }
}

/// Main error type for the explorer application
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// IO errors (source files, config files, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source program could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration errors (loading, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;

impl ExplorerError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Turn any error into the text shown to the learner.
///
/// Errors raised by this crate keep their own message, and IO failures are
/// reported with their context chain. Anything else is reported with
/// [`GENERIC_FAILURE`] instead of leaking its raw form.
pub fn failure_message(err: &anyhow::Error) -> String {
    for cause in err.chain() {
        if let Some(parse) = cause.downcast_ref::<ParseError>() {
            return parse.to_string();
        }
        if let Some(explorer) = cause.downcast_ref::<ExplorerError>() {
            return explorer.to_string();
        }
        if cause.is::<std::io::Error>() {
            return format!("IO error: {err:#}");
        }
        if cause.is::<serde_json::Error>() {
            return format!("JSON error: {err:#}");
        }
    }
    GENERIC_FAILURE.to_string()
}
