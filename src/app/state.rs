//! Application state definitions
//!
//! UI-only state. Everything about the program being explored lives in the
//! engine; this holds what the learner chose to look at.

use crate::narration::Language;

/// Main application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Narration language
    pub language: Language,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            help_visible: false,
            status_message: "Press N to take the first step or R to run everything".to_string(),
        }
    }
}
