//! Configuration file handling for the explorer.
//!
//! Configs are plain JSON. Every field has a default, so an empty object `{}`
//! is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::narration::Language;

/// Default interval between terminal input polls
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Explorer configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Narration language
    pub language: Language,
    /// Program text given inline
    pub source: Option<String>,
    /// Program text read from a file
    pub source_file: Option<PathBuf>,
    /// How long the TUI waits for a key before redrawing
    pub poll_interval_ms: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            source: None,
            source_file: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl ExplorerConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(10..=1000).contains(&self.poll_interval_ms) {
            anyhow::bail!("Poll interval must be between 10 and 1000 ms");
        }

        if self.source.is_some() && self.source_file.is_some() {
            anyhow::bail!("Specify either an inline source or a source file, not both");
        }

        if let Some(source) = &self.source {
            if source.trim().is_empty() {
                anyhow::bail!("Inline source must not be empty");
            }
        }

        Ok(())
    }

    /// Program text to explore: inline source, then source file, then the
    /// language's sample program
    pub fn resolve_source(&self) -> Result<String> {
        if let Some(source) = &self.source {
            return Ok(source.clone());
        }

        if let Some(path) = &self.source_file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read source file {:?}", path))?;
            // Editors on Windows save CRLF; the engine splits on '\n' only
            return Ok(text.replace("\r\n", "\n"));
        }

        Ok(self.language.sample_program().to_string())
    }
}
