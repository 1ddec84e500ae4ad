use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::narration::Language;

/// Loop Explorer - step through a Python for-in loop one micro-step at a time
#[derive(Parser, Debug)]
#[command(name = "loop-explorer")]
#[command(about = "An educational step-debugger for a Python for-in loop")]
#[command(version)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Narration language (en, ko); overrides the config file
    #[arg(short, long, global = true)]
    pub lang: Option<Language>,

    /// Program file to explore; overrides the config file
    #[arg(short, long, global = true)]
    pub source: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive stepper (default)
    Tui,
    /// Run the whole loop and print its output
    Run,
    /// Step from start to finish, printing every micro-step
    Trace {
        /// Print one JSON snapshot per step instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check that the first line parses and show the list
    Check,
    /// Write a default configuration file
    InitConfig {
        /// Where to write the configuration
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
