//! Loop Explorer - Main entry point
//!
//! Interactive TUI by default; `run`, `trace`, and `check` work headless.

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use loop_explorer::app::{App, AppState};
use loop_explorer::cli::{Cli, Commands};
use loop_explorer::error::{ExplorerError, failure_message};
use loop_explorer::{ExplorerConfig, StepEngine, explain_snapshot};

/// Initialize logging to stderr; RUST_LOG overrides the default level
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main application entry point
fn main() {
    let cli = Cli::parse_args();

    // Keep the alternate screen clean in TUI mode
    let default_level = match cli.command {
        None | Some(Commands::Tui) => "warn",
        Some(_) => "info",
    };
    init_tracing(default_level);
    info!("Loop Explorer starting up");
    debug!("CLI arguments parsed: {:?}", cli);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("✗ {}", failure_message(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(Commands::InitConfig { path }) = &cli.command {
        ExplorerConfig::default()
            .save_to_file(path)
            .map_err(|e| ExplorerError::config(format!("{e:#}")))?;
        println!("✓ Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = load_config(&cli).map_err(|e| ExplorerError::config(format!("{e:#}")))?;
    let source = config
        .resolve_source()
        .map_err(|e| ExplorerError::config(format!("{e:#}")))?;
    let mut engine = StepEngine::new(source);

    match cli.command {
        None | Some(Commands::Tui) => run_tui(engine, &config),
        Some(Commands::Run) => {
            let snapshot = engine.run_to_completion();
            if let Some(err) = snapshot.error {
                return Err(ExplorerError::general(err).into());
            }
            print!("{}", snapshot.output_text);
            Ok(())
        }
        Some(Commands::Trace { json }) => run_trace(&mut engine, &config, json),
        Some(Commands::Check) => {
            let environment = engine
                .parse()
                .inspect_err(|e| warn!(kind = e.kind(), "First line rejected"))
                .context("checking the first line")?;
            if environment.is_empty() {
                println!("✓ basket is empty; the loop body never runs");
                return Ok(());
            }
            println!("✓ basket holds {} element(s)", environment.len());
            for (index, element) in environment.iterable().iter().enumerate() {
                println!("  [{index}] {element}");
            }
            Ok(())
        }
        Some(Commands::InitConfig { .. }) => Ok(()),
    }
}

/// Config file (if any) with command line overrides applied
fn load_config(cli: &Cli) -> anyhow::Result<ExplorerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            ExplorerConfig::load_from_file(path)?
        }
        None => ExplorerConfig::default(),
    };

    if let Some(language) = cli.lang {
        config.language = language;
    }
    if let Some(path) = &cli.source {
        config.source = None;
        config.source_file = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Step from idle to the absorbing state, printing every snapshot
fn run_trace(engine: &mut StepEngine, config: &ExplorerConfig, json: bool) -> anyhow::Result<()> {
    loop {
        let snapshot = engine.advance();
        if let Some(err) = &snapshot.error {
            return Err(ExplorerError::general(err.clone()).into());
        }

        if json {
            let line = serde_json::to_string(&snapshot).map_err(ExplorerError::from)?;
            println!("{line}");
        } else {
            println!(
                "[{}] line {} cursor {:>2} | {}",
                snapshot.step_index,
                snapshot.current_line,
                snapshot.cursor_index,
                explain_snapshot(&snapshot, config.language)
            );
        }

        if engine.is_finished() {
            break;
        }
    }

    if !json {
        print!("--- output ---\n{}", engine.snapshot().output_text);
    }
    Ok(())
}

/// Run the interactive stepper
fn run_tui(engine: StepEngine, config: &ExplorerConfig) -> anyhow::Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| ExplorerError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        ExplorerError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| ExplorerError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(
        engine,
        AppState::new(config.language),
        Duration::from_millis(config.poll_interval_ms),
    );
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
