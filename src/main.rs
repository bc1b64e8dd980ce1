//! Pentaptych binary entry point
//!
//! Parses options, points logging at a file (the UI owns the terminal,
//! so nothing may log to stdout/stderr while it runs), and maps a fatal
//! UI error to a non-zero exit code.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, Level};
use tracing_subscriber::EnvFilter;

use pentaptych::tui::{self, TuiOptions};

/// Five-panel terminal workspace
#[derive(Parser)]
#[command(name = "pentaptych")]
#[command(about = "Five-panel terminal workspace with modal panel selection")]
#[command(version)]
struct Args {
    /// Hide the bracketed index labels in the panel title bars
    #[arg(long)]
    hide_panel_labels: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log file path
    #[arg(long, default_value = "/tmp/pentaptych.log")]
    log_file: PathBuf,
}

fn parse_level(level: &str) -> Level {
    match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let level = parse_level(&args.log_level);
    let filter = EnvFilter::new(format!("pentaptych={}", level.as_str().to_lowercase()));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)
        .with_context(|| format!("opening log file {}", args.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    debug!("pentaptych v{} starting", env!("CARGO_PKG_VERSION"));
    if let Err(err) = tui::start(TuiOptions {
        show_panel_labels: !args.hide_panel_labels,
    }) {
        error!("fatal: {err}");
        return Err(err.into());
    }

    debug!("exiting cleanly");
    Ok(())
}
