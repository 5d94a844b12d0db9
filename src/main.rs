// Chunk: docs/chunks/console_host - Console host for the session controller
//!
//! slate: a small single-document plain-text editor.
//!
//! This binary wires the session controller to a line-oriented console host.
//! Logging goes to stderr so it never mixes with the document on stdout; set
//! `RUST_LOG=slate_editor=debug` to watch command gating and busy transitions.

mod console;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use slate_editor::{JsonViewStateStore, SessionConfig, SessionController};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::console::{ConsoleDialogs, Terminal};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "slate", version, about = "A small single-document plain-text editor")]
struct Args {
    /// File to open (or create on first save) at startup.
    path: Option<PathBuf>,

    /// Session configuration file (JSON). Missing file means defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to keep the view state. Defaults to the platform data directory.
    #[arg(long, value_name = "PATH")]
    view_state: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("slate: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    let view_states = match args.view_state {
        Some(path) => JsonViewStateStore::new(path),
        None => JsonViewStateStore::at_default_location()
            .context("cannot locate a directory for the view state")?,
    };
    info!(path = %view_states.path().display(), "view state store");

    let terminal = Terminal::stdio();
    let mut session = SessionController::builder()
        .config(config)
        .dialogs(ConsoleDialogs::new(terminal.clone()))
        .view_state_store(view_states)
        .builtin_lookups()
        .build()?;

    if let Some(path) = args.path {
        session
            .new_document(Some(path.clone()))
            .with_context(|| format!("cannot open {}", path.display()))?;
    }

    console::run(&mut session, &terminal)
}
