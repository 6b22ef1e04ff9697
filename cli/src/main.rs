//! # Deskbot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Deskbot terminal
//! support system. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Wiring configuration → response store → responder → dialogue session
//!
//! ## Architecture
//!
//! Startup flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Resolve the two response-file paths (flags override config overrides
//!    the built-in `mapped.txt` / `default.txt` defaults)
//! 4. Load the store (never fatal — missing files degrade, see
//!    `responder::store`) and run the dialogue loop on stdin/stdout
//! 5. Format and display any errors that occur
//!
//! ## Examples
//!
//! Basic Deskbot usage:
//!
//! ```bash
//! # Chat against the data files in the current directory
//! deskbot
//!
//! # Point at other response files, with debug logging
//! deskbot -vv --mapped data/mapped.txt --defaults data/default.txt
//! ```
//!
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod core; // Core infrastructure (errors, config)
mod responder; // Response store parsing and per-turn selection
mod session; // Terminal dialogue loop and input tokenization

use crate::core::error::Result;
use crate::responder::{Responder, ResponseStore};
use crate::session::SupportSession;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "deskbot",
    about = "🤖 Deskbot 🛠️: Keyword-Response Technical Support Terminal",
    long_about = "Reads your problem description a line at a time and answers with a canned\n\
                  response chosen by keyword, falling back to a random default reply.\n\
                  Type 'bye' to end the session.",
    version
)]
struct Cli {
    /// Path of the keyword→response mapping file (overrides configuration).
    #[arg(long, value_name = "FILE")]
    mapped: Option<PathBuf>,
    /// Path of the default-responses file (overrides configuration).
    #[arg(long, value_name = "FILE")]
    defaults: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Session failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves paths, loads the store, and runs one dialogue session over
/// stdin/stdout.
fn run(cli: Cli) -> Result<()> {
    let cfg = crate::core::config::load_config();
    // Precedence: CLI flag, then configuration, then built-in default.
    let mapped_path = cli
        .mapped
        .unwrap_or_else(|| PathBuf::from(&cfg.responses.mapped_file));
    let default_path = cli
        .defaults
        .unwrap_or_else(|| PathBuf::from(&cfg.responses.default_file));
    tracing::debug!(
        "Loading responses from {:?} and {:?}",
        mapped_path,
        default_path
    );

    let store = ResponseStore::load(&mapped_path, &default_path);
    tracing::info!(
        "Response store ready: {} mapped keyword(s), {} default response(s)",
        store.mapped_count(),
        store.default_responses().len()
    );

    let responder = Responder::new(store);
    let stdin = io::stdin();
    let mut session = SupportSession::new(responder, stdin.lock(), io::stdout());
    session.run()
}
