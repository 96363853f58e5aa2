//! Arrsort library crate
//!
//! This crate provides the core functionality for the `arrsort` CLI. It is
//! organized into small modules: `extract` (locate, split and parse the
//! bracketed integer array), `render` (format the output line) and `error`
//! (the failure taxonomy). The binary `src/main.rs` calls `arrsort_lib::run()`
//! to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod error;
pub mod extract;
pub mod render;

use std::io::IsTerminal;

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use crate::extract::extract;
use crate::render::write_line;

/// Input used when no positional argument is supplied.
pub const DEFAULT_INPUT: &str = "{}";

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text containing one bracketed integer array, e.g. '{"a": [25, 50, 75, 100]}'
    #[arg(default_value = DEFAULT_INPUT, allow_hyphen_values = true)]
    input: String,

    /// Emit debug logging to stderr (repeat for trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "arrsort_lib=debug,warn",
        _ => "arrsort_lib=trace,warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the Arrsort CLI.
///
/// Parses the single optional positional argument (defaulting to `{}`),
/// extracts the integer array between the first `[` and the first `]` and
/// prints it as `Sorted array : [a, b, c]`. The array keeps its input order.
///
/// Errors are printed to stderr as `error: ...` and the process exits with
/// status 1. Nothing is written to stdout on failure.
///
/// Example:
///
/// ```no_run
/// arrsort_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(input = %cli.input, "starting extraction");

    let values = extract(&cli.input).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = write_line(std::io::stdout().lock(), &values) {
        eprintln!("error: failed to write output: {}", e);
        std::process::exit(1);
    }
}
