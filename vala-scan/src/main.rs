//! vala-scan - print the token stream of a source file.
//!
//! This is the command-line front end for `vala-lex`. It reads one file,
//! scans it to the end and prints every token, skipping whitespace unless
//! asked otherwise.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_scan, ScanArgs};
use config::{Config, OutputFormat};
use error::{Result, ScanToolError};

/// vala-scan - tokenize a C#/Vala-like source file
#[derive(Parser, Debug)]
#[command(name = "vala-scan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the tokens of a C#/Vala-like source file", long_about = None)]
struct Cli {
    /// Path to the file to scan
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print whitespace tokens too
    #[arg(short, long)]
    whitespace: bool,

    /// Treat carriage return as whitespace
    #[arg(long)]
    crlf: bool,

    /// Enable verbose output
    #[arg(short, long, env = "VALA_SCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "VALA_SCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "VALA_SCAN_NO_COLOR")]
    no_color: bool,
}

/// Main entry point for the vala-scan CLI.
///
/// Any error is printed as `error: <message>` and the process exits with
/// status 1.
fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let args = scan_args(cli, &config)?;

    let stdout = std::io::stdout();
    run_scan(&args, &mut stdout.lock())?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout carries only tokens.
///
/// # Arguments
/// * `verbose` - Whether to enable debug-level logging
/// * `no_color` - Whether to disable ANSI colors
///
/// # Returns
/// * `Result<()>` - Success or an error
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ScanToolError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Merge command-line flags over the configuration.
///
/// Boolean flags can only switch an option on.
///
/// # Arguments
/// * `cli` - Parsed command-line arguments
/// * `config` - The loaded configuration
///
/// # Returns
/// * `Result<ScanArgs>` - Arguments for the scan, or `MissingPath`
fn scan_args(cli: Cli, config: &Config) -> Result<ScanArgs> {
    let path = cli.path.ok_or(ScanToolError::MissingPath)?;

    let mut options = config.scanner.scan_options();
    options.crlf_whitespace |= cli.crlf;

    Ok(ScanArgs {
        path,
        format: cli.format.unwrap_or(config.output.format),
        show_whitespace: cli.whitespace || config.output.show_whitespace,
        options,
    })
}
