//! Scan command implementation.
//!
//! Reads one source file fully into memory, pulls tokens from the scanner
//! until end of input, and prints them.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vala_lex::{ScanOptions, Scanner, Token, TokenKind};

use crate::config::OutputFormat;
use crate::error::{Result, ScanToolError};

/// Arguments for the scan command.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// File to scan.
    pub path: PathBuf,
    /// How tokens are printed.
    pub format: OutputFormat,
    /// Print whitespace tokens as well.
    pub show_whitespace: bool,
    /// Scanner classification options.
    pub options: ScanOptions,
}

/// Counts collected while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Tokens scanned before end of input.
    pub tokens: usize,
    /// Tokens written to the output.
    pub printed: usize,
    /// Illegal tokens seen.
    pub illegal: usize,
}

/// Scans `args.path` and writes its tokens to `out`.
///
/// A broken pipe on `out` ends the scan early without an error.
///
/// # Arguments
/// * `args` - Input path, output format and scanner options
/// * `out` - Destination for the printed tokens
///
/// # Returns
/// * `Result<ScanSummary>` - Token counts, or an error locating or reading the input
pub fn run_scan<W: Write>(args: &ScanArgs, out: &mut W) -> Result<ScanSummary> {
    let mut scanner = open_scanner(&args.path)?;
    scanner.set_options(args.options);
    debug!(path = %args.path.display(), "scanning");

    let mut summary = ScanSummary::default();
    loop {
        let token = scanner.scan();
        if token.is_eof() {
            break;
        }

        summary.tokens += 1;
        if token.kind == TokenKind::Illegal {
            summary.illegal += 1;
        }
        if token.is_whitespace() && !args.show_whitespace {
            continue;
        }

        match write_token(out, &token, args.format) {
            Ok(()) => summary.printed += 1,
            Err(e) if is_broken_pipe(&e) => {
                debug!("output closed, stopping");
                return Ok(summary);
            },
            Err(e) => return Err(e),
        }
    }
    match out.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(summary),
        other => other?,
    }

    debug!(
        tokens = summary.tokens,
        printed = summary.printed,
        "scan finished"
    );
    if summary.illegal > 0 {
        warn!(
            path = %args.path.display(),
            count = summary.illegal,
            "input contains illegal tokens"
        );
    }

    Ok(summary)
}

/// Validates the input path and reads the whole file into a scanner.
fn open_scanner(path: &Path) -> Result<Scanner> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ScanToolError::NotFound(path.to_path_buf()));
        },
        Err(e) => return Err(e.into()),
    };
    if metadata.is_dir() {
        return Err(ScanToolError::IsDirectory(path.to_path_buf()));
    }

    let file = File::open(path)?;
    Ok(Scanner::from_reader(file)?)
}

fn write_token<W: Write>(out: &mut W, token: &Token, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", token)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(token)?)?,
    }
    Ok(())
}

/// A closed reader (e.g. `vala-scan -p f | head`) ends the scan quietly.
fn is_broken_pipe(err: &ScanToolError) -> bool {
    matches!(err, ScanToolError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
}
