mod cli;
mod error;
mod render;

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lox_lexer::scan_all;

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::CliError;

/// Exit status when the input contained lexical errors.
const EXIT_LEX_ERROR: i32 = 65;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0.
            let code = if e.use_stderr() { 1 } else { 0 };
            if let Err(print_error) = e.print() {
                eprintln!("error: could not print usage: {}", print_error);
                process::exit(1);
            }
            process::exit(code);
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// Log to stderr; `LOX_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("LOX_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Command::Tokenize {
            input,
            format,
            pretty_errors,
        } => tokenize(&input, format, pretty_errors),
    }
}

/// Print tokens to stdout, then errors to stderr. Returns the exit status.
fn tokenize(input: &Path, format: OutputFormat, pretty_errors: bool) -> Result<i32, CliError> {
    let source = fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.display().to_string(),
        source,
    })?;
    info!(path = %input.display(), bytes = source.len(), "tokenizing");

    let (tokens, errors) = scan_all(&source);

    let mut out = io::stdout().lock();
    render::write_tokens(&mut out, &tokens, format)?;
    out.flush()?;

    if errors.is_empty() {
        return Ok(0);
    }

    let mut err = io::stderr().lock();
    if pretty_errors {
        let file_name = input
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let color = io::stderr().is_terminal();
        render::write_reports(&mut err, &errors, &source, &file_name, color)?;
    } else {
        render::write_errors(&mut err, &errors)?;
    }
    err.flush()?;

    Ok(EXIT_LEX_ERROR)
}
