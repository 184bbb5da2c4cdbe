use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Lox toolchain.
#[derive(Debug, Parser)]
#[command(
    name = "loxc",
    version,
    about,
    long_about = "Lox toolchain.\n\nScans Lox source files into their token stream.\n\nExamples:\n  loxc tokenize hello.lox                  Print one token per line\n  loxc tokenize hello.lox --format json    Print tokens as JSON\n  loxc tokenize hello.lox --pretty-errors  Show errors as source snippets\n  LOX_LOG=debug loxc tokenize hello.lox    Log scanner activity to stderr"
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); LOX_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the token stream of a source file
    Tokenize {
        /// Path to the source file
        input: PathBuf,

        /// Token output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,

        /// Render lexical errors as annotated source snippets
        #[arg(long = "pretty-errors")]
        pretty_errors: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<KIND> <lexeme> <literal>` per line
    Plain,
    /// Pretty-printed JSON array
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tokenize_defaults() {
        let cli = Cli::try_parse_from(["loxc", "tokenize", "a.lox"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Command::Tokenize {
                input,
                format,
                pretty_errors,
            } => {
                assert_eq!(input, PathBuf::from("a.lox"));
                assert_eq!(format, OutputFormat::Plain);
                assert!(!pretty_errors);
            }
        }
    }

    #[test]
    fn tokenize_options() {
        let cli = Cli::try_parse_from([
            "loxc",
            "tokenize",
            "a.lox",
            "--format",
            "json",
            "--pretty-errors",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Tokenize {
            format,
            pretty_errors,
            ..
        } = cli.command;
        assert_eq!(format, OutputFormat::Json);
        assert!(pretty_errors);
    }

    #[test]
    fn unknown_command_rejected() {
        assert!(Cli::try_parse_from(["loxc", "parse", "a.lox"]).is_err());
        assert!(Cli::try_parse_from(["loxc", "tokenize"]).is_err());
    }
}
