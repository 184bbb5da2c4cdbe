use std::io::{self, Write};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use lox_lexer::{LexError, Token};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Write the token stream to `out` in the requested format.
pub fn write_tokens(
    out: &mut impl Write,
    tokens: &[Token],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// One `[line N] Error: ...` line per error.
pub fn write_errors(out: &mut impl Write, errors: &[LexError]) -> io::Result<()> {
    for error in errors {
        writeln!(out, "{}", error)?;
    }
    Ok(())
}

/// Render errors as labelled source snippets.
pub fn write_reports(
    out: &mut impl Write,
    errors: &[LexError],
    source: &str,
    file_name: &str,
    color: bool,
) -> io::Result<()> {
    for error in errors {
        // ariadne indexes by character, spans carry byte offsets.
        let range = error.span().range();
        let start = char_index(source, range.start);
        let end = char_index(source, range.end).max(start + 1);

        Report::build(ReportKind::Error, file_name, start)
            .with_config(Config::default().with_color(color))
            .with_message(format!("[line {}] {}", error.line(), error.message()))
            .with_label(
                Label::new((file_name, start..end))
                    .with_message(error.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((file_name, Source::from(source)), &mut *out)?;
    }
    Ok(())
}

fn char_index(source: &str, byte_offset: usize) -> usize {
    source
        .get(..byte_offset)
        .map_or(byte_offset, |prefix| prefix.chars().count())
}
