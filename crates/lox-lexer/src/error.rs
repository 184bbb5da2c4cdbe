use thiserror::Error;

use crate::span::Span;

/// Recoverable lexical errors collected while scanning.
///
/// `Display` renders the one-line diagnostic `[line <N>] Error: <message>`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("[line {line}] Error: Unexpected character: {ch}")]
    UnexpectedCharacter { ch: char, line: u32, span: Span },

    /// `line` is where end-of-input was hit, `span` starts at the opening quote.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: u32, span: Span },
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. }
            | LexError::UnterminatedString { line, .. } => *line,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span, .. } => *span,
        }
    }

    /// The message without the `[line N] Error:` prefix.
    pub fn message(&self) -> String {
        match self {
            LexError::UnexpectedCharacter { ch, .. } => format!("Unexpected character: {}", ch),
            LexError::UnterminatedString { .. } => "Unterminated string.".to_string(),
        }
    }
}
