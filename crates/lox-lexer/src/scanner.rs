use tracing::debug;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

/// Class of the character that opens a lexeme. Every `char` maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CharClass {
    /// A complete one-character token.
    Punctuation(TokenKind),
    /// `=`, `!`, `<`, `>`: the `double` kind when followed by `=`.
    OperatorPrefix { single: TokenKind, double: TokenKind },
    /// `/`, either a division operator or the start of a line comment.
    Slash,
    Whitespace,
    Newline,
    Quote,
    Digit,
    Alpha,
    Other,
}

fn classify(c: char) -> CharClass {
    match c {
        '(' => CharClass::Punctuation(TokenKind::LeftParen),
        ')' => CharClass::Punctuation(TokenKind::RightParen),
        '{' => CharClass::Punctuation(TokenKind::LeftBrace),
        '}' => CharClass::Punctuation(TokenKind::RightBrace),
        ',' => CharClass::Punctuation(TokenKind::Comma),
        '.' => CharClass::Punctuation(TokenKind::Dot),
        '+' => CharClass::Punctuation(TokenKind::Plus),
        '-' => CharClass::Punctuation(TokenKind::Minus),
        '*' => CharClass::Punctuation(TokenKind::Star),
        ';' => CharClass::Punctuation(TokenKind::Semicolon),
        '=' => CharClass::OperatorPrefix {
            single: TokenKind::Equal,
            double: TokenKind::EqualEqual,
        },
        '!' => CharClass::OperatorPrefix {
            single: TokenKind::Bang,
            double: TokenKind::BangEqual,
        },
        '<' => CharClass::OperatorPrefix {
            single: TokenKind::Less,
            double: TokenKind::LessEqual,
        },
        '>' => CharClass::OperatorPrefix {
            single: TokenKind::Greater,
            double: TokenKind::GreaterEqual,
        },
        '/' => CharClass::Slash,
        ' ' | '\t' | '\r' => CharClass::Whitespace,
        '\n' => CharClass::Newline,
        '"' => CharClass::Quote,
        c if c.is_ascii_digit() => CharClass::Digit,
        c if is_ident_start(c) => CharClass::Alpha,
        _ => CharClass::Other,
    }
}

/// Scan `source` into tokens (always terminated by `Eof`) and lexical errors.
pub fn scan_all(source: &str) -> (Vec<Token>, Vec<LexError>) {
    debug!(len = source.len(), "scan started");
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        "scan finished"
    );
    (tokens, errors)
}

/// Single-pass, hand-written scanner.
///
/// Consumed by [`Scanner::scan_tokens`]; one scanner serves exactly one source.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source, returning all tokens and errors.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<LexError>) {
        while !self.cursor.is_at_end() {
            self.cursor.mark();
            self.scan_token();
        }
        self.cursor.mark();
        self.tokens.push(Token::eof(self.cursor.span()));
        (self.tokens, self.errors)
    }

    /// Recognize one lexeme, emitting at most one token or one error.
    fn scan_token(&mut self) {
        let Some(ch) = self.cursor.advance() else {
            return;
        };

        match classify(ch) {
            CharClass::Punctuation(kind) => self.add_token(kind),
            CharClass::OperatorPrefix { single, double } => {
                let kind = if self.cursor.match_char('=') { double } else { single };
                self.add_token(kind);
            }
            CharClass::Slash => {
                if self.cursor.match_char('/') {
                    // The newline is left for the next iteration.
                    self.cursor.advance_while(|c| c != '\n');
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            CharClass::Whitespace => {}
            // Line already bumped by the cursor.
            CharClass::Newline => {}
            CharClass::Quote => self.scan_string(),
            CharClass::Digit => self.scan_number(),
            CharClass::Alpha => self.scan_identifier(),
            CharClass::Other => self.error_unexpected_char(ch),
        }
    }

    // ---------------------------------------------------------------
    // Literals and identifiers
    // ---------------------------------------------------------------

    /// Scan a string after its opening `"`. Strings may span lines.
    fn scan_string(&mut self) {
        self.cursor.advance_while(|c| c != '"');
        if self.cursor.is_at_end() {
            self.error_unterminated_string();
            return;
        }
        self.cursor.advance(); // closing "

        let lexeme = self.cursor.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        self.push_token(TokenKind::String, Some(Literal::String(value.to_string())));
    }

    /// Scan `digits` or `digits.digits`; a `.` without a digit after it is left alone.
    fn scan_number(&mut self) {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        let has_fraction = self.cursor.peek() == Some('.')
            && self
                .cursor
                .peek_next()
                .is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.cursor.advance(); // consume '.'
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        let value = self.cursor.lexeme().parse::<f64>().ok().map(Literal::Number);
        self.push_token(TokenKind::Number, value);
    }

    /// Scan the longest identifier run, then check it against the keyword table.
    fn scan_identifier(&mut self) {
        self.cursor.advance_while(is_ident_continue);
        let kind =
            TokenKind::keyword_from_str(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    // ---------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    /// Emit a token for the lexeme under the cursor.
    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.cursor.lexeme(), literal, self.cursor.span());
        self.tokens.push(token);
    }

    fn error_unexpected_char(&mut self, ch: char) {
        let line = self.cursor.line();
        debug!(char = %ch, line, "lexer error: unexpected character");
        self.errors.push(LexError::UnexpectedCharacter {
            ch,
            line,
            span: self.cursor.span(),
        });
    }

    fn error_unterminated_string(&mut self) {
        let line = self.cursor.line();
        debug!(
            line,
            opened_on = self.cursor.start().line,
            "lexer error: unterminated string"
        );
        self.errors.push(LexError::UnterminatedString {
            line,
            span: self.cursor.span(),
        });
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
