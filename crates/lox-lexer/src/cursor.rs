use crate::span::{Position, Span};

/// Read state of one scan over `source`.
///
/// `start` marks the first character of the lexeme being recognized and
/// `current` the next unread one, so `start <= current` holds throughout.
/// Consuming a `\n` bumps `current.line`; the scanner never counts lines.
pub struct Cursor<'src> {
    source: &'src str,
    start: Position,
    current: Position,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: Position::start(),
            current: Position::start(),
        }
    }

    /// Begin a new lexeme at the current position.
    pub fn mark(&mut self) {
        self.start = self.current;
    }

    /// Where the lexeme being recognized begins.
    pub fn start(&self) -> Position {
        self.start
    }

    pub fn line(&self) -> u32 {
        self.current.line
    }

    pub fn is_at_end(&self) -> bool {
        self.current.offset >= self.source.len()
    }

    fn rest(&self) -> &'src str {
        &self.source[self.current.offset..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after `peek()`; the number scanner's one extra lookahead.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current.offset += ch.len_utf8();
        if ch == '\n' {
            self.current.line += 1;
            self.current.column = 1;
        } else {
            self.current.column += 1;
        }
        Some(ch)
    }

    /// Consume `expected` if it is next; the two-character operator test.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.advance();
        true
    }

    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Source text from `start` to `current`.
    pub fn lexeme(&self) -> &'src str {
        &self.source[self.start.offset..self.current.offset]
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.current)
    }
}
