pub mod cursor;
pub mod error;
pub mod span;
pub mod token;

mod scanner;

pub use error::LexError;
pub use scanner::{scan_all, Scanner};
pub use span::{Position, Span};
pub use token::{Literal, Token, TokenKind};
