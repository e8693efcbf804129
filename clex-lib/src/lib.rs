//! Lexical analysis for a small C-like language.
//!
//! Source text is stripped of `//` and `/* */` comments, split into lines and
//! consumed prefix by prefix against a fixed, ordered matcher table. Input that
//! no matcher recognizes becomes an error token holding the rest of its line;
//! the following lines are still tokenized.

pub mod comments;
pub mod counts;
pub mod error;
pub mod keywords;
pub mod token;
pub mod tokenize;

pub use comments::strip_comments;
pub use counts::CategoryCounts;
pub use error::LexError;
pub use token::{Token, TokenCategory, TokenKind, TokenType};
pub use tokenize::{tokenize, Analysis, LineScanner, Scanned, Tokenizer};
