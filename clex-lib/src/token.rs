use std::fmt;
use std::ops::Range;

/// Display name of error tokens.
pub const ERROR_NAME: &str = "ERROR";

/// Emitted token categories, in matcher priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Number,
    StringLiteral,
    Operator,
    Punctuation,
}

impl TokenCategory {
    pub const COUNT: usize = 6;

    pub const ALL: [TokenCategory; Self::COUNT] = [
        TokenCategory::Keyword,
        TokenCategory::Identifier,
        TokenCategory::Number,
        TokenCategory::StringLiteral,
        TokenCategory::Operator,
        TokenCategory::Punctuation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Number => "NUMBER",
            TokenCategory::StringLiteral => "LITERAL",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Punctuation => "PUNCTUATION",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rows of the matcher table. `Whitespace` and `Newline` are consumed but
/// never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Keyword,
    Identifier,
    Number,
    StringLiteral,
    Operator,
    Punctuation,
    Whitespace,
    Newline,
}

impl TokenType {
    pub fn category(&self) -> Option<TokenCategory> {
        match self {
            TokenType::Keyword => Some(TokenCategory::Keyword),
            TokenType::Identifier => Some(TokenCategory::Identifier),
            TokenType::Number => Some(TokenCategory::Number),
            TokenType::StringLiteral => Some(TokenCategory::StringLiteral),
            TokenType::Operator => Some(TokenCategory::Operator),
            TokenType::Punctuation => Some(TokenCategory::Punctuation),
            TokenType::Whitespace | TokenType::Newline => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Lexeme(TokenCategory),
    /// No matcher recognized the input; the token holds the rest of the line.
    Error,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Lexeme(category) => category.name(),
            TokenKind::Error => ERROR_NAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Byte range in the comment-stripped source.
    pub span: Range<usize>,
    /// 1-based line in the comment-stripped source.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: &str, span: Range<usize>, line: usize) -> Self {
        Self {
            kind,
            value: value.to_string(),
            span,
            line,
        }
    }

    pub fn category(&self) -> Option<TokenCategory> {
        match self.kind {
            TokenKind::Lexeme(category) => Some(category),
            TokenKind::Error => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// The `(category-name, lexeme)` pair reported to callers.
    pub fn pair(&self) -> (&'static str, &str) {
        (self.kind.name(), &self.value)
    }
}
