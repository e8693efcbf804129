#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A reserved word that is not itself a valid identifier.
    InvalidKeyword(String),
    /// A matcher pattern that failed to compile.
    Pattern(String),
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::InvalidKeyword(word) => write!(
                f,
                "Invalid keyword '{word}': keywords must match [a-zA-Z_][a-zA-Z0-9_]*"
            ),
            LexError::Pattern(msg) => write!(f, "Invalid matcher pattern: {msg}"),
        }
    }
}

impl std::error::Error for LexError {}
