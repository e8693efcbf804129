use clex_lib::LexError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ClexError {
    Io(io::Error),
    Lex(LexError),
    /// A source file that is not valid UTF-8.
    Utf8(String),
    DirectoryNotFound(String),
    NotADirectory(String),
    NoSourceFiles(String),
    /// Strict mode found error tokens; carries how many.
    UnrecognizedInput(usize),
}

impl fmt::Display for ClexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClexError::Io(err) => write!(f, "IO error: {err}"),
            ClexError::Lex(err) => write!(f, "{err}"),
            ClexError::Utf8(path) => write!(
                f,
                "File is not valid UTF-8: {}",
                crate::core::paths::clean_path_str(path)
            ),
            ClexError::DirectoryNotFound(path) => write!(
                f,
                "Directory not found: {}",
                crate::core::paths::clean_path_str(path)
            ),
            ClexError::NotADirectory(path) => write!(
                f,
                "Not a directory: {}",
                crate::core::paths::clean_path_str(path)
            ),
            ClexError::NoSourceFiles(path) => write!(
                f,
                "No source files found in directory: {}",
                crate::core::paths::clean_path_str(path)
            ),
            ClexError::UnrecognizedInput(count) => {
                write!(f, "Unrecognized input on {count} line(s)")
            }
        }
    }
}

impl std::error::Error for ClexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClexError::Io(err) => Some(err),
            ClexError::Lex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ClexError {
    fn from(err: io::Error) -> Self {
        ClexError::Io(err)
    }
}

impl From<LexError> for ClexError {
    fn from(err: LexError) -> Self {
        ClexError::Lex(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ClexError::UnrecognizedInput(2).to_string(),
            "Unrecognized input on 2 line(s)"
        );
        assert_eq!(
            ClexError::from(LexError::InvalidKeyword("1x".into())).to_string(),
            "Invalid keyword '1x': keywords must match [a-zA-Z_][a-zA-Z0-9_]*"
        );
    }
}
