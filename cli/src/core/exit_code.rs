use crate::core::error::ClexError;

/// Exit codes for the clex CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// General/unspecified error
    GeneralError = 1,
    /// Invalid arguments or keyword configuration
    ConfigError = 3,
    /// File not found or IO error
    FileError = 4,
    /// Directory without source files
    NotFoundError = 5,
    /// Strict mode found input no matcher recognizes. 2 is left to clap usage errors.
    UnrecognizedInput = 6,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        match error.downcast_ref::<ClexError>() {
            Some(clex_error) => ExitCode::from(clex_error),
            None => ExitCode::GeneralError,
        }
    }
}

impl From<&ClexError> for ExitCode {
    fn from(error: &ClexError) -> Self {
        match error {
            ClexError::Io(_) => ExitCode::FileError,
            ClexError::Utf8(_) => ExitCode::FileError,
            ClexError::Lex(_) => ExitCode::ConfigError,
            ClexError::DirectoryNotFound(_) => ExitCode::FileError,
            ClexError::NotADirectory(_) => ExitCode::FileError,
            ClexError::NoSourceFiles(_) => ExitCode::NotFoundError,
            ClexError::UnrecognizedInput(_) => ExitCode::UnrecognizedInput,
        }
    }
}
