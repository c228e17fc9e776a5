//! Error handling and diagnostics for the Lox language
//!
//! Scanning failures are reported as [`LexError`]; the driver wraps them,
//! together with I/O failures, in [`LoxError`].

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for Lox operations
pub type LoxResult<T> = Result<T, LoxError>;

/// Exit code for command-line usage errors
pub const EXIT_USAGE: i32 = 64;
/// Exit code for malformed input
pub const EXIT_DATA: i32 = 65;
/// Exit code for I/O failures
pub const EXIT_IO: i32 = 74;

/// A scan-time failure
///
/// Every variant carries the line on which the scanner stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unexpected character '{ch}'")]
    UnexpectedCharacter { line: usize, ch: char },

    #[error("Unterminated string")]
    UnterminatedString { line: usize },

    #[error("Unterminated block comment")]
    UnterminatedBlockComment { line: usize },
}

impl LexError {
    /// Line the error was raised on
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnterminatedBlockComment { line } => *line,
        }
    }
}

/// Top-level error for the driver
#[derive(Error, Debug)]
pub enum LoxError {
    #[error("[line {line}] Error: {0}", line = .0.line())]
    Lex(#[from] LexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoxError {
    /// Process exit code the CLI should terminate with
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Lex(_) => EXIT_DATA,
            Self::Io(_) => EXIT_IO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_messages() {
        let err = LexError::UnexpectedCharacter { line: 3, ch: '@' };
        assert_eq!(err.to_string(), "Unexpected character '@'");
        assert_eq!(err.line(), 3);

        let err = LexError::UnterminatedString { line: 7 };
        assert_eq!(err.to_string(), "Unterminated string");
        assert_eq!(err.line(), 7);

        let err = LexError::UnterminatedBlockComment { line: 2 };
        assert_eq!(err.to_string(), "Unterminated block comment");
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_lox_error_display() {
        let err: LoxError = LexError::UnterminatedString { line: 4 }.into();
        assert_eq!(err.to_string(), "[line 4] Error: Unterminated string");
    }

    #[test]
    fn test_exit_codes() {
        let lex: LoxError = LexError::UnexpectedCharacter { line: 1, ch: '#' }.into();
        assert_eq!(lex.exit_code(), EXIT_DATA);

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let io: LoxError = io_err.into();
        assert!(matches!(io, LoxError::Io(_)));
        assert_eq!(io.exit_code(), EXIT_IO);
    }
}
