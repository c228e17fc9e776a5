//! # Lox Scanner
//!
//! Lexical analysis for Lox, a small dynamically-typed scripting language.
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code
//! - `error`: Scan errors and diagnostics
//!
//! Scanning is a single forward pass over one source text. [`scan`] stops at
//! the first malformed construct; [`scan_all`] keeps going and returns every
//! error it met.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, LoxError, LoxResult};
pub use lexer::{Lexer, Literal, Token, TokenKind};

/// Version of the Lox scanner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a source text into tokens, failing on the first error
///
/// The returned tokens always end with [`TokenKind::Eof`].
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Scan a source text, collecting every error instead of stopping at the first
///
/// Returns the tokens when the scan was clean, otherwise all errors in
/// source order.
pub fn scan_all(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for item in Lexer::new(source).tokenize_all() {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_scan_and_scan_all_agree_on_clean_input() {
        let source = "class Point { init(x) { this.x = x; } }";
        assert_eq!(scan(source).unwrap(), scan_all(source).unwrap());
    }

    #[test]
    fn test_scan_all_first_error_matches_scan() {
        let source = "var a = 1;\nvar b = ~;\nvar c = |;";
        let first = scan(source).unwrap_err();
        let all = scan_all(source).unwrap_err();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], first);
        assert_eq!(all[1], LexError::UnexpectedCharacter { line: 3, ch: '|' });
    }
}
