//! Diagnostic formatting for scan errors
//!
//! Renders a [`LexError`] as `[line <n>] Error: <message>`, optionally
//! followed by the surrounding source lines.

use super::LexError;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a LexError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a LexError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a LexError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = format!(
            "[line {}] {}: {}\n",
            self.error.line(),
            "Error".red().bold(),
            self.error
        );

        if let Some(source) = self.source {
            output.push_str(&self.format_source_context(source, self.error.line()));
        }

        output
    }

    /// Format the lines around the error, with a gutter of line numbers
    fn format_source_context(&self, source: &str, line: usize) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if line == 0 || line > lines.len() {
            return output;
        }

        let line_idx = line - 1;
        let width = (line + 1).to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} | {}\n",
                format!("{:width$}", line_idx, width = width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} | {}\n",
            format!("{:width$}", line, width = width).blue().bold(),
            lines[line_idx]
        ));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} | {}\n",
                format!("{:width$}", line + 1, width = width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_diagnostic_without_source() {
        let err = LexError::UnexpectedCharacter { line: 1, ch: '@' };
        let formatted = plain(|| Diagnostic::new(&err).format());
        assert_eq!(formatted, "[line 1] Error: Unexpected character '@'\n");
    }

    #[test]
    fn test_diagnostic_with_source() {
        let source = "var x = 42;\nvar y = @;\nvar z = 10;";
        let err = LexError::UnexpectedCharacter { line: 2, ch: '@' };
        let formatted = plain(|| Diagnostic::with_source(&err, source).format());

        assert!(formatted.starts_with("[line 2] Error: Unexpected character '@'"));
        assert!(formatted.contains("1 | var x = 42;"));
        assert!(formatted.contains("2 | var y = @;"));
        assert!(formatted.contains("3 | var z = 10;"));
    }

    #[test]
    fn test_diagnostic_line_past_end() {
        // An unterminated string ending in a newline reports a line with no text.
        let source = "\"abc\n";
        let err = LexError::UnterminatedString { line: 2 };
        let formatted = plain(|| Diagnostic::with_source(&err, source).format());
        assert_eq!(formatted, "[line 2] Error: Unterminated string\n");
    }
}
