//! Token-level syntax error type
//!
//! Ranges are relative to the candidate text the parser was given, not to
//! the surrounding document.

use text_size::{TextRange, TextSize};

use super::codes::ErrorCode;
use super::context::ParseContext;

/// A syntax error with location, code and optional hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Location within the candidate
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl SyntaxError {
    /// Create a new syntax error
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            hint: None,
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Create an error carrying the code's default message
    pub fn from_code(code: ErrorCode, range: TextRange) -> Self {
        Self::new(code.default_message(), range, code)
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check if this error has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

/// Build an "unexpected X in Y, expected Z" error for the given context
pub fn format_context_error(found: &str, range: TextRange, context: ParseContext) -> SyntaxError {
    let message = format!(
        "unexpected {} {}, expected {}",
        found,
        context.description(),
        context.expected_description()
    );

    SyntaxError::new(message, range, context.unexpected_token_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_new() {
        let err = SyntaxError::new(
            "expected '}'",
            TextRange::new(TextSize::new(4), TextSize::new(5)),
            ErrorCode::E0202,
        );

        assert_eq!(err.message, "expected '}'");
        assert_eq!(err.code, ErrorCode::E0202);
        assert!(err.hint.is_none());
    }

    #[test]
    fn test_syntax_error_with_hint() {
        let err = SyntaxError::at_offset("invalid character", TextSize::new(3), ErrorCode::E0101)
            .with_hint("keys may only contain letters, digits, '_' and '.'");

        assert!(err.has_hint());
        assert_eq!(err.range, TextRange::empty(TextSize::new(3)));
    }

    #[test]
    fn test_from_code_uses_default_message() {
        let err = SyntaxError::from_code(ErrorCode::E0203, TextRange::empty(TextSize::new(0)));
        assert_eq!(err.message, "unexpected input after closing '}'");
    }

    #[test]
    fn test_format_error() {
        let err = SyntaxError::from_code(ErrorCode::E0202, TextRange::empty(TextSize::new(7)))
            .with_hint("add '}'");

        let formatted = err.format();
        assert!(formatted.contains("E0202"));
        assert!(formatted.contains("unclosed mapped expression"));
        assert!(formatted.contains("hint: add '}'"));
        assert_eq!(err.to_string(), formatted);
    }

    #[test]
    fn test_format_context_error() {
        let err = format_context_error(
            "':'",
            TextRange::empty(TextSize::new(3)),
            ParseContext::IteratedExpression,
        );

        assert!(err.message.contains("':'"));
        assert!(err.message.contains("in iterated expression"));
        assert!(err.message.contains("expected"));
        assert_eq!(err.code, ErrorCode::E0302);
    }
}
