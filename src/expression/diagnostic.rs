//! The diagnostic record attached to an invalid mapped expression

use std::fmt;

use crate::base::Position;
use crate::parser::{ErrorCode, SyntaxError};

/// Why a mapped expression is unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Problem {
    /// Matched neither the normal nor the iterated grammar
    InvalidSyntax,
    /// Matched a grammar but the key slot was empty
    MissingMappedKey,
    /// Declared `?` without a true-branch literal
    MissingTernaryTrue,
}

impl Problem {
    /// The message template authors see
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidSyntax => "Invalid Syntax",
            Self::MissingMappedKey => "Didn't find a mappedKey in the mapped expression",
            Self::MissingTernaryTrue => {
                "Mapped expression declares a ternary operator but couldn't find resulting value for true outcome"
            }
        }
    }

    /// The fixed error code of a missing-data problem
    ///
    /// Syntax problems take their code from the parser instead.
    pub fn missing_data_code(&self) -> Option<ErrorCode> {
        match self {
            Self::InvalidSyntax => None,
            Self::MissingMappedKey => Some(ErrorCode::E0401),
            Self::MissingTernaryTrue => Some(ErrorCode::E0402),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Locates and describes one malformed mapped expression
///
/// `line_num` and `col_num` are 1-based and point at the start of the
/// expression within the full source text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvalidExpression {
    /// The candidate text as it appeared in the source
    pub expr: String,
    pub line_num: usize,
    pub col_num: usize,
    pub problem: Problem,
    /// Categorized code for filtering
    pub code: ErrorCode,
    /// Token-level explanation for syntax errors
    pub detail: Option<String>,
}

impl InvalidExpression {
    pub(crate) fn syntax(expr: &str, position: Position, err: &SyntaxError) -> Self {
        Self {
            expr: expr.to_string(),
            line_num: position.line,
            col_num: position.column,
            problem: Problem::InvalidSyntax,
            code: err.code,
            detail: Some(err.format()),
        }
    }

    pub(crate) fn missing_data(expr: &str, position: Position, problem: Problem) -> Self {
        Self {
            expr: expr.to_string(),
            line_num: position.line,
            col_num: position.column,
            problem,
            code: problem.missing_data_code().unwrap_or(ErrorCode::E0301),
            detail: None,
        }
    }

    /// The 1-based position of the expression start
    pub fn position(&self) -> Position {
        Position::new(self.line_num, self.col_num)
    }
}

impl fmt::Display for InvalidExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {}:{} in '{}'",
            self.code, self.problem, self.line_num, self.col_num, self.expr
        )?;
        if let Some(detail) = &self.detail {
            write!(f, "\n  {}", detail)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::{TextRange, TextSize};

    #[test]
    fn test_problem_messages() {
        assert_eq!(Problem::InvalidSyntax.to_string(), "Invalid Syntax");
        assert_eq!(
            Problem::MissingMappedKey.message(),
            "Didn't find a mappedKey in the mapped expression"
        );
        assert!(
            Problem::MissingTernaryTrue
                .message()
                .contains("ternary operator")
        );
    }

    #[test]
    fn test_missing_data_codes() {
        assert_eq!(Problem::InvalidSyntax.missing_data_code(), None);
        assert_eq!(
            Problem::MissingMappedKey.missing_data_code(),
            Some(ErrorCode::E0401)
        );
        assert_eq!(
            Problem::MissingTernaryTrue.missing_data_code(),
            Some(ErrorCode::E0402)
        );
    }

    #[test]
    fn test_display_missing_data() {
        let diagnostic =
            InvalidExpression::missing_data("&{?}", Position::new(3, 7), Problem::MissingMappedKey);
        assert_eq!(
            diagnostic.to_string(),
            "E0401: Didn't find a mappedKey in the mapped expression at 3:7 in '&{?}'"
        );
        assert_eq!(diagnostic.position(), Position::new(3, 7));
    }

    #[test]
    fn test_display_syntax_includes_detail() {
        let err = SyntaxError::new(
            "invalid character '-'",
            TextRange::new(TextSize::new(3), TextSize::new(4)),
            ErrorCode::E0101,
        );
        let diagnostic = InvalidExpression::syntax("&{a-b}", Position::new(1, 1), &err);

        assert_eq!(diagnostic.problem, Problem::InvalidSyntax);
        assert_eq!(diagnostic.code, ErrorCode::E0101);
        assert_eq!(
            diagnostic.to_string(),
            "E0101: Invalid Syntax at 1:1 in '&{a-b}'\n  E0101: invalid character '-'"
        );
    }
}
