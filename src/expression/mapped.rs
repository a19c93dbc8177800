//! The mapped expression value

use std::cmp::Ordering;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::candidate::Candidate;
use super::diagnostic::InvalidExpression;
use super::fields::{ExpressionFields, extract_fields, validate};
use crate::base::{LineIndex, Position, locate};
use crate::error::ExpressionError;
use crate::parser::parse_expression;

/// Which form a mapped expression took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionKind {
    /// A single-value substitution: `&{*(fns) key ? "t" : "f"}`
    Normal,
    /// The start of a repeated block: `&{#key}`
    Iterated,
    /// Malformed or missing required data; see the diagnostic
    Invalid,
}

/// One parsed placeholder occurrence
///
/// Fully derived on construction and immutable afterwards. When a
/// diagnostic is attached the remaining fields hold whatever was extracted
/// before validation failed, but the expression must not be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MappedExpression {
    range: TextRange,
    expr: String,
    mapped_key: Option<SmolStr>,
    is_iterated: bool,
    is_optional: bool,
    pipe_functions: Option<Vec<SmolStr>>,
    is_ternary: bool,
    ternary_true: Option<SmolStr>,
    ternary_false: Option<SmolStr>,
    invalid_expr_msg: Option<InvalidExpression>,
}

impl MappedExpression {
    /// Classify a candidate, locating any diagnostic in its source
    pub fn new(candidate: &Candidate<'_>) -> Self {
        Self::classify(candidate, |offset| locate(candidate.source(), offset))
    }

    /// Classify a candidate, reusing a line index built over its source
    pub fn with_line_index(candidate: &Candidate<'_>, line_index: &LineIndex<'_>) -> Self {
        Self::classify(candidate, |offset| line_index.position(offset))
    }

    /// Classify a standalone expression text, as if it were a whole document
    pub fn parse(text: &str) -> Self {
        Self::new(&Candidate::whole(text))
    }

    fn classify(candidate: &Candidate<'_>, position_of: impl Fn(TextSize) -> Position) -> Self {
        let text = candidate.text();
        let mut expression = Self {
            range: candidate.range(),
            expr: text.to_string(),
            mapped_key: None,
            is_iterated: false,
            is_optional: false,
            pipe_functions: None,
            is_ternary: false,
            ternary_true: None,
            ternary_false: None,
            invalid_expr_msg: None,
        };

        let fields = match extract_fields(parse_expression(text)) {
            Ok(fields) => fields,
            Err(err) => {
                let diagnostic =
                    InvalidExpression::syntax(text, position_of(candidate.offset()), &err);
                tracing::debug!(%diagnostic, "invalid mapped expression");
                expression.invalid_expr_msg = Some(diagnostic);
                return expression;
            }
        };

        let problem = validate(&fields);
        match fields {
            ExpressionFields::Normal(normal) => {
                expression.mapped_key = normal.key;
                expression.is_optional = normal.optional;
                expression.pipe_functions = normal.pipe_functions;
                expression.is_ternary = normal.ternary;
                expression.ternary_true = normal.ternary_true;
                expression.ternary_false = normal.ternary_false;
            }
            ExpressionFields::Iterated { key } => {
                expression.mapped_key = key;
                expression.is_iterated = true;
            }
        }

        if let Some(problem) = problem {
            let diagnostic =
                InvalidExpression::missing_data(text, position_of(candidate.offset()), problem);
            tracing::debug!(%diagnostic, "mapped expression is missing data");
            expression.invalid_expr_msg = Some(diagnostic);
        }

        expression
    }

    /// Order by ascending start offset, for use with `sort_by`
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        a.start_index().cmp(&b.start_index())
    }

    pub fn kind(&self) -> ExpressionKind {
        if self.invalid_expr_msg.is_some() {
            ExpressionKind::Invalid
        } else if self.is_iterated {
            ExpressionKind::Iterated
        } else {
            ExpressionKind::Normal
        }
    }

    /// Check if the expression can be rendered
    pub fn is_valid(&self) -> bool {
        self.invalid_expr_msg.is_none()
    }

    /// Turn an attached diagnostic into an error
    pub fn into_result(self) -> Result<Self, ExpressionError> {
        match self.invalid_expr_msg {
            Some(diagnostic) => Err(ExpressionError::Invalid(diagnostic)),
            None => Ok(self),
        }
    }

    pub fn start_index(&self) -> TextSize {
        self.range.start()
    }

    pub fn end_index(&self) -> TextSize {
        self.range.end()
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    /// The candidate text as it appeared in the source
    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn mapped_key(&self) -> Option<&str> {
        self.mapped_key.as_deref()
    }

    pub fn is_iterated(&self) -> bool {
        self.is_iterated
    }

    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    pub fn pipe_functions(&self) -> Option<&[SmolStr]> {
        self.pipe_functions.as_deref()
    }

    pub fn is_ternary(&self) -> bool {
        self.is_ternary
    }

    pub fn ternary_true(&self) -> Option<&str> {
        self.ternary_true.as_deref()
    }

    pub fn ternary_false(&self) -> Option<&str> {
        self.ternary_false.as_deref()
    }

    pub fn invalid_expr_msg(&self) -> Option<&InvalidExpression> {
        self.invalid_expr_msg.as_ref()
    }
}

/// Sort expressions into document order (stable for equal offsets)
pub fn sort_expressions(expressions: &mut [MappedExpression]) {
    expressions.sort_by(MappedExpression::compare);
}
