//! Field extraction and required-field validation
//!
//! ```text
//! parse_expression(text) -> Parse
//!     ↓ extract_fields
//! ExpressionFields
//!     ↓ validate
//! Option<Problem>
//! ```

use smol_str::SmolStr;

use super::diagnostic::Problem;
use crate::parser::{IteratedSyntax, NormalSyntax, Parse, SyntaxError};

/// Interpreted fields of a normal expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalFields {
    pub key: Option<SmolStr>,
    pub optional: bool,
    pub pipe_functions: Option<Vec<SmolStr>>,
    pub ternary: bool,
    pub ternary_true: Option<SmolStr>,
    pub ternary_false: Option<SmolStr>,
}

/// Interpreted fields of a candidate that matched one of the grammars
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionFields {
    Normal(NormalFields),
    Iterated { key: Option<SmolStr> },
}

impl ExpressionFields {
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Normal(fields) => fields.key.as_deref(),
            Self::Iterated { key } => key.as_deref(),
        }
    }
}

/// Interpret the raw captures of a successful parse
///
/// Returns the parser's error unchanged when neither grammar matched.
pub fn extract_fields(parse: Parse<'_>) -> Result<ExpressionFields, SyntaxError> {
    match parse {
        Parse::Normal(syntax) => Ok(ExpressionFields::Normal(normal_fields(&syntax))),
        Parse::Iterated(IteratedSyntax { key }) => Ok(ExpressionFields::Iterated {
            key: key.map(SmolStr::new),
        }),
        Parse::Invalid(err) => Err(err),
    }
}

fn normal_fields(syntax: &NormalSyntax<'_>) -> NormalFields {
    let mut fields = NormalFields {
        key: syntax.key.map(SmolStr::new),
        optional: syntax.optional,
        pipe_functions: syntax.pipe_list.map(parse_pipe_functions),
        ternary: syntax.ternary,
        ..NormalFields::default()
    };

    // Literals outside a ternary are accepted by the grammar but carry no meaning
    if syntax.ternary {
        fields.ternary_true = select_literal(syntax.true_double, syntax.true_single);
        fields.ternary_false = select_literal(syntax.false_double, syntax.false_single);
    }

    fields
}

/// Split a `(fn1,fn2)` list into function names, in declared order
///
/// Tokens are kept verbatim: `()` yields a single empty name.
pub fn parse_pipe_functions(list: &str) -> Vec<SmolStr> {
    let inner = list
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(list);
    inner.split(',').map(SmolStr::new).collect()
}

/// Pick the literal for one ternary slot, double-quoted first
pub fn select_literal(double: Option<&str>, single: Option<&str>) -> Option<SmolStr> {
    double.or(single).map(strip_quotes)
}

fn strip_quotes(literal: &str) -> SmolStr {
    let mut chars = literal.chars();
    chars.next();
    chars.next_back();
    SmolStr::new(chars.as_str())
}

/// Check the fields a usable expression needs
///
/// A missing key is reported in preference to a missing true value. An
/// empty key or empty true literal counts as missing.
pub fn validate(fields: &ExpressionFields) -> Option<Problem> {
    if fields.key().is_none_or(str::is_empty) {
        return Some(Problem::MissingMappedKey);
    }

    match fields {
        ExpressionFields::Normal(normal)
            if normal.ternary && normal.ternary_true.as_deref().is_none_or(str::is_empty) =>
        {
            Some(Problem::MissingTernaryTrue)
        }
        _ => None,
    }
}
