//! Whole-document processing
//!
//! Scans a template for candidates, classifies each one, and applies a
//! [`DiagnosticPolicy`] to decide what the caller gets back. Classification
//! of one candidate never depends on another, so candidates can be processed
//! in parallel without changing the result.

mod options;
mod scanner;

pub use options::{DiagnosticPolicy, DocumentOptions};
pub use scanner::{CANDIDATE_PATTERN, candidate_regex, candidates};

use rayon::prelude::*;

use crate::base::LineIndex;
use crate::error::ExpressionError;
use crate::expression::{Candidate, InvalidExpression, MappedExpression, sort_expressions};

/// The expressions of one document after a policy was applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Expressions in document order
    pub expressions: Vec<MappedExpression>,
    /// Every diagnostic found, in document order
    pub diagnostics: Vec<InvalidExpression>,
}

impl ParsedDocument {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Expressions safe to render
    pub fn valid(&self) -> impl Iterator<Item = &MappedExpression> {
        self.expressions.iter().filter(|e| e.is_valid())
    }
}

/// Classify every candidate in `source`, valid or not, in document order
pub fn parse_document(source: &str) -> Vec<MappedExpression> {
    classify_all(source, false)
}

/// Classify every candidate in `source` and apply `options.policy`
pub fn parse_document_with(
    source: &str,
    options: &DocumentOptions,
) -> Result<ParsedDocument, ExpressionError> {
    let expressions = classify_all(source, options.parallel);

    let diagnostics: Vec<InvalidExpression> = expressions
        .iter()
        .filter_map(|e| e.invalid_expr_msg().cloned())
        .collect();

    let expressions = match options.policy {
        DiagnosticPolicy::Collect => expressions,
        DiagnosticPolicy::SkipInvalid => expressions.into_iter().filter(|e| e.is_valid()).collect(),
        DiagnosticPolicy::FailFast => {
            if let Some(first) = diagnostics.into_iter().next() {
                return Err(ExpressionError::Invalid(first));
            }
            return Ok(ParsedDocument {
                expressions,
                diagnostics: Vec::new(),
            });
        }
    };

    Ok(ParsedDocument {
        expressions,
        diagnostics,
    })
}

fn classify_all(source: &str, parallel: bool) -> Vec<MappedExpression> {
    let line_index = LineIndex::new(source);
    let found: Vec<Candidate<'_>> = candidates(source).collect();

    let mut expressions: Vec<MappedExpression> = if parallel {
        found
            .par_iter()
            .map(|candidate| MappedExpression::with_line_index(candidate, &line_index))
            .collect()
    } else {
        found
            .iter()
            .map(|candidate| MappedExpression::with_line_index(candidate, &line_index))
            .collect()
    };

    // Scan order is already document order; sorting keeps that a guarantee
    sort_expressions(&mut expressions);

    tracing::debug!(
        candidates = expressions.len(),
        invalid = expressions.iter().filter(|e| !e.is_valid()).count(),
        parallel,
        "classified document"
    );

    expressions
}
