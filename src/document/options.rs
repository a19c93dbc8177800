//! Document processing options

/// What to do with expressions that carry a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticPolicy {
    /// Keep invalid expressions in document order alongside valid ones
    #[default]
    Collect,
    /// Stop at the leftmost invalid expression and return it as an error
    FailFast,
    /// Leave invalid expressions out of the result
    SkipInvalid,
}

/// Options for [`parse_document_with`](super::parse_document_with)
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    pub policy: DiagnosticPolicy,
    /// Classify candidates on the rayon thread pool
    pub parallel: bool,
}

impl DocumentOptions {
    pub fn with_policy(mut self, policy: DiagnosticPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
