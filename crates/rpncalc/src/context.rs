//! Evaluation context configuration

/// Configuration for a single evaluation.
///
/// This is handed to the converter and the evaluator and controls
/// how strictly parentheses are checked and whether tokens are traced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Report an unmatched `(` as an unbalanced parenthesis at end of input.
    ///
    /// When unset, an unmatched `(` is flushed to the postfix output and the
    /// evaluator rejects it as an unexpected token.
    pub strict_parentheses: bool,

    /// Whether to trace evaluation (for debugging)
    pub trace: bool,
}

impl EvalContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that rejects unmatched opening parentheses.
    pub fn strict() -> Self {
        Self {
            strict_parentheses: true,
            ..Default::default()
        }
    }

    /// Enable or disable per-token tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Enable or disable strict parenthesis checking.
    pub fn with_strict_parentheses(mut self, strict: bool) -> Self {
        self.strict_parentheses = strict;
        self
    }
}
