//! Parse errors.
//!
//! Syntax errors are a different failure class from the stable `TSNxxxx`
//! diagnostics (spec §7): a file that doesn't parse can't reach any later
//! phase, so there's nothing to reconcile against a binding catalog or a
//! module graph yet. The driver reports these directly and exits with the
//! "user input error" status rather than folding them into a
//! [`struxc_diagnostic::DiagnosticBag`].

use std::fmt;

use struxc_ir::Span;

#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.span, self.message)
    }
}

impl std::error::Error for ParseError {}
