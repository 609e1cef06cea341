//! The per-compilation diagnostic bag (spec §3 Lifecycle, §5, §7).
//!
//! Append-only, single-owner: nothing outside a compilation ever mutates
//! another compilation's bag, and nothing inside a compilation removes a
//! diagnostic once pushed.

use crate::diagnostic::Diagnostic;

#[derive(Default, Debug)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// A compilation fails iff the bag contains any `error`-severity entry
    /// (spec §3 Lifecycle).
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::error_code::ErrorCode;
    use struxc_ir::Span;

    fn diag(sev: Severity) -> Diagnostic {
        Diagnostic {
            code: ErrorCode::Tsn7414,
            severity: sev,
            message: "x".into(),
            file: "a.ts".into(),
            line: 1,
            span: Span::DUMMY,
        }
    }

    #[test]
    fn empty_bag_has_no_errors() {
        assert!(!DiagnosticBag::new().has_errors());
    }

    #[test]
    fn warning_only_bag_has_no_errors() {
        let mut bag = DiagnosticBag::new();
        bag.push(diag(Severity::Warning));
        assert!(!bag.has_errors());
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn single_error_flips_has_errors() {
        let mut bag = DiagnosticBag::new();
        bag.push(diag(Severity::Warning));
        bag.push(diag(Severity::Error));
        assert!(bag.has_errors());
    }
}
