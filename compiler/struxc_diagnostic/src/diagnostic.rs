//! The core `Diagnostic` type.

use struxc_ir::Span;

use crate::error_code::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

/// A single diagnostic: a stable code, a human-readable message, and a
/// location. Per spec §6 the on-disk format is
/// `<file>:<line> <CODE> <message>`; `file`/`line` are resolved once at
/// diagnostic-creation time rather than carried as a lazy span lookup,
/// because by the time a diagnostic is built the module that produced it
/// always knows its own path and can compute the line eagerly.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub span: Span,
}

impl Diagnostic {
    #[must_use]
    pub fn error(code: ErrorCode, file: impl Into<String>, line: u32, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            file: file.into(),
            line,
            span,
        }
    }

    #[must_use]
    pub fn warning(code: ErrorCode, file: impl Into<String>, line: u32, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Warning,
            message: message.into(),
            file: file.into(),
            line,
            span,
        }
    }
}

/// Compute a 1-based line number from a byte offset and the full source
/// text of the file the offset belongs to.
#[must_use]
pub fn line_of_offset(source: &str, offset: u32) -> u32 {
    let offset = offset as usize;
    1 + source
        .as_bytes()
        .iter()
        .take(offset.min(source.len()))
        .filter(|&&b| b == b'\n')
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_of_offset_counts_preceding_newlines() {
        let src = "a\nb\nc";
        assert_eq!(line_of_offset(src, 0), 1);
        assert_eq!(line_of_offset(src, 2), 2);
        assert_eq!(line_of_offset(src, 4), 3);
    }

    #[test]
    fn error_severity_reports_is_error() {
        let d = Diagnostic::error(ErrorCode::Tsn9001, "a.ts", 1, Span::DUMMY, "boom");
        assert!(d.severity.is_error());
    }
}
