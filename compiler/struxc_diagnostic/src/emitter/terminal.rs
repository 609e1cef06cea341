//! Renders diagnostics to the exact stderr format spec §6 requires:
//! `<file>:<line> <CODE> <message>`.

use std::io::{self, Write};

use crate::diagnostic::Diagnostic;

pub struct TerminalEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter { writer }
    }

    pub fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        writeln!(self.writer, "{}", format_line(diagnostic))
    }

    pub fn emit_all<'a>(&mut self, diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> io::Result<()> {
        for d in diagnostics {
            self.emit(d)?;
        }
        Ok(())
    }
}

#[must_use]
pub fn format_line(diagnostic: &Diagnostic) -> String {
    format!(
        "{}:{} {} {}",
        diagnostic.file, diagnostic.line, diagnostic.code, diagnostic.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::error_code::ErrorCode;
    use struxc_ir::Span;

    #[test]
    fn format_matches_spec_layout() {
        let d = Diagnostic {
            code: ErrorCode::Tsn9001,
            severity: Severity::Error,
            message: "duplicate class name".into(),
            file: "src/api-client.ts".into(),
            line: 1,
            span: Span::DUMMY,
        };
        assert_eq!(
            format_line(&d),
            "src/api-client.ts:1 TSN9001 duplicate class name"
        );
    }

    #[test]
    fn emit_all_writes_one_line_per_diagnostic() {
        let d1 = Diagnostic {
            code: ErrorCode::Tsn7414,
            severity: Severity::Error,
            message: "a".into(),
            file: "f.ts".into(),
            line: 3,
            span: Span::DUMMY,
        };
        let d2 = d1.clone();
        let mut buf = Vec::new();
        {
            let mut emitter = TerminalEmitter::new(&mut buf);
            emitter.emit_all([&d1, &d2]).unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
