//! Semantic pass 4 — Naming-Collision Validator (spec §4.6): a namespace-
//! level declaration whose escaped name collides with its module's
//! container class name is rejected with `TSN9001`, since the container
//! class and every top-level declaration share one namespace once emitted.

use struxc_diagnostic::{Diagnostic, DiagnosticBag, ErrorCode};
use struxc_ir::ir::{IrModule, IrStmtKind};
use struxc_ir::{Span, StringInterner};

/// Reserved words the target reserves at namespace scope; a declaration
/// matching one of these (case-sensitively) is escaped with a trailing
/// underscore before the collision check runs, mirroring how the Member
/// Emitter escapes member names (spec §4.7).
const RESERVED: &[&str] = &[
    "class", "namespace", "public", "private", "protected", "static", "readonly", "interface", "enum", "void", "object", "string", "int",
];

#[must_use]
fn escape(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

pub fn check(module: &IrModule, container_class_name: &str, interner: &StringInterner, file: &str, source: &str, bag: &mut DiagnosticBag) {
    for stmt in &module.statements {
        let (name_span, name) = match &stmt.kind {
            IrStmtKind::Function(f) => match f.name {
                Some(n) => (f.span, n),
                None => continue,
            },
            IrStmtKind::Class(c) => (c.span, c.name),
            IrStmtKind::Interface(i) => (i.span, i.name),
            IrStmtKind::Enum(e) => (e.span, e.name),
            IrStmtKind::TypeAlias(a) => (a.span, a.name),
            _ => continue,
        };
        let escaped = escape(interner.resolve(name));
        if escaped == container_class_name {
            report(name_span, container_class_name, file, source, bag);
        }
    }
}

fn report(span: Span, container_class_name: &str, file: &str, source: &str, bag: &mut DiagnosticBag) {
    let line = struxc_diagnostic::line_of_offset(source, span.start);
    bag.push(Diagnostic::error(
        ErrorCode::Tsn9001,
        file.to_string(),
        line,
        span,
        format!("declaration name collides with the module's container class '{container_class_name}' after keyword escaping"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::ir::{IrFunctionDecl, IrStmt};

    #[test]
    fn colliding_function_name_is_reported() {
        let mut interner = StringInterner::new();
        let name = interner.intern("Program");
        let module = IrModule {
            statements: vec![IrStmt {
                kind: IrStmtKind::Function(Box::new(IrFunctionDecl {
                    name: Some(name),
                    generics: vec![],
                    params: vec![],
                    return_type: None,
                    body: vec![],
                    is_async: false,
                    is_generator: false,
                    is_bidirectional_generator: false,
                    is_exported: true,
                    span: Span::DUMMY,
                })),
                span: Span::DUMMY,
            }],
        };
        let mut bag = DiagnosticBag::new();
        check(&module, "Program", &interner, "a.ts", "", &mut bag);
        assert!(bag.has_errors());
    }

    #[test]
    fn non_colliding_name_passes() {
        let mut interner = StringInterner::new();
        let name = interner.intern("helper");
        let module = IrModule {
            statements: vec![IrStmt {
                kind: IrStmtKind::Function(Box::new(IrFunctionDecl {
                    name: Some(name),
                    generics: vec![],
                    params: vec![],
                    return_type: None,
                    body: vec![],
                    is_async: false,
                    is_generator: false,
                    is_bidirectional_generator: false,
                    is_exported: true,
                    span: Span::DUMMY,
                })),
                span: Span::DUMMY,
            }],
        };
        let mut bag = DiagnosticBag::new();
        check(&module, "Program", &interner, "a.ts", "", &mut bag);
        assert!(!bag.has_errors());
    }
}
