//! Single-shot recursive-descent parser over [`struxc_lexer`] tokens,
//! producing the [`struxc_ir::ast`] surface.
//!
//! Unlike the incremental parser this crate is modeled after, there is no
//! reparse-on-edit story here: one source file goes in, one
//! [`struxc_ir::ast::SourceModule`] comes out, once, per compilation.

pub mod cursor;
pub mod error;
pub mod grammar;
pub mod parser;

pub use cursor::Cursor;
pub use error::ParseError;
pub use parser::Parser;

use struxc_ir::ast::{SourceModule, StmtKind};
use struxc_ir::StringInterner;

/// Lex and parse one source file into a [`SourceModule`].
pub fn parse_module(source: &str, interner: &mut StringInterner) -> Result<SourceModule, ParseError> {
    let tokens = struxc_lexer::lex(source, interner);
    let mut parser = Parser::new(&tokens, interner);
    let mut module = SourceModule::default();
    while !parser.cursor.is_at_end() {
        let stmt = parser.parse_statement()?;
        match stmt.kind {
            StmtKind::Import(decl) => module.imports.push(decl),
            other => module.statements.push(struxc_ir::ast::Stmt { span: stmt.span, kind: other }),
        }
    }
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::ast::StmtKind;

    #[test]
    fn parses_let_binding_with_binary_expr() {
        let mut interner = StringInterner::new();
        let module = parse_module("let x = 1 + 2 * 3;", &mut interner).expect("parses");
        assert_eq!(module.statements.len(), 1);
        assert!(matches!(module.statements[0].kind, StmtKind::VarDecl { .. }));
    }

    #[test]
    fn parses_function_declaration() {
        let mut interner = StringInterner::new();
        let source = "function add(a: number, b: number): number { return a + b; }";
        let module = parse_module(source, &mut interner).expect("parses");
        assert_eq!(module.statements.len(), 1);
        match &module.statements[0].kind {
            StmtKind::Function(decl) => {
                assert_eq!(decl.params.len(), 2);
                assert!(decl.return_type.is_some());
            }
            other => panic!("expected a function declaration, got {other:?}"),
        }
    }

    #[test]
    fn parses_class_with_constructor_and_method() {
        let mut interner = StringInterner::new();
        let source = "class Point {\n\
                       private x: number;\n\
                       constructor(x: number) { this.x = x; }\n\
                       get magnitude(): number { return this.x; }\n\
                       }";
        let module = parse_module(source, &mut interner).expect("parses");
        match &module.statements[0].kind {
            StmtKind::Class(decl) => assert_eq!(decl.members.len(), 3),
            other => panic!("expected a class declaration, got {other:?}"),
        }
    }

    #[test]
    fn parses_import_and_export() {
        let mut interner = StringInterner::new();
        let source = "import { Widget } from \"./widget\";\nexport class Gadget {}\n";
        let module = parse_module(source, &mut interner).expect("parses");
        assert_eq!(module.imports.len(), 1);
        assert_eq!(module.statements.len(), 1);
        assert!(matches!(module.statements[0].kind, StmtKind::Export(_)));
    }

    #[test]
    fn parses_arrow_function_and_conditional() {
        let mut interner = StringInterner::new();
        let module = parse_module("const f = (a, b) => a > b ? a : b;", &mut interner).expect("parses");
        assert_eq!(module.statements.len(), 1);
    }

    #[test]
    fn parses_for_of_and_template_literal() {
        let mut interner = StringInterner::new();
        let source = "for (const item of items) { const s = `value: ${item}`; }";
        let module = parse_module(source, &mut interner).expect("parses");
        assert_eq!(module.statements.len(), 1);
        assert!(matches!(module.statements[0].kind, StmtKind::ForOf { .. }));
    }

    #[test]
    fn parses_interface_and_enum() {
        let mut interner = StringInterner::new();
        let source = "interface Shape { area(): number; }\nenum Color { Red, Green, Blue }\n";
        let module = parse_module(source, &mut interner).expect("parses");
        assert_eq!(module.statements.len(), 2);
    }

    #[test]
    fn reports_parse_error_on_malformed_input() {
        let mut interner = StringInterner::new();
        assert!(parse_module("let x = ;", &mut interner).is_err());
    }
}
