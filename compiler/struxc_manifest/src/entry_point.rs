//! Entry-point wrapper (spec §4.8): a module exporting `main()` runs it
//! directly; a module with top-level executable statements but no `main()`
//! runs the Emitter's synthesized `__TopLevel()` instead. Having both is a
//! fatal misconfiguration since the two startup orders can't be reconciled
//! deterministically.

use struxc_ir::ir::{IrModule, IrStmtKind};
use struxc_ir::StringInterner;

use crate::error::ManifestError;

/// True if any top-level statement in `module` would be routed into the
/// Emitter's `__TopLevel()` container method rather than becoming a type,
/// function, or field declaration — mirrors `struxc_emit::assemble_module`'s
/// routing rule, since this check must agree with what the Emitter actually
/// produced.
fn has_top_level_code(module: &IrModule) -> bool {
    module.statements.iter().any(|stmt| {
        !matches!(
            stmt.kind,
            IrStmtKind::Class(_)
                | IrStmtKind::Interface(_)
                | IrStmtKind::Enum(_)
                | IrStmtKind::TypeAlias(_)
                | IrStmtKind::Function(_)
                | IrStmtKind::VarDecl { .. }
        )
    })
}

fn exports_main(module: &IrModule, interner: &StringInterner) -> bool {
    module.statements.iter().any(|stmt| match &stmt.kind {
        IrStmtKind::Function(f) => f.is_exported && f.name.is_some_and(|n| interner.resolve(n) == "main"),
        _ => false,
    })
}

/// One of two mutually exclusive startup strategies for the entry module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStrategy {
    CallMain,
    CallTopLevel,
    /// Neither `main()` nor top-level code exists; the program does nothing.
    Empty,
}

pub fn resolve_entry_strategy(module: &IrModule, interner: &StringInterner, module_path: &str) -> Result<EntryStrategy, ManifestError> {
    let has_main = exports_main(module, interner);
    let has_top_level = has_top_level_code(module);
    match (has_main, has_top_level) {
        (true, true) => Err(ManifestError::EntryPointConflict { module: module_path.to_string() }),
        (true, false) => Ok(EntryStrategy::CallMain),
        (false, true) => Ok(EntryStrategy::CallTopLevel),
        (false, false) => Ok(EntryStrategy::Empty),
    }
}

/// Builds the `Program` bootstrap compilation unit: a single static `Main`
/// method calling into the entry module's container class.
#[must_use]
pub fn build_program_unit(namespace: &str, entry_container: &str, strategy: EntryStrategy) -> struxc_emit::backend::CompilationUnit {
    use struxc_emit::backend::*;

    let target_method = match strategy {
        EntryStrategy::CallMain => "main",
        EntryStrategy::CallTopLevel => "__TopLevel",
        EntryStrategy::Empty => return empty_program_unit(namespace),
    };

    let call = BStmt::Expr(BExpr::Call {
        callee: Box::new(BExpr::Member {
            object: Box::new(BExpr::Identifier(format!("global::{namespace}.{entry_container}"))),
            name: target_method.to_string(),
            null_conditional: false,
        }),
        args: Vec::new(),
        null_conditional: false,
    });

    let mut program = BTypeDecl::class("Program");
    program.is_static = true;
    program.members.push(BMember::Method {
        name: "Main".to_string(),
        generics: Vec::new(),
        params: vec![BParam { ty: BType::Array(Box::new(BType::Keyword("string"))), name: "args".to_string(), mode: BArgMode::Value, default: None, is_extension_this: false }],
        return_type: BType::Keyword("void"),
        body: Some(vec![call]),
        visibility: BVisibility::Public,
        is_static: true,
        is_override: false,
        is_abstract: false,
        is_async: false,
    });

    CompilationUnit { usings: Vec::new(), namespace: namespace.to_string(), types: vec![program] }
}

fn empty_program_unit(namespace: &str) -> struxc_emit::backend::CompilationUnit {
    use struxc_emit::backend::*;
    let mut program = BTypeDecl::class("Program");
    program.is_static = true;
    program.members.push(BMember::Method {
        name: "Main".to_string(),
        generics: Vec::new(),
        params: vec![BParam { ty: BType::Array(Box::new(BType::Keyword("string"))), name: "args".to_string(), mode: BArgMode::Value, default: None, is_extension_this: false }],
        return_type: BType::Keyword("void"),
        body: Some(Vec::new()),
        visibility: BVisibility::Public,
        is_static: true,
        is_override: false,
        is_abstract: false,
        is_async: false,
    });
    CompilationUnit { usings: Vec::new(), namespace: namespace.to_string(), types: vec![program] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::ir::{IrFunctionDecl, IrStmt, IrStmtKind};
    use struxc_ir::Span;

    fn fn_stmt(name: Option<&str>, interner: &mut StringInterner, is_exported: bool) -> IrStmt {
        let name = name.map(|n| interner.intern(n));
        IrStmt {
            kind: IrStmtKind::Function(Box::new(IrFunctionDecl {
                name,
                generics: Vec::new(),
                params: Vec::new(),
                return_type: None,
                body: Vec::new(),
                is_async: false,
                is_generator: false,
                is_bidirectional_generator: false,
                is_exported,
                span: Span::DUMMY,
            })),
            span: Span::DUMMY,
        }
    }

    #[test]
    fn main_and_top_level_statements_conflict() {
        let mut interner = StringInterner::new();
        let main_fn = fn_stmt(Some("main"), &mut interner, true);
        let top_level = IrStmt { kind: IrStmtKind::Empty, span: Span::DUMMY };
        let module = IrModule { statements: vec![main_fn, top_level] };
        let result = resolve_entry_strategy(&module, &interner, "entry.ts");
        assert!(matches!(result, Err(ManifestError::EntryPointConflict { .. })));
    }

    #[test]
    fn main_alone_resolves_to_call_main() {
        let mut interner = StringInterner::new();
        let module = IrModule { statements: vec![fn_stmt(Some("main"), &mut interner, true)] };
        let strategy = resolve_entry_strategy(&module, &interner, "entry.ts").unwrap();
        assert_eq!(strategy, EntryStrategy::CallMain);
    }

    #[test]
    fn top_level_alone_resolves_to_call_top_level() {
        let interner = StringInterner::new();
        let module = IrModule { statements: vec![IrStmt { kind: IrStmtKind::Empty, span: Span::DUMMY }] };
        let strategy = resolve_entry_strategy(&module, &interner, "entry.ts").unwrap();
        assert_eq!(strategy, EntryStrategy::CallTopLevel);
    }
}
