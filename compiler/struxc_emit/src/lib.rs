//! The Emitter (spec §4.7): lowers one module's built IR into a single
//! textual compilation unit for the target runtime.
//!
//! Pipeline: `struxc_build::passes::ModuleBuildOutput` -> (this crate's)
//! Backend AST -> Printer -> `String`. Each source construct that needs a
//! companion declaration (a structural adapter, a monomorphized
//! specialization, a generator exchange/wrapper pair) registers it on the
//! [`EmitContext`] while the module's own statements are being converted;
//! [`assemble_module`] collects those alongside the module's own top-level
//! declarations into one [`backend::CompilationUnit`] per the spec's
//! assembly rule.

pub mod adapter;
pub mod backend;
pub mod context;
pub mod expr;
pub mod generator;
pub mod imports;
pub mod member;
pub mod mono;
pub mod printer;
pub mod stmt;
pub mod ty;

use struxc_diagnostic::DiagnosticBag;
use struxc_ir::ir::{IrModule, IrStmtKind};
use struxc_ir::StringInterner;

use backend::{BMember, BTypeDecl, BVisibility, CompilationUnit};
use context::EmitContext;

/// Assembles one module's compilation unit (spec §4.7 "Assembly rule"):
/// namespace-level type declarations first (classes/interfaces/enums, then
/// any adapters/specializations/exchange classes synthesized while
/// converting them), followed by the static container class wrapping
/// top-level functions, vars and executable top-level code.
#[must_use]
pub fn assemble_module(module: &IrModule, namespace: &str, container_name: &str, interner: &StringInterner, bag: &mut DiagnosticBag, file: &str, source: &str) -> CompilationUnit {
    let mut ctx = EmitContext::new(interner, bag, file, source);
    let mut types = Vec::new();
    let mut top_level_members = Vec::new();
    let mut top_level_code = Vec::new();

    for stmt in &module.statements {
        match &stmt.kind {
            IrStmtKind::Class(decl) => types.push(member::emit_class(decl, &mut ctx)),
            IrStmtKind::Interface(decl) => types.push(member::emit_interface(decl, &mut ctx)),
            IrStmtKind::Enum(decl) => types.push(member::emit_enum(decl, &mut ctx)),
            IrStmtKind::TypeAlias(decl) => {
                if let Some(companion) = imports::alias_companion(decl, &mut ctx) {
                    types.push(companion);
                }
            }
            IrStmtKind::Function(decl) => top_level_members.push(member::emit_top_level_function(decl, &mut ctx)),
            IrStmtKind::VarDecl { pattern, ty, init, .. } => {
                let name = pattern.as_identifier().map(|n| ctx.resolve(n).to_string()).unwrap_or_else(|| ctx.fresh_temp());
                let bty = ty.as_ref().map(|t| ty::emit_type(t, &ctx)).unwrap_or(backend::BType::Keyword("object"));
                top_level_members.push(BMember::Field {
                    name,
                    ty: bty,
                    init: init.as_ref().map(|e| expr::emit_expr(e, &mut ctx)),
                    visibility: BVisibility::Internal,
                    is_static: true,
                    is_readonly: false,
                });
            }
            _ => top_level_code.push(stmt::emit_stmt(stmt, &mut ctx)),
        }
    }

    if !top_level_code.is_empty() {
        top_level_members.push(BMember::Method {
            name: "__TopLevel".to_string(),
            generics: Vec::new(),
            params: Vec::new(),
            return_type: backend::BType::Keyword("void"),
            body: Some(top_level_code),
            visibility: BVisibility::Internal,
            is_static: true,
            is_override: false,
            is_abstract: false,
            is_async: false,
        });
    }

    top_level_members.extend(ctx.take_extra_members());

    let container_taken = types.iter().any(|t| t.name == container_name);
    let final_container_name = if container_taken { format!("{container_name}__Module") } else { container_name.to_string() };
    let mut container = BTypeDecl::class(final_container_name);
    container.is_static = true;
    container.members = top_level_members;
    types.push(container);

    types.splice(0..0, ctx.take_extra_types());

    CompilationUnit { usings: imports::framework_usings(), namespace: namespace.to_string(), types }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::ir::{IrFunctionDecl, IrStmt, PrimitiveType, IrType};
    use struxc_ir::{Span, StringInterner};

    fn generator_function(name: struxc_ir::Name, return_type: Option<IrType>, is_bidirectional: bool) -> IrStmt {
        IrStmt {
            kind: IrStmtKind::Function(Box::new(IrFunctionDecl {
                name: Some(name),
                generics: vec![],
                params: vec![],
                return_type,
                body: vec![],
                is_async: false,
                is_generator: true,
                is_bidirectional_generator: is_bidirectional,
                is_exported: true,
                span: Span::DUMMY,
            })),
            span: Span::DUMMY,
        }
    }

    #[test]
    fn plain_generator_gets_an_exchange_companion() {
        let mut interner = StringInterner::new();
        let name = interner.intern("values");
        let module = IrModule { statements: vec![generator_function(name, None, false)] };
        let mut bag = DiagnosticBag::new();
        let unit = assemble_module(&module, "App", "Program", &interner, &mut bag, "a.ts", "");
        assert!(unit.types.iter().any(|t| t.name == "values_exchange"));
        assert!(!unit.types.iter().any(|t| t.name == "values_wrapper"));
    }

    #[test]
    fn bidirectional_generator_gets_exchange_and_wrapper_companions() {
        let mut interner = StringInterner::new();
        let name = interner.intern("pump");
        let generator_name = interner.intern("Generator");
        let return_type = IrType::Reference {
            name: generator_name,
            type_args: vec![IrType::Primitive(PrimitiveType::String), IrType::Void, IrType::Primitive(PrimitiveType::Boolean)],
            clr_binding: None,
            structural_members: None,
        };
        let module = IrModule { statements: vec![generator_function(name, Some(return_type), true)] };
        let mut bag = DiagnosticBag::new();
        let unit = assemble_module(&module, "App", "Program", &interner, &mut bag, "a.ts", "");
        assert!(unit.types.iter().any(|t| t.name == "pump_exchange"));
        assert!(unit.types.iter().any(|t| t.name == "pump_wrapper"));
    }
}
