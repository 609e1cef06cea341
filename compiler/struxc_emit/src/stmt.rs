//! Statement Emitter (spec §4.7): `IrStmt` -> [`BStmt`].
//!
//! Local function declarations lower to a delegate-typed local (C# has no
//! anonymous local-class equivalent for the rest, and the spec's top-level
//! hoisting already pulls module-level `class`/`interface`/`enum`/type-alias
//! declarations out before a statement list ever reaches this emitter, so a
//! truly local one is a source-language construct this target can't express
//! directly and is reported rather than silently dropped).

use struxc_ir::ast::VarKind;
use struxc_ir::ir::{IrCatchClause, IrStmt, IrStmtKind, IrSwitchCase};
use struxc_diagnostic::ErrorCode;

use crate::backend::*;
use crate::context::EmitContext;
use crate::expr::emit_expr;
use crate::ty::emit_type;

#[must_use]
pub fn emit_block(stmts: &[IrStmt], ctx: &mut EmitContext<'_>) -> Vec<BStmt> {
    stmts.iter().map(|s| emit_stmt(s, ctx)).collect()
}

#[must_use]
pub fn emit_stmt(stmt: &IrStmt, ctx: &mut EmitContext<'_>) -> BStmt {
    match &stmt.kind {
        IrStmtKind::VarDecl { kind, pattern, ty, init } => emit_var_decl(*kind, pattern, ty, init, ctx),
        IrStmtKind::ExprStmt(e) => BStmt::Expr(emit_expr(e, ctx)),
        IrStmtKind::Block(stmts) => BStmt::Block(emit_block(stmts, ctx)),
        IrStmtKind::If { test, consequent, alternate } => BStmt::If {
            test: emit_expr(test, ctx),
            consequent: Box::new(emit_stmt(consequent, ctx)),
            alternate: alternate.as_ref().map(|a| Box::new(emit_stmt(a, ctx))),
        },
        IrStmtKind::While { test, body } => BStmt::While { test: emit_expr(test, ctx), body: Box::new(emit_stmt(body, ctx)) },
        IrStmtKind::DoWhile { body, test } => BStmt::DoWhile { body: Box::new(emit_stmt(body, ctx)), test: emit_expr(test, ctx) },
        IrStmtKind::For { init, test, update, body, counter_proven_int32 } => BStmt::For {
            init: init.as_ref().map(|s| Box::new(emit_stmt(s, ctx))),
            test: test.as_ref().map(|e| emit_expr(e, ctx)),
            update: update.as_ref().map(|e| emit_expr(e, ctx)),
            body: Box::new(emit_stmt(body, ctx)),
            counter_int32: *counter_proven_int32,
        },
        IrStmtKind::ForOf { pattern, iterable, body, is_await } => BStmt::ForEach {
            element_name: pattern.as_identifier().map(|n| ctx.resolve(n).to_string()).unwrap_or_else(|| ctx.fresh_temp()),
            iterable: emit_expr(iterable, ctx),
            body: Box::new(emit_stmt(body, ctx)),
            is_await: *is_await,
        },
        IrStmtKind::ForIn { pattern, object, body } => BStmt::ForEach {
            element_name: pattern.as_identifier().map(|n| ctx.resolve(n).to_string()).unwrap_or_else(|| ctx.fresh_temp()),
            iterable: BExpr::Member { object: Box::new(emit_expr(object, ctx)), name: "Keys".to_string(), null_conditional: false },
            body: Box::new(emit_stmt(body, ctx)),
            is_await: false,
        },
        IrStmtKind::Switch { discriminant, cases } => BStmt::Switch { discriminant: emit_expr(discriminant, ctx), cases: cases.iter().map(|c| emit_case(c, ctx)).collect() },
        IrStmtKind::Try { block, handler, finalizer } => BStmt::Try {
            block: emit_block(block, ctx),
            handler: handler.as_ref().map(|h| emit_catch(h, ctx)),
            finalizer: finalizer.as_ref().map(|f| emit_block(f, ctx)),
        },
        IrStmtKind::Throw(e) => BStmt::Throw(Some(emit_expr(e, ctx))),
        IrStmtKind::Return(e) => BStmt::Return(e.as_ref().map(|e| emit_expr(e, ctx))),
        IrStmtKind::Break(label) => BStmt::Break(label.map(|n| ctx.resolve(n).to_string())),
        IrStmtKind::Continue(label) => BStmt::Continue(label.map(|n| ctx.resolve(n).to_string())),
        IrStmtKind::Labeled { label, body } => BStmt::Labeled { label: ctx.resolve(*label).to_string(), body: Box::new(emit_stmt(body, ctx)) },
        IrStmtKind::Empty => BStmt::Empty,
        IrStmtKind::Function(decl) => emit_local_function(decl, ctx),
        IrStmtKind::Class(_) | IrStmtKind::Interface(_) | IrStmtKind::Enum(_) | IrStmtKind::TypeAlias(_) => {
            ctx.report(ErrorCode::Tsn7414, stmt.span, "local type declarations are not supported in statement position");
            BStmt::Empty
        }
    }
}

fn emit_var_decl(kind: VarKind, pattern: &struxc_ir::ast::BindingPattern, ty: &Option<struxc_ir::ir::IrType>, init: &Option<struxc_ir::ir::IrExpr>, ctx: &mut EmitContext<'_>) -> BStmt {
    let _ = kind;
    let name = pattern.as_identifier().map(|n| ctx.resolve(n).to_string()).unwrap_or_else(|| ctx.fresh_temp());
    let bty = ty.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::simple("var"));
    BStmt::Local(BVarDecl { ty: bty, name, init: init.as_ref().map(|e| emit_expr(e, ctx)) })
}

fn emit_case(case: &IrSwitchCase, ctx: &mut EmitContext<'_>) -> BSwitchCase {
    BSwitchCase { test: case.test.as_ref().map(|e| emit_expr(e, ctx)), body: emit_block(&case.body, ctx) }
}

fn emit_catch(h: &IrCatchClause, ctx: &mut EmitContext<'_>) -> BCatchClause {
    BCatchClause {
        ty: Some(BType::simple("global::System.Exception")),
        name: h.param.as_ref().and_then(|p| p.as_identifier()).map(|n| ctx.resolve(n).to_string()),
        body: emit_block(&h.body, ctx),
    }
}

/// Named local function declarations lower to `Func<...>`/`Action<...>`
/// locals assigned an equivalent lambda, matching how the Expression
/// Emitter already lowers anonymous function expressions.
fn emit_local_function(decl: &struxc_ir::ir::IrFunctionDecl, ctx: &mut EmitContext<'_>) -> BStmt {
    let name = decl.name.map(|n| ctx.resolve(n).to_string()).unwrap_or_else(|| ctx.fresh_temp());
    let params: Vec<String> = decl.params.iter().filter_map(|p| p.pattern.as_identifier().map(|n| ctx.resolve(n).to_string())).collect();
    let param_types: Vec<BType> = decl.params.iter().map(|p| p.ty.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("object"))).collect();
    let ret_type = decl.return_type.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("void"));
    let fn_ty = BType::Func { params: param_types, ret: Box::new(ret_type) };
    let lambda = BExpr::Lambda { params, body: LambdaBody::Block(emit_block(&decl.body, ctx)), is_async: decl.is_async };
    BStmt::Local(BVarDecl { ty: fn_ty, name, init: Some(lambda) })
}
