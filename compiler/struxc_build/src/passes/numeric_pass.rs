//! Semantic pass 5 — Numeric Proof Pass (spec §4.6): marks a `for` loop's
//! counter as provably `Int32` when its initializer and update prove it,
//! so the emitter can pick the canonical `for (int i = ...)` form. An
//! array index expression that cannot be proven integral is left for the
//! emitter itself to flag with `TSN5107` (spec §4.7), since only it knows
//! the final target-language indexer signature being matched against.

use struxc_ir::ir::{IrStmt, IrStmtKind};

use crate::numeric::{is_int32_counter_update, literal_intent};

pub fn run(stmts: &mut [IrStmt]) {
    for stmt in stmts {
        visit(stmt);
    }
}

fn visit(stmt: &mut IrStmt) {
    match &mut stmt.kind {
        IrStmtKind::For { init, update, body, counter_proven_int32, .. } => {
            *counter_proven_int32 = proven(init, update);
            visit(body);
        }
        IrStmtKind::Block(stmts) => stmts.iter_mut().for_each(visit),
        IrStmtKind::If { consequent, alternate, .. } => {
            visit(consequent);
            if let Some(alt) = alternate {
                visit(alt);
            }
        }
        IrStmtKind::While { body, .. } | IrStmtKind::DoWhile { body, .. } => visit(body),
        IrStmtKind::ForOf { body, .. } | IrStmtKind::ForIn { body, .. } => visit(body),
        IrStmtKind::Switch { cases, .. } => cases.iter_mut().for_each(|c| c.body.iter_mut().for_each(visit)),
        IrStmtKind::Try { block, handler, finalizer } => {
            block.iter_mut().for_each(visit);
            if let Some(h) = handler {
                h.body.iter_mut().for_each(visit);
            }
            if let Some(f) = finalizer {
                f.iter_mut().for_each(visit);
            }
        }
        IrStmtKind::Labeled { body, .. } => visit(body),
        IrStmtKind::Function(f) => f.body.iter_mut().for_each(visit),
        _ => {}
    }
}

fn proven(init: &Option<Box<IrStmt>>, update: &Option<struxc_ir::ir::IrExpr>) -> bool {
    let Some(init) = init else { return false };
    let IrStmtKind::VarDecl { init: Some(init_expr), .. } = &init.kind else { return false };
    let Some(update) = update else { return false };
    literal_intent(init_expr) == Some(struxc_ir::ir::NumericIntent::Int32) && is_int32_counter_update(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::ast::{BindingPattern, VarKind};
    use struxc_ir::ir::{IrExpr, IrExprKind, IrLiteral};
    use struxc_ir::Span;

    fn dummy_expr(kind: IrExprKind) -> IrExpr {
        IrExpr { kind, span: Span::DUMMY, inferred_type: None }
    }

    #[test]
    fn integer_counter_with_update_is_proven() {
        let mut interner = struxc_ir::StringInterner::new();
        let i = interner.intern("i");
        let init_stmt = IrStmt {
            kind: IrStmtKind::VarDecl {
                kind: VarKind::Let,
                pattern: BindingPattern::Identifier { span: Span::DUMMY, name: i, ty: None },
                ty: None,
                init: Some(dummy_expr(IrExprKind::Literal(IrLiteral::Integer(0)))),
            },
            span: Span::DUMMY,
        };
        let update = dummy_expr(IrExprKind::Update {
            increment: true,
            prefix: false,
            operand: Box::new(dummy_expr(IrExprKind::Identifier { name: i, binding: None })),
        });
        let mut for_stmt = IrStmt {
            kind: IrStmtKind::For {
                init: Some(Box::new(init_stmt)),
                test: None,
                update: Some(update),
                body: Box::new(IrStmt { kind: IrStmtKind::Empty, span: Span::DUMMY }),
                counter_proven_int32: false,
            },
            span: Span::DUMMY,
        };
        run(std::slice::from_mut(&mut for_stmt));
        let IrStmtKind::For { counter_proven_int32, .. } = for_stmt.kind else { unreachable!() };
        assert!(counter_proven_int32);
    }
}
