//! The soundness gate (spec §3 invariant: "no `IrType::Any` reaches
//! emission"). Walks a built `IrModule` looking for residual `Any` nodes and
//! raises `TSN7414` with a precise location for each one. Also catches two
//! narrower cases the conversion passes leave for here rather than trying
//! to prove inline: an initializer/argument literal that doesn't structurally
//! fit its declared/parameter type (`TSN7415`), and a ternary whose branches
//! are a mixed int/double literal pair, which the target widens silently
//! to double (`TSN5110`).

use struxc_ir::ir::{IrExpr, IrExprKind, IrLiteral, IrObjectProp, IrType, Member, PrimitiveType};
use struxc_ir::ir::{IrModule, IrStmt, IrStmtKind};
use struxc_ir::Span;
use struxc_types::is_assignable;

use crate::context::BuildContext;

pub fn check_module(module: &IrModule, ctx: &mut BuildContext<'_>) {
    for stmt in &module.statements {
        check_stmt(stmt, ctx);
    }
}

fn report(ty_span: Span, ctx: &mut BuildContext<'_>) {
    let line = ctx.line_of(ty_span);
    ctx.bag.push(struxc_diagnostic::Diagnostic::error(
        struxc_diagnostic::ErrorCode::Tsn7414,
        ctx.file.to_string(),
        line,
        ty_span,
        "type could not be resolved to anything concrete".to_string(),
    ));
}

fn report_not_assignable(span: Span, ctx: &mut BuildContext<'_>) {
    let line = ctx.line_of(span);
    ctx.bag.push(struxc_diagnostic::Diagnostic::error(
        struxc_diagnostic::ErrorCode::Tsn7415,
        ctx.file.to_string(),
        line,
        span,
        "value is not assignable to the declared type".to_string(),
    ));
}

fn report_mixed_numeric_ternary(span: Span, ctx: &mut BuildContext<'_>) {
    let line = ctx.line_of(span);
    ctx.bag.push(struxc_diagnostic::Diagnostic::error(
        struxc_diagnostic::ErrorCode::Tsn5110,
        ctx.file.to_string(),
        line,
        span,
        "mixed int/double branches widen the ternary's result to double".to_string(),
    ));
}

/// A minimal structural type for a literal expression, good enough to drive
/// assignability at the handful of sites (`VarDecl` initializers, call
/// arguments) where the initializer's shape is visible without a full
/// expression-level type inferencer. Anything beyond a literal, object
/// literal of literals, or a bare identifier (left untyped; the Binding
/// Layer would need to be consulted for its declared type) returns `None`
/// rather than guessing.
fn infer_literal_type(expr: &IrExpr) -> Option<IrType> {
    match &expr.kind {
        IrExprKind::Literal(IrLiteral::String(_)) => Some(IrType::Primitive(PrimitiveType::String)),
        IrExprKind::Literal(IrLiteral::Integer(_) | IrLiteral::Number(_)) => {
            Some(IrType::Primitive(PrimitiveType::Number { intent: None }))
        }
        IrExprKind::Literal(IrLiteral::Boolean(_)) => Some(IrType::Primitive(PrimitiveType::Boolean)),
        IrExprKind::Object { props, .. } => {
            let mut members = Vec::with_capacity(props.len());
            for prop in props {
                let IrObjectProp::KeyValue { key, value } = prop else { return None };
                members.push(Member { name: *key, ty: infer_literal_type(value)?, optional: false, readonly: false });
            }
            Some(IrType::Object { members })
        }
        _ => None,
    }
}

fn check_assignable_init(declared_ty: &IrType, init: &IrExpr, ctx: &mut BuildContext<'_>) {
    if let Some(inferred) = infer_literal_type(init) {
        if !is_assignable(&inferred, declared_ty, ctx.types) {
            report_not_assignable(init.span, ctx);
        }
    }
}

fn check_ternary_widening(consequent: &IrExpr, alternate: &IrExpr, span: Span, ctx: &mut BuildContext<'_>) {
    let is_int_literal = |e: &IrExpr| matches!(e.kind, IrExprKind::Literal(IrLiteral::Integer(_)));
    let is_double_literal = |e: &IrExpr| matches!(e.kind, IrExprKind::Literal(IrLiteral::Number(_)));
    let mixed = (is_int_literal(consequent) && is_double_literal(alternate))
        || (is_double_literal(consequent) && is_int_literal(alternate));
    if mixed {
        report_mixed_numeric_ternary(span, ctx);
    }
}

fn check_type_at(ty: &Option<IrType>, span: Span, ctx: &mut BuildContext<'_>) {
    if matches!(ty, Some(IrType::Any)) {
        report(span, ctx);
    }
}

fn check_stmt(stmt: &IrStmt, ctx: &mut BuildContext<'_>) {
    match &stmt.kind {
        IrStmtKind::VarDecl { ty, init, .. } => {
            check_type_at(ty, stmt.span, ctx);
            if let Some(e) = init {
                check_expr(e, ctx);
                if let Some(declared_ty) = ty {
                    check_assignable_init(declared_ty, e, ctx);
                }
            }
        }
        IrStmtKind::Function(f) => {
            check_type_at(&f.return_type, f.span, ctx);
            for p in &f.params {
                check_type_at(&p.ty, stmt.span, ctx);
            }
            for s in &f.body {
                check_stmt(s, ctx);
            }
        }
        IrStmtKind::Class(c) => {
            for m in &c.members {
                check_class_member(m, ctx);
            }
        }
        IrStmtKind::Interface(i) => {
            for m in &i.members {
                if matches!(m.ty, IrType::Any) {
                    report(m.span, ctx);
                }
            }
        }
        IrStmtKind::Enum(e) => {
            for m in &e.members {
                if let Some(init) = &m.init {
                    check_expr(init, ctx);
                }
            }
        }
        IrStmtKind::TypeAlias(a) => {
            if matches!(a.ty, IrType::Any) {
                report(a.span, ctx);
            }
        }
        IrStmtKind::ExprStmt(e) => check_expr(e, ctx),
        IrStmtKind::Block(stmts) => stmts.iter().for_each(|s| check_stmt(s, ctx)),
        IrStmtKind::If { test, consequent, alternate } => {
            check_expr(test, ctx);
            check_stmt(consequent, ctx);
            if let Some(alt) = alternate {
                check_stmt(alt, ctx);
            }
        }
        IrStmtKind::While { test, body } | IrStmtKind::DoWhile { body, test } => {
            check_expr(test, ctx);
            check_stmt(body, ctx);
        }
        IrStmtKind::For { init, test, update, body, .. } => {
            if let Some(init) = init {
                check_stmt(init, ctx);
            }
            if let Some(test) = test {
                check_expr(test, ctx);
            }
            if let Some(update) = update {
                check_expr(update, ctx);
            }
            check_stmt(body, ctx);
        }
        IrStmtKind::ForOf { iterable, body, .. } => {
            check_expr(iterable, ctx);
            check_stmt(body, ctx);
        }
        IrStmtKind::ForIn { object, body, .. } => {
            check_expr(object, ctx);
            check_stmt(body, ctx);
        }
        IrStmtKind::Switch { discriminant, cases } => {
            check_expr(discriminant, ctx);
            for case in cases {
                if let Some(test) = &case.test {
                    check_expr(test, ctx);
                }
                case.body.iter().for_each(|s| check_stmt(s, ctx));
            }
        }
        IrStmtKind::Try { block, handler, finalizer } => {
            block.iter().for_each(|s| check_stmt(s, ctx));
            if let Some(h) = handler {
                h.body.iter().for_each(|s| check_stmt(s, ctx));
            }
            if let Some(f) = finalizer {
                f.iter().for_each(|s| check_stmt(s, ctx));
            }
        }
        IrStmtKind::Throw(e) => check_expr(e, ctx),
        IrStmtKind::Return(e) => {
            if let Some(e) = e {
                check_expr(e, ctx);
            }
        }
        IrStmtKind::Labeled { body, .. } => check_stmt(body, ctx),
        IrStmtKind::Break(_) | IrStmtKind::Continue(_) | IrStmtKind::Empty => {}
    }
}

fn check_class_member(member: &struxc_ir::ir::IrClassMember, ctx: &mut BuildContext<'_>) {
    use struxc_ir::ir::IrClassMember;
    match member {
        IrClassMember::Field { ty, init, span, .. } => {
            check_type_at(ty, *span, ctx);
            if let Some(e) = init {
                check_expr(e, ctx);
            }
        }
        IrClassMember::Method { return_type, params, body, span, .. } => {
            check_type_at(return_type, *span, ctx);
            for p in params {
                check_type_at(&p.ty, *span, ctx);
            }
            if let Some(body) = body {
                body.iter().for_each(|s| check_stmt(s, ctx));
            }
        }
        IrClassMember::Constructor { params, body, span, .. } => {
            for p in params {
                check_type_at(&p.ty, *span, ctx);
            }
            body.iter().for_each(|s| check_stmt(s, ctx));
        }
        IrClassMember::Property { ty, getter, setter, span, .. } => {
            check_type_at(ty, *span, ctx);
            if let Some(g) = getter {
                g.iter().for_each(|s| check_stmt(s, ctx));
            }
            if let Some((_, body)) = setter {
                body.iter().for_each(|s| check_stmt(s, ctx));
            }
        }
    }
}

fn check_expr(expr: &IrExpr, ctx: &mut BuildContext<'_>) {
    if matches!(expr.inferred_type, Some(IrType::Any)) {
        report(expr.span, ctx);
    }
    match &expr.kind {
        IrExprKind::Literal(_) | IrExprKind::Identifier { .. } => {}
        IrExprKind::TemplateLiteral { exprs, .. } => exprs.iter().for_each(|e| check_expr(e, ctx)),
        IrExprKind::Array { elements, .. } => {
            for el in elements {
                match el {
                    struxc_ir::ir::IrArrayElement::Item(e) | struxc_ir::ir::IrArrayElement::Spread(e) => check_expr(e, ctx),
                    struxc_ir::ir::IrArrayElement::Hole => {}
                }
            }
        }
        IrExprKind::Object { props, .. } => {
            for prop in props {
                match prop {
                    struxc_ir::ir::IrObjectProp::KeyValue { value, .. } => check_expr(value, ctx),
                    struxc_ir::ir::IrObjectProp::Spread(e) => check_expr(e, ctx),
                }
            }
        }
        IrExprKind::Member { object, .. } => check_expr(object, ctx),
        IrExprKind::Index { object, index, .. } => {
            check_expr(object, ctx);
            check_expr(index, ctx);
        }
        IrExprKind::Call { callee, args, info, .. } | IrExprKind::New { callee, args, info, .. } => {
            check_expr(callee, ctx);
            for (i, a) in args.iter().enumerate() {
                check_expr(&a.expr, ctx);
                if let Some(param_ty) = info.parameter_types.get(i) {
                    check_assignable_init(param_ty, &a.expr, ctx);
                }
            }
        }
        IrExprKind::Assign { target, value, .. } => {
            check_expr(target, ctx);
            check_expr(value, ctx);
        }
        IrExprKind::Binary { left, right, .. } | IrExprKind::Logical { left, right, .. } => {
            check_expr(left, ctx);
            check_expr(right, ctx);
        }
        IrExprKind::Unary { operand, .. } | IrExprKind::Update { operand, .. } | IrExprKind::Spread { expr: operand } => {
            check_expr(operand, ctx);
        }
        IrExprKind::Conditional { test, consequent, alternate } => {
            check_expr(test, ctx);
            check_expr(consequent, ctx);
            check_expr(alternate, ctx);
            check_ternary_widening(consequent, alternate, expr.span, ctx);
        }
        IrExprKind::Arrow { body, .. } => match body {
            struxc_ir::ir::IrArrowBody::Expr(e) => check_expr(e, ctx),
            struxc_ir::ir::IrArrowBody::Block(stmts) => stmts.iter().for_each(|s| check_stmt(s, ctx)),
        },
        IrExprKind::FunctionExpr { body, .. } => body.iter().for_each(|s| check_stmt(s, ctx)),
        IrExprKind::TypeOf { expr } | IrExprKind::Await { expr } => check_expr(expr, ctx),
        IrExprKind::InstanceOf { expr, .. } => check_expr(expr, ctx),
        IrExprKind::In { property, object } => {
            check_expr(property, ctx);
            check_expr(object, ctx);
        }
        IrExprKind::Yield { expr, .. } => {
            if let Some(e) = expr {
                check_expr(e, ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_binding::{BindingLayer, ImportBindings};
    use struxc_catalog::Catalog;
    use struxc_diagnostic::{DiagnosticBag, ErrorCode};
    use struxc_ir::ast::{SourceModule, VarKind};
    use struxc_ir::ir::IrStmt;
    use struxc_ir::StringInterner;
    use struxc_types::{AwaitableNames, TypeRegistry};

    fn dummy(kind: IrExprKind) -> IrExpr {
        IrExpr { kind, span: Span::DUMMY, inferred_type: None }
    }

    fn fresh_binding_layer(interner: &mut StringInterner) -> BindingLayer {
        let empty = SourceModule { imports: Vec::new(), statements: Vec::new() };
        let catalog = Catalog::default();
        let imports = ImportBindings::default();
        BindingLayer::resolve_module(&empty, &catalog, &imports, interner)
    }

    #[test]
    fn string_literal_assigned_to_number_raises_tsn7415() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");
        let mut bag = DiagnosticBag::new();
        let binding = fresh_binding_layer(&mut interner);
        let catalog = Catalog::default();
        let types = TypeRegistry::new();
        let awaitable = AwaitableNames::new(&mut interner);
        let mut ctx = BuildContext::new(&binding, &catalog, &types, &mut interner, &mut bag, &awaitable, "a.ts", "");

        let stmt = IrStmt {
            kind: IrStmtKind::VarDecl {
                kind: VarKind::Const,
                pattern: struxc_ir::ast::BindingPattern::Identifier { span: Span::DUMMY, name: x, ty: None },
                ty: Some(IrType::Primitive(PrimitiveType::Number { intent: None })),
                init: Some(dummy(IrExprKind::Literal(IrLiteral::String("oops".to_string())))),
            },
            span: Span::DUMMY,
        };
        check_stmt(&stmt, &mut ctx);

        assert!(ctx.bag.iter().any(|d| d.code == ErrorCode::Tsn7415));
    }

    #[test]
    fn matching_literal_type_raises_nothing() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");
        let mut bag = DiagnosticBag::new();
        let binding = fresh_binding_layer(&mut interner);
        let catalog = Catalog::default();
        let types = TypeRegistry::new();
        let awaitable = AwaitableNames::new(&mut interner);
        let mut ctx = BuildContext::new(&binding, &catalog, &types, &mut interner, &mut bag, &awaitable, "a.ts", "");

        let stmt = IrStmt {
            kind: IrStmtKind::VarDecl {
                kind: VarKind::Const,
                pattern: struxc_ir::ast::BindingPattern::Identifier { span: Span::DUMMY, name: x, ty: None },
                ty: Some(IrType::Primitive(PrimitiveType::Number { intent: None })),
                init: Some(dummy(IrExprKind::Literal(IrLiteral::Integer(7)))),
            },
            span: Span::DUMMY,
        };
        check_stmt(&stmt, &mut ctx);

        assert!(ctx.bag.is_empty());
    }

    #[test]
    fn mixed_int_double_ternary_raises_tsn5110() {
        let mut interner = StringInterner::new();
        let mut bag = DiagnosticBag::new();
        let binding = fresh_binding_layer(&mut interner);
        let catalog = Catalog::default();
        let types = TypeRegistry::new();
        let awaitable = AwaitableNames::new(&mut interner);
        let mut ctx = BuildContext::new(&binding, &catalog, &types, &mut interner, &mut bag, &awaitable, "a.ts", "");

        let expr = dummy(IrExprKind::Conditional {
            test: Box::new(dummy(IrExprKind::Literal(IrLiteral::Boolean(true)))),
            consequent: Box::new(dummy(IrExprKind::Literal(IrLiteral::Integer(1)))),
            alternate: Box::new(dummy(IrExprKind::Literal(IrLiteral::Number(2.5)))),
        });
        check_expr(&expr, &mut ctx);

        assert!(ctx.bag.iter().any(|d| d.code == ErrorCode::Tsn5110));
    }

    #[test]
    fn same_kind_ternary_branches_raise_nothing() {
        let mut interner = StringInterner::new();
        let mut bag = DiagnosticBag::new();
        let binding = fresh_binding_layer(&mut interner);
        let catalog = Catalog::default();
        let types = TypeRegistry::new();
        let awaitable = AwaitableNames::new(&mut interner);
        let mut ctx = BuildContext::new(&binding, &catalog, &types, &mut interner, &mut bag, &awaitable, "a.ts", "");

        let expr = dummy(IrExprKind::Conditional {
            test: Box::new(dummy(IrExprKind::Literal(IrLiteral::Boolean(true)))),
            consequent: Box::new(dummy(IrExprKind::Literal(IrLiteral::Integer(1)))),
            alternate: Box::new(dummy(IrExprKind::Literal(IrLiteral::Integer(2)))),
        });
        check_expr(&expr, &mut ctx);

        assert!(ctx.bag.is_empty());
    }
}
