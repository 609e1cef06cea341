//! Union-narrowing pass (spec §4.4, §8 scenario 1): recognizes a guarded
//! `if` over a locally-declared union-typed variable (an `"x" in a` or
//! `typeof a === "x"` test) and rewrites member accesses on that variable
//! inside each branch to carry the branch's narrowed type, so the Emitter
//! can cast to the matching structural variant instead of the open union.
//!
//! Declared-type tracking here is a plain name -> type map per function
//! scope, not the full Binding Layer scope stack — shadowing across
//! nested blocks within one function is rare enough in practice that the
//! narrowing pass doesn't need to model it precisely; it only needs to
//! know a union-typed local's declared shape at the point a guard tests it.

use rustc_hash::FxHashMap;
use struxc_ir::ast::operators::BinaryOp;
use struxc_ir::ir::{
    IrArrayElement, IrClassMember, IrExpr, IrExprKind, IrLiteral, IrModule, IrObjectProp, IrStmt, IrStmtKind, IrType,
};
use struxc_ir::Name;
use struxc_types::{narrow_by_in, narrow_by_not_in, narrow_by_not_typeof, narrow_by_typeof};

use crate::context::BuildContext;

pub fn run(module: &mut IrModule, ctx: &mut BuildContext<'_>) {
    let mut declared: FxHashMap<Name, IrType> = FxHashMap::default();
    narrow_stmts(&mut module.statements, &mut declared, ctx);
}

fn narrow_stmts(stmts: &mut [IrStmt], declared: &mut FxHashMap<Name, IrType>, ctx: &mut BuildContext<'_>) {
    for stmt in stmts.iter_mut() {
        narrow_stmt(stmt, declared, ctx);
    }
}

enum Guard {
    In(Name, Name),
    Typeof(Name, String),
}

fn detect_guard(test: &IrExpr, interner: &mut struxc_ir::StringInterner) -> Option<Guard> {
    match &test.kind {
        IrExprKind::In { property, object } => {
            let IrExprKind::Literal(IrLiteral::String(s)) = &property.kind else { return None };
            let IrExprKind::Identifier { name, .. } = &object.kind else { return None };
            Some(Guard::In(*name, interner.intern(s)))
        }
        IrExprKind::Binary { op: BinaryOp::Eq, left, right } => {
            let (typeof_expr, lit) = match (&left.kind, &right.kind) {
                (IrExprKind::TypeOf { expr }, IrExprKind::Literal(IrLiteral::String(s))) => (expr, s),
                (IrExprKind::Literal(IrLiteral::String(s)), IrExprKind::TypeOf { expr }) => (expr, s),
                _ => return None,
            };
            let IrExprKind::Identifier { name, .. } = &typeof_expr.kind else { return None };
            Some(Guard::Typeof(*name, lit.clone()))
        }
        _ => None,
    }
}

fn narrow_stmt(stmt: &mut IrStmt, declared: &mut FxHashMap<Name, IrType>, ctx: &mut BuildContext<'_>) {
    match &mut stmt.kind {
        IrStmtKind::VarDecl { pattern, ty, .. } => {
            if let (Some(name), Some(ty)) = (pattern.as_identifier(), ty.clone()) {
                declared.insert(name, ty);
            }
        }
        IrStmtKind::If { test, consequent, alternate } => {
            if let Some(guard) = detect_guard(test, ctx.interner) {
                let (name, consequent_ty, alternate_ty) = match guard {
                    Guard::In(name, prop) => match declared.get(&name) {
                        Some(declared_ty) => (name, Some(narrow_by_in(declared_ty, prop, ctx.types)), Some(narrow_by_not_in(declared_ty, prop, ctx.types))),
                        None => (name, None, None),
                    },
                    Guard::Typeof(name, lit) => match declared.get(&name) {
                        Some(declared_ty) => (name, Some(narrow_by_typeof(declared_ty, &lit)), Some(narrow_by_not_typeof(declared_ty, &lit))),
                        None => (name, None, None),
                    },
                };
                if let Some(ty) = consequent_ty {
                    mark_narrowed_stmt(consequent, name, &ty);
                }
                if let (Some(alt), Some(ty)) = (alternate.as_deref_mut(), alternate_ty) {
                    mark_narrowed_stmt(alt, name, &ty);
                }
            }
            narrow_stmt(consequent, declared, ctx);
            if let Some(alt) = alternate {
                narrow_stmt(alt, declared, ctx);
            }
        }
        IrStmtKind::Block(body) => narrow_stmts(body, declared, ctx),
        IrStmtKind::While { body, .. } | IrStmtKind::DoWhile { body, .. } | IrStmtKind::For { body, .. } | IrStmtKind::ForOf { body, .. } | IrStmtKind::ForIn { body, .. } => {
            narrow_stmt(body, declared, ctx);
        }
        IrStmtKind::Try { block, handler, finalizer } => {
            narrow_stmts(block, declared, ctx);
            if let Some(h) = handler {
                narrow_stmts(&mut h.body, declared, ctx);
            }
            if let Some(f) = finalizer {
                narrow_stmts(f, declared, ctx);
            }
        }
        IrStmtKind::Switch { cases, .. } => {
            for case in cases {
                narrow_stmts(&mut case.body, declared, ctx);
            }
        }
        IrStmtKind::Labeled { body, .. } => narrow_stmt(body, declared, ctx),
        IrStmtKind::Function(f) => {
            let mut inner = FxHashMap::default();
            narrow_stmts(&mut f.body, &mut inner, ctx);
        }
        IrStmtKind::Class(c) => {
            for member in &mut c.members {
                match member {
                    IrClassMember::Method { body: Some(body), .. } => {
                        let mut inner = FxHashMap::default();
                        narrow_stmts(body, &mut inner, ctx);
                    }
                    IrClassMember::Constructor { body, .. } => {
                        let mut inner = FxHashMap::default();
                        narrow_stmts(body, &mut inner, ctx);
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

/// Rewrites every `name.prop` member access reachable from `stmt` (without
/// crossing into a nested closure's body, which is its own lexical scope)
/// to carry `ty` as its object's `inferred_type`.
fn mark_narrowed_stmt(stmt: &mut IrStmt, name: Name, ty: &IrType) {
    match &mut stmt.kind {
        IrStmtKind::VarDecl { init, .. } => {
            if let Some(e) = init {
                mark_narrowed_expr(e, name, ty);
            }
        }
        IrStmtKind::ExprStmt(e) => mark_narrowed_expr(e, name, ty),
        IrStmtKind::Block(stmts) => stmts.iter_mut().for_each(|s| mark_narrowed_stmt(s, name, ty)),
        IrStmtKind::If { test, consequent, alternate } => {
            mark_narrowed_expr(test, name, ty);
            mark_narrowed_stmt(consequent, name, ty);
            if let Some(alt) = alternate {
                mark_narrowed_stmt(alt, name, ty);
            }
        }
        IrStmtKind::While { test, body } | IrStmtKind::DoWhile { body, test } => {
            mark_narrowed_expr(test, name, ty);
            mark_narrowed_stmt(body, name, ty);
        }
        IrStmtKind::For { init, test, update, body, .. } => {
            if let Some(init) = init {
                mark_narrowed_stmt(init, name, ty);
            }
            if let Some(test) = test {
                mark_narrowed_expr(test, name, ty);
            }
            if let Some(update) = update {
                mark_narrowed_expr(update, name, ty);
            }
            mark_narrowed_stmt(body, name, ty);
        }
        IrStmtKind::ForOf { iterable, body, .. } => {
            mark_narrowed_expr(iterable, name, ty);
            mark_narrowed_stmt(body, name, ty);
        }
        IrStmtKind::ForIn { object, body, .. } => {
            mark_narrowed_expr(object, name, ty);
            mark_narrowed_stmt(body, name, ty);
        }
        IrStmtKind::Switch { discriminant, cases } => {
            mark_narrowed_expr(discriminant, name, ty);
            for case in cases {
                if let Some(test) = &mut case.test {
                    mark_narrowed_expr(test, name, ty);
                }
                case.body.iter_mut().for_each(|s| mark_narrowed_stmt(s, name, ty));
            }
        }
        IrStmtKind::Try { block, handler, finalizer } => {
            block.iter_mut().for_each(|s| mark_narrowed_stmt(s, name, ty));
            if let Some(h) = handler {
                h.body.iter_mut().for_each(|s| mark_narrowed_stmt(s, name, ty));
            }
            if let Some(f) = finalizer {
                f.iter_mut().for_each(|s| mark_narrowed_stmt(s, name, ty));
            }
        }
        IrStmtKind::Throw(e) => mark_narrowed_expr(e, name, ty),
        IrStmtKind::Return(e) => {
            if let Some(e) = e {
                mark_narrowed_expr(e, name, ty);
            }
        }
        IrStmtKind::Labeled { body, .. } => mark_narrowed_stmt(body, name, ty),
        _ => {}
    }
}

fn mark_narrowed_expr(expr: &mut IrExpr, name: Name, ty: &IrType) {
    match &mut expr.kind {
        IrExprKind::Member { object, .. } => {
            if let IrExprKind::Identifier { name: n, .. } = &object.kind {
                if *n == name {
                    object.inferred_type = Some(ty.clone());
                }
            }
            mark_narrowed_expr(object, name, ty);
        }
        IrExprKind::TemplateLiteral { exprs, .. } => exprs.iter_mut().for_each(|e| mark_narrowed_expr(e, name, ty)),
        IrExprKind::Array { elements, .. } => elements.iter_mut().for_each(|el| match el {
            IrArrayElement::Item(e) | IrArrayElement::Spread(e) => mark_narrowed_expr(e, name, ty),
            IrArrayElement::Hole => {}
        }),
        IrExprKind::Object { props, .. } => props.iter_mut().for_each(|p| match p {
            IrObjectProp::KeyValue { value, .. } => mark_narrowed_expr(value, name, ty),
            IrObjectProp::Spread(e) => mark_narrowed_expr(e, name, ty),
        }),
        IrExprKind::Index { object, index, .. } => {
            mark_narrowed_expr(object, name, ty);
            mark_narrowed_expr(index, name, ty);
        }
        IrExprKind::Call { callee, args, .. } | IrExprKind::New { callee, args, .. } => {
            mark_narrowed_expr(callee, name, ty);
            args.iter_mut().for_each(|a| mark_narrowed_expr(&mut a.expr, name, ty));
        }
        IrExprKind::Assign { target, value, .. } => {
            mark_narrowed_expr(target, name, ty);
            mark_narrowed_expr(value, name, ty);
        }
        IrExprKind::Binary { left, right, .. } | IrExprKind::Logical { left, right, .. } => {
            mark_narrowed_expr(left, name, ty);
            mark_narrowed_expr(right, name, ty);
        }
        IrExprKind::Unary { operand, .. } | IrExprKind::Update { operand, .. } | IrExprKind::Spread { expr: operand } => {
            mark_narrowed_expr(operand, name, ty);
        }
        IrExprKind::Conditional { test, consequent, alternate } => {
            mark_narrowed_expr(test, name, ty);
            mark_narrowed_expr(consequent, name, ty);
            mark_narrowed_expr(alternate, name, ty);
        }
        IrExprKind::TypeOf { expr: inner } | IrExprKind::Await { expr: inner } => mark_narrowed_expr(inner, name, ty),
        IrExprKind::InstanceOf { expr, .. } => mark_narrowed_expr(expr, name, ty),
        IrExprKind::In { property, object } => {
            mark_narrowed_expr(property, name, ty);
            mark_narrowed_expr(object, name, ty);
        }
        IrExprKind::Yield { expr, .. } => {
            if let Some(e) = expr {
                mark_narrowed_expr(e, name, ty);
            }
        }
        // A closure is its own lexical scope; the narrowed binding doesn't
        // follow it in since it may be invoked after the guard no longer
        // holds.
        IrExprKind::Arrow { .. } | IrExprKind::FunctionExpr { .. } | IrExprKind::Literal(_) | IrExprKind::Identifier { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_binding::BindingLayer;
    use struxc_catalog::Catalog;
    use struxc_diagnostic::DiagnosticBag;
    use struxc_ir::ast::BindingPattern;
    use struxc_ir::ir::{Member, PrimitiveType};
    use struxc_ir::{Span, StringInterner};
    use struxc_types::{AwaitableNames, TypeRegistry};

    fn union_auth(ok: Name, err: Name) -> IrType {
        IrType::Union(vec![
            IrType::Object { members: vec![Member { name: ok, ty: IrType::Primitive(PrimitiveType::String), optional: false, readonly: false }] },
            IrType::Object { members: vec![Member { name: err, ty: IrType::Primitive(PrimitiveType::String), optional: false, readonly: false }] },
        ])
    }

    fn ident(name: Name) -> IrExpr {
        IrExpr { kind: IrExprKind::Identifier { name, binding: None }, span: Span::DUMMY, inferred_type: None }
    }

    fn member(object: IrExpr, property: Name) -> IrExpr {
        IrExpr {
            kind: IrExprKind::Member { object: Box::new(object), property, optional: false, binding: None },
            span: Span::DUMMY,
            inferred_type: None,
        }
    }

    #[test]
    fn detect_guard_recognizes_in_test() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let test = IrExpr {
            kind: IrExprKind::In {
                property: Box::new(IrExpr { kind: IrExprKind::Literal(IrLiteral::String("ok".to_string())), span: Span::DUMMY, inferred_type: None }),
                object: Box::new(ident(a)),
            },
            span: Span::DUMMY,
            inferred_type: None,
        };
        match detect_guard(&test, &mut interner) {
            Some(Guard::In(name, prop)) => {
                assert_eq!(name, a);
                assert_eq!(interner.resolve(prop), "ok");
            }
            _ => panic!("expected an In guard"),
        }
    }

    #[test]
    fn detect_guard_recognizes_typeof_test() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let test = IrExpr {
            kind: IrExprKind::Binary {
                op: BinaryOp::Eq,
                left: Box::new(IrExpr { kind: IrExprKind::TypeOf { expr: Box::new(ident(a)) }, span: Span::DUMMY, inferred_type: None }),
                right: Box::new(IrExpr { kind: IrExprKind::Literal(IrLiteral::String("string".to_string())), span: Span::DUMMY, inferred_type: None }),
            },
            span: Span::DUMMY,
            inferred_type: None,
        };
        match detect_guard(&test, &mut interner) {
            Some(Guard::Typeof(name, lit)) => {
                assert_eq!(name, a);
                assert_eq!(lit, "string");
            }
            _ => panic!("expected a typeof guard"),
        }
    }

    #[test]
    fn mark_narrowed_stmt_rewrites_matching_member_access_only() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let ok = interner.intern("ok");
        let err = interner.intern("err");
        let narrowed = union_auth(ok, err).split_union()[0].clone();

        let mut stmt = IrStmt {
            kind: IrStmtKind::Block(vec![
                IrStmt { kind: IrStmtKind::ExprStmt(member(ident(a), ok)), span: Span::DUMMY },
                IrStmt { kind: IrStmtKind::ExprStmt(member(ident(b), ok)), span: Span::DUMMY },
            ]),
            span: Span::DUMMY,
        };

        mark_narrowed_stmt(&mut stmt, a, &narrowed);

        let IrStmtKind::Block(body) = &stmt.kind else { unreachable!() };
        let IrStmtKind::ExprStmt(narrowed_access) = &body[0].kind else { unreachable!() };
        let IrExprKind::Member { object, .. } = &narrowed_access.kind else { unreachable!() };
        assert_eq!(object.inferred_type.as_ref(), Some(&narrowed));

        let IrStmtKind::ExprStmt(untouched_access) = &body[1].kind else { unreachable!() };
        let IrExprKind::Member { object, .. } = &untouched_access.kind else { unreachable!() };
        assert_eq!(object.inferred_type, None);
    }

    #[test]
    fn run_narrows_in_guard_consequent_member_access() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let ok = interner.intern("ok");
        let err = interner.intern("err");

        let mut module = IrModule {
            statements: vec![
                IrStmt {
                    kind: IrStmtKind::VarDecl {
                        kind: struxc_ir::ast::VarKind::Const,
                        pattern: BindingPattern::Identifier { span: Span::DUMMY, name: a, ty: None },
                        ty: Some(union_auth(ok, err)),
                        init: None,
                    },
                    span: Span::DUMMY,
                },
                IrStmt {
                    kind: IrStmtKind::If {
                        test: IrExpr {
                            kind: IrExprKind::In {
                                property: Box::new(IrExpr { kind: IrExprKind::Literal(IrLiteral::String("ok".to_string())), span: Span::DUMMY, inferred_type: None }),
                                object: Box::new(ident(a)),
                            },
                            span: Span::DUMMY,
                            inferred_type: None,
                        },
                        consequent: Box::new(IrStmt { kind: IrStmtKind::ExprStmt(member(ident(a), ok)), span: Span::DUMMY }),
                        alternate: Some(Box::new(IrStmt { kind: IrStmtKind::ExprStmt(member(ident(a), err)), span: Span::DUMMY })),
                    },
                    span: Span::DUMMY,
                },
            ],
        };

        let mut bag = DiagnosticBag::new();
        let binding = test_binding_layer(&mut interner);
        let catalog = Catalog::default();
        let types = TypeRegistry::new();
        let awaitable = AwaitableNames::new(&mut interner);
        let mut ctx = BuildContext::new(&binding, &catalog, &types, &mut interner, &mut bag, &awaitable, "a.ts", "");

        run(&mut module, &mut ctx);

        let IrStmtKind::If { consequent, alternate, .. } = &module.statements[1].kind else { panic!("expected if") };
        let IrStmtKind::ExprStmt(then_access) = &consequent.kind else { panic!("expected expr stmt") };
        let IrExprKind::Member { object: then_obj, .. } = &then_access.kind else { panic!("expected member") };
        match &then_obj.inferred_type {
            Some(IrType::Object { members }) => assert_eq!(members[0].name, ok),
            other => panic!("expected the ok-branch object, got {other:?}"),
        }

        let IrStmtKind::ExprStmt(else_access) = &alternate.as_ref().unwrap().kind else { panic!("expected expr stmt") };
        let IrExprKind::Member { object: else_obj, .. } = &else_access.kind else { panic!("expected member") };
        match &else_obj.inferred_type {
            Some(IrType::Object { members }) => assert_eq!(members[0].name, err),
            other => panic!("expected the err-branch object, got {other:?}"),
        }
    }

    fn test_binding_layer(interner: &mut StringInterner) -> BindingLayer {
        let empty_module = struxc_ir::ast::SourceModule { imports: Vec::new(), statements: Vec::new() };
        let catalog = Catalog::default();
        let imports = struxc_binding::ImportBindings::default();
        BindingLayer::resolve_module(&empty_module, &catalog, &imports, interner)
    }
}
