//! Semantic pass 6 — JSON AOT Registry (spec §4.6): every concrete type
//! that crosses a JSON (de)serialize boundary, collected so the Project
//! Manifest Generator can emit the ahead-of-time serialization context the
//! target runtime needs instead of falling back to reflection. A type that
//! still contains an in-scope type parameter is skipped — monomorphization
//! (spec §4.7) has not produced a closed instantiation for it yet, so there
//! is nothing concrete to register.

use rustc_hash::FxHashSet;
use struxc_ir::ir::{CallInfo, IrExpr, IrExprKind, IrModule, IrStmt, IrStmtKind, IrType};
use struxc_ir::StringInterner;

#[derive(Default, Debug, Clone)]
pub struct JsonAotRegistry {
    types: Vec<IrType>,
}

impl JsonAotRegistry {
    #[must_use]
    pub fn types(&self) -> &[IrType] {
        &self.types
    }

    pub fn build(module: &IrModule, interner: &StringInterner) -> Self {
        let mut types = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        for stmt in &module.statements {
            walk_stmt(stmt, interner, &mut types, &mut seen);
        }
        JsonAotRegistry { types }
    }
}

fn is_json_callee(callee: &IrExpr, interner: &StringInterner) -> bool {
    if let IrExprKind::Member { object, property, .. } = &callee.kind {
        if let IrExprKind::Identifier { name, .. } = &object.kind {
            return interner.resolve(*name) == "JSON" && matches!(interner.resolve(*property), "parse" | "stringify");
        }
    }
    false
}

fn is_closed(ty: &IrType) -> bool {
    match ty {
        IrType::TypeParameter(_) => false,
        IrType::Array { element, .. } => is_closed(element),
        IrType::Tuple(parts) | IrType::Union(parts) | IrType::Intersection(parts) => parts.iter().all(is_closed),
        IrType::Function { params, ret } => params.iter().all(is_closed) && is_closed(ret),
        IrType::Object { members } => members.iter().all(|m| is_closed(&m.ty)),
        IrType::Dictionary { key, value } => is_closed(key) && is_closed(value),
        IrType::Reference { type_args, .. } => type_args.iter().all(is_closed),
        _ => true,
    }
}

fn record(ty: &IrType, types: &mut Vec<IrType>, seen: &mut FxHashSet<String>) {
    if !is_closed(ty) {
        return;
    }
    let key = format!("{ty:?}");
    if seen.insert(key) {
        types.push(ty.clone());
    }
}

fn collect_call(info: &CallInfo, callee: &IrExpr, interner: &StringInterner, types: &mut Vec<IrType>, seen: &mut FxHashSet<String>) {
    if is_json_callee(callee, interner) {
        for ty in &info.type_arguments {
            record(ty, types, seen);
        }
    }
}

fn walk_expr(expr: &IrExpr, interner: &StringInterner, types: &mut Vec<IrType>, seen: &mut FxHashSet<String>) {
    if let IrExprKind::Call { callee, args, info, .. } = &expr.kind {
        collect_call(info, callee, interner, types, seen);
        walk_expr(callee, interner, types, seen);
        args.iter().for_each(|a| walk_expr(&a.expr, interner, types, seen));
        return;
    }
    match &expr.kind {
        IrExprKind::TemplateLiteral { exprs, .. } => exprs.iter().for_each(|e| walk_expr(e, interner, types, seen)),
        IrExprKind::Array { elements, .. } => elements.iter().for_each(|el| match el {
            struxc_ir::ir::IrArrayElement::Item(e) | struxc_ir::ir::IrArrayElement::Spread(e) => walk_expr(e, interner, types, seen),
            struxc_ir::ir::IrArrayElement::Hole => {}
        }),
        IrExprKind::Object { props, .. } => props.iter().for_each(|p| match p {
            struxc_ir::ir::IrObjectProp::KeyValue { value, .. } => walk_expr(value, interner, types, seen),
            struxc_ir::ir::IrObjectProp::Spread(e) => walk_expr(e, interner, types, seen),
        }),
        IrExprKind::Member { object, .. } => walk_expr(object, interner, types, seen),
        IrExprKind::Index { object, index, .. } => {
            walk_expr(object, interner, types, seen);
            walk_expr(index, interner, types, seen);
        }
        IrExprKind::New { callee, args, .. } => {
            walk_expr(callee, interner, types, seen);
            args.iter().for_each(|a| walk_expr(&a.expr, interner, types, seen));
        }
        IrExprKind::Assign { target, value, .. } => {
            walk_expr(target, interner, types, seen);
            walk_expr(value, interner, types, seen);
        }
        IrExprKind::Binary { left, right, .. } | IrExprKind::Logical { left, right, .. } => {
            walk_expr(left, interner, types, seen);
            walk_expr(right, interner, types, seen);
        }
        IrExprKind::Unary { operand, .. } | IrExprKind::Update { operand, .. } | IrExprKind::Spread { expr: operand } => {
            walk_expr(operand, interner, types, seen);
        }
        IrExprKind::Conditional { test, consequent, alternate } => {
            walk_expr(test, interner, types, seen);
            walk_expr(consequent, interner, types, seen);
            walk_expr(alternate, interner, types, seen);
        }
        IrExprKind::Arrow { body, .. } => match body {
            struxc_ir::ir::IrArrowBody::Expr(e) => walk_expr(e, interner, types, seen),
            struxc_ir::ir::IrArrowBody::Block(stmts) => stmts.iter().for_each(|s| walk_stmt(s, interner, types, seen)),
        },
        IrExprKind::FunctionExpr { body, .. } => body.iter().for_each(|s| walk_stmt(s, interner, types, seen)),
        IrExprKind::TypeOf { expr } | IrExprKind::Await { expr } => walk_expr(expr, interner, types, seen),
        IrExprKind::InstanceOf { expr, .. } => walk_expr(expr, interner, types, seen),
        IrExprKind::In { property, object } => {
            walk_expr(property, interner, types, seen);
            walk_expr(object, interner, types, seen);
        }
        IrExprKind::Yield { expr: Some(e), .. } => walk_expr(e, interner, types, seen),
        _ => {}
    }
}

fn walk_stmt(stmt: &IrStmt, interner: &StringInterner, types: &mut Vec<IrType>, seen: &mut FxHashSet<String>) {
    match &stmt.kind {
        IrStmtKind::VarDecl { init: Some(e), .. } => walk_expr(e, interner, types, seen),
        IrStmtKind::Function(f) => f.body.iter().for_each(|s| walk_stmt(s, interner, types, seen)),
        IrStmtKind::Class(c) => {
            for member in &c.members {
                match member {
                    struxc_ir::ir::IrClassMember::Method { body: Some(body), .. } => {
                        body.iter().for_each(|s| walk_stmt(s, interner, types, seen));
                    }
                    struxc_ir::ir::IrClassMember::Constructor { body, .. } => {
                        body.iter().for_each(|s| walk_stmt(s, interner, types, seen));
                    }
                    struxc_ir::ir::IrClassMember::Field { init: Some(e), .. } => walk_expr(e, interner, types, seen),
                    _ => {}
                }
            }
        }
        IrStmtKind::ExprStmt(e) | IrStmtKind::Throw(e) => walk_expr(e, interner, types, seen),
        IrStmtKind::Block(stmts) => stmts.iter().for_each(|s| walk_stmt(s, interner, types, seen)),
        IrStmtKind::If { consequent, alternate, .. } => {
            walk_stmt(consequent, interner, types, seen);
            if let Some(alt) = alternate {
                walk_stmt(alt, interner, types, seen);
            }
        }
        IrStmtKind::While { body, .. } | IrStmtKind::DoWhile { body, .. } => walk_stmt(body, interner, types, seen),
        IrStmtKind::For { body, .. } | IrStmtKind::ForOf { body, .. } | IrStmtKind::ForIn { body, .. } => {
            walk_stmt(body, interner, types, seen);
        }
        IrStmtKind::Switch { cases, .. } => cases.iter().for_each(|c| c.body.iter().for_each(|s| walk_stmt(s, interner, types, seen))),
        IrStmtKind::Try { block, handler, finalizer } => {
            block.iter().for_each(|s| walk_stmt(s, interner, types, seen));
            if let Some(h) = handler {
                h.body.iter().for_each(|s| walk_stmt(s, interner, types, seen));
            }
            if let Some(f) = finalizer {
                f.iter().for_each(|s| walk_stmt(s, interner, types, seen));
            }
        }
        IrStmtKind::Return(Some(e)) => walk_expr(e, interner, types, seen),
        IrStmtKind::Labeled { body, .. } => walk_stmt(body, interner, types, seen),
        _ => {}
    }
}
