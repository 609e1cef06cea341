//! Expression walking: resolves identifier references and, where the
//! syntax alone makes it possible, call signatures (spec §4.3).

use struxc_catalog::ParamModifier;
use struxc_ir::ast::operators::PassingMode;
use struxc_ir::ast::{ArrayElement, ArrowBody, CallArg, Expr, ExprKind, Literal, ObjectProp, Param};

use crate::decl::{DeclInfo, DeclKind};
use crate::registry::{SignatureInfo, SignatureOrigin};
use crate::scope::ScopeStack;
use crate::walk::pattern::define_pattern;
use crate::walk::stmt::walk_block;
use crate::walk::ty::{walk_type, walk_type_opt};
use crate::walk::Ctx;

pub(crate) fn walk_expr(ctx: &mut Ctx<'_>, scope: &mut ScopeStack, expr: &Expr) {
    match &expr.kind {
        ExprKind::Literal(_) => {}
        ExprKind::Identifier(name) => {
            if let Some(decl_id) = scope.resolve(*name) {
                ctx.layer.identifiers.insert(expr.span, decl_id);
            }
        }
        ExprKind::TemplateLiteral { exprs, .. } => {
            for e in exprs {
                walk_expr(ctx, scope, e);
            }
        }
        ExprKind::Array { elements, contextual_type } => {
            for el in elements {
                match el {
                    ArrayElement::Item(e) | ArrayElement::Spread(e) => walk_expr(ctx, scope, e),
                    ArrayElement::Hole => {}
                }
            }
            walk_type_opt(ctx, scope, contextual_type.as_ref());
        }
        ExprKind::Object { props, contextual_type } => {
            for prop in props {
                match prop {
                    ObjectProp::KeyValue { value, .. } => walk_expr(ctx, scope, value),
                    ObjectProp::Shorthand { name } => {
                        if let Some(decl_id) = scope.resolve(*name) {
                            ctx.layer.identifiers.insert(expr.span, decl_id);
                        }
                    }
                    ObjectProp::Spread(e) => walk_expr(ctx, scope, e),
                    ObjectProp::Method { params, body, .. } => {
                        scope.push();
                        define_params(ctx, scope, params);
                        walk_block(ctx, scope, body);
                        scope.pop();
                    }
                }
            }
            walk_type_opt(ctx, scope, contextual_type.as_ref());
        }
        ExprKind::Member { object, .. } => walk_expr(ctx, scope, object),
        ExprKind::Index { object, index, .. } => {
            walk_expr(ctx, scope, object);
            walk_expr(ctx, scope, index);
        }
        ExprKind::Call { callee, type_args, args, .. } => {
            walk_expr(ctx, scope, callee);
            for ta in type_args {
                walk_type(ctx, scope, ta);
            }
            for a in args {
                walk_expr(ctx, scope, &a.expr);
            }
            try_resolve_call_signature(ctx, expr.span, callee, args);
        }
        ExprKind::New { callee, type_args, args } => {
            walk_expr(ctx, scope, callee);
            for ta in type_args {
                walk_type(ctx, scope, ta);
            }
            for a in args {
                walk_expr(ctx, scope, &a.expr);
            }
        }
        ExprKind::Assign { target, value, .. } => {
            walk_expr(ctx, scope, target);
            walk_expr(ctx, scope, value);
        }
        ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
            walk_expr(ctx, scope, left);
            walk_expr(ctx, scope, right);
        }
        ExprKind::Unary { operand, .. } => walk_expr(ctx, scope, operand),
        ExprKind::Update { operand, .. } => walk_expr(ctx, scope, operand),
        ExprKind::Conditional { test, consequent, alternate } => {
            walk_expr(ctx, scope, test);
            walk_expr(ctx, scope, consequent);
            walk_expr(ctx, scope, alternate);
        }
        ExprKind::Arrow { params, return_type, body, .. } => {
            scope.push();
            define_params(ctx, scope, params);
            walk_type_opt(ctx, scope, return_type.as_ref());
            match body {
                ArrowBody::Expr(e) => walk_expr(ctx, scope, e),
                ArrowBody::Block(stmts) => walk_block(ctx, scope, stmts),
            }
            scope.pop();
        }
        ExprKind::FunctionExpr { name, params, return_type, body, .. } => {
            scope.push();
            if let Some(name) = name {
                let id = ctx.layer.declarations.push(DeclInfo { kind: DeclKind::Function { name: *name }, span: expr.span });
                scope.define(*name, id);
            }
            define_params(ctx, scope, params);
            walk_type_opt(ctx, scope, return_type.as_ref());
            walk_block(ctx, scope, body);
            scope.pop();
        }
        ExprKind::Cast { expr: inner, ty, .. } => {
            walk_expr(ctx, scope, inner);
            walk_type(ctx, scope, ty);
        }
        ExprKind::TypeOf { expr: inner } => walk_expr(ctx, scope, inner),
        ExprKind::InstanceOf { expr: inner, ty } => {
            walk_expr(ctx, scope, inner);
            walk_type(ctx, scope, ty);
        }
        ExprKind::In { property, object } => {
            walk_expr(ctx, scope, property);
            walk_expr(ctx, scope, object);
        }
        ExprKind::Spread { expr: inner }
        | ExprKind::Await { expr: inner }
        | ExprKind::Paren { expr: inner } => walk_expr(ctx, scope, inner),
        ExprKind::Yield { expr: inner, .. } => {
            if let Some(inner) = inner {
                walk_expr(ctx, scope, inner);
            }
        }
    }
}

pub(crate) fn define_params(ctx: &mut Ctx<'_>, scope: &mut ScopeStack, params: &[Param]) {
    for param in params {
        if let Some(default) = &param.default {
            walk_expr(ctx, scope, default);
        }
        define_pattern(ctx, scope, &param.pattern, &|name| DeclKind::Parameter { name });
    }
}

/// Best-effort call-signature resolution from syntax alone (spec §4.3).
/// Two cases are resolvable without type inference:
///
/// - the callee is a bare identifier bound to a locally declared function
///   (its signature was recorded when the declaration was hoisted);
/// - the callee is `Namespace.Member(...)` where `Namespace` is an import
///   bound directly to a Binding Catalog entry, in which case overload
///   resolution runs against the catalog using a coarse type guess per
///   argument (literal kind, or `Object` for anything else). Calls through
///   a local variable of a catalog type (`list.Add(x)`) need the variable's
///   *inferred* type to pick an overload, which only exists once the Type
///   System has run — those calls resolve later, not here.
fn try_resolve_call_signature(ctx: &mut Ctx<'_>, call_span: struxc_ir::Span, callee: &Expr, args: &[CallArg]) {
    match &callee.kind {
        ExprKind::Identifier(_) => {
            let Some(decl_id) = ctx.layer.identifiers.get(&callee.span).copied() else {
                return;
            };
            if let Some(sig_id) = ctx.layer.local_signature_of.get(&decl_id).copied() {
                ctx.layer.call_signatures.insert(call_span, sig_id);
            }
        }
        ExprKind::Member { object, property, .. } => {
            let ExprKind::Identifier(_) = &object.kind else { return };
            let Some(decl_id) = ctx.layer.identifiers.get(&object.span).copied() else {
                return;
            };
            let DeclKind::External { clr_name, .. } = ctx.layer.declarations.get(decl_id).kind.clone() else {
                return;
            };
            let method_name = ctx.interner.resolve(*property).to_string();
            let param_types: Vec<String> = args.iter().map(|a| heuristic_arg_type(ctx, &a.expr)).collect();
            let modifiers: Vec<ParamModifier> = args.iter().map(passing_mode_of).collect();
            if let Some(method) = ctx.catalog.resolve_method(&clr_name, &method_name, &param_types, &modifiers) {
                let sig_id = ctx.layer.signatures.push(SignatureInfo {
                    name: *property,
                    params: Vec::new(),
                    return_type: None,
                    is_async: false,
                    is_generator: false,
                    origin: SignatureOrigin::External { type_clr_name: clr_name, method: method.clone() },
                });
                ctx.layer.call_signatures.insert(call_span, sig_id);
            }
        }
        _ => {}
    }
}

fn heuristic_arg_type(ctx: &Ctx<'_>, expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(Literal::String(_)) => "String".to_string(),
        ExprKind::Literal(Literal::Integer(_)) => "Int32".to_string(),
        ExprKind::Literal(Literal::Number(_)) => "Double".to_string(),
        ExprKind::Literal(Literal::Boolean(_)) => "Boolean".to_string(),
        ExprKind::Array { .. } => "Array".to_string(),
        ExprKind::Cast { ty, .. } => type_name_guess(ctx, ty),
        _ => "Object".to_string(),
    }
}

fn type_name_guess(ctx: &Ctx<'_>, ty: &struxc_ir::ast::ParsedType) -> String {
    match ty {
        struxc_ir::ast::ParsedType::Named { name, .. } => ctx.interner.resolve(*name).to_string(),
        _ => "Object".to_string(),
    }
}

fn passing_mode_of(arg: &CallArg) -> ParamModifier {
    match &arg.expr.kind {
        ExprKind::Cast { mode: Some(mode), .. } => match mode {
            PassingMode::Value => ParamModifier::None,
            PassingMode::Ref => ParamModifier::Ref,
            PassingMode::Out => ParamModifier::Out,
            PassingMode::In => ParamModifier::In,
        },
        _ => ParamModifier::None,
    }
}
