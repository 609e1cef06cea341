//! Expression conversion (spec §4.5): `Expr` -> `IrExpr`.

use struxc_binding::DeclKind;
use struxc_ir::ast::{ArrayElement, ArrowBody, CallArg, Expr, ExprKind, Literal, ObjectProp, Param};
use struxc_ir::ir::{
    CallInfo, IdentifierBinding, IrArrayElement, IrArrowBody, IrCallArg, IrExpr, IrExprKind, IrLiteral, IrObjectProp,
    IrParam, MemberBinding,
};
use struxc_ir::Name;

use crate::context::BuildContext;
use crate::convert::stmt::convert_block;
use crate::convert::ty::{convert_type, strip_passing_mode};

pub fn convert_expr(expr: &Expr, ctx: &mut BuildContext<'_>) -> IrExpr {
    let kind = convert_expr_kind(expr, ctx);
    IrExpr { kind, span: expr.span, inferred_type: None }
}

fn convert_expr_kind(expr: &Expr, ctx: &mut BuildContext<'_>) -> IrExprKind {
    match &expr.kind {
        ExprKind::Literal(lit) => IrExprKind::Literal(convert_literal(lit)),
        ExprKind::Identifier(name) => IrExprKind::Identifier { name: *name, binding: identifier_binding(expr.span, ctx) },
        ExprKind::TemplateLiteral { quasis, exprs } => IrExprKind::TemplateLiteral {
            quasis: quasis.clone(),
            exprs: exprs.iter().map(|e| convert_expr(e, ctx)).collect(),
        },
        ExprKind::Array { elements, contextual_type } => IrExprKind::Array {
            elements: elements.iter().map(|el| convert_array_element(el, ctx)).collect(),
            contextual_type: contextual_type.as_ref().map(|t| convert_type(t, ctx)),
        },
        ExprKind::Object { props, contextual_type } => IrExprKind::Object {
            props: props.iter().map(|p| convert_object_prop(p, ctx)).collect(),
            contextual_type: contextual_type.as_ref().map(|t| convert_type(t, ctx)),
        },
        ExprKind::Member { object, property, optional } => IrExprKind::Member {
            object: Box::new(convert_expr(object, ctx)),
            property: *property,
            optional: *optional,
            binding: member_binding(object, *property, ctx),
        },
        ExprKind::Index { object, index, optional } => IrExprKind::Index {
            object: Box::new(convert_expr(object, ctx)),
            index: Box::new(convert_expr(index, ctx)),
            optional: *optional,
        },
        ExprKind::Call { callee, type_args, args, optional } => IrExprKind::Call {
            callee: Box::new(convert_expr(callee, ctx)),
            args: args.iter().map(|a| convert_call_arg(a, ctx)).collect(),
            optional: *optional,
            info: call_info(expr.span, type_args, ctx),
        },
        ExprKind::New { callee, type_args, args } => IrExprKind::New {
            callee: Box::new(convert_expr(callee, ctx)),
            args: args.iter().map(|a| convert_call_arg(a, ctx)).collect(),
            info: call_info(expr.span, type_args, ctx),
            is_promise_constructor: is_promise_constructor(callee, ctx),
        },
        ExprKind::Assign { op, target, value } => {
            IrExprKind::Assign { op: *op, target: Box::new(convert_expr(target, ctx)), value: Box::new(convert_expr(value, ctx)) }
        }
        ExprKind::Binary { op, left, right } => {
            IrExprKind::Binary { op: *op, left: Box::new(convert_expr(left, ctx)), right: Box::new(convert_expr(right, ctx)) }
        }
        ExprKind::Logical { op, left, right } => {
            IrExprKind::Logical { op: *op, left: Box::new(convert_expr(left, ctx)), right: Box::new(convert_expr(right, ctx)) }
        }
        ExprKind::Unary { op, operand } => IrExprKind::Unary { op: *op, operand: Box::new(convert_expr(operand, ctx)) },
        ExprKind::Update { increment, prefix, operand } => {
            IrExprKind::Update { increment: *increment, prefix: *prefix, operand: Box::new(convert_expr(operand, ctx)) }
        }
        ExprKind::Conditional { test, consequent, alternate } => IrExprKind::Conditional {
            test: Box::new(convert_expr(test, ctx)),
            consequent: Box::new(convert_expr(consequent, ctx)),
            alternate: Box::new(convert_expr(alternate, ctx)),
        },
        ExprKind::Arrow { params, return_type, body, is_async } => IrExprKind::Arrow {
            params: params.iter().map(|p| convert_param(p, ctx)).collect(),
            return_type: return_type.as_ref().map(|t| convert_type(t, ctx)),
            body: match body {
                ArrowBody::Expr(e) => IrArrowBody::Expr(Box::new(convert_expr(e, ctx))),
                ArrowBody::Block(stmts) => IrArrowBody::Block(convert_block(stmts, ctx)),
            },
            is_async: *is_async,
        },
        ExprKind::FunctionExpr { name, params, return_type, body, is_async, is_generator } => IrExprKind::FunctionExpr {
            name: *name,
            params: params.iter().map(|p| convert_param(p, ctx)).collect(),
            return_type: return_type.as_ref().map(|t| convert_type(t, ctx)),
            body: convert_block(body, ctx),
            is_async: *is_async,
            is_generator: *is_generator,
        },
        // Casts are erased (spec §3): the passing mode folds into the
        // surrounding call argument / parameter, the plain-assertion form
        // just yields the inner expression typed as the asserted type.
        ExprKind::Cast { expr: inner, ty, mode } => {
            let _ = mode;
            let (_, _ir_ty) = strip_passing_mode(ty, ctx);
            convert_expr_kind(inner, ctx)
        }
        ExprKind::TypeOf { expr: inner } => IrExprKind::TypeOf { expr: Box::new(convert_expr(inner, ctx)) },
        ExprKind::InstanceOf { expr: inner, ty } => {
            IrExprKind::InstanceOf { expr: Box::new(convert_expr(inner, ctx)), ty: convert_type(ty, ctx) }
        }
        ExprKind::In { property, object } => {
            IrExprKind::In { property: Box::new(convert_expr(property, ctx)), object: Box::new(convert_expr(object, ctx)) }
        }
        ExprKind::Spread { expr: inner } => IrExprKind::Spread { expr: Box::new(convert_expr(inner, ctx)) },
        ExprKind::Await { expr: inner } => IrExprKind::Await { expr: Box::new(convert_expr(inner, ctx)) },
        ExprKind::Yield { expr: inner, delegate } => {
            IrExprKind::Yield { expr: inner.as_ref().map(|e| Box::new(convert_expr(e, ctx))), delegate: *delegate }
        }
        // `(expr)` carries no separate IR form; span is already that of the
        // outer parenthesised expression.
        ExprKind::Paren { expr: inner } => convert_expr_kind(inner, ctx),
    }
}

fn convert_literal(lit: &Literal) -> IrLiteral {
    match lit {
        Literal::Number(n) => IrLiteral::Number(*n),
        Literal::Integer(i) => IrLiteral::Integer(*i),
        Literal::String(s) => IrLiteral::String(s.clone()),
        Literal::Boolean(b) => IrLiteral::Boolean(*b),
        Literal::Null => IrLiteral::Null,
        Literal::Undefined => IrLiteral::Undefined,
    }
}

fn convert_array_element(el: &ArrayElement, ctx: &mut BuildContext<'_>) -> IrArrayElement {
    match el {
        ArrayElement::Item(e) => IrArrayElement::Item(convert_expr(e, ctx)),
        ArrayElement::Spread(e) => IrArrayElement::Spread(convert_expr(e, ctx)),
        ArrayElement::Hole => IrArrayElement::Hole,
    }
}

fn convert_object_prop(prop: &ObjectProp, ctx: &mut BuildContext<'_>) -> IrObjectProp {
    match prop {
        ObjectProp::KeyValue { key, value, .. } => IrObjectProp::KeyValue { key: *key, value: convert_expr(value, ctx) },
        ObjectProp::Shorthand { name } => {
            let span = struxc_ir::Span::DUMMY;
            IrObjectProp::KeyValue {
                key: *name,
                value: IrExpr { kind: IrExprKind::Identifier { name: *name, binding: None }, span, inferred_type: None },
            }
        }
        ObjectProp::Spread(e) => IrObjectProp::Spread(convert_expr(e, ctx)),
        ObjectProp::Method { key, params, body } => IrObjectProp::KeyValue {
            key: *key,
            value: IrExpr {
                kind: IrExprKind::FunctionExpr {
                    name: None,
                    params: params.iter().map(|p| convert_param(p, ctx)).collect(),
                    return_type: None,
                    body: convert_block(body, ctx),
                    is_async: false,
                    is_generator: false,
                },
                span: struxc_ir::Span::DUMMY,
                inferred_type: None,
            },
        },
    }
}

fn convert_call_arg(arg: &CallArg, ctx: &mut BuildContext<'_>) -> IrCallArg {
    let passing = cast_passing_mode(&arg.expr);
    let expr = if arg.spread {
        IrExpr {
            kind: IrExprKind::Spread { expr: Box::new(convert_expr(&arg.expr, ctx)) },
            span: arg.expr.span,
            inferred_type: None,
        }
    } else {
        convert_expr(&arg.expr, ctx)
    };
    IrCallArg { expr, passing }
}

/// A call argument's passing mode comes from an explicit `as ref<T>` /
/// `as out<T>` / `as inref<T>` cast wrapping it (spec §4.5); the cast
/// itself is erased during conversion, so this is read off the source
/// expression before that erasure happens.
fn cast_passing_mode(expr: &Expr) -> struxc_ir::ast::operators::PassingMode {
    match &expr.kind {
        ExprKind::Cast { mode: Some(mode), .. } => *mode,
        _ => struxc_ir::ast::operators::PassingMode::Value,
    }
}

pub fn convert_param(param: &Param, ctx: &mut BuildContext<'_>) -> IrParam {
    let (passing, ty) = match &param.ty {
        Some(t) => {
            let (mode, ty) = strip_passing_mode(t, ctx);
            (mode, Some(ty))
        }
        None => (struxc_ir::ast::operators::PassingMode::Value, None),
    };
    IrParam {
        pattern: param.pattern.clone(),
        ty,
        default: param.default.as_ref().map(|e| Box::new(convert_expr(e, ctx))),
        passing,
        is_extension_receiver: is_extension_receiver(param, ctx),
    }
}

/// A parameter named `this` marks an extension method/function receiver
/// (spec §4.5 "extension method" binding); the parser never special-cases
/// this name, so conversion is the first point it can be recognized.
fn is_extension_receiver(param: &Param, ctx: &BuildContext<'_>) -> bool {
    param.pattern.as_identifier().is_some_and(|name| ctx.interner.resolve(name) == "this")
}

fn identifier_binding(span: struxc_ir::Span, ctx: &mut BuildContext<'_>) -> Option<IdentifierBinding> {
    let decl_id = ctx.binding.resolve_identifier(span)?;
    let decl = ctx.binding.handle_registry().get(decl_id);
    match &decl.kind {
        DeclKind::External { clr_name, .. } => {
            Some(IdentifierBinding { resolved_clr_type: Some(clr_name.clone()), resolved_assembly: None, target_name: Some(clr_name.clone()) })
        }
        _ => None,
    }
}

fn member_binding(object: &Expr, property: Name, ctx: &mut BuildContext<'_>) -> Option<MemberBinding> {
    if !matches!(object.kind, ExprKind::Identifier(_)) {
        return None;
    }
    let decl_id = ctx.binding.resolve_identifier(object.span)?;
    let decl = ctx.binding.handle_registry().get(decl_id);
    let DeclKind::External { clr_name, .. } = &decl.kind else { return None };
    let entry = ctx.catalog.resolve_type(clr_name)?;
    let member_name = ctx.interner.resolve(property).to_string();
    let prop = entry.properties.iter().find(|p| p.clr_name == member_name);
    if let Some(prop) = prop {
        return Some(MemberBinding {
            assembly: String::new(),
            type_clr_name: entry.clr_name.clone(),
            member_name: prop.clr_name.clone(),
            is_extension_method: false,
        });
    }
    if ctx.catalog.overload_count(&entry.clr_name, &member_name, 0) > 0 {
        return Some(MemberBinding {
            assembly: String::new(),
            type_clr_name: entry.clr_name.clone(),
            member_name,
            is_extension_method: false,
        });
    }
    None
}

fn call_info(span: struxc_ir::Span, type_args: &[struxc_ir::ast::ParsedType], ctx: &mut BuildContext<'_>) -> CallInfo {
    let type_arguments: Vec<_> = type_args.iter().map(|t| convert_type(t, ctx)).collect();
    let requires_specialization = !type_arguments.is_empty();
    if let Some(sig_id) = ctx.binding.resolve_call_signature(span) {
        let sig = ctx.binding.signature_registry().get(sig_id).clone();
        let parameter_types: Vec<_> = sig
            .params
            .iter()
            .map(|p| p.ty.as_ref().map(|t| convert_type(t, ctx)).unwrap_or(struxc_ir::ir::IrType::Any))
            .collect();
        let argument_passing: Vec<_> = sig
            .params
            .iter()
            .map(|p| p.ty.as_ref().map(|t| strip_passing_mode(t, ctx).0).unwrap_or_default())
            .collect();
        return CallInfo { type_arguments, requires_specialization, parameter_types, argument_passing };
    }
    CallInfo { type_arguments, requires_specialization, parameter_types: Vec::new(), argument_passing: Vec::new() }
}

fn is_promise_constructor(callee: &Expr, ctx: &mut BuildContext<'_>) -> bool {
    let ExprKind::Identifier(name) = &callee.kind else { return false };
    ctx.interner.resolve(*name) == "Promise"
}
