//! Expression Emitter (spec §4.7): `IrExpr` -> [`BExpr`], per-kind, with
//! the key rewrites the spec calls out by name (Array/List construction,
//! the Promise constructor, JSON (de)serialize calls, `super.m(x)`).

use struxc_ir::ast::operators::{AssignOp, BinaryOp, LogicalOp, PassingMode, UnaryOp};
use struxc_ir::ir::{IrArrayElement, IrArrowBody, IrCallArg, IrExpr, IrExprKind, IrLiteral, IrObjectProp, IrType, Member, PrimitiveType};

use crate::backend::*;
use crate::context::EmitContext;
use crate::ty::emit_type;

#[must_use]
pub fn emit_expr(expr: &IrExpr, ctx: &mut EmitContext<'_>) -> BExpr {
    match &expr.kind {
        IrExprKind::Literal(lit) => emit_literal(lit),
        IrExprKind::Identifier { name, .. } => BExpr::Identifier(ctx.resolve(*name).to_string()),
        IrExprKind::TemplateLiteral { quasis, exprs } => BExpr::Interpolated {
            quasis: quasis.clone(),
            exprs: exprs.iter().map(|e| emit_expr(e, ctx)).collect(),
        },
        IrExprKind::Array { elements, contextual_type } => emit_array(elements, contextual_type, ctx),
        IrExprKind::Object { props, .. } => emit_object(props, ctx),
        IrExprKind::Member { object, property, optional, .. } => {
            if let IrExprKind::Identifier { name, .. } = &object.kind {
                if ctx.resolve(*name) == "super" {
                    return BExpr::Member { object: Box::new(BExpr::Base), name: ctx.resolve(*property).to_string(), null_conditional: false };
                }
            }
            BExpr::Member { object: Box::new(emit_narrowed_object(object, ctx)), name: ctx.resolve(*property).to_string(), null_conditional: *optional }
        }
        IrExprKind::Index { object, index, optional } => {
            BExpr::Index { object: Box::new(emit_expr(object, ctx)), index: Box::new(emit_expr(index, ctx)), null_conditional: *optional }
        }
        IrExprKind::Call { callee, args, optional, info } => emit_call(callee, args, *optional, info, ctx),
        IrExprKind::New { callee, args, info, is_promise_constructor } => emit_new(callee, args, info, *is_promise_constructor, ctx),
        IrExprKind::Assign { op, target, value } => {
            BExpr::Assign { op: assign_op(*op), target: Box::new(emit_expr(target, ctx)), value: Box::new(emit_expr(value, ctx)) }
        }
        IrExprKind::Binary { op: BinaryOp::Exp, left, right } => BExpr::Call {
            callee: Box::new(BExpr::Member { object: Box::new(BExpr::Identifier("global::System.Math".to_string())), name: "Pow".to_string(), null_conditional: false }),
            args: vec![BArg::value(emit_expr(left, ctx)), BArg::value(emit_expr(right, ctx))],
            null_conditional: false,
        },
        IrExprKind::Binary { op, left, right } => BExpr::Binary { op: binary_op(*op), left: Box::new(emit_expr(left, ctx)), right: Box::new(emit_expr(right, ctx)) },
        IrExprKind::Logical { op, left, right } => BExpr::Binary { op: logical_op(*op), left: Box::new(emit_expr(left, ctx)), right: Box::new(emit_expr(right, ctx)) },
        IrExprKind::Unary { op, operand } => match op {
            UnaryOp::Typeof => BExpr::Call {
                callee: Box::new(BExpr::Identifier("global::RuntimeOps.TypeOf".to_string())),
                args: vec![BArg::value(emit_expr(operand, ctx))],
                null_conditional: false,
            },
            UnaryOp::Void => emit_expr(operand, ctx),
            _ => BExpr::Unary { op: unary_op(*op), operand: Box::new(emit_expr(operand, ctx)) },
        },
        IrExprKind::Update { increment, prefix, operand } => {
            let operand = Box::new(emit_expr(operand, ctx));
            if *prefix {
                BExpr::PrefixUpdate { increment: *increment, operand }
            } else {
                BExpr::PostfixUpdate { increment: *increment, operand }
            }
        }
        IrExprKind::Conditional { test, consequent, alternate } => {
            BExpr::Conditional { test: Box::new(emit_expr(test, ctx)), consequent: Box::new(emit_expr(consequent, ctx)), alternate: Box::new(emit_expr(alternate, ctx)) }
        }
        IrExprKind::Arrow { params, body, is_async, .. } => emit_arrow(params, body, *is_async, ctx),
        IrExprKind::FunctionExpr { params, body, is_async, .. } => emit_arrow(params, &IrArrowBody::Block(body.clone()), *is_async, ctx),
        IrExprKind::TypeOf { expr: inner } => BExpr::Call {
            callee: Box::new(BExpr::Identifier("global::RuntimeOps.TypeOf".to_string())),
            args: vec![BArg::value(emit_expr(inner, ctx))],
            null_conditional: false,
        },
        IrExprKind::InstanceOf { expr: inner, ty } => BExpr::Is { expr: Box::new(emit_expr(inner, ctx)), ty: emit_type(ty, ctx) },
        IrExprKind::In { property, object } => BExpr::Call {
            callee: Box::new(BExpr::Member { object: Box::new(emit_expr(object, ctx)), name: "ContainsKey".to_string(), null_conditional: false }),
            args: vec![BArg::value(emit_expr(property, ctx))],
            null_conditional: false,
        },
        IrExprKind::Spread { expr: inner } => BExpr::Spread(Box::new(emit_expr(inner, ctx))),
        IrExprKind::Await { expr: inner } => BExpr::Await { expr: Box::new(emit_expr(inner, ctx)) },
        IrExprKind::Yield { expr: inner, .. } => inner.as_ref().map(|e| emit_expr(e, ctx)).unwrap_or(BExpr::Null),
    }
}

fn emit_literal(lit: &IrLiteral) -> BExpr {
    match lit {
        IrLiteral::String(s) => BExpr::String(s.clone()),
        IrLiteral::Integer(n) => BExpr::Int(*n),
        IrLiteral::Number(n) => BExpr::Double(*n),
        IrLiteral::Boolean(b) => BExpr::Bool(*b),
        IrLiteral::Null | IrLiteral::Undefined => BExpr::Null,
    }
}

fn emit_array(elements: &[IrArrayElement], contextual_type: &Option<IrType>, ctx: &mut EmitContext<'_>) -> BExpr {
    let items: Vec<BExpr> = elements
        .iter()
        .map(|el| match el {
            IrArrayElement::Item(e) => emit_expr(e, ctx),
            IrArrayElement::Spread(e) => BExpr::Spread(Box::new(emit_expr(e, ctx))),
            IrArrayElement::Hole => BExpr::Null,
        })
        .collect();
    let element_ty = match contextual_type {
        Some(IrType::Array { element, .. }) => emit_type(element, ctx),
        _ => BType::Keyword("object"),
    };
    BExpr::CollectionInitializer { ty: BType::Named { path: "global::System.Collections.Generic.List".to_string(), args: vec![element_ty] }, items }
}

/// Object literals with no spread lower to an anonymous-object initializer
/// (`new { A = 1, B = 2 }`); a spread forces a `Dictionary<string, object>`
/// fallback since member names aren't statically known at the spread site.
fn emit_object(props: &[IrObjectProp], ctx: &mut EmitContext<'_>) -> BExpr {
    if props.iter().all(|p| matches!(p, IrObjectProp::KeyValue { .. })) {
        let members = props
            .iter()
            .map(|p| match p {
                IrObjectProp::KeyValue { key, value } => (ctx.resolve(*key).to_string(), emit_expr(value, ctx)),
                IrObjectProp::Spread(_) => unreachable!(),
            })
            .collect();
        return BExpr::ObjectInitializer { ty: BType::simple(""), args: Vec::new(), members };
    }
    let items: Vec<BExpr> = props
        .iter()
        .flat_map(|p| match p {
            IrObjectProp::KeyValue { key, value } => {
                let pair = BExpr::ObjectInitializer {
                    ty: BType::Named { path: "global::System.Collections.Generic.KeyValuePair".to_string(), args: vec![BType::Keyword("string"), BType::Keyword("object")] },
                    args: vec![BArg::value(BExpr::String(ctx.resolve(*key).to_string())), BArg::value(emit_expr(value, ctx))],
                    members: Vec::new(),
                };
                vec![pair]
            }
            IrObjectProp::Spread(e) => vec![emit_expr(e, ctx)],
        })
        .collect();
    BExpr::CollectionInitializer { ty: BType::Named { path: "global::System.Collections.Generic.Dictionary".to_string(), args: vec![BType::Keyword("string"), BType::Keyword("object")] }, items }
}

fn emit_call_arg(arg: &IrCallArg, ctx: &mut EmitContext<'_>) -> BArg {
    BArg { expr: emit_expr(&arg.expr, ctx), mode: passing_mode(arg.passing) }
}

fn emit_call(callee: &IrExpr, args: &[IrCallArg], optional: bool, info: &struxc_ir::ir::CallInfo, ctx: &mut EmitContext<'_>) -> BExpr {
    if let Some(rewritten) = try_json_call(callee, args, info, ctx) {
        return rewritten;
    }
    let emitted_args: Vec<BArg> = args.iter().enumerate().map(|(i, a)| emit_call_arg_for_param(a, info.parameter_types.get(i), ctx)).collect();
    let callee_expr = if info.requires_specialization {
        if let IrExprKind::Identifier { name, .. } = &callee.kind {
            let base = ctx.resolve(*name).to_string();
            let specialized = crate::mono::ensure_specialized_function(&base, &info.type_arguments, args.len(), ctx);
            BExpr::Identifier(specialized)
        } else {
            emit_expr(callee, ctx)
        }
    } else {
        emit_expr(callee, ctx)
    };
    BExpr::Call { callee: Box::new(callee_expr), args: emitted_args, null_conditional: optional }
}

/// A call argument that is an object literal crossing into a nominal
/// (`IrType::Reference`) parameter gets its structural adapter class
/// constructed directly instead of an anonymous object initializer (spec
/// §4.7/§9 "structural vs nominal" — generate an adapter, forward).
fn emit_call_arg_for_param(arg: &IrCallArg, param_ty: Option<&IrType>, ctx: &mut EmitContext<'_>) -> BArg {
    match (&arg.expr.kind, param_ty) {
        (IrExprKind::Object { props, .. }, Some(IrType::Reference { .. })) => BArg { expr: adapt_object_literal(props, ctx), mode: passing_mode(arg.passing) },
        _ => emit_call_arg(arg, ctx),
    }
}

fn adapt_object_literal(props: &[IrObjectProp], ctx: &mut EmitContext<'_>) -> BExpr {
    let mut members = Vec::new();
    let mut values = Vec::new();
    for prop in props {
        let IrObjectProp::KeyValue { key, value } = prop else { continue };
        members.push(Member { name: *key, ty: literal_member_type(value), optional: false, readonly: false });
        values.push(BArg::value(emit_expr(value, ctx)));
    }
    let ty = crate::adapter::ensure_adapter(&members, ctx);
    BExpr::New { ty, args: values }
}

/// A guard-narrowed union access (`"prop" in x` / `typeof x === "..."`)
/// carries the narrowed variant's shape as `inferred_type`; cast to the
/// generated structural adapter so the member access resolves against that
/// variant instead of the open union.
fn emit_narrowed_object(object: &IrExpr, ctx: &mut EmitContext<'_>) -> BExpr {
    let emitted = emit_expr(object, ctx);
    match &object.inferred_type {
        Some(IrType::Object { members }) => {
            let ty = crate::adapter::ensure_adapter(members, ctx);
            BExpr::Cast { ty, expr: Box::new(emitted) }
        }
        _ => emitted,
    }
}

fn literal_member_type(expr: &IrExpr) -> IrType {
    match &expr.kind {
        IrExprKind::Literal(IrLiteral::String(_)) => IrType::Primitive(PrimitiveType::String),
        IrExprKind::Literal(IrLiteral::Integer(_) | IrLiteral::Number(_)) => IrType::Primitive(PrimitiveType::Number { intent: None }),
        IrExprKind::Literal(IrLiteral::Boolean(_)) => IrType::Primitive(PrimitiveType::Boolean),
        _ => IrType::Any,
    }
}

/// `JSON.stringify`/`JSON.parse` rewrite to source-generated serializer
/// calls (spec §4.7 Expression Emitter). The generated context class is
/// assumed to expose one `JsonTypeInfo` property per type registered by
/// the JSON AOT Registry, named after the type itself.
fn try_json_call(callee: &IrExpr, args: &[IrCallArg], info: &struxc_ir::ir::CallInfo, ctx: &mut EmitContext<'_>) -> Option<BExpr> {
    let IrExprKind::Member { object, property, .. } = &callee.kind else { return None };
    let IrExprKind::Identifier { name, .. } = &object.kind else { return None };
    if ctx.resolve(*name) != "JSON" {
        return None;
    }
    let method = ctx.resolve(*property);
    match method {
        "stringify" => {
            let arg = args.first()?;
            let value = emit_expr(&arg.expr, ctx);
            let type_info = arg.expr.inferred_type.as_ref().map(|t| json_type_info_expr(t, ctx));
            let call_args = match type_info {
                Some(info_expr) => vec![BArg::value(value), BArg::value(info_expr)],
                None => vec![BArg::value(value)],
            };
            Some(BExpr::Call { callee: Box::new(json_serializer_member("Serialize")), args: call_args, null_conditional: false })
        }
        "parse" => {
            let arg = args.first()?;
            let value = emit_expr(&arg.expr, ctx);
            let target_ty = info.type_arguments.first();
            let call_args = match target_ty {
                Some(t) => vec![BArg::value(value), BArg::value(json_type_info_expr(t, ctx))],
                None => vec![BArg::value(value)],
            };
            Some(BExpr::Call { callee: Box::new(json_serializer_member("Deserialize")), args: call_args, null_conditional: false })
        }
        _ => None,
    }
}

fn json_serializer_member(method: &str) -> BExpr {
    BExpr::Member { object: Box::new(BExpr::Identifier("global::System.Text.Json.JsonSerializer".to_string())), name: method.to_string(), null_conditional: false }
}

fn json_type_info_expr(ty: &IrType, ctx: &mut EmitContext<'_>) -> BExpr {
    let name = match ty {
        IrType::Reference { name, .. } => ctx.resolve(*name).to_string(),
        _ => "Object".to_string(),
    };
    BExpr::Member { object: Box::new(BExpr::Member { object: Box::new(BExpr::Identifier("AppJsonContext".to_string())), name: "Default".to_string(), null_conditional: false }), name, null_conditional: false }
}

/// `new Array<T>(n)` -> `new T[n]`; `new List<T>([e1, ...])` -> a
/// collection-initializer; `new Promise<T>(executor)` -> a
/// `TaskCompletionSource<T>`-backed call (spec §4.7 Expression Emitter).
fn emit_new(callee: &IrExpr, args: &[IrCallArg], info: &struxc_ir::ir::CallInfo, is_promise_constructor: bool, ctx: &mut EmitContext<'_>) -> BExpr {
    if is_promise_constructor {
        return emit_promise_constructor(args, info, ctx);
    }
    if let IrExprKind::Identifier { name, .. } = &callee.kind {
        let callee_name = ctx.resolve(*name).to_string();
        if callee_name == "Array" {
            if let (Some(elem), [arg]) = (info.type_arguments.first(), args) {
                return BExpr::ArrayCreation { element: emit_type(elem, ctx), length: Some(Box::new(emit_expr(&arg.expr, ctx))), initializer: None };
            }
        }
        if callee_name == "List" {
            let elem = info.type_arguments.first().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("object"));
            if let Some(arg) = args.first() {
                if let IrExprKind::Array { elements, .. } = &arg.expr.kind {
                    let items = elements
                        .iter()
                        .filter_map(|el| match el {
                            IrArrayElement::Item(e) => Some(emit_expr(e, ctx)),
                            _ => None,
                        })
                        .collect();
                    return BExpr::CollectionInitializer { ty: BType::Named { path: "global::System.Collections.Generic.List".to_string(), args: vec![elem] }, items };
                }
            }
            return BExpr::New { ty: BType::Named { path: "global::System.Collections.Generic.List".to_string(), args: vec![elem] }, args: Vec::new() };
        }
    }
    let ty = if info.requires_specialization {
        let base = match &callee.kind {
            IrExprKind::Identifier { name, .. } => ctx.resolve(*name).to_string(),
            _ => "object".to_string(),
        };
        crate::mono::ensure_specialized_type(&base, &info.type_arguments, ctx)
    } else {
        emit_callee_type(callee, info, ctx)
    };
    BExpr::New { ty, args: args.iter().map(|a| emit_call_arg(a, ctx)).collect() }
}

fn emit_callee_type(callee: &IrExpr, info: &struxc_ir::ir::CallInfo, ctx: &mut EmitContext<'_>) -> BType {
    let base = match &callee.kind {
        IrExprKind::Identifier { name, .. } => ctx.resolve(*name).to_string(),
        _ => "object".to_string(),
    };
    let args = info.type_arguments.iter().map(|t| emit_type(t, ctx)).collect();
    BType::Named { path: base, args }
}

/// `new Promise<T>(executor)` -> an IIFE that constructs a
/// `TaskCompletionSource<T>`, invokes the executor with `resolve`/`reject`
/// callbacks wired to `SetResult`/`SetException`, and returns `tcs.Task`
/// (spec §4.7 "Promise constructor recognition").
fn emit_promise_constructor(args: &[IrCallArg], info: &struxc_ir::ir::CallInfo, ctx: &mut EmitContext<'_>) -> BExpr {
    let result_ty = info.type_arguments.first().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("object"));
    let tcs_ty = BType::Named { path: "global::System.Threading.Tasks.TaskCompletionSource".to_string(), args: vec![result_ty] };
    let tcs_name = ctx.fresh_temp();
    let executor = args.first().map(|a| emit_expr(&a.expr, ctx)).unwrap_or(BExpr::Null);

    let resolve = BExpr::Lambda {
        params: vec!["__v".to_string()],
        body: LambdaBody::Expr(Box::new(BExpr::Call {
            callee: Box::new(BExpr::Member { object: Box::new(BExpr::Identifier(tcs_name.clone())), name: "SetResult".to_string(), null_conditional: false }),
            args: vec![BArg::value(BExpr::Identifier("__v".to_string()))],
            null_conditional: false,
        })),
        is_async: false,
    };
    let reject = BExpr::Lambda {
        params: vec!["__e".to_string()],
        body: LambdaBody::Expr(Box::new(BExpr::Call {
            callee: Box::new(BExpr::Member { object: Box::new(BExpr::Identifier(tcs_name.clone())), name: "SetException".to_string(), null_conditional: false }),
            args: vec![BArg::value(BExpr::Identifier("__e".to_string()))],
            null_conditional: false,
        })),
        is_async: false,
    };

    let body = vec![
        BStmt::Local(BVarDecl { ty: tcs_ty.clone(), name: tcs_name.clone(), init: Some(BExpr::New { ty: tcs_ty, args: Vec::new() }) }),
        BStmt::Expr(BExpr::Call { callee: Box::new(executor), args: vec![BArg::value(resolve), BArg::value(reject)], null_conditional: false }),
        BStmt::Return(Some(BExpr::Member { object: Box::new(BExpr::Identifier(tcs_name)), name: "Task".to_string(), null_conditional: false })),
    ];
    BExpr::Call { callee: Box::new(BExpr::Lambda { params: Vec::new(), body: LambdaBody::Block(body), is_async: false }), args: Vec::new(), null_conditional: false }
}

fn emit_arrow(params: &[struxc_ir::ir::IrParam], body: &IrArrowBody, is_async: bool, ctx: &mut EmitContext<'_>) -> BExpr {
    let param_names: Vec<String> = params.iter().filter_map(|p| p.pattern.as_identifier().map(|n| ctx.resolve(n).to_string())).collect();
    let body = match body {
        IrArrowBody::Expr(e) => LambdaBody::Expr(Box::new(emit_expr(e, ctx))),
        IrArrowBody::Block(stmts) => LambdaBody::Block(crate::stmt::emit_block(stmts, ctx)),
    };
    BExpr::Lambda { params: param_names, body, is_async }
}

pub(crate) fn passing_mode(mode: PassingMode) -> BArgMode {
    match mode {
        PassingMode::Value => BArgMode::Value,
        PassingMode::Ref => BArgMode::Ref,
        PassingMode::Out => BArgMode::Out,
        PassingMode::In => BArgMode::In,
    }
}

fn assign_op(op: AssignOp) -> BAssignOp {
    match op {
        AssignOp::Assign => BAssignOp::Assign,
        AssignOp::Add => BAssignOp::Add,
        AssignOp::Sub => BAssignOp::Sub,
        AssignOp::Mul => BAssignOp::Mul,
        AssignOp::Div => BAssignOp::Div,
        AssignOp::Mod => BAssignOp::Mod,
        AssignOp::NullishCoalesce => BAssignOp::NullCoalesce,
        AssignOp::LogicalAnd => BAssignOp::LogicalAnd,
        AssignOp::LogicalOr => BAssignOp::LogicalOr,
    }
}

fn binary_op(op: BinaryOp) -> BBinaryOp {
    match op {
        BinaryOp::Add => BBinaryOp::Add,
        BinaryOp::Sub => BBinaryOp::Sub,
        BinaryOp::Mul => BBinaryOp::Mul,
        BinaryOp::Div => BBinaryOp::Div,
        BinaryOp::Mod => BBinaryOp::Mod,
        // Exp is rewritten to a `Math.Pow` call in `emit_expr` before this
        // table is ever consulted.
        BinaryOp::Exp => unreachable!("Exp never reaches binary_op"),
        BinaryOp::Eq => BBinaryOp::Eq,
        BinaryOp::NotEq => BBinaryOp::NotEq,
        BinaryOp::Lt => BBinaryOp::Lt,
        BinaryOp::LtEq => BBinaryOp::LtEq,
        BinaryOp::Gt => BBinaryOp::Gt,
        BinaryOp::GtEq => BBinaryOp::GtEq,
        BinaryOp::BitAnd => BBinaryOp::BitAnd,
        BinaryOp::BitOr => BBinaryOp::BitOr,
        BinaryOp::BitXor => BBinaryOp::BitXor,
        BinaryOp::Shl => BBinaryOp::Shl,
        BinaryOp::Shr => BBinaryOp::Shr,
    }
}

fn logical_op(op: LogicalOp) -> BBinaryOp {
    match op {
        LogicalOp::And => BBinaryOp::LogicalAnd,
        LogicalOp::Or => BBinaryOp::LogicalOr,
        LogicalOp::NullishCoalesce => BBinaryOp::NullCoalesce,
    }
}

fn unary_op(op: UnaryOp) -> BUnaryOp {
    match op {
        UnaryOp::Neg => BUnaryOp::Neg,
        UnaryOp::Not => BUnaryOp::Not,
        UnaryOp::BitNot => BUnaryOp::BitNot,
        UnaryOp::Typeof | UnaryOp::Void => BUnaryOp::Not,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_diagnostic::DiagnosticBag;
    use struxc_ir::{Span, StringInterner};

    fn dummy(kind: IrExprKind) -> IrExpr {
        IrExpr { kind, span: Span::DUMMY, inferred_type: None }
    }

    #[test]
    fn integer_literal_emits_as_int() {
        let interner = StringInterner::new();
        let mut bag = DiagnosticBag::new();
        let mut ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let e = dummy(IrExprKind::Literal(IrLiteral::Integer(42)));
        assert_eq!(emit_expr(&e, &mut ctx), BExpr::Int(42));
    }

    #[test]
    fn super_member_lowers_to_base() {
        let mut interner = StringInterner::new();
        let sup = interner.intern("super");
        let m = interner.intern("run");
        let mut bag = DiagnosticBag::new();
        let mut ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let e = dummy(IrExprKind::Member { object: Box::new(dummy(IrExprKind::Identifier { name: sup, binding: None })), property: m, optional: false, binding: None });
        assert_eq!(emit_expr(&e, &mut ctx), BExpr::Member { object: Box::new(BExpr::Base), name: "run".to_string(), null_conditional: false });
    }
}
