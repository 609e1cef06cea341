//! Type conversion (spec §4.4, §4.5): `ParsedType` -> `IrType`.
//!
//! Utility types (`Partial<T>`, `Pick<T, K>`, …) are expanded immediately
//! when every type argument is already concrete; applied to an in-scope
//! type parameter, the reference is kept as-is so substitution can expand
//! it later once the parameter is bound (spec §4.5: "preserved for later
//! substitution").

use struxc_ir::ast::operators::PassingMode;
use struxc_ir::ast::ParsedType;
use struxc_ir::ir::{ArrayOrigin, IrType, LiteralType, Member};

use crate::context::BuildContext;

/// Strips a `ref<T>`/`out<T>`/`inref<T>` passing-mode wrapper off a
/// parameter or cast type (spec §4.5 "Parameter passing modes" — the
/// wrapper is just a `Named` type reference, not a distinct syntax form).
#[must_use]
pub fn strip_passing_mode(parsed: &ParsedType, ctx: &mut BuildContext<'_>) -> (PassingMode, IrType) {
    if let ParsedType::Named { name, type_args, .. } = parsed {
        if type_args.len() == 1 {
            let text = ctx.interner.resolve(*name).to_string();
            let mode = match text.as_str() {
                "ref" => Some(PassingMode::Ref),
                "out" => Some(PassingMode::Out),
                "inref" => Some(PassingMode::In),
                _ => None,
            };
            if let Some(mode) = mode {
                return (mode, convert_type(&type_args[0], ctx));
            }
        }
    }
    (PassingMode::Value, convert_type(parsed, ctx))
}

pub fn convert_type(parsed: &ParsedType, ctx: &mut BuildContext<'_>) -> IrType {
    match parsed {
        ParsedType::Any { .. } => IrType::Any,
        ParsedType::Unknown { .. } => IrType::Unknown,
        ParsedType::Void { .. } => IrType::Void,
        ParsedType::Never { .. } => IrType::Never,
        ParsedType::Nullable { inner, .. } => {
            IrType::Union(vec![convert_type(inner, ctx), IrType::Literal(LiteralType::Null)])
        }
        ParsedType::Literal { text, .. } => IrType::Literal(convert_literal_text(text)),
        ParsedType::Array { element, .. } => {
            IrType::Array { element: Box::new(convert_type(element, ctx)), origin: ArrayOrigin::Explicit }
        }
        ParsedType::Tuple { elements, .. } => IrType::Tuple(elements.iter().map(|t| convert_type(t, ctx)).collect()),
        ParsedType::Function { params, ret, .. } => IrType::Function {
            params: params.iter().map(|t| convert_type(t, ctx)).collect(),
            ret: Box::new(convert_type(ret, ctx)),
        },
        ParsedType::Object { members, .. } => {
            IrType::Object { members: members.iter().map(|m| convert_object_member(m, ctx)).collect() }
        }
        ParsedType::Union { members, .. } => IrType::Union(members.iter().map(|t| convert_type(t, ctx)).collect()),
        ParsedType::Intersection { members, .. } => {
            IrType::Intersection(members.iter().map(|t| convert_type(t, ctx)).collect())
        }
        ParsedType::Named { span, name, type_args } => {
            let args: Vec<IrType> = type_args.iter().map(|t| convert_type(t, ctx)).collect();
            let text = ctx.interner.resolve(*name).to_string();
            if let Some(expanded) = try_expand_utility(&text, &args, ctx, *span) {
                return expanded;
            }
            if args.is_empty() && ctx.is_type_param(*name) {
                return IrType::TypeParameter(*name);
            }
            IrType::Reference { name: *name, type_args: args, clr_binding: None, structural_members: None }
        }
    }
}

fn convert_object_member(member: &struxc_ir::ast::ParsedObjectMember, ctx: &mut BuildContext<'_>) -> Member {
    Member { name: member.name, ty: convert_type(&member.ty, ctx), optional: member.optional, readonly: member.readonly }
}

fn convert_literal_text(text: &str) -> LiteralType {
    if text == "true" {
        return LiteralType::Boolean(true);
    }
    if text == "false" {
        return LiteralType::Boolean(false);
    }
    if let Ok(n) = text.parse::<f64>() {
        return LiteralType::Number(n);
    }
    LiteralType::String(text.trim_matches(['"', '\'']).to_string())
}

fn contains_open_type_parameter(ty: &IrType) -> bool {
    match ty {
        IrType::TypeParameter(_) => true,
        IrType::Array { element, .. } => contains_open_type_parameter(element),
        IrType::Tuple(parts) | IrType::Union(parts) | IrType::Intersection(parts) => {
            parts.iter().any(contains_open_type_parameter)
        }
        IrType::Function { params, ret } => params.iter().any(contains_open_type_parameter) || contains_open_type_parameter(ret),
        IrType::Object { members } => members.iter().any(|m| contains_open_type_parameter(&m.ty)),
        IrType::Dictionary { key, value } => contains_open_type_parameter(key) || contains_open_type_parameter(value),
        IrType::Reference { type_args, .. } => type_args.iter().any(contains_open_type_parameter),
        _ => false,
    }
}

fn try_expand_utility(name: &str, args: &[IrType], ctx: &mut BuildContext<'_>, span: struxc_ir::Span) -> Option<IrType> {
    if args.iter().any(contains_open_type_parameter) {
        return None;
    }
    match (name, args) {
        ("Partial", [t]) => Some(struxc_types::expand_partial(t, ctx.types)),
        ("Required", [t]) => Some(struxc_types::expand_required(t, ctx.types)),
        ("Readonly", [t]) => Some(struxc_types::expand_readonly(t, ctx.types)),
        ("Pick", [t, k]) => {
            let result = struxc_types::expand_pick(t, k, ctx.types, ctx.interner);
            Some(unwrap_or_diagnose(result, ctx, span))
        }
        ("Omit", [t, k]) => {
            let result = struxc_types::expand_omit(t, k, ctx.types, ctx.interner);
            Some(unwrap_or_diagnose(result, ctx, span))
        }
        ("Record", [k, v]) => Some(struxc_types::expand_record(k, v, ctx.interner)),
        ("NonNullable", [t]) => Some(struxc_types::expand_non_nullable(t)),
        ("Exclude", [t, u]) => Some(struxc_types::expand_exclude(t, u)),
        ("Extract", [t, u]) => Some(struxc_types::expand_extract(t, u)),
        ("ReturnType", [f]) => Some(unwrap_or_diagnose(struxc_types::expand_return_type(f), ctx, span)),
        ("Parameters", [f]) => Some(unwrap_or_diagnose(struxc_types::expand_parameters(f), ctx, span)),
        ("Awaited", [t]) => Some(struxc_types::expand_awaited(t, ctx.awaitable)),
        _ => None,
    }
}

fn unwrap_or_diagnose(result: Result<IrType, struxc_types::TypeError>, ctx: &mut BuildContext<'_>, span: struxc_ir::Span) -> IrType {
    match result {
        Ok(ty) => ty,
        Err(err) => {
            let line = ctx.line_of(span);
            ctx.bag.push(struxc_diagnostic::Diagnostic::error(
                struxc_diagnostic::ErrorCode::Tsn7414,
                ctx.file.to_string(),
                line,
                span,
                err.to_string(),
            ));
            IrType::Unknown
        }
    }
}
