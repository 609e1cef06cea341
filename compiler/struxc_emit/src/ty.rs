//! Type Emitter (spec §4.7): `IrType` -> [`BType`].

use struxc_ir::ir::{IrType, LiteralType, NumericIntent, PrimitiveType};

use crate::backend::BType;
use crate::context::EmitContext;

#[must_use]
pub fn emit_type(ty: &IrType, ctx: &EmitContext<'_>) -> BType {
    match ty {
        IrType::Primitive(PrimitiveType::String) => BType::Keyword("string"),
        IrType::Primitive(PrimitiveType::Boolean) => BType::Keyword("bool"),
        IrType::Primitive(PrimitiveType::Number { intent }) => numeric_keyword(*intent),
        IrType::Literal(lit) => literal_type(lit),
        IrType::Reference { name, type_args, clr_binding, .. } => {
            let path = clr_binding.clone().unwrap_or_else(|| format!("global::{}", ctx.resolve(*name)));
            let args = type_args.iter().map(|a| emit_type(a, ctx)).collect();
            BType::Named { path, args }
        }
        IrType::Array { element, .. } => BType::Array(Box::new(emit_type(element, ctx))),
        IrType::Tuple(parts) => BType::Tuple(parts.iter().map(|p| emit_type(p, ctx)).collect()),
        IrType::Function { params, ret } => {
            BType::Func { params: params.iter().map(|p| emit_type(p, ctx)).collect(), ret: Box::new(emit_type(ret, ctx)) }
        }
        IrType::Object { .. } => BType::Keyword("object"),
        IrType::Dictionary { key, value } => BType::Named {
            path: "global::System.Collections.Generic.Dictionary".to_string(),
            args: vec![emit_type(key, ctx), emit_type(value, ctx)],
        },
        IrType::Union(members) => {
            if ty.is_nullable_union() {
                let non_null: Vec<_> = members.iter().filter(|m| !m.is_nullish()).collect();
                if non_null.len() == 1 {
                    return wrap_nullable(emit_type(non_null[0], ctx));
                }
            }
            BType::Keyword("object")
        }
        IrType::Intersection(_) => BType::Keyword("object"),
        IrType::TypeParameter(name) => BType::simple(ctx.resolve(*name).to_string()),
        IrType::Any | IrType::Unknown => BType::Keyword("object"),
        IrType::Void => BType::Keyword("void"),
        IrType::Never => BType::Keyword("void"),
    }
}

/// `number` defaults to `double`, collapsing to a narrower integer keyword
/// when numeric intent was proven during the IR Builder/Numeric Proof Pass
/// (spec §4.7 Type Emitter).
fn numeric_keyword(intent: Option<NumericIntent>) -> BType {
    match intent {
        Some(NumericIntent::Int32) => BType::Keyword("int"),
        Some(NumericIntent::Int64) => BType::Keyword("long"),
        Some(NumericIntent::Float32) => BType::Keyword("float"),
        Some(NumericIntent::Float64) => BType::Keyword("double"),
        Some(NumericIntent::Decimal) => BType::Keyword("decimal"),
        None => BType::Keyword("double"),
    }
}

fn literal_type(lit: &LiteralType) -> BType {
    match lit {
        LiteralType::String(_) => BType::Keyword("string"),
        LiteralType::Number(_) => BType::Keyword("double"),
        LiteralType::Boolean(_) => BType::Keyword("bool"),
        LiteralType::Null | LiteralType::Undefined => BType::Nullable(Box::new(BType::Keyword("object"))),
    }
}

/// Value types need an explicit `?`; reference types are nullable by
/// reference already, but wrapping them is harmless and keeps the mapping
/// uniform rather than special-casing each primitive.
fn wrap_nullable(inner: BType) -> BType {
    match inner {
        BType::Nullable(_) => inner,
        other => BType::Nullable(Box::new(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_diagnostic::DiagnosticBag;
    use struxc_ir::StringInterner;

    #[test]
    fn int32_intent_collapses_to_int_keyword() {
        let interner = StringInterner::new();
        let mut bag = DiagnosticBag::new();
        let ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let ty = IrType::Primitive(PrimitiveType::Number { intent: Some(NumericIntent::Int32) });
        assert_eq!(emit_type(&ty, &ctx), BType::Keyword("int"));
    }

    #[test]
    fn plain_number_defaults_to_double() {
        let interner = StringInterner::new();
        let mut bag = DiagnosticBag::new();
        let ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let ty = IrType::Primitive(PrimitiveType::Number { intent: None });
        assert_eq!(emit_type(&ty, &ctx), BType::Keyword("double"));
    }

    #[test]
    fn nullable_union_wraps_value_type() {
        let interner = StringInterner::new();
        let mut bag = DiagnosticBag::new();
        let ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let ty = IrType::Union(vec![IrType::Primitive(PrimitiveType::Boolean), IrType::Literal(LiteralType::Null)]);
        assert_eq!(emit_type(&ty, &ctx), BType::Nullable(Box::new(BType::Keyword("bool"))));
    }
}
