//! Monomorphization (spec §4.7): when a call site's `CallInfo` marks
//! `requires_specialization`, the generic callee's type arguments are baked
//! into a mangled specialization name instead of emitted as a normal
//! generic instantiation — the target can't always erase the generic the
//! way the value type semantics the source required would need.

use struxc_ir::ir::IrType;

use crate::backend::{BArg, BArgMode, BExpr, BMember, BParam, BStmt, BType, BTypeDecl, BVisibility};
use crate::context::EmitContext;
use crate::printer::type_ref;
use crate::ty::emit_type;

/// `Box<string>` with `requires_specialization` set mangles to
/// `Box__string`; nested generics mangle recursively (`Box__List__int`).
#[must_use]
pub fn mangled_name(base: &str, type_args: &[IrType], ctx: &EmitContext<'_>) -> String {
    let mut out = base.to_string();
    for arg in type_args {
        out.push_str("__");
        out.push_str(&mangle_one(arg, ctx));
    }
    out
}

fn mangle_one(ty: &IrType, ctx: &EmitContext<'_>) -> String {
    match ty {
        IrType::Reference { name, type_args, .. } => mangled_name(ctx.resolve(*name), type_args, ctx),
        other => sanitize(&crate::printer::type_ref(&emit_type(other, ctx))),
    }
}

fn sanitize(s: &str) -> String {
    s.chars().map(|c| if c.is_alphanumeric() { c } else { '_' }).collect()
}

/// Rewrites a generic reference type into its specialized, non-generic
/// named form once a call site has proven a closed specialization is
/// required.
#[must_use]
pub fn specialize(base_name: &str, type_args: &[IrType], ctx: &EmitContext<'_>) -> BType {
    BType::simple(format!("global::{}", mangled_name(base_name, type_args, ctx)))
}

/// Registers (once) the specialized subclass a generic constructor call
/// needs instead of a normal open-generic instantiation: an empty subclass
/// closing the base's type parameters over this call's concrete type
/// arguments, so `mangled_name`'s result actually names something in the
/// emitted output rather than a dangling reference.
#[must_use]
pub fn ensure_specialized_type(base_name: &str, type_args: &[IrType], ctx: &mut EmitContext<'_>) -> BType {
    let name = mangled_name(base_name, type_args, ctx);
    if !ctx.has_extra_type(&name) {
        let args: Vec<BType> = type_args.iter().map(|t| emit_type(t, ctx)).collect();
        let mut decl = BTypeDecl::class(name.clone());
        decl.is_partial = false;
        decl.base = Some(BType::Named { path: format!("global::{base_name}"), args });
        ctx.push_extra_type(decl);
    }
    BType::simple(format!("global::{name}"))
}

/// Registers (once) a forwarding stub for a specialized generic function
/// call: `Base__string(a0, ...) => Base<string>(a0, ...)`. Parameters are
/// left untyped as `object` since the stub only needs to preserve argument
/// count and forward positionally — the callee it forwards to is the one
/// that actually type-checks the arguments.
#[must_use]
pub fn ensure_specialized_function(base_name: &str, type_args: &[IrType], arg_count: usize, ctx: &mut EmitContext<'_>) -> String {
    let name = mangled_name(base_name, type_args, ctx);
    if !ctx.has_extra_member(&name) {
        let params: Vec<BParam> = (0..arg_count)
            .map(|i| BParam { ty: BType::Keyword("object"), name: format!("a{i}"), mode: BArgMode::Value, default: None, is_extension_this: false })
            .collect();
        let forward_args: Vec<BArg> = (0..arg_count).map(|i| BArg::value(BExpr::Identifier(format!("a{i}")))).collect();
        let type_arg_text = type_args.iter().map(|t| type_ref(&emit_type(t, ctx))).collect::<Vec<_>>().join(", ");
        let callee = BExpr::Identifier(format!("{base_name}<{type_arg_text}>"));
        let body = vec![BStmt::Return(Some(BExpr::Call { callee: Box::new(callee), args: forward_args, null_conditional: false }))];
        let member = BMember::Method {
            name: name.clone(),
            generics: Vec::new(),
            params,
            return_type: BType::Keyword("object"),
            body: Some(body),
            visibility: BVisibility::Internal,
            is_static: true,
            is_override: false,
            is_abstract: false,
            is_async: false,
        };
        ctx.push_extra_member(member, &name);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_diagnostic::DiagnosticBag;
    use struxc_ir::ir::PrimitiveType;
    use struxc_ir::StringInterner;

    #[test]
    fn mangles_primitive_type_arg() {
        let interner = StringInterner::new();
        let mut bag = DiagnosticBag::new();
        let ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let args = vec![IrType::Primitive(PrimitiveType::String)];
        assert_eq!(mangled_name("Box", &args, &ctx), "Box__string");
    }
}
