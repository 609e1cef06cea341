//! Structural Adapter Generator (spec §4.7): when an `IrType::Object`
//! reaches a position that needs a nominal type (a CLR-family target has no
//! anonymous structural-interface construct the way the source language
//! does), this emits a companion class implementing the members
//! structurally, named by [`adapter_name`] and cached per module in
//! [`EmitContext::push_extra_type`] so repeated uses of the same shape
//! don't duplicate the class.

use struxc_ir::ir::Member;

use crate::backend::{BMember, BParam, BType, BTypeDecl, BVisibility};
use crate::context::EmitContext;
use crate::ty::emit_type;

/// Deterministic name for the adapter generated from an object type's
/// member list, keyed by name+type text so two structurally identical
/// object types share one adapter class.
#[must_use]
pub fn adapter_name(members: &[Member], ctx: &EmitContext<'_>) -> String {
    let mut parts: Vec<String> = members.iter().map(|m| format!("{}_{:?}", ctx.resolve(m.name), emit_type(&m.ty, ctx))).collect();
    parts.sort();
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in parts.join("|").bytes() {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    format!("Structural__{hash:016x}")
}

/// Emits (and registers) the adapter class for an object type's member
/// list, returning the [`BType`] referencing it. Each member becomes a
/// get-only auto-property; the adapter carries no behavior of its own since
/// structural types in the source language are pure data shapes.
pub fn ensure_adapter(members: &[Member], ctx: &mut EmitContext<'_>) -> BType {
    let name = adapter_name(members, ctx);
    if !ctx.has_extra_type(&name) {
        let mut decl = BTypeDecl::class(name.clone());
        decl.is_partial = false;
        decl.members = members
            .iter()
            .map(|m| {
                let ty = emit_type(&m.ty, ctx);
                let ty = if m.optional { BType::Nullable(Box::new(ty)) } else { ty };
                BMember::AutoProperty { name: ctx.resolve(m.name).to_string(), ty, visibility: BVisibility::Public, is_static: false, is_readonly: m.readonly, init: None }
            })
            .collect();
        decl.members.push(constructor_for(members, ctx));
        ctx.push_extra_type(decl);
    }
    BType::simple(format!("global::{name}"))
}

fn constructor_for(members: &[Member], ctx: &mut EmitContext<'_>) -> BMember {
    let params: Vec<BParam> = members
        .iter()
        .map(|m| {
            let ty = emit_type(&m.ty, ctx);
            let ty = if m.optional { BType::Nullable(Box::new(ty)) } else { ty };
            BParam { ty, name: ctx.resolve(m.name).to_string(), mode: crate::backend::BArgMode::Value, default: None, is_extension_this: false }
        })
        .collect();
    let body = members
        .iter()
        .map(|m| {
            let n = ctx.resolve(m.name).to_string();
            crate::backend::BStmt::Expr(crate::backend::BExpr::Assign {
                op: crate::backend::BAssignOp::Assign,
                target: Box::new(crate::backend::BExpr::Member { object: Box::new(crate::backend::BExpr::This), name: n.clone(), null_conditional: false }),
                value: Box::new(crate::backend::BExpr::Identifier(n)),
            })
        })
        .collect();
    BMember::Constructor { params, base_args: None, body, visibility: BVisibility::Public }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_diagnostic::DiagnosticBag;
    use struxc_ir::ir::{IrType, PrimitiveType};
    use struxc_ir::StringInterner;

    #[test]
    fn same_shape_reuses_one_adapter() {
        let mut interner = StringInterner::new();
        let n = interner.intern("x");
        let mut bag = DiagnosticBag::new();
        let mut ctx = EmitContext::new(&interner, &mut bag, "a.ts", "");
        let members = vec![Member { name: n, ty: IrType::Primitive(PrimitiveType::Boolean), optional: false, readonly: false }];
        let a = ensure_adapter(&members, &mut ctx);
        let b = ensure_adapter(&members, &mut ctx);
        assert_eq!(a, b);
        assert_eq!(ctx.take_extra_types().len(), 1);
    }
}
