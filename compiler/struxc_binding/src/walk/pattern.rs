//! Binds every leaf identifier of a [`BindingPattern`] into scope, recursing
//! through array/object destructuring the same way the IR Builder will once
//! it lowers these patterns (spec §4.5).

use struxc_ir::ast::BindingPattern;

use crate::decl::{DeclInfo, DeclKind};
use crate::scope::ScopeStack;
use crate::walk::ty::walk_type_opt;
use crate::walk::Ctx;

/// `make_kind` turns a leaf name into the right [`DeclKind`] for the
/// binding's role (`Parameter`, or `Variable` with a `VarKind`).
pub(crate) fn define_pattern(
    ctx: &mut Ctx<'_>,
    scope: &mut ScopeStack,
    pattern: &BindingPattern,
    make_kind: &dyn Fn(struxc_ir::Name) -> DeclKind,
) {
    match pattern {
        BindingPattern::Identifier { span, name, ty } => {
            walk_type_opt(ctx, scope, ty.as_ref());
            let id = ctx.layer.declarations.push(DeclInfo { kind: make_kind(*name), span: *span });
            scope.define(*name, id);
        }
        BindingPattern::Array { elements, rest, .. } => {
            for element in elements.iter().flatten() {
                define_pattern(ctx, scope, element, make_kind);
            }
            if let Some(rest) = rest {
                define_pattern(ctx, scope, rest, make_kind);
            }
        }
        BindingPattern::Object { properties, rest, .. } => {
            for prop in properties {
                if let Some(default) = &prop.default {
                    crate::walk::expr::walk_expr(ctx, scope, default);
                }
                define_pattern(ctx, scope, &prop.value, make_kind);
            }
            if let Some(rest) = rest {
                define_pattern(ctx, scope, rest, make_kind);
            }
        }
    }
}
