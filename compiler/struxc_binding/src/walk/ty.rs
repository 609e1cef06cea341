//! Type-syntax walking: every [`ParsedType`] node encountered is captured
//! (spec §4.3 `captureTypeSyntax`), and every `Named` reference is resolved
//! against scope the same way an identifier expression is.

use struxc_ir::ast::ParsedType;

use crate::scope::ScopeStack;
use crate::walk::Ctx;

pub(crate) fn walk_type_opt(ctx: &mut Ctx<'_>, scope: &ScopeStack, ty: Option<&ParsedType>) {
    if let Some(ty) = ty {
        walk_type(ctx, scope, ty);
    }
}

pub(crate) fn walk_type(ctx: &mut Ctx<'_>, scope: &ScopeStack, ty: &ParsedType) {
    let span = ty.span();
    let syntax_id = ctx.layer.type_syntax.push(ty.clone());
    ctx.layer.type_syntax_by_span.insert(span, syntax_id);

    match ty {
        ParsedType::Named { name, type_args, .. } => {
            if let Some(decl_id) = scope.resolve(*name) {
                ctx.layer.type_references.insert(span, decl_id);
            }
            for arg in type_args {
                walk_type(ctx, scope, arg);
            }
        }
        ParsedType::Array { element, .. } => walk_type(ctx, scope, element),
        ParsedType::Tuple { elements, .. } => {
            for el in elements {
                walk_type(ctx, scope, el);
            }
        }
        ParsedType::Function { params, ret, .. } => {
            for p in params {
                walk_type(ctx, scope, p);
            }
            walk_type(ctx, scope, ret);
        }
        ParsedType::Object { members, .. } => {
            for member in members {
                walk_type(ctx, scope, &member.ty);
            }
        }
        ParsedType::Union { members, .. } | ParsedType::Intersection { members, .. } => {
            for member in members {
                walk_type(ctx, scope, member);
            }
        }
        ParsedType::Nullable { inner, .. } => walk_type(ctx, scope, inner),
        ParsedType::Literal { .. } | ParsedType::Any { .. } | ParsedType::Unknown { .. } | ParsedType::Void { .. } | ParsedType::Never { .. } => {}
    }
}
