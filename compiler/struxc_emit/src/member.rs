//! Member Emitter (spec §4.7): class/interface/enum members and top-level
//! function/var declarations, lowered to [`BMember`]/[`BTypeDecl`].
//!
//! Override detection and base-visibility widening would need a resolved
//! base-class member table threaded in from the Binding Catalog; this
//! crate has no dependency on `struxc_binding`'s catalog lookups, so both
//! are conservatively left at their non-widened defaults (`is_override:
//! false`, declared visibility kept as-is) rather than guessed.

use struxc_ir::ast::Visibility;
use struxc_ir::ir::{IrClassDecl, IrClassMember, IrEnumDecl, IrFunctionDecl, IrInterfaceDecl};

use crate::backend::*;
use crate::context::EmitContext;
use crate::expr::emit_expr;
use crate::generator::register_companions;
use crate::stmt::emit_block;
use crate::ty::emit_type;

fn visibility(v: Visibility) -> BVisibility {
    match v {
        Visibility::Public => BVisibility::Public,
        Visibility::Protected => BVisibility::Protected,
        Visibility::Private => BVisibility::Private,
    }
}

#[must_use]
pub fn emit_class(decl: &IrClassDecl, ctx: &mut EmitContext<'_>) -> BTypeDecl {
    let mut out = BTypeDecl::class(ctx.resolve(decl.name).to_string());
    out.generics = decl.generics.iter().map(|n| ctx.resolve(*n).to_string()).collect();
    out.base = decl.extends.as_ref().map(|t| emit_type(t, ctx));
    out.interfaces = decl.implements.iter().map(|t| emit_type(t, ctx)).collect();
    out.visibility = if decl.is_exported { BVisibility::Public } else { BVisibility::Internal };
    out.members = decl.members.iter().map(|m| emit_class_member(m, ctx)).collect();
    out
}

#[must_use]
pub fn emit_interface(decl: &IrInterfaceDecl, ctx: &mut EmitContext<'_>) -> BTypeDecl {
    let mut out = BTypeDecl { kind: BTypeKind::Interface, ..BTypeDecl::class(ctx.resolve(decl.name).to_string()) };
    out.generics = decl.generics.iter().map(|n| ctx.resolve(*n).to_string()).collect();
    out.interfaces = decl.extends.iter().map(|t| emit_type(t, ctx)).collect();
    out.visibility = if decl.is_exported { BVisibility::Public } else { BVisibility::Internal };
    out.members = decl
        .members
        .iter()
        .map(|m| {
            let ty = emit_type(&m.ty, ctx);
            if m.is_method {
                let (params, ret) = match &ty {
                    BType::Func { params, ret } => (params.clone(), (**ret).clone()),
                    other => (Vec::new(), other.clone()),
                };
                BMember::Method {
                    name: ctx.resolve(m.name).to_string(),
                    generics: Vec::new(),
                    params: params
                        .into_iter()
                        .enumerate()
                        .map(|(i, t)| BParam { ty: t, name: format!("arg{i}"), mode: BArgMode::Value, default: None, is_extension_this: false })
                        .collect(),
                    return_type: ret,
                    body: None,
                    visibility: BVisibility::Public,
                    is_static: false,
                    is_override: false,
                    is_abstract: true,
                    is_async: false,
                }
            } else {
                BMember::Property { name: ctx.resolve(m.name).to_string(), ty, getter: None, setter: None, visibility: BVisibility::Public, is_static: false }
            }
        })
        .collect();
    out
}

#[must_use]
pub fn emit_enum(decl: &IrEnumDecl, ctx: &mut EmitContext<'_>) -> BTypeDecl {
    let mut out = BTypeDecl { kind: BTypeKind::Enum, ..BTypeDecl::class(ctx.resolve(decl.name).to_string()) };
    out.visibility = if decl.is_exported { BVisibility::Public } else { BVisibility::Internal };
    out.enum_members = decl.members.iter().map(|m| (ctx.resolve(m.name).to_string(), m.init.as_ref().map(|e| emit_expr(e, ctx)))).collect();
    out
}

fn emit_class_member(member: &IrClassMember, ctx: &mut EmitContext<'_>) -> BMember {
    match member {
        IrClassMember::Field { name, ty, init, visibility: vis, is_static, is_readonly, .. } => BMember::Field {
            name: ctx.resolve(*name).to_string(),
            ty: ty.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("object")),
            init: init.as_ref().map(|e| emit_expr(e, ctx)),
            visibility: visibility(*vis),
            is_static: *is_static,
            is_readonly: *is_readonly,
        },
        IrClassMember::Method { name, generics, params, return_type, body, visibility: vis, is_static, is_override, is_abstract, is_async, is_generator, .. } => {
            let emitted_name = ctx.resolve(*name).to_string();
            register_companions(&emitted_name, return_type.as_ref(), *is_generator, false, ctx);
            BMember::Method {
                name: emitted_name,
                generics: generics.iter().map(|n| ctx.resolve(*n).to_string()).collect(),
                params: params
                    .iter()
                    .map(|p| BParam {
                        ty: p.ty.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("object")),
                        name: p.pattern.as_identifier().map(|n| ctx.resolve(n).to_string()).unwrap_or_default(),
                        mode: crate::expr::passing_mode(p.passing),
                        default: p.default.as_ref().map(|e| emit_expr(e, ctx)),
                        is_extension_this: p.is_extension_receiver,
                    })
                    .collect(),
                return_type: return_type.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("void")),
                body: body.as_ref().map(|b| emit_block(b, ctx)),
                visibility: visibility(*vis),
                is_static: *is_static,
                is_override: *is_override,
                is_abstract: *is_abstract,
                is_async: *is_async,
            }
        }
        IrClassMember::Constructor { params, super_call, body, visibility: vis, .. } => BMember::Constructor {
            params: params
                .iter()
                .map(|p| BParam {
                    ty: p.ty.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("object")),
                    name: p.pattern.as_identifier().map(|n| ctx.resolve(n).to_string()).unwrap_or_default(),
                    mode: crate::expr::passing_mode(p.passing),
                    default: p.default.as_ref().map(|e| emit_expr(e, ctx)),
                    is_extension_this: false,
                })
                .collect(),
            base_args: super_call.as_ref().map(|args| args.iter().map(|e| BArg::value(emit_expr(e, ctx))).collect()),
            body: emit_block(body, ctx),
            visibility: visibility(*vis),
        },
        IrClassMember::Property { name, ty, getter, setter, visibility: vis, is_static, .. } => BMember::Property {
            name: ctx.resolve(*name).to_string(),
            ty: ty.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("object")),
            getter: getter.as_ref().map(|b| emit_block(b, ctx)),
            setter: setter.as_ref().map(|(p, b)| (p.pattern.as_identifier().map(|n| ctx.resolve(n).to_string()).unwrap_or_else(|| "value".to_string()), emit_block(b, ctx))),
            visibility: visibility(*vis),
            is_static: *is_static,
        },
    }
}

/// A top-level module function becomes a static method on the module's
/// container class (spec §4.7 "Assembly rule").
#[must_use]
pub fn emit_top_level_function(decl: &IrFunctionDecl, ctx: &mut EmitContext<'_>) -> BMember {
    let name = decl.name.map(|n| ctx.resolve(n).to_string()).unwrap_or_else(|| ctx.fresh_temp());
    register_companions(&name, decl.return_type.as_ref(), decl.is_generator, decl.is_bidirectional_generator, ctx);
    BMember::Method {
        name,
        generics: decl.generics.iter().map(|n| ctx.resolve(*n).to_string()).collect(),
        params: decl
            .params
            .iter()
            .map(|p| BParam {
                ty: p.ty.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("object")),
                name: p.pattern.as_identifier().map(|n| ctx.resolve(n).to_string()).unwrap_or_default(),
                mode: crate::expr::passing_mode(p.passing),
                default: p.default.as_ref().map(|e| emit_expr(e, ctx)),
                is_extension_this: p.is_extension_receiver,
            })
            .collect(),
        return_type: decl.return_type.as_ref().map(|t| emit_type(t, ctx)).unwrap_or(BType::Keyword("void")),
        body: Some(emit_block(&decl.body, ctx)),
        visibility: if decl.is_exported { BVisibility::Public } else { BVisibility::Internal },
        is_static: true,
        is_override: false,
        is_abstract: false,
        is_async: decl.is_async,
    }
}
