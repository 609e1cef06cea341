//! Statement and declaration conversion (spec §4.5): `Stmt`/`SourceModule`
//! -> `IrStmt`/`IrModule`.

use struxc_ir::ast::items::{ClassDecl, ClassMember, EnumDecl, FunctionDecl, InterfaceDecl, TypeAliasDecl};
use struxc_ir::ast::{ExportDecl, GenericParam, SourceModule, Stmt, StmtKind};
use struxc_ir::ir::{
    IrCatchClause, IrClassDecl, IrClassMember, IrEnumDecl, IrEnumMember, IrFunctionDecl, IrInterfaceDecl,
    IrInterfaceMember, IrModule, IrStmt, IrStmtKind, IrSwitchCase, IrType, IrTypeAliasDecl,
};
use struxc_ir::Name;

use crate::context::BuildContext;
use crate::convert::expr::{convert_expr, convert_param};
use crate::convert::ty::convert_type;

pub fn convert_module(module: &SourceModule, ctx: &mut BuildContext<'_>) -> IrModule {
    IrModule { statements: convert_block(&module.statements, ctx) }
}

pub fn convert_block(stmts: &[Stmt], ctx: &mut BuildContext<'_>) -> Vec<IrStmt> {
    stmts.iter().map(|s| convert_stmt(s, ctx)).collect()
}

fn generic_names(generics: &[GenericParam]) -> Vec<Name> {
    generics.iter().map(|g| g.name).collect()
}

fn convert_stmt(stmt: &Stmt, ctx: &mut BuildContext<'_>) -> IrStmt {
    let kind = match &stmt.kind {
        StmtKind::VarDecl { kind, pattern, ty, init } => IrStmtKind::VarDecl {
            kind: *kind,
            pattern: pattern.clone(),
            ty: ty.as_ref().map(|t| convert_type(t, ctx)),
            init: init.as_ref().map(|e| convert_expr(e, ctx)),
        },
        StmtKind::Function(decl) => IrStmtKind::Function(Box::new(convert_function(decl, false, ctx))),
        StmtKind::Class(decl) => IrStmtKind::Class(Box::new(convert_class(decl, false, ctx))),
        StmtKind::Interface(decl) => IrStmtKind::Interface(Box::new(convert_interface(decl, false, ctx))),
        StmtKind::Enum(decl) => IrStmtKind::Enum(Box::new(convert_enum(decl, false, ctx))),
        StmtKind::TypeAlias(decl) => IrStmtKind::TypeAlias(Box::new(convert_type_alias(decl, false, ctx))),
        StmtKind::ExprStmt(e) => IrStmtKind::ExprStmt(convert_expr(e, ctx)),
        StmtKind::Block(stmts) => IrStmtKind::Block(convert_block(stmts, ctx)),
        StmtKind::If { test, consequent, alternate } => IrStmtKind::If {
            test: convert_expr(test, ctx),
            consequent: Box::new(convert_stmt(consequent, ctx)),
            alternate: alternate.as_ref().map(|s| Box::new(convert_stmt(s, ctx))),
        },
        StmtKind::While { test, body } => IrStmtKind::While { test: convert_expr(test, ctx), body: Box::new(convert_stmt(body, ctx)) },
        StmtKind::DoWhile { body, test } => {
            IrStmtKind::DoWhile { body: Box::new(convert_stmt(body, ctx)), test: convert_expr(test, ctx) }
        }
        StmtKind::For { init, test, update, body } => IrStmtKind::For {
            init: init.as_ref().map(|s| Box::new(convert_stmt(s, ctx))),
            test: test.as_ref().map(|e| convert_expr(e, ctx)),
            update: update.as_ref().map(|e| convert_expr(e, ctx)),
            body: Box::new(convert_stmt(body, ctx)),
            // Filled in by the Numeric Proof Pass (spec §4.6 pass 5); the
            // IR Builder always starts a loop unproven.
            counter_proven_int32: false,
        },
        StmtKind::ForOf { pattern, is_await, iterable, body } => IrStmtKind::ForOf {
            pattern: pattern.clone(),
            iterable: convert_expr(iterable, ctx),
            body: Box::new(convert_stmt(body, ctx)),
            is_await: *is_await,
        },
        StmtKind::ForIn { pattern, object, body } => {
            IrStmtKind::ForIn { pattern: pattern.clone(), object: convert_expr(object, ctx), body: Box::new(convert_stmt(body, ctx)) }
        }
        StmtKind::Switch { discriminant, cases } => IrStmtKind::Switch {
            discriminant: convert_expr(discriminant, ctx),
            cases: cases
                .iter()
                .map(|c| IrSwitchCase { test: c.test.as_ref().map(|e| convert_expr(e, ctx)), body: convert_block(&c.body, ctx) })
                .collect(),
        },
        StmtKind::Try { block, handler, finalizer } => IrStmtKind::Try {
            block: convert_block(block, ctx),
            handler: handler.as_ref().map(|h| IrCatchClause { param: h.param.clone(), body: convert_block(&h.body, ctx) }),
            finalizer: finalizer.as_ref().map(|f| convert_block(f, ctx)),
        },
        StmtKind::Throw(e) => IrStmtKind::Throw(convert_expr(e, ctx)),
        StmtKind::Return(e) => IrStmtKind::Return(e.as_ref().map(|e| convert_expr(e, ctx))),
        StmtKind::Break(label) => IrStmtKind::Break(*label),
        StmtKind::Continue(label) => IrStmtKind::Continue(*label),
        StmtKind::Labeled { label, body } => IrStmtKind::Labeled { label: *label, body: Box::new(convert_stmt(body, ctx)) },
        // Import/export forms are fully resolved by the Module Graph
        // Builder and Binding Layer before the IR Builder runs (spec §4.2,
        // §4.3); the IR tree itself has no statement-position form for
        // them, `export`-wrapped declarations just lower their inner
        // declaration with `is_exported: true`.
        StmtKind::Import(_) => IrStmtKind::Empty,
        StmtKind::Export(export) => return convert_export(stmt, export, ctx),
        StmtKind::Empty => IrStmtKind::Empty,
    };
    IrStmt { kind, span: stmt.span }
}

fn convert_export(stmt: &Stmt, export: &ExportDecl, ctx: &mut BuildContext<'_>) -> IrStmt {
    match export {
        ExportDecl::Inline(inner) => {
            let kind = match &inner.kind {
                StmtKind::Function(decl) => IrStmtKind::Function(Box::new(convert_function(decl, true, ctx))),
                StmtKind::Class(decl) => IrStmtKind::Class(Box::new(convert_class(decl, true, ctx))),
                StmtKind::Interface(decl) => IrStmtKind::Interface(Box::new(convert_interface(decl, true, ctx))),
                StmtKind::Enum(decl) => IrStmtKind::Enum(Box::new(convert_enum(decl, true, ctx))),
                StmtKind::TypeAlias(decl) => IrStmtKind::TypeAlias(Box::new(convert_type_alias(decl, true, ctx))),
                StmtKind::VarDecl { kind, pattern, ty, init } => IrStmtKind::VarDecl {
                    kind: *kind,
                    pattern: pattern.clone(),
                    ty: ty.as_ref().map(|t| convert_type(t, ctx)),
                    init: init.as_ref().map(|e| convert_expr(e, ctx)),
                },
                other => return convert_stmt(&Stmt { span: inner.span, kind: other.clone() }, ctx),
            };
            IrStmt { kind, span: stmt.span }
        }
        // Re-export forms carry no executable semantics of their own; the
        // Module Graph Builder already folded them into each module's
        // export map (spec §4.2).
        ExportDecl::Named { .. } | ExportDecl::ReExport { .. } => IrStmt { kind: IrStmtKind::Empty, span: stmt.span },
        ExportDecl::Default(e) => {
            IrStmt { kind: IrStmtKind::ExprStmt(convert_expr(e, ctx)), span: stmt.span }
        }
    }
}

/// A generator's declared return type is `Generator<TYield, TReturn,
/// TNext>` (or its async counterpart) when annotated; a present `TNext`
/// argument is the "uses the next type argument" signal spec §4.5 keys
/// bidirectional-generator detection on.
fn is_bidirectional_generator(return_type: Option<&IrType>, interner: &struxc_ir::StringInterner) -> bool {
    matches!(
        return_type,
        Some(IrType::Reference { name, type_args, .. })
            if matches!(interner.resolve(*name), "Generator" | "AsyncGenerator") && type_args.len() >= 3
    )
}

fn convert_function(decl: &FunctionDecl, is_exported: bool, ctx: &mut BuildContext<'_>) -> IrFunctionDecl {
    let generics = generic_names(&decl.generics);
    ctx.push_type_params(&generics);
    let params = decl.params.iter().map(|p| convert_param(p, ctx)).collect();
    let return_type = decl.return_type.as_ref().map(|t| convert_type(t, ctx));
    let body = convert_block(&decl.body, ctx);
    ctx.pop_type_params(generics.len());
    let is_bidirectional = decl.is_generator && is_bidirectional_generator(return_type.as_ref(), ctx.interner);
    IrFunctionDecl {
        name: decl.name,
        generics,
        params,
        return_type,
        body,
        is_async: decl.is_async,
        is_generator: decl.is_generator,
        is_bidirectional_generator: is_bidirectional,
        is_exported: is_exported || decl.is_exported,
        span: decl.span,
    }
}

fn convert_class(decl: &ClassDecl, is_exported: bool, ctx: &mut BuildContext<'_>) -> IrClassDecl {
    let generics = generic_names(&decl.generics);
    ctx.push_type_params(&generics);
    let extends = decl.extends.as_ref().map(|t| convert_type(t, ctx));
    let implements = decl.implements.iter().map(|t| convert_type(t, ctx)).collect();
    let members = decl.members.iter().map(|m| convert_class_member(m, ctx)).collect();
    ctx.pop_type_params(generics.len());
    IrClassDecl { name: decl.name, generics, extends, implements, members, is_exported: is_exported || decl.is_exported, span: decl.span }
}

fn convert_class_member(member: &ClassMember, ctx: &mut BuildContext<'_>) -> IrClassMember {
    match member {
        ClassMember::Field { name, ty, init, visibility, is_static, is_readonly, span } => IrClassMember::Field {
            name: *name,
            ty: ty.as_ref().map(|t| convert_type(t, ctx)),
            init: init.as_ref().map(|e| convert_expr(e, ctx)),
            visibility: *visibility,
            is_static: *is_static,
            is_readonly: *is_readonly,
            span: *span,
        },
        ClassMember::Method { name, generics, params, return_type, body, visibility, is_static, is_override, is_abstract, is_async, is_generator, span } => {
            let method_generics = generics.iter().map(|g| g.name).collect::<Vec<_>>();
            ctx.push_type_params(&method_generics);
            let params = params.iter().map(|p| convert_param(p, ctx)).collect();
            let return_type = return_type.as_ref().map(|t| convert_type(t, ctx));
            let body = body.as_ref().map(|b| convert_block(b, ctx));
            ctx.pop_type_params(method_generics.len());
            IrClassMember::Method {
                name: *name,
                generics: method_generics,
                params,
                return_type,
                body,
                visibility: *visibility,
                is_static: *is_static,
                is_override: *is_override,
                is_abstract: *is_abstract,
                is_async: *is_async,
                is_generator: *is_generator,
                span: *span,
            }
        }
        ClassMember::Constructor { params, body, visibility, span } => {
            let params = params.iter().map(|p| convert_param(p, ctx)).collect();
            let (super_call, rest) = lift_super_call(body, ctx);
            IrClassMember::Constructor { params, super_call, body: rest, visibility: *visibility, span: *span }
        }
        ClassMember::Property { name, ty, getter, setter, visibility, is_static, span } => IrClassMember::Property {
            name: *name,
            ty: ty.as_ref().map(|t| convert_type(t, ctx)),
            getter: getter.as_ref().map(|g| convert_block(g, ctx)),
            setter: setter.as_ref().map(|(p, b)| (convert_param(p, ctx), convert_block(b, ctx))),
            visibility: *visibility,
            is_static: *is_static,
            span: *span,
        },
    }
}

/// Lifts a leading `super(args)` call out of a constructor body (spec §4.7
/// Member Emitter: it becomes `: base(args)`, not a statement). A `super`
/// call anywhere else in the body is left as an ordinary call expression —
/// the Naming-Collision/soundness passes catch that as an error later,
/// this conversion step only handles the one legal position.
fn lift_super_call(body: &[Stmt], ctx: &mut BuildContext<'_>) -> (Option<Vec<struxc_ir::ir::IrExpr>>, Vec<IrStmt>) {
    use struxc_ir::ast::{ExprKind, StmtKind as SK};

    let Some(first) = body.first() else { return (None, Vec::new()) };
    if let SK::ExprStmt(expr) = &first.kind {
        if let ExprKind::Call { callee, args, .. } = &expr.kind {
            if matches!(&callee.kind, ExprKind::Identifier(n) if ctx.interner.resolve(*n) == "super") {
                let converted_args = args.iter().map(|a| convert_expr(&a.expr, ctx)).collect();
                let rest = convert_block(&body[1..], ctx);
                return (Some(converted_args), rest);
            }
        }
    }
    (None, convert_block(body, ctx))
}

fn convert_interface(decl: &InterfaceDecl, is_exported: bool, ctx: &mut BuildContext<'_>) -> IrInterfaceDecl {
    let generics = generic_names(&decl.generics);
    ctx.push_type_params(&generics);
    let extends = decl.extends.iter().map(|t| convert_type(t, ctx)).collect();
    let members = decl
        .members
        .iter()
        .map(|m| IrInterfaceMember { name: m.name, ty: convert_type(&m.ty, ctx), optional: m.optional, is_method: m.is_method, span: m.span })
        .collect();
    ctx.pop_type_params(generics.len());
    IrInterfaceDecl { name: decl.name, generics, extends, members, is_exported: is_exported || decl.is_exported, span: decl.span }
}

fn convert_enum(decl: &EnumDecl, is_exported: bool, ctx: &mut BuildContext<'_>) -> IrEnumDecl {
    IrEnumDecl {
        name: decl.name,
        members: decl
            .members
            .iter()
            .map(|m| IrEnumMember { name: m.name, init: m.init.as_ref().map(|e| convert_expr(e, ctx)), span: m.span })
            .collect(),
        is_const: decl.is_const,
        is_exported: is_exported || decl.is_exported,
        span: decl.span,
    }
}

fn convert_type_alias(decl: &TypeAliasDecl, is_exported: bool, ctx: &mut BuildContext<'_>) -> IrTypeAliasDecl {
    let generics = generic_names(&decl.generics);
    ctx.push_type_params(&generics);
    let ty = convert_type(&decl.ty, ctx);
    ctx.pop_type_params(generics.len());
    // A structural alias is one whose expanded form is an `Object`,
    // `Union`, `Intersection`, or `Dictionary` shape rather than a plain
    // reference/primitive — it needs the `T__Alias` companion class (spec
    // §4.7); anything else is erased at every use site instead.
    let is_structural = matches!(
        ty,
        struxc_ir::ir::IrType::Object { .. }
            | struxc_ir::ir::IrType::Union(_)
            | struxc_ir::ir::IrType::Intersection(_)
            | struxc_ir::ir::IrType::Dictionary { .. }
    );
    IrTypeAliasDecl { name: decl.name, generics, ty, is_structural, is_exported: is_exported || decl.is_exported, span: decl.span }
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_ir::StringInterner;

    #[test]
    fn three_type_args_is_bidirectional() {
        let mut interner = StringInterner::new();
        let name = interner.intern("Generator");
        let ty = IrType::Reference {
            name,
            type_args: vec![IrType::Void, IrType::Void, IrType::Void],
            clr_binding: None,
            structural_members: None,
        };
        assert!(is_bidirectional_generator(Some(&ty), &interner));
    }

    #[test]
    fn one_type_arg_is_not_bidirectional() {
        let mut interner = StringInterner::new();
        let name = interner.intern("Generator");
        let ty = IrType::Reference { name, type_args: vec![IrType::Void], clr_binding: None, structural_members: None };
        assert!(!is_bidirectional_generator(Some(&ty), &interner));
    }

    #[test]
    fn unrelated_reference_is_not_a_generator() {
        let mut interner = StringInterner::new();
        let name = interner.intern("Array");
        let ty = IrType::Reference {
            name,
            type_args: vec![IrType::Void, IrType::Void, IrType::Void],
            clr_binding: None,
            structural_members: None,
        };
        assert!(!is_bidirectional_generator(Some(&ty), &interner));
    }

    #[test]
    fn no_return_type_is_not_bidirectional() {
        let interner = StringInterner::new();
        assert!(!is_bidirectional_generator(None, &interner));
    }
}
