//! Statement walking: scoping discipline (blocks, loops, `try`/`catch`)
//! plus registration of function-local declarations.

use struxc_ir::ast::{ClassMember, Stmt, StmtKind, VarKind};

use crate::decl::{DeclInfo, DeclKind};
use crate::registry::{SignatureInfo, SignatureOrigin};
use crate::scope::ScopeStack;
use crate::walk::expr::{define_params, walk_expr};
use crate::walk::pattern::define_pattern;
use crate::walk::ty::walk_type_opt;
use crate::walk::Ctx;

pub(crate) fn walk_block(ctx: &mut Ctx<'_>, scope: &mut ScopeStack, stmts: &[Stmt]) {
    scope.push();
    for stmt in stmts {
        walk_stmt(ctx, scope, stmt);
    }
    scope.pop();
}

pub(crate) fn walk_stmt(ctx: &mut Ctx<'_>, scope: &mut ScopeStack, stmt: &Stmt) {
    match &stmt.kind {
        StmtKind::VarDecl { kind, pattern, ty, init } => {
            if let Some(init) = init {
                walk_expr(ctx, scope, init);
            }
            walk_type_opt(ctx, scope, ty.as_ref());
            let var_kind = *kind;
            define_pattern(ctx, scope, pattern, &move |name| DeclKind::Variable { name, var_kind });
        }
        StmtKind::Function(decl) => {
            // Name and top-level signature are already registered by the
            // hoisting pass; here we only walk the body in its own scope.
            scope.push();
            define_params(ctx, scope, &decl.params);
            walk_type_opt(ctx, scope, decl.return_type.as_ref());
            for s in &decl.body {
                walk_stmt(ctx, scope, s);
            }
            scope.pop();
        }
        StmtKind::Class(decl) => {
            walk_type_opt(ctx, scope, decl.extends.as_ref());
            for impl_ty in &decl.implements {
                crate::walk::ty::walk_type(ctx, scope, impl_ty);
            }
            for member in &decl.members {
                walk_class_member(ctx, scope, member);
            }
        }
        StmtKind::Interface(decl) => {
            for ext in &decl.extends {
                crate::walk::ty::walk_type(ctx, scope, ext);
            }
            for member in &decl.members {
                crate::walk::ty::walk_type(ctx, scope, &member.ty);
            }
        }
        StmtKind::Enum(decl) => {
            for member in &decl.members {
                if let Some(init) = &member.init {
                    walk_expr(ctx, scope, init);
                }
            }
        }
        StmtKind::TypeAlias(decl) => crate::walk::ty::walk_type(ctx, scope, &decl.ty),
        StmtKind::ExprStmt(expr) => walk_expr(ctx, scope, expr),
        StmtKind::Block(stmts) => walk_block(ctx, scope, stmts),
        StmtKind::If { test, consequent, alternate } => {
            walk_expr(ctx, scope, test);
            walk_stmt(ctx, scope, consequent);
            if let Some(alt) = alternate {
                walk_stmt(ctx, scope, alt);
            }
        }
        StmtKind::While { test, body } => {
            walk_expr(ctx, scope, test);
            walk_stmt(ctx, scope, body);
        }
        StmtKind::DoWhile { body, test } => {
            walk_stmt(ctx, scope, body);
            walk_expr(ctx, scope, test);
        }
        StmtKind::For { init, test, update, body } => {
            scope.push();
            if let Some(init) = init {
                walk_stmt(ctx, scope, init);
            }
            if let Some(test) = test {
                walk_expr(ctx, scope, test);
            }
            if let Some(update) = update {
                walk_expr(ctx, scope, update);
            }
            walk_stmt(ctx, scope, body);
            scope.pop();
        }
        StmtKind::ForOf { pattern, iterable, body, .. } => {
            walk_expr(ctx, scope, iterable);
            scope.push();
            define_pattern(ctx, scope, pattern, &|name| DeclKind::Variable { name, var_kind: VarKind::Let });
            walk_stmt(ctx, scope, body);
            scope.pop();
        }
        StmtKind::ForIn { pattern, object, body } => {
            walk_expr(ctx, scope, object);
            scope.push();
            define_pattern(ctx, scope, pattern, &|name| DeclKind::Variable { name, var_kind: VarKind::Let });
            walk_stmt(ctx, scope, body);
            scope.pop();
        }
        StmtKind::Switch { discriminant, cases } => {
            walk_expr(ctx, scope, discriminant);
            scope.push();
            for case in cases {
                if let Some(test) = &case.test {
                    walk_expr(ctx, scope, test);
                }
                for s in &case.body {
                    walk_stmt(ctx, scope, s);
                }
            }
            scope.pop();
        }
        StmtKind::Try { block, handler, finalizer } => {
            walk_block(ctx, scope, block);
            if let Some(handler) = handler {
                scope.push();
                if let Some(param) = &handler.param {
                    define_pattern(ctx, scope, param, &|name| DeclKind::Variable { name, var_kind: VarKind::Let });
                }
                for s in &handler.body {
                    walk_stmt(ctx, scope, s);
                }
                scope.pop();
            }
            if let Some(finalizer) = finalizer {
                walk_block(ctx, scope, finalizer);
            }
        }
        StmtKind::Throw(expr) => walk_expr(ctx, scope, expr),
        StmtKind::Return(expr) => {
            if let Some(expr) = expr {
                walk_expr(ctx, scope, expr);
            }
        }
        StmtKind::Break(_) | StmtKind::Continue(_) | StmtKind::Empty => {}
        StmtKind::Labeled { body, .. } => walk_stmt(ctx, scope, body),
        StmtKind::Import(_) => {
            // Handled up front by `register_imports`; nothing left to walk.
        }
        StmtKind::Export(decl) => walk_export(ctx, scope, decl),
    }
}

fn walk_export(ctx: &mut Ctx<'_>, scope: &mut ScopeStack, decl: &struxc_ir::ast::ExportDecl) {
    use struxc_ir::ast::ExportDecl;
    match decl {
        ExportDecl::Inline(inner) => walk_stmt(ctx, scope, inner),
        ExportDecl::Named { .. } | ExportDecl::ReExport { .. } => {
            // Re-exports resolve against the Export Map (§4.2), not scope.
        }
        ExportDecl::Default(expr) => walk_expr(ctx, scope, expr),
    }
}

fn walk_class_member(ctx: &mut Ctx<'_>, scope: &mut ScopeStack, member: &ClassMember) {
    match member {
        ClassMember::Field { ty, init, .. } => {
            walk_type_opt(ctx, scope, ty.as_ref());
            if let Some(init) = init {
                walk_expr(ctx, scope, init);
            }
        }
        ClassMember::Method { params, return_type, body, .. } => {
            scope.push();
            define_params(ctx, scope, params);
            walk_type_opt(ctx, scope, return_type.as_ref());
            if let Some(body) = body {
                for s in body {
                    walk_stmt(ctx, scope, s);
                }
            }
            scope.pop();
        }
        ClassMember::Constructor { params, body, .. } => {
            scope.push();
            define_params(ctx, scope, params);
            for s in body {
                walk_stmt(ctx, scope, s);
            }
            scope.pop();
        }
        ClassMember::Property { ty, getter, setter, .. } => {
            walk_type_opt(ctx, scope, ty.as_ref());
            if let Some(getter) = getter {
                scope.push();
                for s in getter {
                    walk_stmt(ctx, scope, s);
                }
                scope.pop();
            }
            if let Some((param, body)) = setter {
                scope.push();
                define_params(ctx, scope, std::slice::from_ref(param));
                for s in body {
                    walk_stmt(ctx, scope, s);
                }
                scope.pop();
            }
        }
    }
}

/// Registers a local function's signature against its already-hoisted
/// `DeclId`, so call sites that resolve to it also get a `SignatureId`
/// (spec §4.3 `resolveCallSignature`).
pub(crate) fn register_function_signature(
    ctx: &mut Ctx<'_>,
    decl_id: crate::ids::DeclId,
    name: struxc_ir::Name,
    decl: &struxc_ir::ast::FunctionDecl,
) {
    let sig_id = ctx.layer.signatures.push(SignatureInfo {
        name,
        params: decl.params.clone(),
        return_type: decl.return_type.clone(),
        is_async: decl.is_async,
        is_generator: decl.is_generator,
        origin: SignatureOrigin::Local { decl: decl_id },
    });
    ctx.layer.local_signature_of.insert(decl_id, sig_id);
}
