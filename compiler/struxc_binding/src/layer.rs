//! The Binding Layer itself (spec §4.3): the firewall between source
//! syntax and the rest of the compiler.
//!
//! No component outside this crate walks scope, resolves an identifier
//! against a declaration, or interprets a `ParsedType` as anything other
//! than a captured syntax tree. Downstream crates (`struxc_types`,
//! `struxc_build`) consume [`DeclId`]/[`SignatureId`]/[`TypeSyntaxId`]
//! handles and the registries below; they never re-walk scope themselves.

use rustc_hash::FxHashMap;
use struxc_catalog::Catalog;
use struxc_ir::ast::{ExportDecl, ImportClause, SourceModule, Stmt, StmtKind};
use struxc_ir::{Span, StringInterner};

use crate::decl::{DeclInfo, DeclKind};
use crate::ids::{DeclId, SignatureId, TypeSyntaxId};
use crate::imports::ImportBindings;
use crate::registry::{DeclarationRegistry, SignatureRegistry, TypeSyntaxRegistry};
use crate::scope::ScopeStack;
use crate::walk::stmt::{register_function_signature, walk_stmt};
use crate::walk::Ctx;

#[derive(Default)]
pub struct BindingLayer {
    pub(crate) declarations: DeclarationRegistry,
    pub(crate) signatures: SignatureRegistry,
    pub(crate) type_syntax: TypeSyntaxRegistry,
    pub(crate) identifiers: FxHashMap<Span, DeclId>,
    pub(crate) type_references: FxHashMap<Span, DeclId>,
    pub(crate) call_signatures: FxHashMap<Span, SignatureId>,
    pub(crate) type_syntax_by_span: FxHashMap<Span, TypeSyntaxId>,
    pub(crate) local_signature_of: FxHashMap<DeclId, SignatureId>,
}

impl BindingLayer {
    /// Resolve one module's worth of syntax. `imports` carries the outcome
    /// of import-path resolution (Module Graph Builder's job, spec §4.2) for
    /// each locally-bound import name in this module.
    #[must_use]
    pub fn resolve_module(
        module: &SourceModule,
        catalog: &Catalog,
        imports: &ImportBindings,
        interner: &StringInterner,
    ) -> BindingLayer {
        let mut layer = BindingLayer::default();
        let mut scope = ScopeStack::new();
        {
            let mut ctx = Ctx { layer: &mut layer, catalog, interner };
            register_imports(&mut ctx, &mut scope, module, imports);
            hoist_top_level(&mut ctx, &mut scope, module);
            for stmt in &module.statements {
                walk_stmt(&mut ctx, &mut scope, stmt);
            }
        }
        layer
    }

    /// `resolveIdentifier(node) → DeclId | None` (spec §4.3). `span` is the
    /// identifier expression's span — the closest thing this AST has to a
    /// stable node identity, since `Expr` carries no separate node id.
    #[must_use]
    pub fn resolve_identifier(&self, span: Span) -> Option<DeclId> {
        self.identifiers.get(&span).copied()
    }

    /// `resolveTypeReference(node) → DeclId | None`.
    #[must_use]
    pub fn resolve_type_reference(&self, span: Span) -> Option<DeclId> {
        self.type_references.get(&span).copied()
    }

    /// `resolveCallSignature(callSite) → SignatureId | None`.
    #[must_use]
    pub fn resolve_call_signature(&self, call_span: Span) -> Option<SignatureId> {
        self.call_signatures.get(&call_span).copied()
    }

    /// The `TypeSyntaxId` captured for a type-annotation node already
    /// visited during [`BindingLayer::resolve_module`], if any.
    #[must_use]
    pub fn captured_type_syntax(&self, span: Span) -> Option<TypeSyntaxId> {
        self.type_syntax_by_span.get(&span).copied()
    }

    /// `captureTypeSyntax(node) → TypeSyntaxId`, callable directly for
    /// syntax the module walk did not itself visit (e.g. a type assembled
    /// on the fly by the IR Builder while expanding a utility type).
    pub fn capture_type_syntax(&mut self, ty: &struxc_ir::ast::ParsedType) -> TypeSyntaxId {
        self.type_syntax.push(ty.clone())
    }

    /// `getHandleRegistry()`: read-only introspection during IR lowering.
    #[must_use]
    pub fn handle_registry(&self) -> &DeclarationRegistry {
        &self.declarations
    }

    #[must_use]
    pub fn signature_registry(&self) -> &SignatureRegistry {
        &self.signatures
    }

    #[must_use]
    pub fn type_syntax_registry(&self) -> &TypeSyntaxRegistry {
        &self.type_syntax
    }
}

fn register_imports(ctx: &mut Ctx<'_>, scope: &mut ScopeStack, module: &SourceModule, imports: &ImportBindings) {
    for import in &module.imports {
        let mut bind_one = |ctx: &mut Ctx<'_>, local_name: struxc_ir::Name, span: Span| {
            let Some(origin) = imports.lookup(local_name) else {
                return;
            };
            let kind = match origin {
                crate::imports::ImportOrigin::Local { module_path } => {
                    DeclKind::ImportedLocal { name: local_name, module_path: module_path.clone() }
                }
                crate::imports::ImportOrigin::External { clr_name } => {
                    DeclKind::External { name: local_name, clr_name: clr_name.clone() }
                }
            };
            let id = ctx.layer.declarations.push(DeclInfo { kind, span });
            scope.define(local_name, id);
        };

        match &import.clause {
            ImportClause::Default(name) => bind_one(ctx, *name, import.span),
            ImportClause::Namespace(name) => bind_one(ctx, *name, import.span),
            ImportClause::Named(specifiers) => {
                for spec in specifiers {
                    bind_one(ctx, spec.local, spec.span);
                }
            }
        }
    }
}

/// Registers every top-level `function`/`class`/`interface`/`enum`/`type`
/// name before any body is walked, so forward references (a function
/// calling another declared later in the file) resolve. `export`-wrapped
/// declarations are unwrapped first; the export form itself carries no
/// separate identity.
fn hoist_top_level(ctx: &mut Ctx<'_>, scope: &mut ScopeStack, module: &SourceModule) {
    for stmt in &module.statements {
        let effective = unwrap_export(stmt);
        match &effective.kind {
            StmtKind::Function(decl) => {
                let Some(name) = decl.name else { continue };
                let id = ctx.layer.declarations.push(DeclInfo { kind: DeclKind::Function { name }, span: effective.span });
                scope.define(name, id);
                register_function_signature(ctx, id, name, decl);
            }
            StmtKind::Class(decl) => {
                let id = ctx.layer.declarations.push(DeclInfo { kind: DeclKind::Class { name: decl.name }, span: effective.span });
                scope.define(decl.name, id);
            }
            StmtKind::Interface(decl) => {
                let id = ctx.layer.declarations.push(DeclInfo { kind: DeclKind::Interface { name: decl.name }, span: effective.span });
                scope.define(decl.name, id);
            }
            StmtKind::Enum(decl) => {
                let id = ctx.layer.declarations.push(DeclInfo { kind: DeclKind::Enum { name: decl.name }, span: effective.span });
                scope.define(decl.name, id);
            }
            StmtKind::TypeAlias(decl) => {
                let id = ctx.layer.declarations.push(DeclInfo { kind: DeclKind::TypeAlias { name: decl.name }, span: effective.span });
                scope.define(decl.name, id);
            }
            _ => {}
        }
    }
}

fn unwrap_export(stmt: &Stmt) -> &Stmt {
    match &stmt.kind {
        StmtKind::Export(ExportDecl::Inline(inner)) => inner.as_ref(),
        _ => stmt,
    }
}
