//! Import Resolution (spec §4.7): every reference in the emitted output is
//! fully qualified with `global::`, so a module's own imports never need a
//! `using` directive — the Printer's `usings` list only ever carries
//! framework namespaces a Type/Expression Emitter rule reaches for
//! (`global::System.Collections.Generic`, etc. are referenced inline, not
//! imported, so in practice this list stays empty unless a future rule adds
//! to it). A structural type alias keeps a `T__Alias` companion class so
//! other modules can refer to it nominally; a non-structural alias is
//! erased at its use sites during the IR Builder and never reaches here.

use struxc_ir::ir::IrTypeAliasDecl;

use crate::backend::{BTypeDecl, BVisibility};
use crate::context::EmitContext;

/// Emits the `T__Alias` companion class for a structural type alias —
/// a thin subclass of the structural adapter for the alias's expanded
/// object shape, so call sites can spell the alias name nominally.
#[must_use]
pub fn alias_companion(decl: &IrTypeAliasDecl, ctx: &mut EmitContext<'_>) -> Option<BTypeDecl> {
    if !decl.is_structural {
        return None;
    }
    let struxc_ir::ir::IrType::Object { members } = &decl.ty else {
        return None;
    };
    let base = crate::adapter::ensure_adapter(members, ctx);
    let mut out = BTypeDecl::class(format!("{}__Alias", ctx.resolve(decl.name)));
    out.base = Some(base);
    out.visibility = if decl.is_exported { BVisibility::Public } else { BVisibility::Internal };
    Some(out)
}

/// Every reference a module emits is already `global::`-qualified by the
/// Type Emitter, so there is nothing left for this to resolve at assembly
/// time beyond collecting framework usings a rule may have needed; no
/// per-module import list is threaded through because none is needed.
#[must_use]
pub fn framework_usings() -> Vec<String> {
    Vec::new()
}
