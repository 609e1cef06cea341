//! The Binding Layer (spec §4.3).
//!
//! This is the only crate permitted to resolve a source-language identifier
//! or type reference against a declaration. Everything after it in the
//! pipeline (`struxc_types`, `struxc_build`) works purely in terms of the
//! opaque handles defined here — it never walks scope or re-inspects an
//! `Expr`/`ParsedType` to figure out what a name refers to.

mod decl;
mod ids;
mod imports;
mod layer;
mod registry;
mod scope;
mod walk;

pub use decl::{DeclInfo, DeclKind};
pub use ids::{DeclId, SignatureId, TypeSyntaxId};
pub use imports::{ImportBindings, ImportOrigin};
pub use layer::BindingLayer;
pub use registry::{DeclarationRegistry, SignatureInfo, SignatureOrigin, SignatureRegistry, TypeSyntaxRegistry};

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_catalog::Catalog;
    use struxc_ir::StringInterner;
    use pretty_assertions::assert_eq;

    fn resolve(source: &str) -> (BindingLayer, StringInterner) {
        let mut interner = StringInterner::new();
        let module = struxc_parse::parse_module(source, &mut interner).expect("parses");
        let catalog = Catalog::default();
        let imports = ImportBindings::new();
        let layer = BindingLayer::resolve_module(&module, &catalog, &imports, &interner);
        (layer, interner)
    }

    #[test]
    fn resolves_local_variable_reference() {
        let (layer, _interner) = resolve("let x = 1; let y = x;");
        assert_eq!(layer.handle_registry().len(), 2);
        assert!(!layer.identifiers.is_empty());
    }

    #[test]
    fn resolves_forward_reference_to_hoisted_function() {
        let (layer, _interner) = resolve("function main() { helper(); } function helper() {}");
        // `main`'s body calls `helper`, declared afterwards; hoisting means
        // the call site should resolve to a signature anyway.
        assert_eq!(layer.call_signatures.len(), 1);
    }

    #[test]
    fn resolves_call_to_earlier_declared_function() {
        let mut interner = StringInterner::new();
        let source = "function helper(a: number): number { return a; } function main() { helper(1); }";
        let module = struxc_parse::parse_module(source, &mut interner).expect("parses");
        let catalog = Catalog::default();
        let imports = ImportBindings::new();
        let layer = BindingLayer::resolve_module(&module, &catalog, &imports, &interner);
        assert_eq!(layer.call_signatures.len(), 1);
        let (_, sig_id) = layer.call_signatures.iter().next().unwrap();
        let sig = layer.signature_registry().get(*sig_id);
        assert!(matches!(sig.origin, SignatureOrigin::Local { .. }));
    }

    #[test]
    fn unresolved_identifier_yields_no_decl() {
        let (layer, _interner) = resolve("doesNotExist;");
        assert!(layer.identifiers.is_empty());
    }

    #[test]
    fn class_declaration_is_hoisted_and_type_referenceable() {
        let (layer, _interner) = resolve("class Box {} let b: Box = new Box();");
        // the `Box` annotation on `b` should resolve to the class decl.
        assert!(!layer.type_references.is_empty());
    }

    #[test]
    fn captures_type_syntax_for_every_annotation() {
        let (layer, _interner) = resolve("function id(x: number): number { return x; }");
        assert!(layer.type_syntax_registry().len() >= 2);
    }

    #[test]
    fn nested_block_scope_does_not_leak_out() {
        let mut interner = StringInterner::new();
        let source = "function f() { { let inner = 1; } inner; }";
        let module = struxc_parse::parse_module(source, &mut interner).expect("parses");
        let catalog = Catalog::default();
        let imports = ImportBindings::new();
        let layer = BindingLayer::resolve_module(&module, &catalog, &imports, &interner);
        // the trailing top-level `inner;` reference is outside the block and
        // the function body both, so it must not resolve.
        assert!(layer.identifiers.len() <= 1);
    }
}
