//! Shared state threaded through statement/expression/type conversion
//! (spec §4.5). One `BuildContext` per module: it owns nothing that
//! outlives the module it was built for except the interner and diagnostic
//! bag, which are per-compilation.

use struxc_binding::BindingLayer;
use struxc_catalog::Catalog;
use struxc_diagnostic::DiagnosticBag;
use struxc_ir::{Name, StringInterner};
use struxc_types::{AwaitableNames, TypeRegistry};

pub struct BuildContext<'a> {
    pub binding: &'a BindingLayer,
    pub catalog: &'a Catalog,
    pub types: &'a TypeRegistry,
    pub interner: &'a mut StringInterner,
    pub bag: &'a mut DiagnosticBag,
    pub awaitable: &'a AwaitableNames,
    /// The module's canonical path, used as the `file` field of every
    /// diagnostic this context's conversion raises.
    pub file: &'a str,
    /// Full source text, used to compute 1-based line numbers for
    /// diagnostics from a byte-offset span.
    pub source: &'a str,
    /// Type-parameter names currently in scope, pushed/popped around each
    /// generic function/method/class/interface/alias body by the statement
    /// converter. A bare `Named` type whose name is in here is a type
    /// parameter, not a reference to a declared/catalog type.
    type_params: Vec<Name>,
}

impl<'a> BuildContext<'a> {
    #[must_use]
    pub fn line_of(&self, span: struxc_ir::Span) -> u32 {
        struxc_diagnostic::line_of_offset(self.source, span.start)
    }

    pub fn new(
        binding: &'a BindingLayer,
        catalog: &'a Catalog,
        types: &'a TypeRegistry,
        interner: &'a mut StringInterner,
        bag: &'a mut DiagnosticBag,
        awaitable: &'a AwaitableNames,
        file: &'a str,
        source: &'a str,
    ) -> Self {
        Self { binding, catalog, types, interner, bag, awaitable, file, source, type_params: Vec::new() }
    }

    pub fn push_type_params(&mut self, params: &[Name]) {
        self.type_params.extend_from_slice(params);
    }

    pub fn pop_type_params(&mut self, count: usize) {
        let new_len = self.type_params.len().saturating_sub(count);
        self.type_params.truncate(new_len);
    }

    #[must_use]
    pub fn is_type_param(&self, name: Name) -> bool {
        self.type_params.contains(&name)
    }
}
