//! Emission context (spec §4.7), grounded on the IR Builder's
//! `BuildContext` and on `ori_codegen::context::CodegenContext`'s
//! write-buffer/name-mangling conventions, adapted here to collect
//! synthesized companion declarations instead of direct text output.

use rustc_hash::FxHashSet;
use struxc_diagnostic::{Diagnostic, DiagnosticBag, ErrorCode};
use struxc_ir::{Span, StringInterner};

use crate::backend::BTypeDecl;

pub struct EmitContext<'a> {
    pub interner: &'a StringInterner,
    pub bag: &'a mut DiagnosticBag,
    pub file: &'a str,
    pub source: &'a str,
    /// Structural adapters, monomorphized specializations and generator
    /// exchange/wrapper classes generated while emitting this module;
    /// these get prepended to the namespace ahead of the source's own
    /// top-level declarations (spec §4.7 "Assembly rule").
    extra_types: Vec<BTypeDecl>,
    /// Monomorphized-function forwarding stubs synthesized while emitting
    /// this module's calls; spliced into the static container class's
    /// members alongside the module's own top-level functions.
    extra_members: Vec<crate::backend::BMember>,
    generated_names: FxHashSet<String>,
    temp_counter: u32,
}

impl<'a> EmitContext<'a> {
    pub fn new(interner: &'a StringInterner, bag: &'a mut DiagnosticBag, file: &'a str, source: &'a str) -> Self {
        EmitContext { interner, bag, file, source, extra_types: Vec::new(), extra_members: Vec::new(), generated_names: FxHashSet::default(), temp_counter: 0 }
    }

    #[must_use]
    pub fn resolve(&self, name: struxc_ir::Name) -> &str {
        self.interner.resolve(name)
    }

    pub fn line_of(&self, span: Span) -> u32 {
        struxc_diagnostic::line_of_offset(self.source, span.start)
    }

    pub fn report(&mut self, code: ErrorCode, span: Span, message: impl Into<String>) {
        let line = self.line_of(span);
        self.bag.push(Diagnostic::error(code, self.file.to_string(), line, span, message));
    }

    /// Registers a synthesized top-level declaration once per unique name
    /// (adapters/specializations/exchange classes are each keyed by their
    /// generated name, since re-emission for repeated call sites would
    /// otherwise duplicate the class).
    pub fn push_extra_type(&mut self, decl: BTypeDecl) {
        if self.generated_names.insert(decl.name.clone()) {
            self.extra_types.push(decl);
        }
    }

    #[must_use]
    pub fn has_extra_type(&self, name: &str) -> bool {
        self.generated_names.contains(name)
    }

    pub fn take_extra_types(&mut self) -> Vec<BTypeDecl> {
        std::mem::take(&mut self.extra_types)
    }

    /// Registers a synthesized top-level member (a monomorphization
    /// forwarding stub) once per unique name, mirroring [`Self::push_extra_type`].
    pub fn push_extra_member(&mut self, member: crate::backend::BMember, name: &str) {
        if self.generated_names.insert(name.to_string()) {
            self.extra_members.push(member);
        }
    }

    #[must_use]
    pub fn has_extra_member(&self, name: &str) -> bool {
        self.generated_names.contains(name)
    }

    pub fn take_extra_members(&mut self) -> Vec<crate::backend::BMember> {
        std::mem::take(&mut self.extra_members)
    }

    pub fn fresh_temp(&mut self) -> String {
        let n = self.temp_counter;
        self.temp_counter += 1;
        format!("__tmp{n}")
    }
}
