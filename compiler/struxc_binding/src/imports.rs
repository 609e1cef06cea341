//! Per-module import resolution results, handed to the Binding Layer by its
//! caller.
//!
//! Resolving an import *source string* to either another graph module or a
//! Binding Catalog namespace is the Module Graph Builder's job (spec §4.2);
//! the Binding Layer is only told the outcome for each locally-bound import
//! name, and records it verbatim against the name it binds in scope.

use rustc_hash::FxHashMap;
use struxc_ir::Name;

#[derive(Debug, Clone)]
pub enum ImportOrigin {
    /// Resolves to another module already present in the Module Map.
    Local { module_path: String },
    /// Resolves to a Binding Catalog entry by fully-qualified CLR name.
    External { clr_name: String },
}

/// Maps each locally-bound import specifier name (the local alias, if one
/// was given, else the imported name) to its resolved origin.
#[derive(Default, Debug, Clone)]
pub struct ImportBindings {
    origins: FxHashMap<Name, ImportOrigin>,
}

impl ImportBindings {
    #[must_use]
    pub fn new() -> Self {
        ImportBindings::default()
    }

    pub fn bind(&mut self, local_name: Name, origin: ImportOrigin) {
        self.origins.insert(local_name, origin);
    }

    #[must_use]
    pub fn lookup(&self, name: Name) -> Option<&ImportOrigin> {
        self.origins.get(&name)
    }
}
