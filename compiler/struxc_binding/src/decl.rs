//! Declaration-registry entry shapes (spec §4.3).

use struxc_ir::ast::VarKind;
use struxc_ir::{Name, Span};

/// What a [`crate::DeclId`] points at.
///
/// `Imported`/`External` carry the origin information the caller resolved
/// upstream (Module Graph Builder for local imports, the Binding Catalog for
/// CLR members) — the Binding Layer itself never resolves an import path or
/// walks the catalog's inheritance chain; it only records the outcome
/// against the name it binds in scope.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    Parameter { name: Name },
    Variable { name: Name, var_kind: VarKind },
    Function { name: Name },
    Class { name: Name },
    Interface { name: Name },
    Enum { name: Name },
    TypeAlias { name: Name },
    /// A name bound by `import`, resolved to another module in the graph.
    ImportedLocal { name: Name, module_path: String },
    /// A name bound by `import`, resolved to a Binding Catalog entry.
    External { name: Name, clr_name: String },
}

impl DeclKind {
    #[must_use]
    pub fn name(&self) -> Name {
        match *self {
            DeclKind::Parameter { name }
            | DeclKind::Variable { name, .. }
            | DeclKind::Function { name }
            | DeclKind::Class { name }
            | DeclKind::Interface { name }
            | DeclKind::Enum { name }
            | DeclKind::TypeAlias { name }
            | DeclKind::ImportedLocal { name, .. }
            | DeclKind::External { name, .. } => name,
        }
    }

    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, DeclKind::External { .. })
    }

    #[must_use]
    pub fn is_type_level(&self) -> bool {
        matches!(
            self,
            DeclKind::Class { .. } | DeclKind::Interface { .. } | DeclKind::Enum { .. } | DeclKind::TypeAlias { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclInfo {
    pub kind: DeclKind,
    pub span: Span,
}
