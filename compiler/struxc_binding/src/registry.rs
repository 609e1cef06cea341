//! The three append-only registries the Binding Layer owns (spec §4.3, §5):
//! declarations, call signatures, and captured inline type syntax. Handles
//! are stable for the life of the compilation — nothing is ever removed or
//! renumbered.

use struxc_catalog::MethodEntry;
use struxc_ir::ast::{Param, ParsedType};
use struxc_ir::Name;

use crate::decl::DeclInfo;
use crate::ids::{DeclId, SignatureId, TypeSyntaxId};

#[derive(Default, Debug)]
pub struct DeclarationRegistry {
    decls: Vec<DeclInfo>,
}

impl DeclarationRegistry {
    pub(crate) fn push(&mut self, info: DeclInfo) -> DeclId {
        let id = DeclId::from_raw(self.decls.len() as u32);
        self.decls.push(info);
        id
    }

    #[must_use]
    pub fn get(&self, id: DeclId) -> &DeclInfo {
        &self.decls[id.raw() as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &DeclInfo)> {
        self.decls.iter().enumerate().map(|(i, d)| (DeclId::from_raw(i as u32), d))
    }
}

/// Where a registered [`SignatureInfo`] resolves to: a locally declared
/// function/method, or a catalog method reached via a resolved CLR binding.
#[derive(Debug, Clone)]
pub enum SignatureOrigin {
    Local { decl: DeclId },
    External { type_clr_name: String, method: MethodEntry },
}

#[derive(Debug, Clone)]
pub struct SignatureInfo {
    pub name: Name,
    pub params: Vec<Param>,
    pub return_type: Option<ParsedType>,
    pub is_async: bool,
    pub is_generator: bool,
    pub origin: SignatureOrigin,
}

#[derive(Default, Debug)]
pub struct SignatureRegistry {
    signatures: Vec<SignatureInfo>,
}

impl SignatureRegistry {
    pub(crate) fn push(&mut self, info: SignatureInfo) -> SignatureId {
        let id = SignatureId::from_raw(self.signatures.len() as u32);
        self.signatures.push(info);
        id
    }

    #[must_use]
    pub fn get(&self, id: SignatureId) -> &SignatureInfo {
        &self.signatures[id.raw() as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

/// Captured inline type syntax (spec §4.3 `captureTypeSyntax`), kept around
/// so the Type System can re-walk the original annotation when a utility
/// type is applied to a still-open type parameter and must be deferred
/// rather than expanded immediately (spec §4.5).
#[derive(Default, Debug)]
pub struct TypeSyntaxRegistry {
    entries: Vec<ParsedType>,
}

impl TypeSyntaxRegistry {
    pub(crate) fn push(&mut self, ty: ParsedType) -> TypeSyntaxId {
        let id = TypeSyntaxId::from_raw(self.entries.len() as u32);
        self.entries.push(ty);
        id
    }

    #[must_use]
    pub fn get(&self, id: TypeSyntaxId) -> &ParsedType {
        &self.entries[id.raw() as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
