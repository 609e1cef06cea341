//! Opaque handles issued by the [`crate::layer::BindingLayer`] (spec §4.3).
//!
//! Everything downstream of the Binding Layer references source-language
//! declarations, call signatures, and captured type syntax only through
//! these indices — never through a syntax node or a name. This is the same
//! discipline as the teacher's unified type index (`Idx`), scaled down to
//! three separate pools instead of one: declarations, signatures, and
//! captured type syntax are registered independently and have no shared
//! numbering.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclId(u32);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SignatureId(u32);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeSyntaxId(u32);

macro_rules! impl_id {
    ($ty:ident) => {
        impl $ty {
            pub(crate) fn from_raw(raw: u32) -> Self {
                $ty(raw)
            }

            #[must_use]
            pub fn raw(self) -> u32 {
                self.0
            }
        }
    };
}

impl_id!(DeclId);
impl_id!(SignatureId);
impl_id!(TypeSyntaxId);
