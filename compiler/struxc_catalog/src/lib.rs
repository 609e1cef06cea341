//! The Binding Catalog (spec §4.1): loads target-framework type and method
//! descriptors from `--type-roots` JSON files and indexes them for the
//! Binding Layer's `resolveType`/`resolveMethod`/`overloadCount` queries.

mod catalog;
mod descriptor;
mod entry;
mod error;
mod signature;

pub use catalog::Catalog;
pub use descriptor::{
    CatalogDescriptor, MethodDescriptor, ParamModifier, PropertyDescriptor, TypeDescriptor, TypeKind, TypeRef,
    Visibility,
};
pub use entry::{MethodEntry, PropertyEntry, TypeEntry};
pub use error::{CatalogFatalError, CatalogLoadWarning};
pub use signature::{parameter_types, signature_key, split_params_and_return, split_top_level};
