//! IR-level type algebra (spec §4.4): assignability, utility-type expansion,
//! substitution, union narrowing, and the nominal-to-structural lift. Pure
//! data in, data out — this crate never calls back into a source-language
//! type checker, and it never touches a file path or emits a diagnostic
//! directly; it operates entirely on [`struxc_ir::ir::IrType`] values plus
//! whatever [`env::TypeEnv`] the caller supplies.

mod assign;
mod env;
mod error;
mod narrow;
mod subst;
mod utility;

pub use assign::is_assignable;
pub use env::{structural_members, TypeEnv, TypeRegistry};
pub use error::TypeError;
pub use narrow::{
    narrow_by_in, narrow_by_instanceof, narrow_by_not_in, narrow_by_not_instanceof, narrow_by_not_typeof,
    narrow_by_null_guard, narrow_by_typeof, NarrowedScope,
};
pub use subst::substitute;
pub use utility::{
    expand_awaited, expand_exclude, expand_extract, expand_non_nullable, expand_omit, expand_parameters,
    expand_partial, expand_pick, expand_readonly, expand_record, expand_required, expand_return_type,
    AwaitableNames,
};
