//! The module walk that populates a [`crate::layer::BindingLayer`].
//!
//! Split the same way `struxc_parse`'s grammar is split — one submodule per
//! syntax surface — except here each submodule *resolves* rather than
//! *produces* syntax.

pub(crate) mod expr;
pub(crate) mod pattern;
pub(crate) mod stmt;
pub(crate) mod ty;

use struxc_catalog::Catalog;
use struxc_ir::StringInterner;

use crate::layer::BindingLayer;

/// Shared, read-mostly context threaded through every walk function. Kept
/// as a single struct (rather than three separate parameters everywhere)
/// purely to cut down on call-site noise; `layer` is the only mutable part.
pub(crate) struct Ctx<'a> {
    pub(crate) layer: &'a mut BindingLayer,
    pub(crate) catalog: &'a Catalog,
    pub(crate) interner: &'a StringInterner,
}
