//! Core IR data types shared across the struxc pipeline.
//!
//! This crate holds only data: spans, interned names, the source-level AST
//! (`ast`, spec §4.5), and the lowered IR tree the IR Builder produces from
//! it (`ir`, spec §3). It has no knowledge of parsing, binding, or emission —
//! those live in `struxc_parse`, `struxc_binding`/`struxc_types`, and
//! `struxc_emit` respectively.

pub mod ast;
pub mod ir;
mod interner;
mod name;
mod span;

pub use interner::StringInterner;
pub use name::Name;
pub use span::{Span, Spanned};
