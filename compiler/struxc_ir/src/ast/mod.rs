//! Source-language AST types (spec §3, §4.5).
//!
//! Produced by `struxc_parse`, consumed by `struxc_binding`/`struxc_build`.
//! Kept deliberately Box-recursive (not arena-indexed) — this pipeline is
//! single-shot per compilation, so the allocator-friction arenas exist to
//! avoid in a long-lived incremental compiler doesn't pay for itself here.

pub mod expr;
pub mod items;
pub mod operators;
pub mod parsed_type;
pub mod pattern;
pub mod stmt;

pub use expr::{ArrayElement, ArrowBody, CallArg, Expr, ExprKind, Literal, ObjectProp, Param};
pub use items::{
    ClassDecl, ClassMember, EnumDecl, EnumMember, ExportDecl, FunctionDecl, GenericParam,
    ImportClause, ImportDecl, InterfaceDecl, InterfaceMember, ReExportKind, SourceModule,
    Specifier, TypeAliasDecl, Visibility,
};
pub use operators::{AssignOp, BinaryOp, LogicalOp, PassingMode, UnaryOp};
pub use parsed_type::{ParsedObjectMember, ParsedType};
pub use pattern::{BindingPattern, ObjectBindingProp};
pub use stmt::{CatchClause, Stmt, StmtKind, SwitchCase, VarKind};

#[cfg(test)]
mod tests;
