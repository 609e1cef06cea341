//! Lowered IR (spec §3): the fully-resolved type/expression/statement trees
//! the IR Builder produces, as distinct from the source-syntax [`crate::ast`].
//!
//! Mirrors the teacher's own split between a source-syntax module and a
//! canonical-IR module; see the `ast`/`ir` crate-level doc for why.

pub mod expr;
pub mod stmt;
pub mod ty;

pub use expr::{
    CallInfo, IdentifierBinding, IrArrayElement, IrArrowBody, IrCallArg, IrExpr, IrExprKind,
    IrLiteral, IrObjectProp, IrParam, MemberBinding,
};
pub use stmt::{
    IrCatchClause, IrClassDecl, IrClassMember, IrEnumDecl, IrEnumMember, IrFunctionDecl,
    IrInterfaceDecl, IrInterfaceMember, IrModule, IrStmt, IrStmtKind, IrSwitchCase,
    IrTypeAliasDecl,
};
pub use ty::{ArrayOrigin, IrType, LiteralType, Member, NumericIntent, PrimitiveType};
