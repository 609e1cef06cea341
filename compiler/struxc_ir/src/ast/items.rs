//! Top-level declaration AST: functions, classes, interfaces, enums, type
//! aliases, and import/export forms (spec §3 Import/Export, §4.5).

use crate::ast::expr::{Expr, Param};
use crate::ast::parsed_type::ParsedType;
use crate::ast::stmt::Stmt;
use crate::name::Name;
use crate::span::Span;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Visibility {
    #[default]
    Private,
    Public,
    Protected,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct GenericParam {
    pub name: Name,
    pub constraint: Option<ParsedType>,
    pub default: Option<ParsedType>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Option<Name>,
    pub generics: Vec<GenericParam>,
    pub params: Vec<Param>,
    pub return_type: Option<ParsedType>,
    pub body: Vec<Stmt>,
    pub is_async: bool,
    pub is_generator: bool,
    pub is_exported: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassDecl {
    pub name: Name,
    pub generics: Vec<GenericParam>,
    pub extends: Option<ParsedType>,
    pub implements: Vec<ParsedType>,
    pub members: Vec<ClassMember>,
    pub is_exported: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClassMember {
    Field {
        name: Name,
        ty: Option<ParsedType>,
        init: Option<Expr>,
        visibility: Visibility,
        is_static: bool,
        is_readonly: bool,
        span: Span,
    },
    Method {
        name: Name,
        generics: Vec<GenericParam>,
        params: Vec<Param>,
        return_type: Option<ParsedType>,
        body: Option<Vec<Stmt>>,
        visibility: Visibility,
        is_static: bool,
        is_override: bool,
        is_abstract: bool,
        is_async: bool,
        is_generator: bool,
        span: Span,
    },
    Constructor {
        params: Vec<Param>,
        body: Vec<Stmt>,
        visibility: Visibility,
        span: Span,
    },
    Property {
        name: Name,
        ty: Option<ParsedType>,
        getter: Option<Vec<Stmt>>,
        setter: Option<(Param, Vec<Stmt>)>,
        visibility: Visibility,
        is_static: bool,
        span: Span,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDecl {
    pub name: Name,
    pub generics: Vec<GenericParam>,
    pub extends: Vec<ParsedType>,
    pub members: Vec<InterfaceMember>,
    pub is_exported: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceMember {
    pub name: Name,
    pub ty: ParsedType,
    pub optional: bool,
    pub is_method: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumDecl {
    pub name: Name,
    pub members: Vec<EnumMember>,
    pub is_const: bool,
    pub is_exported: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumMember {
    pub name: Name,
    pub init: Option<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeAliasDecl {
    pub name: Name,
    pub generics: Vec<GenericParam>,
    pub ty: ParsedType,
    pub is_exported: bool,
    pub span: Span,
}

/// A single named binding inside an import/export clause, e.g. `{ a as b }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Specifier {
    pub imported: Name,
    pub local: Name,
    pub is_type_only: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImportClause {
    /// `import Default from "m"`.
    Default(Name),
    /// `import * as ns from "m"`.
    Namespace(Name),
    /// `import { a, b as c } from "m"`.
    Named(Vec<Specifier>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportDecl {
    pub source: String,
    pub clause: ImportClause,
    pub is_type_only: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExportDecl {
    /// `export function f() {}` / `export class C {}` / etc. — the
    /// declaration itself carries `is_exported`, this variant just marks
    /// the statement position for ordering.
    Inline(Box<Stmt>),
    /// `export { a, b as c }`.
    Named {
        specifiers: Vec<Specifier>,
        span: Span,
    },
    /// `export { a } from "m"` / `export * from "m"` / `export * as ns from "m"`.
    ReExport {
        source: String,
        specifiers: ReExportKind,
        span: Span,
    },
    /// `export default expr`.
    Default(Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReExportKind {
    Named(Vec<Specifier>),
    All,
    AllAs(Name),
}

/// A fully parsed source module, before graph/binding resolution.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SourceModule {
    pub imports: Vec<ImportDecl>,
    pub statements: Vec<Stmt>,
}
