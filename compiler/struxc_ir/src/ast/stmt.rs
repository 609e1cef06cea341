//! Source-level statement AST.

use crate::ast::expr::Expr;
use crate::ast::items::{ClassDecl, EnumDecl, FunctionDecl, InterfaceDecl, TypeAliasDecl};
use crate::ast::parsed_type::ParsedType;
use crate::ast::pattern::BindingPattern;
use crate::name::Name;
use crate::span::Span;

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub span: Span,
    pub kind: StmtKind,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VarKind {
    Let,
    Const,
    Var,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    VarDecl {
        kind: VarKind,
        pattern: BindingPattern,
        ty: Option<ParsedType>,
        init: Option<Expr>,
    },
    Function(FunctionDecl),
    Class(ClassDecl),
    Interface(InterfaceDecl),
    Enum(EnumDecl),
    TypeAlias(TypeAliasDecl),
    ExprStmt(Expr),
    Block(Vec<Stmt>),
    If {
        test: Expr,
        consequent: Box<Stmt>,
        alternate: Option<Box<Stmt>>,
    },
    While {
        test: Expr,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        test: Expr,
    },
    For {
        init: Option<Box<Stmt>>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Box<Stmt>,
    },
    ForOf {
        pattern: BindingPattern,
        is_await: bool,
        iterable: Expr,
        body: Box<Stmt>,
    },
    ForIn {
        pattern: BindingPattern,
        object: Expr,
        body: Box<Stmt>,
    },
    Switch {
        discriminant: Expr,
        cases: Vec<SwitchCase>,
    },
    Try {
        block: Vec<Stmt>,
        handler: Option<CatchClause>,
        finalizer: Option<Vec<Stmt>>,
    },
    Throw(Expr),
    Return(Option<Expr>),
    Break(Option<Name>),
    Continue(Option<Name>),
    Labeled {
        label: Name,
        body: Box<Stmt>,
    },
    Import(crate::ast::items::ImportDecl),
    Export(crate::ast::items::ExportDecl),
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchCase {
    /// `None` is the `default:` case.
    pub test: Option<Expr>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatchClause {
    pub param: Option<BindingPattern>,
    pub body: Vec<Stmt>,
}
