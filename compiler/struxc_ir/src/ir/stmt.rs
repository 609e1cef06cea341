//! IR-level statements and declarations (spec §3 "IR Statement", §4.5).

use crate::ast::{VarKind, Visibility};
use crate::ir::expr::{IrExpr, IrParam};
use crate::ir::ty::IrType;
use crate::name::Name;
use crate::span::Span;

#[derive(Clone, Debug, PartialEq)]
pub struct IrFunctionDecl {
    pub name: Option<Name>,
    /// Type-parameter names; bounds have already been resolved and
    /// substituted away by the Type System, so only the name survives here
    /// for monomorphization to key specializations by.
    pub generics: Vec<Name>,
    pub params: Vec<IrParam>,
    pub return_type: Option<IrType>,
    pub body: Vec<IrStmt>,
    pub is_async: bool,
    pub is_generator: bool,
    /// Bidirectional generators use the iterator protocol's "next" type
    /// argument and need the exchange+wrapper pair, not just the exchange
    /// class (spec §4.5 "Generator detection").
    pub is_bidirectional_generator: bool,
    pub is_exported: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IrClassMember {
    Field {
        name: Name,
        ty: Option<IrType>,
        init: Option<IrExpr>,
        visibility: Visibility,
        is_static: bool,
        is_readonly: bool,
        span: Span,
    },
    Method {
        name: Name,
        generics: Vec<Name>,
        params: Vec<IrParam>,
        return_type: Option<IrType>,
        body: Option<Vec<IrStmt>>,
        visibility: Visibility,
        is_static: bool,
        is_override: bool,
        is_abstract: bool,
        is_async: bool,
        is_generator: bool,
        span: Span,
    },
    Constructor {
        params: Vec<IrParam>,
        /// A leading `super(args)` call, lifted out of `body` and emitted as
        /// `: base(args)` (spec §4.7 Member Emitter). A later `super` call
        /// left in `body` is a hard error, caught by a semantic pass.
        super_call: Option<Vec<IrExpr>>,
        body: Vec<IrStmt>,
        visibility: Visibility,
        span: Span,
    },
    Property {
        name: Name,
        ty: Option<IrType>,
        getter: Option<Vec<IrStmt>>,
        setter: Option<(IrParam, Vec<IrStmt>)>,
        visibility: Visibility,
        is_static: bool,
        span: Span,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrClassDecl {
    pub name: Name,
    pub generics: Vec<Name>,
    pub extends: Option<IrType>,
    pub implements: Vec<IrType>,
    pub members: Vec<IrClassMember>,
    pub is_exported: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrInterfaceMember {
    pub name: Name,
    pub ty: IrType,
    pub optional: bool,
    pub is_method: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrInterfaceDecl {
    pub name: Name,
    pub generics: Vec<Name>,
    pub extends: Vec<IrType>,
    pub members: Vec<IrInterfaceMember>,
    pub is_exported: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrEnumMember {
    pub name: Name,
    pub init: Option<IrExpr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrEnumDecl {
    pub name: Name,
    pub members: Vec<IrEnumMember>,
    pub is_const: bool,
    pub is_exported: bool,
    pub span: Span,
}

/// A structural type alias keeps its expanded `ty` around to generate the
/// `T__Alias` companion class (spec §4.7 Import Resolution); a
/// non-structural alias is erased at every use site instead, so emission
/// never looks the declaration back up by name once lowering is done.
#[derive(Clone, Debug, PartialEq)]
pub struct IrTypeAliasDecl {
    pub name: Name,
    pub generics: Vec<Name>,
    pub ty: IrType,
    pub is_structural: bool,
    pub is_exported: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrCatchClause {
    pub param: Option<crate::ast::BindingPattern>,
    pub body: Vec<IrStmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrSwitchCase {
    pub test: Option<IrExpr>,
    pub body: Vec<IrStmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IrStmtKind {
    VarDecl {
        kind: VarKind,
        pattern: crate::ast::BindingPattern,
        ty: Option<IrType>,
        init: Option<IrExpr>,
    },
    Function(Box<IrFunctionDecl>),
    Class(Box<IrClassDecl>),
    Interface(Box<IrInterfaceDecl>),
    Enum(Box<IrEnumDecl>),
    TypeAlias(Box<IrTypeAliasDecl>),
    ExprStmt(IrExpr),
    Block(Vec<IrStmt>),
    If {
        test: IrExpr,
        consequent: Box<IrStmt>,
        alternate: Option<Box<IrStmt>>,
    },
    While {
        test: IrExpr,
        body: Box<IrStmt>,
    },
    DoWhile {
        body: Box<IrStmt>,
        test: IrExpr,
    },
    For {
        init: Option<Box<IrStmt>>,
        test: Option<IrExpr>,
        update: Option<IrExpr>,
        body: Box<IrStmt>,
        /// Set by the Numeric Proof Pass when the counter is provably
        /// Int32 (spec §4.6 pass 5); the Statement Emitter uses this to
        /// pick the canonical `for (int i = ...)` form with no cast.
        counter_proven_int32: bool,
    },
    ForOf {
        pattern: crate::ast::BindingPattern,
        iterable: IrExpr,
        body: Box<IrStmt>,
        is_await: bool,
    },
    ForIn {
        pattern: crate::ast::BindingPattern,
        object: IrExpr,
        body: Box<IrStmt>,
    },
    Switch {
        discriminant: IrExpr,
        cases: Vec<IrSwitchCase>,
    },
    Try {
        block: Vec<IrStmt>,
        handler: Option<IrCatchClause>,
        finalizer: Option<Vec<IrStmt>>,
    },
    Throw(IrExpr),
    Return(Option<IrExpr>),
    Break(Option<Name>),
    Continue(Option<Name>),
    Labeled {
        label: Name,
        body: Box<IrStmt>,
    },
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrStmt {
    pub kind: IrStmtKind,
    pub span: Span,
}

/// One module's lowered IR (spec §3 Module): the IR Builder's output before
/// the Semantic Passes compute their auxiliary indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IrModule {
    pub statements: Vec<IrStmt>,
}
