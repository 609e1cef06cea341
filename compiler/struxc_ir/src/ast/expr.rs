//! Source-level expression AST.
//!
//! Produced by `struxc_parse`; consumed by `struxc_build`'s IR Builder,
//! which attaches `inferredType` and lowers SL-specific forms (optional
//! chaining, template literals, spread, destructuring) to IR.

use crate::ast::operators::{AssignOp, BinaryOp, LogicalOp, PassingMode, UnaryOp};
use crate::ast::parsed_type::ParsedType;
use crate::ast::pattern::BindingPattern;
use crate::name::Name;
use crate::span::Span;

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    /// Integer literal written without a decimal point — carries numeric
    /// intent (spec §4.5) independently of its eventual inferred type.
    Integer(i64),
    String(String),
    Boolean(bool),
    Null,
    Undefined,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Identifier(Name),
    TemplateLiteral {
        quasis: Vec<String>,
        exprs: Vec<Expr>,
    },
    Array {
        elements: Vec<ArrayElement>,
        contextual_type: Option<ParsedType>,
    },
    Object {
        props: Vec<ObjectProp>,
        contextual_type: Option<ParsedType>,
    },
    Member {
        object: Box<Expr>,
        property: Name,
        optional: bool,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
        optional: bool,
    },
    Call {
        callee: Box<Expr>,
        type_args: Vec<ParsedType>,
        args: Vec<CallArg>,
        optional: bool,
    },
    New {
        callee: Box<Expr>,
        type_args: Vec<ParsedType>,
        args: Vec<CallArg>,
    },
    Assign {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Update {
        /// `++`/`--`; increment is `true`.
        increment: bool,
        prefix: bool,
        operand: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Arrow {
        params: Vec<Param>,
        return_type: Option<ParsedType>,
        body: ArrowBody,
        is_async: bool,
    },
    FunctionExpr {
        name: Option<Name>,
        params: Vec<Param>,
        return_type: Option<ParsedType>,
        body: Vec<crate::ast::stmt::Stmt>,
        is_async: bool,
        is_generator: bool,
    },
    /// `value as out<T>` / `as ref<T>` / `as inref<T>` parameter-passing
    /// casts (spec §4.5); also plain `as T` type assertions with
    /// `mode: None`.
    Cast {
        expr: Box<Expr>,
        ty: ParsedType,
        mode: Option<PassingMode>,
    },
    TypeOf {
        expr: Box<Expr>,
    },
    InstanceOf {
        expr: Box<Expr>,
        ty: ParsedType,
    },
    In {
        property: Box<Expr>,
        object: Box<Expr>,
    },
    Spread {
        expr: Box<Expr>,
    },
    /// `await expr`.
    Await {
        expr: Box<Expr>,
    },
    /// `yield expr` / `yield* expr`.
    Yield {
        expr: Option<Box<Expr>>,
        delegate: bool,
    },
    Paren {
        expr: Box<Expr>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArrowBody {
    Expr(Box<Expr>),
    Block(Vec<crate::ast::stmt::Stmt>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArrayElement {
    Item(Expr),
    Spread(Expr),
    Hole,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectProp {
    KeyValue { key: Name, value: Expr, computed: bool },
    Shorthand { name: Name },
    Spread(Expr),
    Method { key: Name, params: Vec<Param>, body: Vec<crate::ast::stmt::Stmt> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallArg {
    pub expr: Expr,
    pub spread: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub pattern: BindingPattern,
    pub ty: Option<ParsedType>,
    pub default: Option<Expr>,
    pub optional: bool,
    pub is_rest: bool,
    pub span: Span,
}

impl Expr {
    #[must_use]
    pub fn new(span: Span, kind: ExprKind) -> Self {
        Expr { span, kind }
    }
}
