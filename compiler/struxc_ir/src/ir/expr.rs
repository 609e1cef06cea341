//! IR-level expressions (spec §3 "IR Expression", §4.5).
//!
//! Every node carries an optional `inferred_type`; casts present in the
//! source AST are erased here and folded into `argument_passing`/numeric
//! intent on the surrounding node during lowering, rather than kept as a
//! standalone expression form.

use crate::ast::operators::{AssignOp, BinaryOp, LogicalOp, PassingMode, UnaryOp};
use crate::ast::BindingPattern;
use crate::ir::ty::IrType;
use crate::name::Name;
use crate::span::Span;

#[derive(Clone, Debug, PartialEq)]
pub enum IrLiteral {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
}

/// Extra binding information an identifier picked up from the Binding
/// Layer + Binding Catalog (spec §4.5: `resolvedClrType`, `resolvedAssembly`,
/// `csharpName`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentifierBinding {
    pub resolved_clr_type: Option<String>,
    pub resolved_assembly: Option<String>,
    pub target_name: Option<String>,
}

/// Pre-resolved member access (spec §4.5 `memberBinding`).
#[derive(Clone, Debug, PartialEq)]
pub struct MemberBinding {
    pub assembly: String,
    pub type_clr_name: String,
    pub member_name: String,
    pub is_extension_method: bool,
}

/// Call-site metadata threaded from the Binding Layer / Type System
/// (spec §4.5: `typeArguments`, `requiresSpecialization`, `parameterTypes`,
/// `argumentPassing`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallInfo {
    pub type_arguments: Vec<IrType>,
    pub requires_specialization: bool,
    pub parameter_types: Vec<IrType>,
    pub argument_passing: Vec<PassingMode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrParam {
    pub pattern: BindingPattern,
    pub ty: Option<IrType>,
    pub default: Option<Box<IrExpr>>,
    pub passing: PassingMode,
    pub is_extension_receiver: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IrArrowBody {
    Expr(Box<IrExpr>),
    Block(Vec<crate::ir::stmt::IrStmt>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum IrObjectProp {
    KeyValue { key: Name, value: IrExpr },
    Spread(IrExpr),
}

#[derive(Clone, Debug, PartialEq)]
pub enum IrArrayElement {
    Item(IrExpr),
    Spread(IrExpr),
    Hole,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrCallArg {
    pub expr: IrExpr,
    pub passing: PassingMode,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IrExprKind {
    Literal(IrLiteral),
    Identifier {
        name: Name,
        binding: Option<IdentifierBinding>,
    },
    TemplateLiteral {
        quasis: Vec<String>,
        exprs: Vec<IrExpr>,
    },
    Array {
        elements: Vec<IrArrayElement>,
        contextual_type: Option<IrType>,
    },
    Object {
        props: Vec<IrObjectProp>,
        contextual_type: Option<IrType>,
    },
    Member {
        object: Box<IrExpr>,
        property: Name,
        optional: bool,
        binding: Option<MemberBinding>,
    },
    Index {
        object: Box<IrExpr>,
        index: Box<IrExpr>,
        optional: bool,
    },
    Call {
        callee: Box<IrExpr>,
        args: Vec<IrCallArg>,
        optional: bool,
        info: CallInfo,
    },
    New {
        callee: Box<IrExpr>,
        args: Vec<IrCallArg>,
        info: CallInfo,
        /// Set when this is `new Promise<T>((resolve, reject) => ...)`, so
        /// the emitter lowers it to a completion-source-backed expression
        /// (spec §4.5 "Promise constructor recognition").
        is_promise_constructor: bool,
    },
    Assign {
        op: AssignOp,
        target: Box<IrExpr>,
        value: Box<IrExpr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<IrExpr>,
        right: Box<IrExpr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<IrExpr>,
        right: Box<IrExpr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<IrExpr>,
    },
    Update {
        increment: bool,
        prefix: bool,
        operand: Box<IrExpr>,
    },
    Conditional {
        test: Box<IrExpr>,
        consequent: Box<IrExpr>,
        alternate: Box<IrExpr>,
    },
    Arrow {
        params: Vec<IrParam>,
        return_type: Option<IrType>,
        body: IrArrowBody,
        is_async: bool,
    },
    FunctionExpr {
        name: Option<Name>,
        params: Vec<IrParam>,
        return_type: Option<IrType>,
        body: Vec<crate::ir::stmt::IrStmt>,
        is_async: bool,
        is_generator: bool,
    },
    TypeOf {
        expr: Box<IrExpr>,
    },
    InstanceOf {
        expr: Box<IrExpr>,
        ty: IrType,
    },
    In {
        property: Box<IrExpr>,
        object: Box<IrExpr>,
    },
    Spread {
        expr: Box<IrExpr>,
    },
    Await {
        expr: Box<IrExpr>,
    },
    Yield {
        expr: Option<Box<IrExpr>>,
        delegate: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrExpr {
    pub kind: IrExprKind,
    pub span: Span,
    pub inferred_type: Option<IrType>,
}
