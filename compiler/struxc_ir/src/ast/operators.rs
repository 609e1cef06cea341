//! Operator kinds shared by the lexer, parser, and IR builder.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicalOp {
    And,
    Or,
    NullishCoalesce,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
    Typeof,
    Void,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    NullishCoalesce,
    LogicalAnd,
    LogicalOr,
}

/// Parameter-passing mode, carried by every parameter and by call
/// arguments once lowered (spec §4.5 "Parameter passing modes").
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum PassingMode {
    #[default]
    Value,
    Ref,
    Out,
    In,
}
