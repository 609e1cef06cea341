//! The Backend AST (spec §4.7): an immutable value tree for the target
//! language's types, expressions, statements, members and compilation
//! units. The Type/Expression/Statement/Member Emitters build this tree;
//! the [`crate::printer`] is the only thing that turns it into text.

#[derive(Clone, Debug, PartialEq)]
pub enum BType {
    Keyword(&'static str),
    Nullable(Box<BType>),
    Array(Box<BType>),
    Tuple(Vec<BType>),
    /// `global::`-qualified reference, with optional type arguments.
    Named { path: String, args: Vec<BType> },
    Func { params: Vec<BType>, ret: Box<BType> },
}

impl BType {
    #[must_use]
    pub fn simple(name: impl Into<String>) -> Self {
        BType::Named { path: name.into(), args: Vec::new() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BBinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
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
    LogicalAnd,
    LogicalOr,
    NullCoalesce,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BUnaryOp {
    Neg,
    Not,
    BitNot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BAssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    NullCoalesce,
    LogicalAnd,
    LogicalOr,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BExpr {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    /// An interpolated string (`$"...{e}..."`); quasis.len() == exprs.len() + 1.
    Interpolated { quasis: Vec<String>, exprs: Vec<BExpr> },
    Identifier(String),
    This,
    Base,
    Member { object: Box<BExpr>, name: String, null_conditional: bool },
    Index { object: Box<BExpr>, index: Box<BExpr>, null_conditional: bool },
    Call { callee: Box<BExpr>, args: Vec<BArg>, null_conditional: bool },
    New { ty: BType, args: Vec<BArg> },
    ArrayCreation { element: BType, length: Option<Box<BExpr>>, initializer: Option<Vec<BExpr>> },
    CollectionInitializer { ty: BType, items: Vec<BExpr> },
    ObjectInitializer { ty: BType, args: Vec<BArg>, members: Vec<(String, BExpr)> },
    Assign { op: BAssignOp, target: Box<BExpr>, value: Box<BExpr> },
    Binary { op: BBinaryOp, left: Box<BExpr>, right: Box<BExpr> },
    Unary { op: BUnaryOp, operand: Box<BExpr> },
    PrefixUpdate { increment: bool, operand: Box<BExpr> },
    PostfixUpdate { increment: bool, operand: Box<BExpr> },
    Conditional { test: Box<BExpr>, consequent: Box<BExpr>, alternate: Box<BExpr> },
    Lambda { params: Vec<String>, body: LambdaBody, is_async: bool },
    Cast { ty: BType, expr: Box<BExpr> },
    TypeOf { ty: BType },
    Is { expr: Box<BExpr>, ty: BType },
    Await { expr: Box<BExpr> },
    Spread(Box<BExpr>),
    Paren(Box<BExpr>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LambdaBody {
    Expr(Box<BExpr>),
    Block(Vec<BStmt>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BArgMode {
    Value,
    Ref,
    Out,
    In,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BArg {
    pub expr: BExpr,
    pub mode: BArgMode,
}

impl BArg {
    #[must_use]
    pub fn value(expr: BExpr) -> Self {
        BArg { expr, mode: BArgMode::Value }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BVarDecl {
    pub ty: BType,
    pub name: String,
    pub init: Option<BExpr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BCatchClause {
    pub ty: Option<BType>,
    pub name: Option<String>,
    pub body: Vec<BStmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BSwitchCase {
    pub test: Option<BExpr>,
    pub body: Vec<BStmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BStmt {
    Local(BVarDecl),
    Expr(BExpr),
    Block(Vec<BStmt>),
    If { test: BExpr, consequent: Box<BStmt>, alternate: Option<Box<BStmt>> },
    While { test: BExpr, body: Box<BStmt> },
    DoWhile { body: Box<BStmt>, test: BExpr },
    /// `counter_int32` selects the canonical `for (int i = ...)` header
    /// (spec §4.7 Statement Emitter) over a generic `for (var i = ...)`.
    For { init: Option<Box<BStmt>>, test: Option<BExpr>, update: Option<BExpr>, body: Box<BStmt>, counter_int32: bool },
    ForEach { element_name: String, iterable: BExpr, body: Box<BStmt>, is_await: bool },
    Switch { discriminant: BExpr, cases: Vec<BSwitchCase> },
    Try { block: Vec<BStmt>, handler: Option<BCatchClause>, finalizer: Option<Vec<BStmt>> },
    Throw(Option<BExpr>),
    Return(Option<BExpr>),
    Break(Option<String>),
    Continue(Option<String>),
    Labeled { label: String, body: Box<BStmt> },
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BVisibility {
    Private,
    Public,
    Protected,
    Internal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BParam {
    pub ty: BType,
    pub name: String,
    pub mode: BArgMode,
    pub default: Option<BExpr>,
    pub is_extension_this: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BMember {
    Field {
        name: String,
        ty: BType,
        init: Option<BExpr>,
        visibility: BVisibility,
        is_static: bool,
        is_readonly: bool,
    },
    /// A readonly auto-property with no setter emits `{ get; }`; any other
    /// auto-property emits `{ get; init; }` (spec §4.7 Member Emitter).
    AutoProperty {
        name: String,
        ty: BType,
        visibility: BVisibility,
        is_static: bool,
        is_readonly: bool,
        init: Option<BExpr>,
    },
    Property {
        name: String,
        ty: BType,
        getter: Option<Vec<BStmt>>,
        setter: Option<(String, Vec<BStmt>)>,
        visibility: BVisibility,
        is_static: bool,
    },
    Method {
        name: String,
        generics: Vec<String>,
        params: Vec<BParam>,
        return_type: BType,
        body: Option<Vec<BStmt>>,
        visibility: BVisibility,
        is_static: bool,
        is_override: bool,
        is_abstract: bool,
        is_async: bool,
    },
    Constructor {
        params: Vec<BParam>,
        base_args: Option<Vec<BArg>>,
        body: Vec<BStmt>,
        visibility: BVisibility,
    },
    NestedType(Box<BTypeDecl>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BTypeKind {
    Class,
    Interface,
    Struct,
    Enum,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BTypeDecl {
    pub kind: BTypeKind,
    pub name: String,
    pub generics: Vec<String>,
    pub base: Option<BType>,
    pub interfaces: Vec<BType>,
    pub members: Vec<BMember>,
    pub enum_members: Vec<(String, Option<BExpr>)>,
    pub visibility: BVisibility,
    pub is_static: bool,
    pub is_partial: bool,
}

impl BTypeDecl {
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        BTypeDecl {
            kind: BTypeKind::Class,
            name: name.into(),
            generics: Vec::new(),
            base: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            enum_members: Vec::new(),
            visibility: BVisibility::Public,
            is_static: false,
            is_partial: false,
        }
    }
}

/// One emitted module (spec §4.7 "Assembly rule"): header, sorted
/// using-directives, then the namespace containing adapters,
/// specializations, exchange classes, top-level type decls and finally the
/// static container class.
#[derive(Clone, Debug, PartialEq)]
pub struct CompilationUnit {
    pub usings: Vec<String>,
    pub namespace: String,
    pub types: Vec<BTypeDecl>,
}
