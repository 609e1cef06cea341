//! Binding patterns — destructuring targets for `let`, parameters, and
//! `catch` clauses.

use crate::ast::parsed_type::ParsedType;
use crate::name::Name;
use crate::span::Span;

#[derive(Clone, Debug, PartialEq)]
pub enum BindingPattern {
    Identifier {
        span: Span,
        name: Name,
        ty: Option<ParsedType>,
    },
    Array {
        span: Span,
        elements: Vec<Option<BindingPattern>>,
        rest: Option<Box<BindingPattern>>,
    },
    Object {
        span: Span,
        properties: Vec<ObjectBindingProp>,
        rest: Option<Box<BindingPattern>>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectBindingProp {
    pub key: Name,
    pub value: BindingPattern,
    pub default: Option<crate::ast::expr::Expr>,
    pub span: Span,
}

impl BindingPattern {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            BindingPattern::Identifier { span, .. }
            | BindingPattern::Array { span, .. }
            | BindingPattern::Object { span, .. } => *span,
        }
    }

    /// The single name this pattern binds, if it is a plain identifier
    /// (the common case the IR builder fast-paths).
    #[must_use]
    pub fn as_identifier(&self) -> Option<Name> {
        match self {
            BindingPattern::Identifier { name, .. } => Some(*name),
            _ => None,
        }
    }
}
