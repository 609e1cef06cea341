//! Syntax-level type references, as written in source.
//!
//! `ParsedType` is what the parser produces from a type annotation; it is
//! deliberately dumb (no resolution, no structural expansion) because that
//! work belongs to `struxc_types`. The Binding Layer's `captureTypeSyntax`
//! operation (spec §4.3) hands out a `TypeSyntaxId` that resolves back to
//! one of these trees.

use crate::name::Name;
use crate::span::Span;

#[derive(Clone, Debug, PartialEq)]
pub enum ParsedType {
    /// A named type reference, e.g. `Foo`, `Array<int>`, `ns.Foo`.
    Named {
        span: Span,
        name: Name,
        type_args: Vec<ParsedType>,
    },
    /// `T[]`.
    Array { span: Span, element: Box<ParsedType> },
    /// `[A, B, C]`.
    Tuple { span: Span, elements: Vec<ParsedType> },
    /// `(a: A, b: B) => R`.
    Function {
        span: Span,
        params: Vec<ParsedType>,
        ret: Box<ParsedType>,
    },
    /// `{ a: A; b: B }`.
    Object {
        span: Span,
        members: Vec<ParsedObjectMember>,
    },
    /// `A | B | C`.
    Union { span: Span, members: Vec<ParsedType> },
    /// `A & B`.
    Intersection { span: Span, members: Vec<ParsedType> },
    /// A string/number/boolean literal type, e.g. `"ok"`.
    Literal { span: Span, text: String },
    /// `any` — always a soundness-gate sentinel downstream.
    Any { span: Span },
    /// `unknown`.
    Unknown { span: Span },
    /// `void`.
    Void { span: Span },
    /// `never`.
    Never { span: Span },
    /// Type with trailing `?`/`| null | undefined` sugar.
    Nullable { span: Span, inner: Box<ParsedType> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedObjectMember {
    pub name: Name,
    pub ty: ParsedType,
    pub optional: bool,
    pub readonly: bool,
    pub span: Span,
}

impl ParsedType {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            ParsedType::Named { span, .. }
            | ParsedType::Array { span, .. }
            | ParsedType::Tuple { span, .. }
            | ParsedType::Function { span, .. }
            | ParsedType::Object { span, .. }
            | ParsedType::Union { span, .. }
            | ParsedType::Intersection { span, .. }
            | ParsedType::Literal { span, .. }
            | ParsedType::Any { span }
            | ParsedType::Unknown { span }
            | ParsedType::Void { span }
            | ParsedType::Never { span }
            | ParsedType::Nullable { span, .. } => *span,
        }
    }
}
