//! Token representation produced by [`crate::lex`].

use std::fmt;

use struxc_ir::{Name, Span};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token kinds for the source-language subset this compiler accepts.
///
/// Only the keywords a bare identifier can never mean are modeled as
/// dedicated variants (`class`, `function`, `typeof`, ...). Words that the
/// source language itself treats contextually (`let`, `async`, `readonly`,
/// `get`/`set`, the primitive type names) are lexed as plain
/// [`TokenKind::Ident`] and disambiguated by the parser — the same split
/// a conforming tokenizer for this family of languages makes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TokenKind {
    Number { value: f64, is_integer: bool },
    String(Name),
    TemplateLiteral(Name),
    Ident(Name),

    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Implements,
    Import,
    In,
    Instanceof,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    Yield,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    DotDotDot,
    Question,
    QuestionDot,
    QuestionQuestion,
    QuestionQuestionEq,
    Arrow,

    Eq,
    EqEq,
    EqEqEq,
    NotEq,
    NotEqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    PlusPlus,
    PlusEq,
    Minus,
    MinusMinus,
    MinusEq,
    Star,
    StarStar,
    StarStarEq,
    StarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Amp,
    AmpAmp,
    AmpAmpEq,
    AmpEq,
    Pipe,
    PipePipe,
    PipePipeEq,
    PipeEq,
    Caret,
    CaretEq,
    Bang,
    Tilde,
    Shl,
    ShlEq,
    Shr,
    ShrEq,

    Eof,
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
