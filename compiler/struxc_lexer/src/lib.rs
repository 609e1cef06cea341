//! Lexer for the source-language subset this compiler accepts, using
//! `logos` with string interning (spec §4.2 "per-module lex+parse").

mod escape;
mod keywords;
mod token;

use logos::Logos;
use struxc_ir::{Span, StringInterner};

pub use token::{Token, TokenKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
enum RawToken {
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*")]
    HexInt,
    #[regex(r"0[bB][01][01_]*")]
    BinInt,
    #[regex(r"0[oO][0-7][0-7_]*")]
    OctInt,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    Float,
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    FloatLeadingDot,
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    FloatExp,
    #[regex(r"[0-9][0-9_]*")]
    Int,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    DoubleQuoteString,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    SingleQuoteString,
    #[regex(r"`([^`\\]|\\.)*`", priority = 1)]
    TemplateLiteral,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("...")]
    DotDotDot,
    #[token(".")]
    Dot,
    #[token("?.")]
    QuestionDot,
    #[token("??=")]
    QuestionQuestionEq,
    #[token("??")]
    QuestionQuestion,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=>")]
    Arrow,

    #[token("===")]
    EqEqEq,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!==")]
    NotEqEq,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("<<=")]
    ShlEq,
    #[token("<<")]
    Shl,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">>=")]
    ShrEq,
    #[token(">>")]
    Shr,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("++")]
    PlusPlus,
    #[token("+=")]
    PlusEq,
    #[token("+")]
    Plus,
    #[token("--")]
    MinusMinus,
    #[token("-=")]
    MinusEq,
    #[token("-")]
    Minus,
    #[token("**=")]
    StarStarEq,
    #[token("**")]
    StarStar,
    #[token("*=")]
    StarEq,
    #[token("*")]
    Star,
    #[token("/=")]
    SlashEq,
    #[token("/")]
    Slash,
    #[token("%=")]
    PercentEq,
    #[token("%")]
    Percent,
    #[token("&&=")]
    AmpAmpEq,
    #[token("&&")]
    AmpAmp,
    #[token("&=")]
    AmpEq,
    #[token("&")]
    Amp,
    #[token("||=")]
    PipePipeEq,
    #[token("||")]
    PipePipe,
    #[token("|=")]
    PipeEq,
    #[token("|")]
    Pipe,
    #[token("^=")]
    CaretEq,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
}

/// Lex `source` into a flat token stream, keyword-resolving identifiers and
/// interning identifier/string text through `interner`.
pub fn lex(source: &str, interner: &mut StringInterner) -> Vec<Token> {
    let mut out = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();
        match result {
            Ok(raw) => out.push(Token::new(convert(raw, slice, interner), span)),
            Err(()) => out.push(Token::new(TokenKind::Error, span)),
        }
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    out.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));
    out
}

fn convert(raw: RawToken, slice: &str, interner: &mut StringInterner) -> TokenKind {
    match raw {
        RawToken::Ident => keywords::lookup(slice).unwrap_or_else(|| TokenKind::Ident(interner.intern(slice))),

        RawToken::Int => TokenKind::Number {
            value: slice.replace('_', "").parse().unwrap_or(0.0),
            is_integer: true,
        },
        RawToken::HexInt => TokenKind::Number {
            value: u64::from_str_radix(&slice[2..].replace('_', ""), 16).unwrap_or(0) as f64,
            is_integer: true,
        },
        RawToken::BinInt => TokenKind::Number {
            value: u64::from_str_radix(&slice[2..].replace('_', ""), 2).unwrap_or(0) as f64,
            is_integer: true,
        },
        RawToken::OctInt => TokenKind::Number {
            value: u64::from_str_radix(&slice[2..].replace('_', ""), 8).unwrap_or(0) as f64,
            is_integer: true,
        },
        RawToken::Float | RawToken::FloatLeadingDot | RawToken::FloatExp => TokenKind::Number {
            value: slice.replace('_', "").parse().unwrap_or(0.0),
            is_integer: false,
        },

        RawToken::DoubleQuoteString | RawToken::SingleQuoteString => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(&escape::unescape_string(content)))
        }
        RawToken::TemplateLiteral => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::TemplateLiteral(interner.intern(content))
        }

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::DotDotDot => TokenKind::DotDotDot,
        RawToken::Dot => TokenKind::Dot,
        RawToken::QuestionDot => TokenKind::QuestionDot,
        RawToken::QuestionQuestionEq => TokenKind::QuestionQuestionEq,
        RawToken::QuestionQuestion => TokenKind::QuestionQuestion,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Arrow => TokenKind::Arrow,

        RawToken::EqEqEq => TokenKind::EqEqEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEqEq => TokenKind::NotEqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Bang => TokenKind::Bang,
        RawToken::ShlEq => TokenKind::ShlEq,
        RawToken::Shl => TokenKind::Shl,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::ShrEq => TokenKind::ShrEq,
        RawToken::Shr => TokenKind::Shr,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::Minus => TokenKind::Minus,
        RawToken::StarStarEq => TokenKind::StarStarEq,
        RawToken::StarStar => TokenKind::StarStar,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::Star => TokenKind::Star,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::Slash => TokenKind::Slash,
        RawToken::PercentEq => TokenKind::PercentEq,
        RawToken::Percent => TokenKind::Percent,
        RawToken::AmpAmpEq => TokenKind::AmpAmpEq,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::AmpEq => TokenKind::AmpEq,
        RawToken::Amp => TokenKind::Amp,
        RawToken::PipePipeEq => TokenKind::PipePipeEq,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::PipeEq => TokenKind::PipeEq,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::CaretEq => TokenKind::CaretEq,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Tilde => TokenKind::Tilde,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_a_let_binding() {
        let mut interner = StringInterner::new();
        let tokens = lex("let x = 42;", &mut interner);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert!(matches!(kinds[0], TokenKind::Ident(_)));
        assert!(matches!(kinds[1], TokenKind::Ident(_)));
        assert!(matches!(kinds[2], TokenKind::Eq));
        assert!(matches!(
            kinds[3],
            TokenKind::Number {
                value: 42.0,
                is_integer: true
            }
        ));
        assert!(matches!(kinds[4], TokenKind::Semicolon));
        assert!(matches!(kinds[5], TokenKind::Eof));
    }

    #[test]
    fn resolves_reserved_keywords_but_not_contextual_ones() {
        let mut interner = StringInterner::new();
        let tokens = lex("class readonly", &mut interner);
        assert!(matches!(tokens[0].kind, TokenKind::Class));
        assert!(matches!(tokens[1].kind, TokenKind::Ident(_)));
    }

    #[test]
    fn unescapes_double_quoted_strings() {
        let mut interner = StringInterner::new();
        let tokens = lex(r#""hello\nworld""#, &mut interner);
        if let TokenKind::String(name) = tokens[0].kind {
            assert_eq!(interner.resolve(name), "hello\nworld");
        } else {
            panic!("expected a string token");
        }
    }

    #[test]
    fn captures_template_literal_raw_text() {
        let mut interner = StringInterner::new();
        let tokens = lex("`hi ${name}!`", &mut interner);
        if let TokenKind::TemplateLiteral(name) = tokens[0].kind {
            assert_eq!(interner.resolve(name), "hi ${name}!");
        } else {
            panic!("expected a template literal token");
        }
    }

    #[test]
    fn lexes_optional_chaining_and_nullish_coalescing() {
        let mut interner = StringInterner::new();
        let tokens = lex("a?.b ?? c", &mut interner);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert!(matches!(kinds[1], TokenKind::QuestionDot));
        assert!(matches!(kinds[3], TokenKind::QuestionQuestion));
    }
}
