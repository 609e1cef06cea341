//! Type-annotation grammar.

use struxc_ir::ast::*;
use struxc_ir::Span;
use struxc_lexer::TokenKind;

use crate::error::ParseError;
use crate::parser::Parser;

impl Parser<'_> {
    pub fn parse_type(&mut self) -> Result<ParsedType, ParseError> {
        self.parse_union_type()
    }

    fn parse_union_type(&mut self) -> Result<ParsedType, ParseError> {
        self.cursor.eat(TokenKind::Pipe);
        let start = self.cursor.current_span();
        let mut members = vec![self.parse_intersection_type()?];
        while self.cursor.eat(TokenKind::Pipe) {
            members.push(self.parse_intersection_type()?);
        }
        if members.len() == 1 {
            Ok(members.pop().expect("just pushed one element"))
        } else {
            let end = members.last().map_or(start, ParsedType::span);
            Ok(ParsedType::Union {
                span: start.join(end),
                members,
            })
        }
    }

    fn parse_intersection_type(&mut self) -> Result<ParsedType, ParseError> {
        self.cursor.eat(TokenKind::Amp);
        let start = self.cursor.current_span();
        let mut members = vec![self.parse_postfix_type()?];
        while self.cursor.eat(TokenKind::Amp) {
            members.push(self.parse_postfix_type()?);
        }
        if members.len() == 1 {
            Ok(members.pop().expect("just pushed one element"))
        } else {
            let end = members.last().map_or(start, ParsedType::span);
            Ok(ParsedType::Intersection {
                span: start.join(end),
                members,
            })
        }
    }

    fn parse_postfix_type(&mut self) -> Result<ParsedType, ParseError> {
        let mut ty = self.parse_primary_type()?;
        loop {
            if self.cursor.eat(TokenKind::LBracket) {
                let close = self.cursor.expect(TokenKind::RBracket)?;
                ty = ParsedType::Array {
                    span: ty.span().join(close.span),
                    element: Box::new(ty),
                };
            } else {
                break;
            }
        }
        Ok(ty)
    }

    fn parse_primary_type(&mut self) -> Result<ParsedType, ParseError> {
        let start = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::LParen => self.parse_paren_or_function_type(),
            TokenKind::LBrace => self.parse_object_type(),
            TokenKind::String(name) => {
                self.cursor.advance();
                Ok(ParsedType::Literal {
                    span: start,
                    text: self.cursor.interner_mut().resolve(name).to_string(),
                })
            }
            TokenKind::Ident(_) => {
                let name = self.cursor.expect_ident()?;
                let mut span = start;
                let type_args = if self.cursor.check(TokenKind::Lt) {
                    self.parse_type_argument_list()?
                } else {
                    Vec::new()
                };
                if let Some(last) = type_args.last() {
                    span = span.join(last.span());
                }
                let mut ty = ParsedType::Named { span, name, type_args };
                if self.cursor.eat(TokenKind::Question) {
                    ty = ParsedType::Nullable {
                        span: span.join(self.cursor.previous_span()),
                        inner: Box::new(ty),
                    };
                }
                Ok(ty)
            }
            other => Err(ParseError::new(format!("expected a type, found {other:?}"), start)),
        }
    }

    fn parse_type_argument_list(&mut self) -> Result<Vec<ParsedType>, ParseError> {
        self.cursor.expect(TokenKind::Lt)?;
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::Gt) {
            loop {
                args.push(self.parse_type()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::Gt)?;
        Ok(args)
    }

    fn parse_paren_or_function_type(&mut self) -> Result<ParsedType, ParseError> {
        let start = self.cursor.expect(TokenKind::LParen)?.span;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                params.push(self.parse_param()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        self.cursor.expect(TokenKind::Arrow)?;
        let ret = self.parse_type()?;
        Ok(ParsedType::Function {
            span: start.join(ret.span()),
            params,
            ret: Box::new(ret),
        })
    }

    fn parse_object_type(&mut self) -> Result<ParsedType, ParseError> {
        let start = self.cursor.expect(TokenKind::LBrace)?.span;
        let mut members = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            let member_start = self.cursor.current_span();
            let readonly = self.eat_word("readonly");
            let name = self.cursor.expect_ident()?;
            let optional = self.cursor.eat(TokenKind::Question);
            self.cursor.expect(TokenKind::Colon)?;
            let ty = self.parse_type()?;
            members.push(ParsedObjectMember {
                name,
                ty,
                optional,
                readonly,
                span: member_start.join(self.cursor.previous_span()),
            });
            if !self.cursor.eat(TokenKind::Comma) && !self.cursor.eat(TokenKind::Semicolon) {
                break;
            }
        }
        let end = self.cursor.expect(TokenKind::RBrace)?.span;
        Ok(ParsedType::Object {
            span: start.join(end),
            members,
        })
    }

    pub(crate) fn parse_param(&mut self) -> Result<Param, ParseError> {
        let start = self.cursor.current_span();
        let is_rest = self.cursor.eat(TokenKind::DotDotDot);
        let pattern = self.parse_binding_pattern()?;
        let optional = self.cursor.eat(TokenKind::Question);
        let ty = if self.cursor.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let default = if self.cursor.eat(TokenKind::Eq) {
            Some(self.parse_assignment_expr()?)
        } else {
            None
        };
        Ok(Param {
            pattern,
            ty,
            default,
            optional,
            is_rest,
            span: start.join(self.cursor.previous_span()),
        })
    }
}
