//! Binding-pattern grammar: identifiers, array patterns, object patterns.

use struxc_ir::ast::*;
use struxc_lexer::TokenKind;

use crate::error::ParseError;
use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn parse_binding_pattern(&mut self) -> Result<BindingPattern, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::LBracket => self.parse_array_pattern(),
            TokenKind::LBrace => self.parse_object_pattern(),
            _ => {
                let start = self.cursor.current_span();
                let name = self.cursor.expect_ident()?;
                let ty = if self.cursor.eat(TokenKind::Colon) { Some(self.parse_type()?) } else { None };
                Ok(BindingPattern::Identifier {
                    span: start.join(self.cursor.previous_span()),
                    name,
                    ty,
                })
            }
        }
    }

    fn parse_array_pattern(&mut self) -> Result<BindingPattern, ParseError> {
        let start = self.cursor.expect(TokenKind::LBracket)?.span;
        let mut elements = Vec::new();
        let mut rest = None;
        while !self.cursor.check(TokenKind::RBracket) {
            if self.cursor.eat(TokenKind::Comma) {
                elements.push(None);
                continue;
            }
            if self.cursor.eat(TokenKind::DotDotDot) {
                rest = Some(Box::new(self.parse_binding_pattern()?));
                break;
            }
            elements.push(Some(self.parse_binding_pattern()?));
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let end = self.cursor.expect(TokenKind::RBracket)?.span;
        Ok(BindingPattern::Array {
            span: start.join(end),
            elements,
            rest,
        })
    }

    fn parse_object_pattern(&mut self) -> Result<BindingPattern, ParseError> {
        let start = self.cursor.expect(TokenKind::LBrace)?.span;
        let mut properties = Vec::new();
        let mut rest = None;
        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.eat(TokenKind::DotDotDot) {
                let prop_start = self.cursor.current_span();
                let name = self.cursor.expect_ident()?;
                rest = Some(Box::new(BindingPattern::Identifier {
                    span: prop_start.join(self.cursor.previous_span()),
                    name,
                    ty: None,
                }));
                break;
            }
            let prop_start = self.cursor.current_span();
            let key = self.cursor.expect_ident()?;
            let value = if self.cursor.eat(TokenKind::Colon) {
                self.parse_binding_pattern()?
            } else {
                BindingPattern::Identifier {
                    span: prop_start,
                    name: key,
                    ty: None,
                }
            };
            let default = if self.cursor.eat(TokenKind::Eq) { Some(self.parse_assignment_expr()?) } else { None };
            properties.push(ObjectBindingProp {
                key,
                value,
                default,
                span: prop_start.join(self.cursor.previous_span()),
            });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let end = self.cursor.expect(TokenKind::RBrace)?.span;
        Ok(BindingPattern::Object {
            span: start.join(end),
            properties,
            rest,
        })
    }
}
