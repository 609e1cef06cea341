//! Expression grammar: a descending precedence ladder, matching the
//! teacher's `match_*_op` style (one method per precedence tier) rather
//! than a generic Pratt table.

use struxc_ir::ast::*;
use struxc_ir::Span;
use struxc_lexer::TokenKind;

use crate::error::ParseError;
use crate::parser::Parser;

impl Parser<'_> {
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment_expr()
    }

    pub(crate) fn parse_assignment_expr(&mut self) -> Result<Expr, ParseError> {
        if let Some(arrow) = self.try_parse_arrow_function()? {
            return Ok(arrow);
        }

        let target = self.parse_conditional_expr()?;
        let Some(op) = self.match_assign_op() else {
            return Ok(target);
        };
        self.cursor.advance();
        let value = self.parse_assignment_expr()?;
        let span = target.span.join(value.span);
        Ok(match op {
            DirectOrDesugared::Direct(op) => Expr::new(
                span,
                ExprKind::Assign {
                    op,
                    target: Box::new(target),
                    value: Box::new(value),
                },
            ),
            DirectOrDesugared::Desugared(bin_op) => Expr::new(
                span,
                ExprKind::Assign {
                    op: AssignOp::Assign,
                    target: Box::new(target.clone()),
                    value: Box::new(Expr::new(
                        span,
                        ExprKind::Binary {
                            op: bin_op,
                            left: Box::new(target),
                            right: Box::new(value),
                        },
                    )),
                },
            ),
        })
    }

    fn match_assign_op(&self) -> Option<DirectOrDesugared> {
        use AssignOp as A;
        use BinaryOp as B;
        use DirectOrDesugared::{Desugared, Direct};
        match self.cursor.current_kind() {
            TokenKind::Eq => Some(Direct(A::Assign)),
            TokenKind::PlusEq => Some(Direct(A::Add)),
            TokenKind::MinusEq => Some(Direct(A::Sub)),
            TokenKind::StarEq => Some(Direct(A::Mul)),
            TokenKind::SlashEq => Some(Direct(A::Div)),
            TokenKind::PercentEq => Some(Direct(A::Mod)),
            TokenKind::QuestionQuestionEq => Some(Direct(A::NullishCoalesce)),
            TokenKind::AmpAmpEq => Some(Direct(A::LogicalAnd)),
            TokenKind::PipePipeEq => Some(Direct(A::LogicalOr)),
            TokenKind::AmpEq => Some(Desugared(B::BitAnd)),
            TokenKind::PipeEq => Some(Desugared(B::BitOr)),
            TokenKind::CaretEq => Some(Desugared(B::BitXor)),
            TokenKind::ShlEq => Some(Desugared(B::Shl)),
            TokenKind::ShrEq => Some(Desugared(B::Shr)),
            TokenKind::StarStarEq => Some(Desugared(B::Exp)),
            _ => None,
        }
    }

    fn parse_conditional_expr(&mut self) -> Result<Expr, ParseError> {
        let test = self.parse_nullish_expr()?;
        if !self.cursor.eat(TokenKind::Question) {
            return Ok(test);
        }
        let consequent = self.parse_assignment_expr()?;
        self.cursor.expect(TokenKind::Colon)?;
        let alternate = self.parse_assignment_expr()?;
        let span = test.span.join(alternate.span);
        Ok(Expr::new(
            span,
            ExprKind::Conditional {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            },
        ))
    }

    fn parse_nullish_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_or_expr()?;
        while self.cursor.eat(TokenKind::QuestionQuestion) {
            let right = self.parse_logical_or_expr()?;
            let span = left.span.join(right.span);
            left = Expr::new(
                span,
                ExprKind::Logical {
                    op: LogicalOp::NullishCoalesce,
                    left: Box::new(left),
                    right: Box::new(right),
                },
            );
        }
        Ok(left)
    }

    fn parse_logical_or_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and_expr()?;
        while self.cursor.eat(TokenKind::PipePipe) {
            let right = self.parse_logical_and_expr()?;
            let span = left.span.join(right.span);
            left = Expr::new(
                span,
                ExprKind::Logical {
                    op: LogicalOp::Or,
                    left: Box::new(left),
                    right: Box::new(right),
                },
            );
        }
        Ok(left)
    }

    fn parse_logical_and_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bitor_expr()?;
        while self.cursor.eat(TokenKind::AmpAmp) {
            let right = self.parse_bitor_expr()?;
            let span = left.span.join(right.span);
            left = Expr::new(
                span,
                ExprKind::Logical {
                    op: LogicalOp::And,
                    left: Box::new(left),
                    right: Box::new(right),
                },
            );
        }
        Ok(left)
    }

    fn parse_bitor_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bitxor_expr()?;
        while self.cursor.check(TokenKind::Pipe) {
            self.cursor.advance();
            let right = self.parse_bitxor_expr()?;
            left = self.binary(BinaryOp::BitOr, left, right);
        }
        Ok(left)
    }

    fn parse_bitxor_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bitand_expr()?;
        while self.cursor.eat(TokenKind::Caret) {
            let right = self.parse_bitand_expr()?;
            left = self.binary(BinaryOp::BitXor, left, right);
        }
        Ok(left)
    }

    fn parse_bitand_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality_expr()?;
        while self.cursor.check(TokenKind::Amp) {
            self.cursor.advance();
            let right = self.parse_equality_expr()?;
            left = self.binary(BinaryOp::BitAnd, left, right);
        }
        Ok(left)
    }

    fn parse_equality_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational_expr()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::EqEq | TokenKind::EqEqEq => BinaryOp::Eq,
                TokenKind::NotEq | TokenKind::NotEqEq => BinaryOp::NotEq,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_relational_expr()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_relational_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_shift_expr()?;
        loop {
            if self.eat_word("as") {
                let ty = self.parse_type()?;
                let span = left.span.join(ty.span());
                left = Expr::new(span, ExprKind::Cast { expr: Box::new(left), ty, mode: None });
                continue;
            }
            if self.cursor.check(TokenKind::Instanceof) {
                self.cursor.advance();
                let ty = self.parse_type()?;
                let span = left.span.join(ty.span());
                left = Expr::new(span, ExprKind::InstanceOf { expr: Box::new(left), ty });
                continue;
            }
            if self.cursor.check(TokenKind::In) {
                self.cursor.advance();
                let object = self.parse_shift_expr()?;
                let span = left.span.join(object.span);
                left = Expr::new(span, ExprKind::In { property: Box::new(left), object: Box::new(object) });
                continue;
            }
            let op = match self.cursor.current_kind() {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::GtEq => BinaryOp::GtEq,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_shift_expr()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_shift_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive_expr()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Shl => BinaryOp::Shl,
                TokenKind::Shr => BinaryOp::Shr,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_additive_expr()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative_expr()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_multiplicative_expr()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_exponent_expr()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_exponent_expr()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    /// `**` is right-associative.
    fn parse_exponent_expr(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_unary_expr()?;
        if self.cursor.eat(TokenKind::StarStar) {
            let right = self.parse_exponent_expr()?;
            return Ok(self.binary(BinaryOp::Exp, left, right));
        }
        Ok(left)
    }

    fn parse_unary_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        let op = match self.cursor.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::Typeof => Some(UnaryOp::Typeof),
            TokenKind::Void => Some(UnaryOp::Void),
            _ => None,
        };
        if let Some(op) = op {
            self.cursor.advance();
            let operand = self.parse_unary_expr()?;
            let span = start.join(operand.span);
            return Ok(match op {
                UnaryOp::Typeof => Expr::new(span, ExprKind::TypeOf { expr: Box::new(operand) }),
                _ => Expr::new(span, ExprKind::Unary { op, operand: Box::new(operand) }),
            });
        }
        if self.cursor.check(TokenKind::PlusPlus) || self.cursor.check(TokenKind::MinusMinus) {
            let increment = self.cursor.check(TokenKind::PlusPlus);
            self.cursor.advance();
            let operand = self.parse_unary_expr()?;
            let span = start.join(operand.span);
            return Ok(Expr::new(span, ExprKind::Update { increment, prefix: true, operand: Box::new(operand) }));
        }
        if self.cursor.check(TokenKind::Delete) {
            self.cursor.advance();
            let operand = self.parse_unary_expr()?;
            let span = start.join(operand.span);
            return Ok(Expr::new(span, ExprKind::Unary { op: UnaryOp::Void, operand: Box::new(operand) }));
        }
        if self.eat_word("await") {
            let operand = self.parse_unary_expr()?;
            let span = start.join(operand.span);
            return Ok(Expr::new(span, ExprKind::Await { expr: Box::new(operand) }));
        }
        if self.cursor.check(TokenKind::Yield) {
            self.cursor.advance();
            let delegate = self.cursor.eat(TokenKind::Star);
            let expr = if self.can_start_expr() { Some(Box::new(self.parse_assignment_expr()?)) } else { None };
            let end = expr.as_ref().map_or(start, |e| e.span);
            return Ok(Expr::new(start.join(end), ExprKind::Yield { expr, delegate }));
        }
        self.parse_postfix_expr()
    }

    pub(crate) fn can_start_expr(&self) -> bool {
        !matches!(
            self.cursor.current_kind(),
            TokenKind::Semicolon | TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket | TokenKind::Comma | TokenKind::Eof
        )
    }

    fn parse_postfix_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_call_or_member_expr()?;
        if self.cursor.check(TokenKind::PlusPlus) || self.cursor.check(TokenKind::MinusMinus) {
            let increment = self.cursor.check(TokenKind::PlusPlus);
            let end = self.cursor.advance().span;
            let span = expr.span.join(end);
            expr = Expr::new(span, ExprKind::Update { increment, prefix: false, operand: Box::new(expr) });
        }
        Ok(expr)
    }

    fn parse_call_or_member_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = if self.cursor.check(TokenKind::New) {
            self.parse_new_expr()?
        } else {
            self.parse_primary_expr()?
        };
        loop {
            if self.cursor.eat(TokenKind::Dot) {
                let name = self.cursor.expect_ident()?;
                let span = expr.span.join(self.cursor.previous_span());
                expr = Expr::new(span, ExprKind::Member { object: Box::new(expr), property: name, optional: false });
            } else if self.cursor.eat(TokenKind::QuestionDot) {
                if self.cursor.check(TokenKind::LParen) {
                    expr = self.parse_call_args(expr, true)?;
                    continue;
                }
                let name = self.cursor.expect_ident()?;
                let span = expr.span.join(self.cursor.previous_span());
                expr = Expr::new(span, ExprKind::Member { object: Box::new(expr), property: name, optional: true });
            } else if self.cursor.eat(TokenKind::LBracket) {
                let index = self.parse_expr()?;
                let end = self.cursor.expect(TokenKind::RBracket)?.span;
                let span = expr.span.join(end);
                expr = Expr::new(span, ExprKind::Index { object: Box::new(expr), index: Box::new(index), optional: false });
            } else if self.cursor.check(TokenKind::LParen) {
                expr = self.parse_call_args(expr, false)?;
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_new_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.expect(TokenKind::New)?.span;
        let mut callee = self.parse_primary_expr()?;
        while self.cursor.eat(TokenKind::Dot) {
            let name = self.cursor.expect_ident()?;
            let span = callee.span.join(self.cursor.previous_span());
            callee = Expr::new(span, ExprKind::Member { object: Box::new(callee), property: name, optional: false });
        }
        let type_args = if self.cursor.check(TokenKind::Lt) { self.try_parse_type_arguments() } else { Vec::new() };
        let args = if self.cursor.check(TokenKind::LParen) { self.parse_args()? } else { Vec::new() };
        let span = start.join(self.cursor.previous_span());
        Ok(Expr::new(span, ExprKind::New { callee: Box::new(callee), type_args, args }))
    }

    fn parse_call_args(&mut self, callee: Expr, optional: bool) -> Result<Expr, ParseError> {
        let type_args = Vec::new();
        let args = self.parse_args()?;
        let span = callee.span.join(self.cursor.previous_span());
        Ok(Expr::new(span, ExprKind::Call { callee: Box::new(callee), type_args, args, optional }))
    }

    fn parse_args(&mut self) -> Result<Vec<CallArg>, ParseError> {
        self.cursor.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                let spread = self.cursor.eat(TokenKind::DotDotDot);
                args.push(CallArg { expr: self.parse_assignment_expr()?, spread });
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        Ok(args)
    }

    /// Speculatively parse `<T, U>` type arguments; this is only reachable
    /// after `new Callee`, where `<` can't mean "less than", so no
    /// backtracking is needed here (unlike a bare call expression).
    fn try_parse_type_arguments(&mut self) -> Vec<ParsedType> {
        let checkpoint = self.cursor.position();
        self.cursor.advance();
        let mut args = Vec::new();
        loop {
            match self.parse_type() {
                Ok(ty) => args.push(ty),
                Err(_) => {
                    self.cursor.restore(checkpoint);
                    return Vec::new();
                }
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        if self.cursor.eat(TokenKind::Gt) {
            args
        } else {
            self.cursor.restore(checkpoint);
            Vec::new()
        }
    }

    fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Number { value, is_integer } => {
                self.cursor.advance();
                let literal = if is_integer && value.fract() == 0.0 && value.abs() < 2f64.powi(53) {
                    Literal::Integer(value as i64)
                } else {
                    Literal::Number(value)
                };
                Ok(Expr::new(start, ExprKind::Literal(literal)))
            }
            TokenKind::String(name) => {
                self.cursor.advance();
                let text = self.cursor.interner_mut().resolve(name).to_string();
                Ok(Expr::new(start, ExprKind::Literal(Literal::String(text))))
            }
            TokenKind::TemplateLiteral(name) => {
                self.cursor.advance();
                let raw = self.cursor.interner_mut().resolve(name).to_string();
                let (quasis, exprs) = self.split_template(&raw, start)?;
                Ok(Expr::new(start.join(self.cursor.previous_span()), ExprKind::TemplateLiteral { quasis, exprs }))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expr::new(start, ExprKind::Literal(Literal::Boolean(true))))
            }
            TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::new(start, ExprKind::Literal(Literal::Boolean(false))))
            }
            TokenKind::Null => {
                self.cursor.advance();
                Ok(Expr::new(start, ExprKind::Literal(Literal::Null)))
            }
            TokenKind::This => {
                self.cursor.advance();
                Ok(Expr::new(start, ExprKind::Identifier(self.cursor.interner_mut().intern("this"))))
            }
            TokenKind::Super => {
                self.cursor.advance();
                Ok(Expr::new(start, ExprKind::Identifier(self.cursor.interner_mut().intern("super"))))
            }
            TokenKind::Function => self.parse_function_expr(false),
            TokenKind::LParen => self.parse_paren_expr(),
            TokenKind::LBracket => self.parse_array_expr(),
            TokenKind::LBrace => self.parse_object_expr(),
            TokenKind::Ident(name) => {
                if self.cursor_resolve_matches(name, "async") && self.cursor.peek_kind() == TokenKind::Function {
                    self.cursor.advance();
                    return self.parse_function_expr(true);
                }
                self.cursor.advance();
                if self.cursor_resolve_matches(name, "undefined") {
                    return Ok(Expr::new(start, ExprKind::Literal(Literal::Undefined)));
                }
                Ok(Expr::new(start, ExprKind::Identifier(name)))
            }
            other => Err(ParseError::new(format!("expected an expression, found {other:?}"), start)),
        }
    }

    fn cursor_resolve_matches(&self, name: struxc_ir::Name, word: &str) -> bool {
        self.cursor.interner_ref().resolve(name) == word
    }

    fn parse_paren_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.expect(TokenKind::LParen)?.span;
        let inner = self.parse_expr()?;
        let end = self.cursor.expect(TokenKind::RParen)?.span;
        Ok(Expr::new(start.join(end), ExprKind::Paren { expr: Box::new(inner) }))
    }

    fn parse_array_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.expect(TokenKind::LBracket)?.span;
        let mut elements = Vec::new();
        while !self.cursor.check(TokenKind::RBracket) {
            if self.cursor.check(TokenKind::Comma) {
                self.cursor.advance();
                elements.push(ArrayElement::Hole);
                continue;
            }
            if self.cursor.eat(TokenKind::DotDotDot) {
                elements.push(ArrayElement::Spread(self.parse_assignment_expr()?));
            } else {
                elements.push(ArrayElement::Item(self.parse_assignment_expr()?));
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let end = self.cursor.expect(TokenKind::RBracket)?.span;
        Ok(Expr::new(start.join(end), ExprKind::Array { elements, contextual_type: None }))
    }

    fn parse_object_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.expect(TokenKind::LBrace)?.span;
        let mut props = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.eat(TokenKind::DotDotDot) {
                props.push(ObjectProp::Spread(self.parse_assignment_expr()?));
            } else {
                let computed = self.cursor.eat(TokenKind::LBracket);
                let key = self.cursor.expect_ident()?;
                if computed {
                    self.cursor.expect(TokenKind::RBracket)?;
                }
                if self.cursor.check(TokenKind::LParen) {
                    let params = self.parse_param_list()?;
                    let body = self.parse_block()?;
                    props.push(ObjectProp::Method { key, params, body });
                } else if self.cursor.eat(TokenKind::Colon) {
                    let value = self.parse_assignment_expr()?;
                    props.push(ObjectProp::KeyValue { key, value, computed });
                } else {
                    props.push(ObjectProp::Shorthand { name: key });
                }
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let end = self.cursor.expect(TokenKind::RBrace)?.span;
        Ok(Expr::new(start.join(end), ExprKind::Object { props, contextual_type: None }))
    }

    fn parse_function_expr(&mut self, is_async: bool) -> Result<Expr, ParseError> {
        let start = self.cursor.expect(TokenKind::Function)?.span;
        let is_generator = self.cursor.eat(TokenKind::Star);
        let name = if matches!(self.cursor.current_kind(), TokenKind::Ident(_)) {
            Some(self.cursor.expect_ident()?)
        } else {
            None
        };
        let params = self.parse_param_list()?;
        let return_type = if self.cursor.eat(TokenKind::Colon) { Some(self.parse_type()?) } else { None };
        let body = self.parse_block()?;
        let span = start.join(self.cursor.previous_span());
        Ok(Expr::new(
            span,
            ExprKind::FunctionExpr { name, params, return_type, body, is_async, is_generator },
        ))
    }

    pub(crate) fn parse_param_list(&mut self) -> Result<Vec<Param>, ParseError> {
        self.cursor.expect(TokenKind::LParen)?;
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
        Ok(params)
    }

    /// Try to parse an arrow function starting at the current position.
    /// Returns `Ok(None)` (cursor restored) if this isn't one.
    fn try_parse_arrow_function(&mut self) -> Result<Option<Expr>, ParseError> {
        let checkpoint = self.cursor.position();
        let start = self.cursor.current_span();
        let is_async = self.eat_word("async");

        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            if self.cursor.peek_kind() == TokenKind::Arrow {
                self.cursor.advance();
                self.cursor.advance();
                let param = Param {
                    pattern: BindingPattern::Identifier { span: start, name, ty: None },
                    ty: None,
                    default: None,
                    optional: false,
                    is_rest: false,
                    span: start,
                };
                let body = self.parse_arrow_body()?;
                let span = start.join(self.cursor.previous_span());
                return Ok(Some(Expr::new(
                    span,
                    ExprKind::Arrow { params: vec![param], return_type: None, body, is_async },
                )));
            }
        }

        if self.cursor.check(TokenKind::LParen) {
            if let Some(params) = self.try_parse_params_only() {
                let return_type = if self.cursor.eat(TokenKind::Colon) {
                    match self.parse_type() {
                        Ok(ty) => Some(ty),
                        Err(_) => {
                            self.cursor.restore(checkpoint);
                            return Ok(None);
                        }
                    }
                } else {
                    None
                };
                if self.cursor.eat(TokenKind::Arrow) {
                    let body = self.parse_arrow_body()?;
                    let span = start.join(self.cursor.previous_span());
                    return Ok(Some(Expr::new(span, ExprKind::Arrow { params, return_type, body, is_async })));
                }
            }
        }

        self.cursor.restore(checkpoint);
        Ok(None)
    }

    fn try_parse_params_only(&mut self) -> Option<Vec<Param>> {
        let checkpoint = self.cursor.position();
        match self.parse_param_list() {
            Ok(params) => Some(params),
            Err(_) => {
                self.cursor.restore(checkpoint);
                None
            }
        }
    }

    fn parse_arrow_body(&mut self) -> Result<ArrowBody, ParseError> {
        if self.cursor.check(TokenKind::LBrace) {
            Ok(ArrowBody::Block(self.parse_block()?))
        } else {
            Ok(ArrowBody::Expr(Box::new(self.parse_assignment_expr()?)))
        }
    }

    fn binary(&self, op: BinaryOp, left: Expr, right: Expr) -> Expr {
        let span = left.span.join(right.span);
        Expr::new(span, ExprKind::Binary { op, left: Box::new(left), right: Box::new(right) })
    }

    /// Split a raw template-literal source slice (without its surrounding
    /// backticks) into its literal quasis and `${...}` substitution
    /// expressions, re-invoking this same parser on each substitution.
    fn split_template(&mut self, raw: &str, base: Span) -> Result<(Vec<String>, Vec<Expr>), ParseError> {
        let mut quasis = Vec::new();
        let mut exprs = Vec::new();
        let mut current = String::new();
        let chars: Vec<(usize, char)> = raw.char_indices().collect();
        let mut idx = 0usize;
        while idx < chars.len() {
            let ch = chars[idx].1;
            if ch == '$' && idx + 1 < chars.len() && chars[idx + 1].1 == '{' {
                let mut depth = 1i32;
                let mut j = idx + 2;
                while j < chars.len() && depth > 0 {
                    match chars[j].1 {
                        '{' => depth += 1,
                        '}' => depth -= 1,
                        _ => {}
                    }
                    if depth > 0 {
                        j += 1;
                    }
                }
                quasis.push(std::mem::take(&mut current));
                let sub_start = if idx + 2 < chars.len() { chars[idx + 2].0 } else { raw.len() };
                let sub_end = if j < chars.len() { chars[j].0 } else { raw.len() };
                let sub_source = &raw[sub_start..sub_end];
                let mut sub_tokens = struxc_lexer::lex(sub_source, self.cursor.interner_mut());
                sub_tokens.pop();
                sub_tokens.push(struxc_lexer::Token::new(TokenKind::Eof, base));
                let mut sub_parser = Parser::new(&sub_tokens, self.cursor.interner_mut());
                exprs.push(sub_parser.parse_expr()?);
                idx = j + 1;
            } else {
                current.push(ch);
                idx += 1;
            }
        }
        quasis.push(current);
        Ok((quasis, exprs))
    }
}

enum DirectOrDesugared {
    Direct(AssignOp),
    Desugared(BinaryOp),
}
