//! Statement grammar.

use struxc_ir::ast::*;
use struxc_ir::Span;
use struxc_lexer::TokenKind;

use crate::error::ParseError;
use crate::parser::Parser;

impl Parser<'_> {
    pub fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::LBrace => {
                let body = self.parse_block()?;
                let span = start.join(self.cursor.previous_span());
                Ok(Stmt { span, kind: StmtKind::Block(body) })
            }
            TokenKind::Semicolon => {
                self.cursor.advance();
                Ok(Stmt { span: start, kind: StmtKind::Empty })
            }
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::Do => self.parse_do_while_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Switch => self.parse_switch_stmt(),
            TokenKind::Try => self.parse_try_stmt(),
            TokenKind::Throw => {
                self.cursor.advance();
                let expr = self.parse_expr()?;
                self.cursor.eat(TokenKind::Semicolon);
                let span = start.join(self.cursor.previous_span());
                Ok(Stmt { span, kind: StmtKind::Throw(expr) })
            }
            TokenKind::Return => {
                self.cursor.advance();
                let expr = if self.can_start_expr() { Some(self.parse_expr()?) } else { None };
                self.cursor.eat(TokenKind::Semicolon);
                let span = start.join(self.cursor.previous_span());
                Ok(Stmt { span, kind: StmtKind::Return(expr) })
            }
            TokenKind::Break => {
                self.cursor.advance();
                let label = self.parse_optional_label()?;
                self.cursor.eat(TokenKind::Semicolon);
                let span = start.join(self.cursor.previous_span());
                Ok(Stmt { span, kind: StmtKind::Break(label) })
            }
            TokenKind::Continue => {
                self.cursor.advance();
                let label = self.parse_optional_label()?;
                self.cursor.eat(TokenKind::Semicolon);
                let span = start.join(self.cursor.previous_span());
                Ok(Stmt { span, kind: StmtKind::Continue(label) })
            }
            TokenKind::Import => {
                let decl = self.parse_import_decl()?;
                let span = decl.span;
                Ok(Stmt { span, kind: StmtKind::Import(decl) })
            }
            TokenKind::Export => {
                let decl = self.parse_export_decl()?;
                let span = start.join(self.cursor.previous_span());
                Ok(Stmt { span, kind: StmtKind::Export(decl) })
            }
            TokenKind::Function => {
                let decl = self.parse_function_decl(false, false)?;
                let span = decl.span;
                Ok(Stmt { span, kind: StmtKind::Function(decl) })
            }
            TokenKind::Class => {
                let decl = self.parse_class_decl(false)?;
                let span = decl.span;
                Ok(Stmt { span, kind: StmtKind::Class(decl) })
            }
            TokenKind::Var => self.parse_var_decl_stmt(start),
            TokenKind::Enum => {
                let decl = self.parse_enum_decl(false)?;
                let span = decl.span;
                Ok(Stmt { span, kind: StmtKind::Enum(decl) })
            }
            _ if self.at_async_function() => {
                self.cursor.advance();
                let decl = self.parse_function_decl(false, true)?;
                let span = decl.span;
                Ok(Stmt { span, kind: StmtKind::Function(decl) })
            }
            _ if self.at_const_enum() => {
                let decl = self.parse_enum_decl(false)?;
                let span = decl.span;
                Ok(Stmt { span, kind: StmtKind::Enum(decl) })
            }
            _ if self.peek_word("let") || self.peek_word("const") => self.parse_var_decl_stmt(start),
            _ if self.peek_word("interface") => {
                let decl = self.parse_interface_decl(false)?;
                let span = decl.span;
                Ok(Stmt { span, kind: StmtKind::Interface(decl) })
            }
            _ if self.peek_word("type") && matches!(self.cursor.peek_kind(), TokenKind::Ident(_)) => {
                let decl = self.parse_type_alias_decl(false)?;
                let span = decl.span;
                Ok(Stmt { span, kind: StmtKind::TypeAlias(decl) })
            }
            TokenKind::Ident(_) if self.is_labeled_statement() => self.parse_labeled_stmt(),
            _ => {
                let expr = self.parse_expr()?;
                self.cursor.eat(TokenKind::Semicolon);
                let span = start.join(expr.span);
                Ok(Stmt { span, kind: StmtKind::ExprStmt(expr) })
            }
        }
    }

    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            stmts.push(self.parse_statement()?);
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(stmts)
    }

    pub(crate) fn parse_var_decl_stmt(&mut self, start: Span) -> Result<Stmt, ParseError> {
        let kind = if self.cursor.eat(TokenKind::Var) {
            VarKind::Var
        } else if self.eat_word("const") {
            VarKind::Const
        } else {
            self.eat_word("let");
            VarKind::Let
        };
        let pattern = self.parse_binding_pattern()?;
        let ty = match &pattern {
            BindingPattern::Identifier { ty, .. } => ty.clone(),
            _ => None,
        };
        let init = if self.cursor.eat(TokenKind::Eq) { Some(self.parse_assignment_expr()?) } else { None };
        self.cursor.eat(TokenKind::Semicolon);
        let span = start.join(self.cursor.previous_span());
        Ok(Stmt { span, kind: StmtKind::VarDecl { kind, pattern, ty, init } })
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.expect(TokenKind::If)?.span;
        self.cursor.expect(TokenKind::LParen)?;
        let test = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen)?;
        let consequent = self.parse_statement()?;
        let alternate = if self.cursor.eat(TokenKind::Else) { Some(Box::new(self.parse_statement()?)) } else { None };
        let span = start.join(alternate.as_ref().map_or(consequent.span, |a| a.span));
        Ok(Stmt { span, kind: StmtKind::If { test, consequent: Box::new(consequent), alternate } })
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.expect(TokenKind::While)?.span;
        self.cursor.expect(TokenKind::LParen)?;
        let test = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen)?;
        let body = self.parse_statement()?;
        let span = start.join(body.span);
        Ok(Stmt { span, kind: StmtKind::While { test, body: Box::new(body) } })
    }

    fn parse_do_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.expect(TokenKind::Do)?.span;
        let body = self.parse_statement()?;
        self.cursor.expect(TokenKind::While)?;
        self.cursor.expect(TokenKind::LParen)?;
        let test = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen)?;
        self.cursor.eat(TokenKind::Semicolon);
        let span = start.join(self.cursor.previous_span());
        Ok(Stmt { span, kind: StmtKind::DoWhile { body: Box::new(body), test } })
    }

    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.expect(TokenKind::For)?.span;
        self.cursor.expect(TokenKind::LParen)?;
        if self.cursor.eat(TokenKind::Semicolon) {
            return self.finish_c_style_for(start, None);
        }
        if let Some(kind) = self.match_var_kind() {
            self.cursor.advance();
            let pattern = self.parse_binding_pattern()?;
            if self.cursor.check(TokenKind::In) {
                self.cursor.advance();
                let object = self.parse_expr()?;
                self.cursor.expect(TokenKind::RParen)?;
                let body = self.parse_statement()?;
                let span = start.join(body.span);
                return Ok(Stmt { span, kind: StmtKind::ForIn { pattern, object, body: Box::new(body) } });
            }
            if self.eat_word("of") {
                let iterable = self.parse_assignment_expr()?;
                self.cursor.expect(TokenKind::RParen)?;
                let body = self.parse_statement()?;
                let span = start.join(body.span);
                return Ok(Stmt {
                    span,
                    kind: StmtKind::ForOf { pattern, is_await: false, iterable, body: Box::new(body) },
                });
            }
            let ty = if self.cursor.eat(TokenKind::Colon) { Some(self.parse_type()?) } else { None };
            let init_value = if self.cursor.eat(TokenKind::Eq) { Some(self.parse_assignment_expr()?) } else { None };
            let decl_span = start.join(self.cursor.previous_span());
            let init = Stmt { span: decl_span, kind: StmtKind::VarDecl { kind, pattern, ty, init: init_value } };
            self.cursor.expect(TokenKind::Semicolon)?;
            return self.finish_c_style_for(start, Some(Box::new(init)));
        }
        let expr = self.parse_expr()?;
        let expr_span = expr.span;
        let init = Stmt { span: expr_span, kind: StmtKind::ExprStmt(expr) };
        self.cursor.expect(TokenKind::Semicolon)?;
        self.finish_c_style_for(start, Some(Box::new(init)))
    }

    fn match_var_kind(&self) -> Option<VarKind> {
        if self.cursor.check(TokenKind::Var) {
            Some(VarKind::Var)
        } else if self.peek_word("let") {
            Some(VarKind::Let)
        } else if self.peek_word("const") {
            Some(VarKind::Const)
        } else {
            None
        }
    }

    fn finish_c_style_for(&mut self, start: Span, init: Option<Box<Stmt>>) -> Result<Stmt, ParseError> {
        let test = if self.cursor.check(TokenKind::Semicolon) { None } else { Some(self.parse_expr()?) };
        self.cursor.expect(TokenKind::Semicolon)?;
        let update = if self.cursor.check(TokenKind::RParen) { None } else { Some(self.parse_expr()?) };
        self.cursor.expect(TokenKind::RParen)?;
        let body = self.parse_statement()?;
        let span = start.join(body.span);
        Ok(Stmt { span, kind: StmtKind::For { init, test, update, body: Box::new(body) } })
    }

    fn parse_switch_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.expect(TokenKind::Switch)?.span;
        self.cursor.expect(TokenKind::LParen)?;
        let discriminant = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen)?;
        self.cursor.expect(TokenKind::LBrace)?;
        let mut cases = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            let test = if self.cursor.eat(TokenKind::Case) {
                let test = self.parse_expr()?;
                self.cursor.expect(TokenKind::Colon)?;
                Some(test)
            } else {
                self.cursor.expect(TokenKind::Default)?;
                self.cursor.expect(TokenKind::Colon)?;
                None
            };
            let mut body = Vec::new();
            while !matches!(self.cursor.current_kind(), TokenKind::Case | TokenKind::Default | TokenKind::RBrace) {
                body.push(self.parse_statement()?);
            }
            cases.push(SwitchCase { test, body });
        }
        let end = self.cursor.expect(TokenKind::RBrace)?.span;
        Ok(Stmt { span: start.join(end), kind: StmtKind::Switch { discriminant, cases } })
    }

    fn parse_try_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.expect(TokenKind::Try)?.span;
        let block = self.parse_block()?;
        let handler = if self.cursor.eat(TokenKind::Catch) {
            let param = if self.cursor.eat(TokenKind::LParen) {
                let pattern = self.parse_binding_pattern()?;
                self.cursor.expect(TokenKind::RParen)?;
                Some(pattern)
            } else {
                None
            };
            let body = self.parse_block()?;
            Some(CatchClause { param, body })
        } else {
            None
        };
        let finalizer = if self.cursor.eat(TokenKind::Finally) { Some(self.parse_block()?) } else { None };
        let span = start.join(self.cursor.previous_span());
        Ok(Stmt { span, kind: StmtKind::Try { block, handler, finalizer } })
    }

    fn parse_optional_label(&mut self) -> Result<Option<struxc_ir::Name>, ParseError> {
        if matches!(self.cursor.current_kind(), TokenKind::Ident(_)) {
            Ok(Some(self.cursor.expect_ident()?))
        } else {
            Ok(None)
        }
    }

    fn is_labeled_statement(&self) -> bool {
        matches!(self.cursor.current_kind(), TokenKind::Ident(_)) && self.cursor.peek_kind() == TokenKind::Colon
    }

    fn parse_labeled_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        let label = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::Colon)?;
        let body = self.parse_statement()?;
        let span = start.join(body.span);
        Ok(Stmt { span, kind: StmtKind::Labeled { label, body: Box::new(body) } })
    }

    pub(crate) fn at_async_function(&self) -> bool {
        self.peek_word("async") && self.cursor.peek_kind() == TokenKind::Function
    }

    pub(crate) fn at_const_enum(&self) -> bool {
        self.peek_word("const") && self.cursor.peek_kind() == TokenKind::Enum
    }
}
