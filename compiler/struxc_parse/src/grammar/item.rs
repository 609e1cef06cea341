//! Top-level declaration grammar: functions, classes, interfaces, enums,
//! type aliases, and import/export forms.

use struxc_ir::ast::*;
use struxc_lexer::TokenKind;

use crate::error::ParseError;
use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn parse_function_decl(&mut self, is_exported: bool, is_async: bool) -> Result<FunctionDecl, ParseError> {
        let start = self.cursor.expect(TokenKind::Function)?.span;
        let is_generator = self.cursor.eat(TokenKind::Star);
        let name = Some(self.cursor.expect_ident()?);
        let generics = if self.cursor.check(TokenKind::Lt) { self.parse_generic_params()? } else { Vec::new() };
        let params = self.parse_param_list()?;
        let return_type = if self.cursor.eat(TokenKind::Colon) { Some(self.parse_type()?) } else { None };
        let body = self.parse_block()?;
        let span = start.join(self.cursor.previous_span());
        Ok(FunctionDecl { name, generics, params, return_type, body, is_async, is_generator, is_exported, span })
    }

    pub(crate) fn parse_generic_params(&mut self) -> Result<Vec<GenericParam>, ParseError> {
        self.cursor.expect(TokenKind::Lt)?;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::Gt) {
            loop {
                let name = self.cursor.expect_ident()?;
                let constraint = if self.cursor.eat(TokenKind::Extends) { Some(self.parse_type()?) } else { None };
                let default = if self.cursor.eat(TokenKind::Eq) { Some(self.parse_type()?) } else { None };
                params.push(GenericParam { name, constraint, default });
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::Gt)?;
        Ok(params)
    }

    pub(crate) fn parse_class_decl(&mut self, is_exported: bool) -> Result<ClassDecl, ParseError> {
        let start = self.cursor.expect(TokenKind::Class)?.span;
        let name = self.cursor.expect_ident()?;
        let generics = if self.cursor.check(TokenKind::Lt) { self.parse_generic_params()? } else { Vec::new() };
        let extends = if self.cursor.eat(TokenKind::Extends) { Some(self.parse_type()?) } else { None };
        let implements = if self.cursor.eat(TokenKind::Implements) {
            let mut list = vec![self.parse_type()?];
            while self.cursor.eat(TokenKind::Comma) {
                list.push(self.parse_type()?);
            }
            list
        } else {
            Vec::new()
        };
        self.cursor.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.eat(TokenKind::Semicolon) {
                continue;
            }
            members.push(self.parse_class_member()?);
        }
        let end = self.cursor.expect(TokenKind::RBrace)?.span;
        Ok(ClassDecl { name, generics, extends, implements, members, is_exported, span: start.join(end) })
    }

    fn parse_class_member(&mut self) -> Result<ClassMember, ParseError> {
        let start = self.cursor.current_span();
        let mut visibility = Visibility::Public;
        let mut is_static = false;
        let mut is_readonly = false;
        let mut is_override = false;
        let mut is_abstract = false;
        let mut is_async = false;
        loop {
            if self.eat_word("public") {
                visibility = Visibility::Public;
            } else if self.eat_word("protected") {
                visibility = Visibility::Protected;
            } else if self.eat_word("private") {
                visibility = Visibility::Private;
            } else if self.eat_word("static") {
                is_static = true;
            } else if self.eat_word("readonly") {
                is_readonly = true;
            } else if self.eat_word("override") {
                is_override = true;
            } else if self.eat_word("abstract") {
                is_abstract = true;
            } else if self.eat_word("async") {
                is_async = true;
            } else {
                break;
            }
        }
        let is_generator = self.cursor.eat(TokenKind::Star);

        let mut accessor: Option<bool> = None;
        if self.peek_word("get") {
            let checkpoint = self.cursor.position();
            self.cursor.advance();
            if matches!(self.cursor.current_kind(), TokenKind::Ident(_)) {
                accessor = Some(true);
            } else {
                self.cursor.restore(checkpoint);
            }
        } else if self.peek_word("set") {
            let checkpoint = self.cursor.position();
            self.cursor.advance();
            if matches!(self.cursor.current_kind(), TokenKind::Ident(_)) {
                accessor = Some(false);
            } else {
                self.cursor.restore(checkpoint);
            }
        }

        if accessor.is_none() && self.peek_word("constructor") {
            self.cursor.advance();
            let params = self.parse_param_list()?;
            let body = self.parse_block()?;
            let span = start.join(self.cursor.previous_span());
            return Ok(ClassMember::Constructor { params, body, visibility, span });
        }

        let name = self.cursor.expect_ident()?;
        let generics = if self.cursor.check(TokenKind::Lt) { self.parse_generic_params()? } else { Vec::new() };

        if let Some(is_getter) = accessor {
            return if is_getter {
                self.cursor.expect(TokenKind::LParen)?;
                self.cursor.expect(TokenKind::RParen)?;
                let ty = if self.cursor.eat(TokenKind::Colon) { Some(self.parse_type()?) } else { None };
                let body = self.parse_block()?;
                let span = start.join(self.cursor.previous_span());
                Ok(ClassMember::Property { name, ty, getter: Some(body), setter: None, visibility, is_static, span })
            } else {
                self.cursor.expect(TokenKind::LParen)?;
                let param = self.parse_param()?;
                self.cursor.expect(TokenKind::RParen)?;
                let body = self.parse_block()?;
                let span = start.join(self.cursor.previous_span());
                Ok(ClassMember::Property {
                    name,
                    ty: None,
                    getter: None,
                    setter: Some((param, body)),
                    visibility,
                    is_static,
                    span,
                })
            };
        }

        if self.cursor.check(TokenKind::LParen) {
            let params = self.parse_param_list()?;
            let return_type = if self.cursor.eat(TokenKind::Colon) { Some(self.parse_type()?) } else { None };
            let body = if self.cursor.check(TokenKind::LBrace) {
                Some(self.parse_block()?)
            } else {
                self.cursor.eat(TokenKind::Semicolon);
                None
            };
            let span = start.join(self.cursor.previous_span());
            return Ok(ClassMember::Method {
                name,
                generics,
                params,
                return_type,
                body,
                visibility,
                is_static,
                is_override,
                is_abstract,
                is_async,
                is_generator,
                span,
            });
        }

        let optional = self.cursor.eat(TokenKind::Question);
        let mut ty = if self.cursor.eat(TokenKind::Colon) { Some(self.parse_type()?) } else { None };
        if optional {
            ty = ty.map(|inner| ParsedType::Nullable { span: inner.span(), inner: Box::new(inner) });
        }
        let init = if self.cursor.eat(TokenKind::Eq) { Some(self.parse_assignment_expr()?) } else { None };
        self.cursor.eat(TokenKind::Semicolon);
        let span = start.join(self.cursor.previous_span());
        Ok(ClassMember::Field { name, ty, init, visibility, is_static, is_readonly, span })
    }

    pub(crate) fn parse_interface_decl(&mut self, is_exported: bool) -> Result<InterfaceDecl, ParseError> {
        let start = self.cursor.current_span();
        self.eat_word("interface");
        let name = self.cursor.expect_ident()?;
        let generics = if self.cursor.check(TokenKind::Lt) { self.parse_generic_params()? } else { Vec::new() };
        let extends = if self.cursor.eat(TokenKind::Extends) {
            let mut list = vec![self.parse_type()?];
            while self.cursor.eat(TokenKind::Comma) {
                list.push(self.parse_type()?);
            }
            list
        } else {
            Vec::new()
        };
        self.cursor.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            let member_start = self.cursor.current_span();
            let name = self.cursor.expect_ident()?;
            let optional = self.cursor.eat(TokenKind::Question);
            let is_method = self.cursor.check(TokenKind::LParen);
            let ty = if is_method {
                let params = self.parse_param_list()?;
                self.cursor.expect(TokenKind::Colon)?;
                let ret = self.parse_type()?;
                let param_types = params
                    .iter()
                    .map(|p| p.ty.clone().unwrap_or_else(|| ParsedType::Any { span: p.span }))
                    .collect();
                ParsedType::Function { span: member_start.join(ret.span()), params: param_types, ret: Box::new(ret) }
            } else {
                self.cursor.expect(TokenKind::Colon)?;
                self.parse_type()?
            };
            if !self.cursor.eat(TokenKind::Comma) {
                self.cursor.eat(TokenKind::Semicolon);
            }
            members.push(InterfaceMember { name, ty, optional, is_method, span: member_start.join(self.cursor.previous_span()) });
        }
        let end = self.cursor.expect(TokenKind::RBrace)?.span;
        Ok(InterfaceDecl { name, generics, extends, members, is_exported, span: start.join(end) })
    }

    pub(crate) fn parse_enum_decl(&mut self, is_exported: bool) -> Result<EnumDecl, ParseError> {
        let start = self.cursor.current_span();
        let is_const = self.eat_word("const");
        self.cursor.expect(TokenKind::Enum)?;
        let name = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            let member_start = self.cursor.current_span();
            let member_name = self.cursor.expect_ident()?;
            let init = if self.cursor.eat(TokenKind::Eq) { Some(self.parse_assignment_expr()?) } else { None };
            members.push(EnumMember { name: member_name, init, span: member_start.join(self.cursor.previous_span()) });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let end = self.cursor.expect(TokenKind::RBrace)?.span;
        Ok(EnumDecl { name, members, is_const, is_exported, span: start.join(end) })
    }

    pub(crate) fn parse_type_alias_decl(&mut self, is_exported: bool) -> Result<TypeAliasDecl, ParseError> {
        let start = self.cursor.current_span();
        self.eat_word("type");
        let name = self.cursor.expect_ident()?;
        let generics = if self.cursor.check(TokenKind::Lt) { self.parse_generic_params()? } else { Vec::new() };
        self.cursor.expect(TokenKind::Eq)?;
        let ty = self.parse_type()?;
        self.cursor.eat(TokenKind::Semicolon);
        let span = start.join(ty.span());
        Ok(TypeAliasDecl { name, generics, ty, is_exported, span })
    }

    pub(crate) fn parse_import_decl(&mut self) -> Result<ImportDecl, ParseError> {
        let start = self.cursor.expect(TokenKind::Import)?.span;
        let is_type_only = self.eat_word("type");
        let clause = if self.cursor.check(TokenKind::Star) {
            self.cursor.advance();
            self.eat_word("as");
            let name = self.cursor.expect_ident()?;
            ImportClause::Namespace(name)
        } else if self.cursor.check(TokenKind::LBrace) {
            self.cursor.advance();
            let mut specifiers = Vec::new();
            while !self.cursor.check(TokenKind::RBrace) {
                let spec_start = self.cursor.current_span();
                let is_type_only_spec = self.eat_word("type");
                let imported = self.cursor.expect_ident()?;
                let local = if self.eat_word("as") { self.cursor.expect_ident()? } else { imported };
                specifiers.push(Specifier {
                    imported,
                    local,
                    is_type_only: is_type_only_spec,
                    span: spec_start.join(self.cursor.previous_span()),
                });
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.cursor.expect(TokenKind::RBrace)?;
            ImportClause::Named(specifiers)
        } else {
            let name = self.cursor.expect_ident()?;
            ImportClause::Default(name)
        };
        self.eat_word("from");
        let source = self.parse_string_literal_text()?;
        self.cursor.eat(TokenKind::Semicolon);
        Ok(ImportDecl { source, clause, is_type_only, span: start.join(self.cursor.previous_span()) })
    }

    pub(crate) fn parse_export_decl(&mut self) -> Result<ExportDecl, ParseError> {
        let start = self.cursor.expect(TokenKind::Export)?.span;
        if self.cursor.eat(TokenKind::Default) {
            let expr = self.parse_assignment_expr()?;
            self.cursor.eat(TokenKind::Semicolon);
            return Ok(ExportDecl::Default(expr));
        }
        if self.cursor.eat(TokenKind::Star) {
            let specifiers = if self.eat_word("as") {
                ReExportKind::AllAs(self.cursor.expect_ident()?)
            } else {
                ReExportKind::All
            };
            self.eat_word("from");
            let source = self.parse_string_literal_text()?;
            self.cursor.eat(TokenKind::Semicolon);
            let span = start.join(self.cursor.previous_span());
            return Ok(ExportDecl::ReExport { source, specifiers, span });
        }
        if self.cursor.check(TokenKind::LBrace) {
            self.cursor.advance();
            let mut specifiers = Vec::new();
            while !self.cursor.check(TokenKind::RBrace) {
                let spec_start = self.cursor.current_span();
                let imported = self.cursor.expect_ident()?;
                let local = if self.eat_word("as") { self.cursor.expect_ident()? } else { imported };
                specifiers.push(Specifier {
                    imported,
                    local,
                    is_type_only: false,
                    span: spec_start.join(self.cursor.previous_span()),
                });
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.cursor.expect(TokenKind::RBrace)?;
            if self.eat_word("from") {
                let source = self.parse_string_literal_text()?;
                self.cursor.eat(TokenKind::Semicolon);
                let span = start.join(self.cursor.previous_span());
                return Ok(ExportDecl::ReExport { source, specifiers: ReExportKind::Named(specifiers), span });
            }
            self.cursor.eat(TokenKind::Semicolon);
            let span = start.join(self.cursor.previous_span());
            return Ok(ExportDecl::Named { specifiers, span });
        }
        let stmt = self.parse_exportable_decl_stmt()?;
        Ok(ExportDecl::Inline(Box::new(stmt)))
    }

    fn parse_exportable_decl_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        if self.at_async_function() {
            self.cursor.advance();
            let decl = self.parse_function_decl(true, true)?;
            let span = decl.span;
            return Ok(Stmt { span, kind: StmtKind::Function(decl) });
        }
        if self.cursor.check(TokenKind::Function) {
            let decl = self.parse_function_decl(true, false)?;
            let span = decl.span;
            return Ok(Stmt { span, kind: StmtKind::Function(decl) });
        }
        if self.cursor.check(TokenKind::Class) {
            let decl = self.parse_class_decl(true)?;
            let span = decl.span;
            return Ok(Stmt { span, kind: StmtKind::Class(decl) });
        }
        if self.at_const_enum() || self.cursor.check(TokenKind::Enum) {
            let decl = self.parse_enum_decl(true)?;
            let span = decl.span;
            return Ok(Stmt { span, kind: StmtKind::Enum(decl) });
        }
        if self.peek_word("interface") {
            let decl = self.parse_interface_decl(true)?;
            let span = decl.span;
            return Ok(Stmt { span, kind: StmtKind::Interface(decl) });
        }
        if self.peek_word("type") && matches!(self.cursor.peek_kind(), TokenKind::Ident(_)) {
            let decl = self.parse_type_alias_decl(true)?;
            let span = start.join(decl.ty.span());
            return Ok(Stmt { span, kind: StmtKind::TypeAlias(decl) });
        }
        self.parse_var_decl_stmt(start)
    }

    fn parse_string_literal_text(&mut self) -> Result<String, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::String(name) => {
                self.cursor.advance();
                Ok(self.cursor.interner_mut().resolve(name).to_string())
            }
            other => Err(ParseError::new(format!("expected a string literal, found {other:?}"), self.cursor.current_span())),
        }
    }
}
