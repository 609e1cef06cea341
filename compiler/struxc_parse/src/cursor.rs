//! Token cursor (grounded on `ori_parse`'s cursor: a flat position into a
//! token slice with `check`/`expect`/`advance` primitives).

use struxc_ir::{Name, Span, StringInterner};
use struxc_lexer::{Token, TokenKind};

use crate::error::ParseError;

pub struct Cursor<'a> {
    tokens: &'a [Token],
    interner: &'a mut StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Token], interner: &'a mut StringInterner) -> Self {
        Cursor { tokens, interner, pos: 0 }
    }

    pub fn interner_mut(&mut self) -> &mut StringInterner {
        self.interner
    }

    #[must_use]
    pub fn interner_ref(&self) -> &StringInterner {
        self.interner
    }

    /// Save the cursor position for a speculative parse (arrow-function vs.
    /// parenthesized-expression disambiguation needs this: there's no
    /// bounded lookahead that tells them apart without trying one).
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn restore(&mut self, pos: usize) {
        self.pos = pos;
    }

    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[must_use]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[must_use]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[must_use]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[must_use]
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens.get(self.pos + 1).map_or(TokenKind::Eof, |t| t.kind)
    }

    pub fn advance(&mut self) -> Token {
        let current = self.tokens[self.pos];
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        current
    }

    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::new(
                format!("expected {:?}, found {:?}", kind, self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Accept an identifier token, or a word the language treats as a
    /// contextual keyword when it appears in name position (e.g. a
    /// property named `readonly`).
    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            other if contextual_keyword_text(other).is_some() => {
                #[allow(clippy::unwrap_used)]
                let text = contextual_keyword_text(other).unwrap();
                self.advance();
                Ok(self.interner.intern(text))
            }
            other => Err(ParseError::new(format!("expected identifier, found {other:?}"), self.current_span())),
        }
    }
}

/// There is no dedicated token for contextual keywords (spec §1): they
/// lex as plain identifiers, so this only matters for the small set of
/// *reserved* words this grammar still wants to accept as property/binding
/// names (e.g. a method literally named `delete`). Currently empty because
/// the lexer never reserves a word the grammar needs back as a name; kept
/// as the seam `expect_ident` was written against.
fn contextual_keyword_text(_kind: TokenKind) -> Option<&'static str> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_eof() {
        let mut interner = StringInterner::new();
        let tokens = struxc_lexer::lex("x", &mut interner);
        let mut cursor = Cursor::new(&tokens, &mut interner);
        cursor.advance();
        assert!(cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn expect_reports_mismatch() {
        let mut interner = StringInterner::new();
        let tokens = struxc_lexer::lex("x", &mut interner);
        let mut cursor = Cursor::new(&tokens, &mut interner);
        assert!(cursor.expect(TokenKind::LParen).is_err());
    }
}
