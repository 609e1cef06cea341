//! The `Parser`: a thin wrapper around [`crate::cursor::Cursor`] that the
//! grammar modules hang their `impl Parser<'_>` blocks off of.

use struxc_ir::StringInterner;
use struxc_lexer::{Token, TokenKind};

use crate::cursor::Cursor;

pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Token], interner: &'a mut StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
        }
    }

    /// Check whether the current token is an identifier whose text is
    /// exactly `word`, without consuming it. Used for contextual keywords
    /// (`readonly`, `static`, `get`/`set`, `async`, ...) that the lexer
    /// never reserves.
    pub(crate) fn peek_word(&self, word: &str) -> bool {
        matches!(self.cursor.current_kind(), TokenKind::Ident(name) if self.cursor_resolve(name) == word)
    }

    pub(crate) fn eat_word(&mut self, word: &str) -> bool {
        if self.peek_word(word) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    fn cursor_resolve(&self, name: struxc_ir::Name) -> &str {
        self.cursor.interner_ref().resolve(name)
    }
}
