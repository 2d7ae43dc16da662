//! Identifier and keyword lexing.

use super::Lexer;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ascii_ident_continue;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, or the keyword it turns out to spell.
    ///
    /// Start and continue characters both accept any byte ≥ 0x80 whose
    /// UTF-8 sequence is valid (already guaranteed, since we operate on a
    /// Rust `&str`); continuation additionally accepts ASCII digits.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        loop {
            let c = self.tracker.current_char();
            if is_ascii_ident_continue(c) || (c as u32) >= 0x80 {
                self.tracker.advance(c);
            } else {
                break;
            }
        }

        let text = self.tracker.slice_from(self.token_start_pos);
        match TokenKind::keyword(text) {
            Some(kind) => self.make_token(kind),
            None => self.make_token(TokenKind::Identifier),
        }
    }
}
