//! Integer literals.

use super::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Reads the maximal run of ASCII digits. Conversion to an integer
    /// value is deferred to a later phase; the token carries the digits
    /// as text.
    pub(super) fn lex_number(&mut self, line: u32) -> Token {
        let start = self.byte_pos();
        while self.current_char().is_ascii_digit() {
            self.advance();
        }
        Token::new(TokenKind::Number, self.source_slice(start), line)
    }
}
