//! String literals.
//!
//! No escape processing: `\n` inside a string literal is two characters, a
//! backslash and an `n`, per the grammar's non-goals.

use super::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Consumes the opening quote, then reads until the closing quote or
    /// end of input. An unterminated string becomes `Illegal` carrying
    /// whatever content was read; a terminated one becomes `String` with
    /// the quotes stripped.
    pub(super) fn lex_string(&mut self, line: u32) -> Token {
        self.advance(); // opening '"'
        let start = self.byte_pos();
        while !self.is_at_end() && self.current_char() != '"' {
            self.advance();
        }
        let content = self.source_slice(start);
        if self.is_at_end() {
            return Token::new(TokenKind::Illegal, content, line);
        }
        self.advance(); // closing '"'
        Token::new(TokenKind::String, content, line)
    }
}
