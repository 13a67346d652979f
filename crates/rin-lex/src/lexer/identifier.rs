//! Identifiers and keywords.

use super::Lexer;
use crate::token::{lookup_keyword_in, Token};

impl<'a> Lexer<'a> {
    /// Reads the maximal run of ASCII alphanumerics and `_`, then looks the
    /// resulting lexeme up in the keyword table.
    pub(super) fn lex_identifier(&mut self, line: u32) -> Token {
        let start = self.byte_pos();
        while self.current_char().is_ascii_alphanumeric() || self.current_char() == '_' {
            self.advance();
        }
        let lexeme = self.source_slice(start);
        let kind = lookup_keyword_in(self.keyword_table(), &lexeme);
        Token::new(kind, lexeme, line)
    }
}
