//! Two-character operator disambiguation: `==`, `!=`, `<=`, `>=`.
//!
//! Each of these starts with a character that also has a one-character
//! meaning, so each function peeks one character ahead and only consumes it
//! when it completes the two-character form.

use super::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_equals(&mut self, line: u32) -> Token {
        self.advance();
        if self.current_char() == '=' {
            self.advance();
            Token::new(TokenKind::Eq, "==", line)
        } else {
            Token::new(TokenKind::Assign, "=", line)
        }
    }

    pub(super) fn lex_bang(&mut self, line: u32) -> Token {
        self.advance();
        if self.current_char() == '=' {
            self.advance();
            Token::new(TokenKind::NotEq, "!=", line)
        } else {
            Token::new(TokenKind::Illegal, "!", line)
        }
    }

    pub(super) fn lex_less(&mut self, line: u32) -> Token {
        self.advance();
        if self.current_char() == '=' {
            self.advance();
            Token::new(TokenKind::LtEq, "<=", line)
        } else {
            Token::new(TokenKind::Lt, "<", line)
        }
    }

    pub(super) fn lex_greater(&mut self, line: u32) -> Token {
        self.advance();
        if self.current_char() == '=' {
            self.advance();
            Token::new(TokenKind::GtEq, ">=", line)
        } else {
            Token::new(TokenKind::Gt, ">", line)
        }
    }
}
