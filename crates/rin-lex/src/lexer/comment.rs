//! Whitespace and comment skipping.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments until neither remains at the cursor.
    ///
    /// The outer loop matters: a comment followed immediately by more
    /// whitespace followed by another comment must all be consumed before
    /// `next_token` looks at the current character.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            let before = self.byte_pos();
            self.skip_whitespace();
            self.skip_comment();
            if self.byte_pos() == before {
                break;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), ' ' | '\t' | '\r' | '\n') {
            self.advance();
        }
    }

    fn skip_comment(&mut self) {
        if self.current_char() != '/' {
            return;
        }
        match self.peek_char() {
            '/' => {
                while !self.is_at_end() && self.current_char() != '\n' {
                    self.advance();
                }
            }
            '*' => {
                self.advance(); // '/'
                self.advance(); // '*'
                loop {
                    if self.is_at_end() {
                        // Unterminated block comment: silently accept EOF
                        // as the terminator (lenient, per the open question
                        // this implementation locks in).
                        break;
                    }
                    if self.current_char() == '*' && self.peek_char() == '/' {
                        self.advance();
                        self.advance();
                        break;
                    }
                    self.advance();
                }
            }
            _ => {}
        }
    }
}
