//! Function declarations and parameter lists.

use rin_lex::TokenKind;

use crate::ast::{Block, FnDecl, Param, Stmt};
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// `fn` IDENT `(` params? `)` block
    pub(crate) fn parse_fn_decl(&mut self) -> Stmt {
        let line = self.current.line;
        self.advance(); // 'fn'

        let name = self.expect_ident("Expected function name after 'fn'");

        self.expect(TokenKind::LParen, "Expected '(' after function name");

        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.parse_param());
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "Expected ')' after parameters");

        let body = self.parse_block();

        Stmt::FnDecl(FnDecl {
            name,
            params,
            body,
            line,
        })
    }

    /// IDENT `:` IDENT
    fn parse_param(&mut self) -> Param {
        let line = self.current.line;
        let name = self.expect_ident("Expected parameter name");

        self.expect(TokenKind::Colon, "Expected ':' after parameter name");

        let type_name = self.expect_ident("Expected parameter type");

        Param {
            name,
            type_name,
            line,
        }
    }

    /// `{` stmt* `}`
    pub(crate) fn parse_block(&mut self) -> Block {
        let line = self.current.line;
        self.expect(TokenKind::LBrace, "Expected '{'");

        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.check(TokenKind::Eof) {
            statements.push(self.parse_stmt());
        }
        self.expect(TokenKind::RBrace, "Expected '}'");

        Block { statements, line }
    }
}
