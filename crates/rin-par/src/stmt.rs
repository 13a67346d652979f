//! Statement dispatch and the non-expression statement forms.

use rin_lex::TokenKind;

use crate::ast::{ElseBranch, ExprStmt, IfStmt, LetStmt, ReturnStmt, Stmt, WhileStmt};
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Dispatches on `current` at a statement boundary.
    pub(crate) fn parse_stmt(&mut self) -> Stmt {
        match self.current.kind {
            TokenKind::Fn => self.parse_fn_decl(),
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::If => Stmt::If(self.parse_if_stmt()),
            TokenKind::LBrace => Stmt::Block(self.parse_block()),
            _ => self.parse_expr_stmt(),
        }
    }

    /// `let` `mut`? IDENT (`:` IDENT)? `=` expr `;`
    fn parse_let_stmt(&mut self) -> Stmt {
        let line = self.current.line;
        self.advance(); // 'let'

        let is_mut = self.eat(TokenKind::Mut);

        let name = self.expect_ident("Expected variable name after 'let'");

        let type_name = if self.eat(TokenKind::Colon) {
            Some(self.expect_ident("Expected type name after ':'"))
        } else {
            None
        };

        self.expect(TokenKind::Assign, "Expected '=' in let statement");
        let init = self.parse_expr();
        self.expect(TokenKind::Semicolon, "Expected ';' after let statement");

        Stmt::Let(LetStmt {
            is_mut,
            name,
            type_name,
            init,
            line,
        })
    }

    /// `return` expr? `;`
    fn parse_return_stmt(&mut self) -> Stmt {
        let line = self.current.line;
        self.advance(); // 'return'

        let value = if self.check(TokenKind::Semicolon) || self.check(TokenKind::Eof) {
            None
        } else {
            Some(self.parse_expr())
        };
        self.expect(TokenKind::Semicolon, "Expected ';' after return statement");

        Stmt::Return(ReturnStmt { value, line })
    }

    /// `while` expr block
    fn parse_while_stmt(&mut self) -> Stmt {
        let line = self.current.line;
        self.advance(); // 'while'

        let condition = self.parse_expr();
        let body = self.parse_block();

        Stmt::While(WhileStmt {
            condition,
            body,
            line,
        })
    }

    /// `if` expr block (`else` (`if` ... | block))?
    pub(crate) fn parse_if_stmt(&mut self) -> IfStmt {
        let line = self.current.line;
        self.advance(); // 'if'

        let condition = self.parse_expr();
        let then_branch = self.parse_block();

        let else_branch = if self.eat(TokenKind::Else) {
            if self.check(TokenKind::If) {
                Some(ElseBranch::If(Box::new(self.parse_if_stmt())))
            } else {
                Some(ElseBranch::Block(self.parse_block()))
            }
        } else {
            None
        };

        IfStmt {
            condition,
            then_branch,
            else_branch,
            line,
        }
    }

    /// expr `;`
    fn parse_expr_stmt(&mut self) -> Stmt {
        let line = self.current.line;
        let expr = self.parse_expr();
        self.expect(TokenKind::Semicolon, "Expected ';' after expression statement");
        Stmt::Expr(ExprStmt { expr, line })
    }
}
