//! The expression grammar, one precedence level per function.
//!
//! The grammar only has six levels and never grows new ones, so each level
//! is written out as its own function rather than folded into a single
//! binding-power table — `parse_comparison` and `parse_additive` read the
//! same way a grammar rule reads, at the cost of five near-identical
//! left-associative loops below.

use rin_lex::TokenKind;

use crate::ast::{
    AssignExpr, BinOp, BinaryExpr, CallExpr, ErrorExpr, Expr, IdentExpr, NumberLiteral,
    StringLiteral, UnOp, UnaryExpr,
};
use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_expr(&mut self) -> Expr {
        self.parse_assignment()
    }

    /// IDENT `=` assignment, right-associative; anything else falls through
    /// to comparison. The `current`/`peek` pair is the only two-token
    /// lookahead this grammar needs: an identifier alone is just a name,
    /// an identifier followed by `=` is the start of an assignment.
    fn parse_assignment(&mut self) -> Expr {
        if self.check(TokenKind::Ident) && self.peek_is(TokenKind::Assign) {
            let line = self.current.line;
            let target_tok = self.current.clone();
            let target = self.intern(&target_tok.lexeme);
            self.advance(); // the identifier
            self.advance(); // '='
            let value = self.parse_assignment();
            return Expr::Assign(AssignExpr {
                target,
                value: Box::new(value),
                line,
            });
        }
        self.parse_comparison()
    }

    /// additive (`==` | `!=` | `<` | `>` | `<=` | `>=` additive)*, left-associative.
    fn parse_comparison(&mut self) -> Expr {
        let mut left = self.parse_additive();
        loop {
            let op = match self.current.kind {
                TokenKind::Eq => BinOp::Eq,
                TokenKind::NotEq => BinOp::NotEq,
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::LtEq => BinOp::LtEq,
                TokenKind::GtEq => BinOp::GtEq,
                _ => break,
            };
            let line = self.current.line;
            self.advance();
            let right = self.parse_additive();
            left = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
                line,
            });
        }
        left
    }

    /// multiplicative (`+` | `-` multiplicative)*, left-associative.
    fn parse_additive(&mut self) -> Expr {
        let mut left = self.parse_multiplicative();
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            let line = self.current.line;
            self.advance();
            let right = self.parse_multiplicative();
            left = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
                line,
            });
        }
        left
    }

    /// unary (`*` | `/` unary)*, left-associative.
    fn parse_multiplicative(&mut self) -> Expr {
        let mut left = self.parse_unary();
        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            let line = self.current.line;
            self.advance();
            let right = self.parse_unary();
            left = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
                line,
            });
        }
        left
    }

    /// `-` unary | primary, right-associative.
    fn parse_unary(&mut self) -> Expr {
        if self.check(TokenKind::Minus) {
            let line = self.current.line;
            self.advance();
            let operand = self.parse_unary();
            return Expr::Unary(UnaryExpr {
                op: UnOp::Neg,
                operand: Box::new(operand),
                line,
            });
        }
        self.parse_primary()
    }

    /// NUMBER | STRING | IDENT (`(` args? `)`)? | `(` expr `)`
    ///
    /// Anything else is not a valid start of an expression: records a
    /// diagnostic at `current`'s line, runs `synchronize`, and returns an
    /// [`Expr::Error`] node so the caller always gets a node back.
    fn parse_primary(&mut self) -> Expr {
        let line = self.current.line;
        match self.current.kind {
            TokenKind::Number => {
                let tok = self.current.clone();
                self.advance();
                Expr::Number(NumberLiteral {
                    value: tok.lexeme,
                    line,
                })
            }
            TokenKind::String => {
                let tok = self.current.clone();
                self.advance();
                Expr::String(StringLiteral {
                    value: tok.lexeme,
                    line,
                })
            }
            TokenKind::Ident => {
                let tok = self.current.clone();
                let name = self.intern(&tok.lexeme);
                self.advance();
                if self.eat(TokenKind::LParen) {
                    let mut args = Vec::new();
                    if !self.check(TokenKind::RParen) {
                        loop {
                            args.push(self.parse_expr());
                            if !self.eat(TokenKind::Comma) {
                                break;
                            }
                        }
                    }
                    self.expect(TokenKind::RParen, "Expected ')' after call arguments");
                    Expr::Call(CallExpr {
                        callee: name,
                        args,
                        line,
                    })
                } else {
                    Expr::Ident(IdentExpr { name, line })
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr();
                self.expect(TokenKind::RParen, "Expected ')' after grouped expression");
                inner
            }
            _ => {
                let lexeme = self.current.lexeme.clone();
                self.error(format!("Unexpected token '{}' in expression", lexeme), line);
                self.synchronize();
                Expr::Error(ErrorExpr { line })
            }
        }
    }
}
