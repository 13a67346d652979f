//! Recursive-descent parser for the language tokenized by `rin-lex`.
//!
//! `Parser::new` buffers a two-token lookahead window over a [`rin_lex::Lexer`]
//! and `Parser::parse_program` walks it into an owned [`ast::Program`],
//! collecting diagnostics instead of panicking or aborting on malformed
//! input. The grammar is split across three sibling modules, each an `impl
//! Parser` block: [`items`] (function declarations, parameter lists, and
//! blocks), [`stmt`] (the statement dispatcher and the four non-expression
//! statement forms), and [`expr`] (the six-level expression precedence
//! ladder).
//!
//! ```
//! let mut parser = rin_par::Parser::new("fn main() { let x = 42; }");
//! let program = parser.parse_program();
//! assert!(!parser.has_errors());
//! assert_eq!(program.statements.len(), 1);
//! ```

mod ast;
mod expr;
mod items;
mod parser;
mod stmt;

pub use ast::{
    AssignExpr, BinOp, BinaryExpr, Block, CallExpr, ElseBranch, ErrorExpr, Expr, ExprStmt, FnDecl,
    IdentExpr, IfStmt, LetStmt, NumberLiteral, Param, Program, ReturnStmt, Stmt, StringLiteral,
    UnOp, UnaryExpr, WhileStmt,
};
pub use parser::Parser;
