//! rin-lex - Lexical analysis for the Rin language front end.
//!
//! A lexer turns a character stream into a token stream. This crate does
//! that and nothing else: it does not know about grammar, precedence, or
//! the shape of a program — only about the token alphabet in [`TokenKind`]
//! and the scanning rules that produce it.
//!
//! # Example
//!
//! ```
//! use rin_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let x = 42;");
//! let tokens = lexer.tokenize();
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! assert_eq!(tokens[0].kind, TokenKind::Let);
//! ```
//!
//! Lexical trouble never aborts scanning: an unterminated string or a
//! stray byte like `@` becomes a [`TokenKind::Illegal`] token rather than a
//! panic or an `Err`. Callers (ordinarily a parser) decide what to do with
//! it.

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{lookup_keyword, Token, TokenKind};
