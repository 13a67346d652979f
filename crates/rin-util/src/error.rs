//! Error types surfaced at the CLI boundary.
//!
//! Nothing in the lexer or parser returns `Result`: lexical trouble becomes an
//! `Illegal` token, and syntactic trouble becomes a `ParseError` pushed onto a
//! `Diagnostics` bag. `DriverError` exists only for the layer *outside* that
//! core, where a file genuinely may not exist or may not be valid UTF-8.

use std::path::PathBuf;
use thiserror::Error;

/// Failures the CLI driver can hit before a `Parser` even exists.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("usage: rinc [--tokens] <source-file>")]
    BadUsage,

    #[error("could not open file '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),
}
