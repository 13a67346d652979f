//! rin-util - Shared foundation types for the Rin compiler front end.
//!
//! This crate holds the pieces that both the lexer and the parser need but
//! that belong to neither: an interned-string table for identifiers, a small
//! diagnostics bag for collecting parse errors, and the error types the CLI
//! driver surfaces at the process boundary.
//!
//! None of this crate touches a file system or a thread. Every type here is
//! meant to be owned by exactly one `Lexer` or `Parser` instance; there is no
//! global or lazily-initialized state, because nothing downstream needs one.

pub mod diagnostic;
pub mod error;
pub mod symbol;

pub use diagnostic::{Diagnostics, Level, ParseError};
pub use error::DriverError;
pub use symbol::{Interner, Symbol};
