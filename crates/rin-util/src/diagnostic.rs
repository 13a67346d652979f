//! Parse diagnostics.
//!
//! Deliberately small: there is one source file per parse and no byte-offset
//! or column tracking in the contract, only a line number. A full
//! multi-file `DiagnosticBuilder` / `SourceMap` stack would be solving a
//! problem this crate does not have.

use std::fmt;

/// Severity of a diagnostic.
///
/// The parser only ever constructs `Level::Error` today; `Warning` and
/// `Note` exist because a later phase reusing this same bag is a realistic
/// extension of this type, not because anything currently produces them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A single parse error: a message and the source line it was detected on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: u32,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error [line {}]: {}", self.line, self.message)
    }
}

/// An insertion-ordered bag of diagnostics.
///
/// Insertion order is source order here: the parser only ever appends as it
/// walks forward through the token stream.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<ParseError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, line: u32) {
        self.errors.push(ParseError {
            message: message.into(),
            line,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let diags = Diagnostics::new();
        assert!(!diags.has_errors());
        assert!(diags.errors().is_empty());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut diags = Diagnostics::new();
        diags.push("first", 1);
        diags.push("second", 3);
        let errors = diags.errors();
        assert_eq!(errors[0].message, "first");
        assert_eq!(errors[1].message, "second");
    }

    #[test]
    fn display_matches_cli_contract() {
        let err = ParseError {
            message: "Expected ';' after expression statement".to_string(),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "Parse error [line 7]: Expected ';' after expression statement"
        );
    }
}
