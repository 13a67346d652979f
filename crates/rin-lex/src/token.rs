//! The token alphabet.
//!
//! `TokenKind` is a closed enumeration — every lexical category Rin's
//! grammar needs and nothing more. Keeping it closed is what lets
//! `as_str` and `lookup_keyword` below be exhaustive `match`es instead of
//! guesses.

use indexmap::IndexMap;

/// A lexical category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Fn,
    Let,
    Mut,
    If,
    Else,
    While,
    Return,

    // Literals
    Ident,
    Number,
    String,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Colon,
    Comma,

    // Special
    Eof,
    Illegal,
}

impl TokenKind {
    /// Canonical uppercase name, used for diagnostics and the CLI's
    /// token-dump mode. Total over the enum.
    pub fn as_str(self) -> &'static str {
        use TokenKind::*;
        match self {
            Fn => "FN",
            Let => "LET",
            Mut => "MUT",
            If => "IF",
            Else => "ELSE",
            While => "WHILE",
            Return => "RETURN",
            Ident => "IDENT",
            Number => "NUMBER",
            String => "STRING",
            Plus => "PLUS",
            Minus => "MINUS",
            Star => "STAR",
            Slash => "SLASH",
            Assign => "ASSIGN",
            Eq => "EQ",
            NotEq => "NEQ",
            Lt => "LT",
            Gt => "GT",
            LtEq => "LTE",
            GtEq => "GTE",
            LParen => "LPAREN",
            RParen => "RPAREN",
            LBrace => "LBRACE",
            RBrace => "RBRACE",
            Semicolon => "SEMICOLON",
            Colon => "COLON",
            Comma => "COMMA",
            Eof => "EOF",
            Illegal => "ILLEGAL",
        }
    }
}

/// A lexical atom: its kind, the source text that produced it, and the
/// 1-based line it started on.
///
/// `lexeme` is the raw substring for everything except string literals,
/// where it is the content between the quotes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: std::string::String,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<std::string::String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}

/// Builds the seven-entry keyword table once per lexer.
///
/// An `IndexMap` rather than a bare `match` so the reserved-word set reads
/// as data (insertion order mirrors the order keywords are introduced in
/// the grammar), while lookup stays an O(1) expected hash lookup.
pub(crate) fn keyword_table() -> IndexMap<&'static str, TokenKind> {
    IndexMap::from([
        ("fn", TokenKind::Fn),
        ("let", TokenKind::Let),
        ("mut", TokenKind::Mut),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("while", TokenKind::While),
        ("return", TokenKind::Return),
    ])
}

/// Returns the keyword kind for an exact, case-sensitive match against one
/// of the seven reserved words, or `Ident` otherwise.
///
/// Library callers get this as a free function over a lexeme; the `Lexer`
/// itself avoids rebuilding the table on every identifier by keeping one
/// around for its own lifetime (see `lexer::core`) and calling
/// `lookup_keyword_in` instead.
pub fn lookup_keyword(lexeme: &str) -> TokenKind {
    lookup_keyword_in(&keyword_table(), lexeme)
}

pub(crate) fn lookup_keyword_in(
    table: &IndexMap<&'static str, TokenKind>,
    lexeme: &str,
) -> TokenKind {
    table.get(lexeme).copied().unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_seven_keywords() {
        for (word, kind) in [
            ("fn", TokenKind::Fn),
            ("let", TokenKind::Let),
            ("mut", TokenKind::Mut),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("while", TokenKind::While),
            ("return", TokenKind::Return),
        ] {
            assert_eq!(lookup_keyword(word), kind);
        }
    }

    #[test]
    fn is_case_sensitive() {
        assert_eq!(lookup_keyword("Fn"), TokenKind::Ident);
        assert_eq!(lookup_keyword("FN"), TokenKind::Ident);
        assert_eq!(lookup_keyword("IF"), TokenKind::Ident);
    }

    #[test]
    fn rejects_keyword_prefixes_and_suffixes() {
        assert_eq!(lookup_keyword("fn_name"), TokenKind::Ident);
        assert_eq!(lookup_keyword("_fn"), TokenKind::Ident);
        assert_eq!(lookup_keyword(""), TokenKind::Ident);
    }

    #[test]
    fn as_str_is_canonical_uppercase() {
        assert_eq!(TokenKind::Fn.as_str(), "FN");
        assert_eq!(TokenKind::Eof.as_str(), "EOF");
        assert_eq!(TokenKind::Illegal.as_str(), "ILLEGAL");
    }
}
