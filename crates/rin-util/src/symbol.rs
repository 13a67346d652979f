//! A small, instance-owned string interner.
//!
//! The parser interns every identifier and type name it reads so that two
//! occurrences of the same name compare in O(1) instead of doing a string
//! comparison. This is the same idea as a compiler's global symbol table,
//! scaled down to match this crate's concurrency model: a `Parser` owns
//! exactly one `Interner`, nothing is shared across threads or across
//! parses, so there is no call for a lock-free global table here.

use rustc_hash::FxHashMap;

/// A compact, 4-byte handle to an interned string.
///
/// Two `Symbol`s are equal if and only if they were produced by interning
/// equal strings in the same `Interner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Placeholder symbol for an identifier-typed slot that could not be
    /// filled because the expected identifier token was not there (e.g.
    /// `let = 1;`, missing the variable name). Never handed out by
    /// `Interner::intern`, so it can be told apart from every real symbol.
    pub const DUMMY: Symbol = Symbol(u32::MAX);
}

/// Owns the strings behind every `Symbol` it has handed out.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<String>,
    lookup: FxHashMap<String, Symbol>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `text`, returning an existing `Symbol` if `text` was seen
    /// before, or allocating a new one otherwise.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&sym) = self.lookup.get(text) {
            return sym;
        }
        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(text.to_string());
        self.lookup.insert(text.to_string(), sym);
        sym
    }

    /// Resolves a `Symbol` back to the string it was interned from.
    ///
    /// `Symbol::DUMMY` always resolves to `"<error>"` — it is a deliberate
    /// placeholder, never a string this interner actually holds. Any other
    /// `Symbol` that was not produced by this interner is a bug in the
    /// caller (symbols are not meant to cross interners), and panics.
    pub fn resolve(&self, sym: Symbol) -> &str {
        if sym == Symbol::DUMMY {
            return "<error>";
        }
        self.strings
            .get(sym.0 as usize)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{sym:?} was not produced by this interner"))
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
