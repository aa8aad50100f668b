//! Ordered symbol sets.
//!
//! An [`Alphabet`] fixes the order of the symbols a machine can encipher and
//! maps each symbol to its index in `[0, size)`. Every other component works on
//! indices and only converts back to symbols at the edges.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{EnigmaError, EnigmaResult};

/// Characters with structural meaning in configuration and setup text.
pub const RESERVED: [char; 3] = ['*', '(', ')'];

/// An ordered, duplicate-free set of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: BTreeMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `chars`, in order.
    pub fn new(chars: &str) -> EnigmaResult<Self> {
        if chars.is_empty() {
            return Err(EnigmaError::InvalidAlphabet("alphabet is empty".to_string()));
        }

        let mut symbols = Vec::with_capacity(chars.len());
        let mut index = BTreeMap::new();
        for c in chars.chars() {
            if RESERVED.contains(&c) || c.is_whitespace() {
                return Err(EnigmaError::InvalidAlphabet(format!(
                    "'{c}' cannot be an alphabet symbol"
                )));
            }
            if index.insert(c, symbols.len()).is_some() {
                return Err(EnigmaError::InvalidAlphabet(format!("'{c}' appears twice")));
            }
            symbols.push(c);
        }

        Ok(Self { symbols, index })
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// True iff `symbol` is in the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Index of `symbol`.
    pub fn index_of(&self, symbol: char) -> EnigmaResult<usize> {
        self.index
            .get(&symbol)
            .copied()
            .ok_or(EnigmaError::UnknownSymbol(symbol))
    }

    /// Symbol at `index`.
    pub fn symbol_at(&self, index: usize) -> EnigmaResult<char> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(EnigmaError::IndexOutOfRange { index, size: self.size() })
    }

    /// Symbols in alphabet order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
