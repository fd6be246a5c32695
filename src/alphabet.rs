use std::collections::HashMap;

use crate::ConfigError;

/// An ordered sequence of symbols used as digits for lineage chain
/// construction.
///
/// Symbols are individual user-perceived characters; the engine compares
/// by character identity and never splits or combines them. An `Alphabet`
/// is immutable over the lifetime of a run.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<char>", into = "Vec<char>")
)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, u32>,
}

impl Alphabet {
    /// Builds an alphabet from an ordered sequence of symbols.
    ///
    /// The ordering defines digit value `0..size()-1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewSymbols`] if fewer than two symbols are
    /// given (a single-symbol alphabet forces unbounded suffix width; see
    /// the sibling assigner's edge cases). Returns
    /// [`ConfigError::DuplicateSymbol`] if a symbol appears more than once.
    pub fn new(symbols: impl Into<Vec<char>>) -> Result<Self, ConfigError> {
        let symbols = symbols.into();
        if symbols.len() < 2 {
            return Err(ConfigError::TooFewSymbols { len: symbols.len() });
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &s) in symbols.iter().enumerate() {
            if index.insert(s, i as u32).is_some() {
                return Err(ConfigError::DuplicateSymbol(s));
            }
        }

        Ok(Self { symbols, index })
    }

    /// Returns the number of distinct symbols in the alphabet.
    #[inline]
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol at digit position `i`, if any.
    #[inline]
    pub fn symbol_at(&self, i: usize) -> Option<char> {
        self.symbols.get(i).copied()
    }

    /// Returns true if `symbol` belongs to this alphabet.
    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }
}

// The `index` map is derived data; round-tripping through a plain `Vec<char>`
// on the wire and rebuilding it here keeps a deserialized `Alphabet` from
// ever carrying a stale or empty index.
#[cfg(feature = "serde")]
impl TryFrom<Vec<char>> for Alphabet {
    type Error = ConfigError;

    fn try_from(symbols: Vec<char>) -> Result<Self, ConfigError> {
        Alphabet::new(symbols)
    }
}

#[cfg(feature = "serde")]
impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Vec<char> {
        alphabet.symbols
    }
}
