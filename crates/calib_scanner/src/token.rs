//! The token table and token match information produced by the scanner.

use calib_core::text::TextSpan;
use rustc_hash::FxHashMap;

/// Numeral tokens in value order.
const NUMERALS: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Spelled-out word tokens in value order. Lowercase only.
const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Information about a matched digit token within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    /// The digit value this token maps to (1–9).
    pub value: u8,
    /// The text of the matched token.
    pub text: &'static str,
    /// The byte span of the match within the line.
    pub span: TextSpan,
}

impl TokenMatch {
    /// The length of this match in bytes.
    pub fn len(&self) -> u32 {
        self.span.length
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// The fixed table of digit tokens.
///
/// Entries keep insertion order (numerals before words) and are paired with
/// an exact-lookup index. The table is built once at startup and read-only
/// thereafter.
#[derive(Debug, Clone)]
pub struct TokenTable {
    entries: Vec<(&'static str, u8)>,
    index: FxHashMap<&'static str, u8>,
}

impl TokenTable {
    /// The full table: 9 numeral tokens and 9 word tokens, each mapping to
    /// a value in 1–9.
    pub fn full() -> Self {
        let mut entries = Vec::with_capacity(NUMERALS.len() + WORDS.len());
        for (i, text) in NUMERALS.iter().enumerate() {
            entries.push((*text, (i + 1) as u8));
        }
        for (i, text) in WORDS.iter().enumerate() {
            entries.push((*text, (i + 1) as u8));
        }
        Self::from_entries(entries)
    }

    /// The restricted table recognizing only the numeral tokens `1`–`9`.
    pub fn numerals_only() -> Self {
        let entries = NUMERALS
            .iter()
            .enumerate()
            .map(|(i, text)| (*text, (i + 1) as u8))
            .collect();
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<(&'static str, u8)>) -> Self {
        let mut index = FxHashMap::with_capacity_and_hasher(entries.len(), Default::default());
        for &(text, value) in &entries {
            debug_assert!((1..=9).contains(&value));
            let previous = index.insert(text, value);
            debug_assert!(previous.is_none(), "duplicate token {:?}", text);
        }
        Self { entries, index }
    }

    /// Look up the value of an exact token text.
    pub fn lookup(&self, text: &str) -> Option<u8> {
        self.index.get(text).copied()
    }

    /// All `(text, value)` entries in table order.
    pub fn entries(&self) -> &[(&'static str, u8)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
