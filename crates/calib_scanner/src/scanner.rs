//! The calibration line scanner.
//!
//! Converts one line of a calibration document into a stream of digit token
//! matches, scanning by starting position so that overlapping tokens are
//! all produced.

use crate::token::{TokenMatch, TokenTable};
use calib_core::text::TextSpan;

/// The scanner walks a single line and produces digit token matches.
///
/// `scan()` tests every token in the table for a prefix match at each byte
/// position, in increasing position order. After a match the cursor advances
/// by one position, not by the token length, so a token starting inside a
/// previous match is still found (`eightwo` yields 8 and then 2).
pub struct LineScanner<'a> {
    /// The line being scanned.
    text: &'a [u8],
    /// Current position in the line.
    pos: usize,
    /// The token table to match against.
    table: &'a TokenTable,
}

impl<'a> LineScanner<'a> {
    /// Create a new scanner for the given line.
    pub fn new(line: &'a str, table: &'a TokenTable) -> Self {
        Self {
            text: line.as_bytes(),
            pos: 0,
            table,
        }
    }

    /// Get the current position (the next start position to be tested).
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether the scanner has reached the end of the line.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Scan forward to the next token match and return it.
    ///
    /// Returns `None` when no token matches at any remaining position.
    pub fn scan(&mut self) -> Option<TokenMatch> {
        while !self.is_eof() {
            let rest = &self.text[self.pos..];
            for &(text, value) in self.table.entries() {
                if rest.starts_with(text.as_bytes()) {
                    let span = TextSpan::new(self.pos as u32, text.len() as u32);
                    self.pos += 1;
                    return Some(TokenMatch { value, text, span });
                }
            }
            self.pos += 1;
        }
        None
    }
}

/// The first and last digit values found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPair {
    /// Value of the leftmost-starting token match.
    pub first: u8,
    /// Value of the rightmost-starting token match.
    pub last: u8,
}

impl DigitPair {
    /// The two-digit value this pair combines into.
    pub fn value(&self) -> u32 {
        u32::from(self.first) * 10 + u32::from(self.last)
    }
}

/// Scan a single line and return its digit pair.
///
/// A single forward pass over the line: `first` is written once, on the
/// very first match; `last` is overwritten on every match. Returns `None`
/// when the line contains no digit token at all.
pub fn scan_line(line: &str, table: &TokenTable) -> Option<DigitPair> {
    let mut scanner = LineScanner::new(line, table);
    let mut first: Option<u8> = None;
    let mut last: Option<u8> = None;
    while let Some(found) = scanner.scan() {
        if first.is_none() {
            first = Some(found.value);
        }
        last = Some(found.value);
    }
    match (first, last) {
        (Some(first), Some(last)) => Some(DigitPair { first, last }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_advances_one_past_match_start() {
        let table = TokenTable::full();
        let mut scanner = LineScanner::new("eightwo", &table);

        let m = scanner.scan().unwrap();
        assert_eq!(m.value, 8);
        assert_eq!(m.text, "eight");
        assert_eq!(m.span, TextSpan::new(0, 5));
        assert_eq!(scanner.pos(), 1);

        // The "two" starting inside "eight" is still found.
        let m = scanner.scan().unwrap();
        assert_eq!(m.value, 2);
        assert_eq!(m.text, "two");
        assert_eq!(m.span, TextSpan::new(4, 3));

        assert!(scanner.scan().is_none());
    }

    #[test]
    fn test_scan_mixed_tokens_in_order() {
        let table = TokenTable::full();
        let mut scanner = LineScanner::new("a1btwoc", &table);
        let values: Vec<u8> = std::iter::from_fn(|| scanner.scan().map(|m| m.value)).collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_scan_empty_line() {
        let table = TokenTable::full();
        let mut scanner = LineScanner::new("", &table);
        assert!(scanner.scan().is_none());
    }
}
