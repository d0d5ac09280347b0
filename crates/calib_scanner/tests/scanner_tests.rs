//! Scanner integration tests.
//!
//! Verifies that the line scanner finds digit tokens by starting position,
//! including occurrences that overlap in characters.

use calib_scanner::{scan_line, LineScanner, TokenTable};

/// Helper: scan all matches from a line and return as (value, text) pairs.
fn scan_all(line: &str) -> Vec<(u8, &'static str)> {
    let table = TokenTable::full();
    let mut scanner = LineScanner::new(line, &table);
    let mut matches = Vec::new();
    while let Some(found) = scanner.scan() {
        matches.push((found.value, found.text));
    }
    matches
}

/// Helper: the combined two-digit value of a line, if any.
fn line_value(line: &str) -> Option<u32> {
    let table = TokenTable::full();
    scan_line(line, &table).map(|pair| pair.value())
}

#[test]
fn test_numeral_only_line() {
    assert_eq!(line_value("1abc2"), Some(12));
    assert_eq!(line_value("a1b2c3d4e5f"), Some(15));
}

#[test]
fn test_word_tokens() {
    let pair = scan_line("two1nine", &TokenTable::full()).unwrap();
    assert_eq!(pair.first, 2);
    assert_eq!(pair.last, 9);
    assert_eq!(pair.value(), 29);
}

#[test]
fn test_overlapping_words() {
    // "eightwo" contains "eight" and, overlapping it, "two".
    assert_eq!(scan_all("eightwo"), vec![(8, "eight"), (2, "two")]);
    assert_eq!(line_value("eightwo"), Some(82));

    assert_eq!(line_value("eightwothree"), Some(83));
    assert_eq!(line_value("xtwone3four"), Some(24));
    assert_eq!(line_value("zoneight234"), Some(14));
}

#[test]
fn test_single_token_doubles() {
    assert_eq!(line_value("seven"), Some(77));
    assert_eq!(line_value("treb7uchet"), Some(77));
}

#[test]
fn test_no_token_line() {
    assert_eq!(line_value(""), None);
    assert_eq!(line_value("abcdef"), None);
    // "0" is not a token.
    assert_eq!(line_value("a0b"), None);
}

#[test]
fn test_case_sensitive_words() {
    assert_eq!(line_value("ONE"), None);
    assert_eq!(line_value("One1"), Some(11));
}

#[test]
fn test_numerals_only_table() {
    let table = TokenTable::numerals_only();
    let pair = scan_line("abcone2threexyz", &table).unwrap();
    assert_eq!(pair.value(), 22);
    assert!(scan_line("eightwo", &table).is_none());
}

#[test]
fn test_match_spans() {
    let matches = scan_all("abcone2threexyz");
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0], (1, "one"));
    assert_eq!(matches[1], (2, "2"));
    assert_eq!(matches[2], (3, "three"));

    let table = TokenTable::full();
    let mut scanner = LineScanner::new("abcone2threexyz", &table);
    let first = scanner.scan().unwrap();
    assert_eq!(first.span.start, 3);
    assert_eq!(first.len(), 3);
    assert!(!first.is_empty());
}
