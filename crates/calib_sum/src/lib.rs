//! calib_sum: Run orchestration.
//!
//! Loads the input document, folds the line scanner over its lines in file
//! order, and produces the running total together with any diagnostics.

use calib_core::text::{LineMap, TextSpan};
use calib_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use calib_scanner::{scan_line, TokenTable};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Options controlling a summation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumOptions {
    /// Recognize only the numeral tokens `1`–`9`, not the spelled-out words.
    pub numerals_only: bool,
}

/// Failure to load the input document.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// The sum of each line's two-digit value, in file order.
    pub total: u64,
    /// The number of lines processed.
    pub lines: usize,
}

/// The summation represents one whole run over one input document.
///
/// Lines are processed strictly in file order. A line with no digit token
/// is reported as a diagnostic rather than skipped; scanning continues so
/// one run reports every offending line, and no total is produced.
pub struct Summation {
    /// Options for this run.
    pub options: SumOptions,
    /// The token table for this run.
    table: TokenTable,
    /// The loaded source document (file name, text).
    source: Option<(String, String)>,
}

impl Summation {
    /// Create a new summation with the given options.
    pub fn new(options: SumOptions) -> Self {
        let table = if options.numerals_only {
            TokenTable::numerals_only()
        } else {
            TokenTable::full()
        };
        Self {
            options,
            table,
            source: None,
        }
    }

    /// Add an in-memory source document.
    pub fn add_source(&mut self, file_name: String, source_text: String) {
        self.source = Some((file_name, source_text));
    }

    /// Load the input document from disk.
    pub fn load_input(&mut self, path: &Path) -> Result<(), InputError> {
        let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.source = Some((path.display().to_string(), text));
        Ok(())
    }

    /// Run the scan over all lines and return the tally plus diagnostics.
    ///
    /// The total is `None` whenever any error diagnostic was produced.
    pub fn run(&self) -> (Option<Tally>, DiagnosticCollection) {
        let mut diagnostics = DiagnosticCollection::new();

        let (file_name, text) = match &self.source {
            Some(source) => source,
            None => {
                diagnostics.add(Diagnostic::new(
                    &messages::FILE_0_CONTAINS_NO_LINES,
                    &["<no input>"],
                ));
                return (None, diagnostics);
            }
        };

        let line_map = LineMap::new(text);
        let mut total: u64 = 0;
        let mut lines: usize = 0;

        for (index, line) in text.lines().enumerate() {
            lines += 1;
            match scan_line(line, &self.table) {
                Some(pair) => {
                    log::trace!(
                        "{}:{}: first={} last={} value={}",
                        file_name,
                        index + 1,
                        pair.first,
                        pair.last,
                        pair.value()
                    );
                    total += u64::from(pair.value());
                }
                None => {
                    let span =
                        TextSpan::new(line_map.line_start(index as u32), line.len() as u32);
                    let line_number = (index + 1).to_string();
                    diagnostics.add(Diagnostic::with_location(
                        file_name.clone(),
                        span,
                        &messages::LINE_0_CONTAINS_NO_DIGIT_TOKEN,
                        &[&line_number],
                    ));
                }
            }
        }

        if lines == 0 {
            diagnostics.add(Diagnostic::new(
                &messages::FILE_0_CONTAINS_NO_LINES,
                &[file_name],
            ));
        }

        if diagnostics.has_errors() {
            return (None, diagnostics);
        }

        log::debug!("{}: {} lines, total {}", file_name, lines, total);
        (Some(Tally { total, lines }), diagnostics)
    }
}
