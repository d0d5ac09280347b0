//! calib_core: Core text types for the calib document scanner.
//!
//! Provides byte-offset spans and the newline index used to attribute
//! scanner matches and diagnostics to positions in the input document.

pub mod text;

// Re-export commonly used types
pub use text::{LineMap, TextPos, TextSpan};
