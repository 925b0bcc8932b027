//! Scan module - Phrase extraction over raw text
//!
//! Provides:
//! - separators: Named separator classes and the segment splitter
//! - scanner: Sliding-window phrase scanner with value matching

pub mod scanner;
pub mod separators;

pub use scanner::{scan_texts, ScanOptions, Scanner};
pub use separators::{default_separators, separator_strings, TextSeparator};
