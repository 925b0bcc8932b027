//! gemscan - gematria values and phrase scanning
//!
//! gemscan provides:
//! - Cipher parsing and validation (`A=1,B=2,...`)
//! - Text normalization and alphabet classification
//! - Phrase scoring against a catalog of methods
//! - A windowed scanner that finds phrases matching target values
//! - Unified output format (jsonl/json/md/csv)

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod core;
pub mod logging;
pub mod scan;
