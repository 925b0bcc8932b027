//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Cipher definitions and validation
//! - Gematria methods (scoring functions)
//! - Text normalization and alphabet detection
//! - The Phrase value object
//! - CSV export and rendering for different output formats
//! - Cancellation and input reading

pub mod alphabet;
pub mod cancel;
pub mod cipher;
pub mod error;
pub mod export;
pub mod file_reader;
pub mod method;
pub mod phrase;
pub mod render;
pub mod text;
