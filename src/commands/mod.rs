//! Commands module - One runner per CLI subcommand
//!
//! Provides:
//! - value: Score texts under every method
//! - scan: Phrase extraction over files, text or stdin
//! - methods: Catalog listing
//! - validate: Cipher validation and text normalization

pub mod methods;
pub mod scan;
pub mod validate;
pub mod value;
