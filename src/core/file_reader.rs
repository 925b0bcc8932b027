//! Input text reading
//!
//! Provides consistent handling for:
//! - Non-UTF-8 files
//! - Byte order marks
//! - Binary files

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: &str = "\u{FEFF}";

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingStrategy {
    /// Fail on invalid UTF-8
    Strict,
    /// Use lossy conversion (replace invalid bytes with U+FFFD)
    #[default]
    Lossy,
}

/// Warning codes for input reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    LossyConversion,
    BinaryFile,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::LossyConversion => "LOSSY_CONVERSION",
            WarningCode::BinaryFile => "BINARY_FILE",
        }
    }
}

/// Text loaded from a file or stream
#[derive(Debug, Clone)]
pub struct InputText {
    /// Display name (path or `<stdin>`)
    pub source: String,
    pub content: String,
    pub warnings: Vec<WarningCode>,
}

/// Decode bytes as UTF-8 according to `strategy`
pub fn decode_text(source: &str, bytes: Vec<u8>, strategy: EncodingStrategy) -> Result<InputText> {
    let mut warnings = Vec::new();

    let check_len = std::cmp::min(8192, bytes.len());
    if bytes[..check_len].contains(&0) {
        warnings.push(WarningCode::BinaryFile);
    }

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => match strategy {
            EncodingStrategy::Strict => {
                bail!("{} contains invalid UTF-8 sequences", source)
            }
            EncodingStrategy::Lossy => {
                warnings.push(WarningCode::LossyConversion);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        },
    };

    let content = match content.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => content,
    };

    for warning in &warnings {
        tracing::warn!(source, code = warning.as_str(), "input decoded with warnings");
    }

    Ok(InputText {
        source: source.to_string(),
        content,
        warnings,
    })
}

/// Read a whole file as text
pub fn read_text_file(path: &Path, strategy: EncodingStrategy) -> Result<InputText> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    decode_text(&path.display().to_string(), bytes, strategy)
}

/// Read all of stdin as text
pub fn read_stdin(strategy: EncodingStrategy) -> Result<InputText> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    decode_text("<stdin>", bytes, strategy)
}
