//! Validate and normalize commands

use anyhow::{bail, Result};
use serde::Serialize;

use crate::core::alphabet::{classify_flags, classify_str, Alphabet, AlphabetFlags, Script};
use crate::core::cipher::Cipher;
use crate::core::render::RenderConfig;
use crate::core::text::normalize;

/// Outcome of validating a cipher body
#[derive(Debug, Clone, Serialize)]
pub struct CipherReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub pairs: usize,
}

pub fn check_cipher(cipher: &Cipher) -> CipherReport {
    match cipher.validate() {
        Ok(()) => CipherReport {
            valid: true,
            error: None,
            pairs: cipher.pairs().count(),
        },
        Err(e) => CipherReport {
            valid: false,
            error: Some(e.to_string()),
            pairs: 0,
        },
    }
}

/// Normalized text with both alphabet views
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeReport {
    pub content: String,
    pub alphabet: Alphabet,
    /// Every script present (union view)
    pub scripts: Vec<&'static str>,
}

pub fn normalize_report(text: &str) -> NormalizeReport {
    let content = normalize(text);
    let flags = classify_flags(&content);

    let mut scripts: Vec<&'static str> = Script::ALL
        .iter()
        .filter(|s| flags.contains(AlphabetFlags::from(Alphabet::Single(**s))))
        .map(|s| s.as_str())
        .collect();
    if flags.contains(AlphabetFlags::UNKNOWN) {
        scripts.push(Alphabet::Unknown.as_str());
    }

    NormalizeReport {
        alphabet: classify_str(&content),
        content,
        scripts,
    }
}

fn print_json<T: Serialize>(value: &T, config: &RenderConfig) -> Result<()> {
    let json = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// Run the validate command; an invalid cipher is an error exit
pub fn run_validate(
    body: &str,
    value_separator: char,
    pair_separator: char,
    config: RenderConfig,
) -> Result<()> {
    let cipher = Cipher::with_separators(body, value_separator, pair_separator);
    let report = check_cipher(&cipher);
    print_json(&report, &config)?;

    if let Some(error) = report.error {
        bail!("Invalid cipher: {}", error);
    }
    Ok(())
}

/// Run the normalize command
pub fn run_normalize(text: &str, config: RenderConfig) -> Result<()> {
    print_json(&normalize_report(text), &config)
}
