//! Cipher definitions
//!
//! A cipher body is a list of `char<valueSep>value` pairs joined by a pair
//! separator, e.g. `A=1,B=2,C=3`.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

use crate::core::error::ValidationError;

pub const DEFAULT_VALUE_SEPARATOR: char = '=';
pub const DEFAULT_PAIR_SEPARATOR: char = ',';

/// Maximum number of digits a single character value may have
pub const MAX_VALUE_DIGITS: usize = 6;

/// A character-to-value mapping definition, stored as its delimited text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cipher {
    body: String,
    value_separator: char,
    pair_separator: char,
}

impl Cipher {
    /// Create a cipher with the default `=` and `,` separators
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_separators(body, DEFAULT_VALUE_SEPARATOR, DEFAULT_PAIR_SEPARATOR)
    }

    pub fn with_separators(
        body: impl Into<String>,
        value_separator: char,
        pair_separator: char,
    ) -> Self {
        Self {
            body: body.into(),
            value_separator,
            pair_separator,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn value_separator(&self) -> char {
        self.value_separator
    }

    pub fn pair_separator(&self) -> char {
        self.pair_separator
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate the body, returning the first problem found
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.body.is_empty() {
            return Err(ValidationError::EmptyCipher);
        }
        if self.value_separator == self.pair_separator {
            return Err(ValidationError::SeparatorCollision(self.value_separator));
        }

        let pattern = self.body_pattern()?;
        if !pattern.is_match(&self.body) {
            return Err(ValidationError::MalformedCipher(format!(
                "expected pairs like A{}1{}B{}2",
                self.value_separator, self.pair_separator, self.value_separator
            )));
        }

        let mut seen = HashSet::new();
        for segment in self.body.split(self.pair_separator) {
            if let Some(key) = segment.chars().next() {
                let folded: String = key.to_lowercase().collect();
                if !seen.insert(folded) {
                    return Err(ValidationError::DuplicateCharacter(key));
                }
            }
        }

        Ok(())
    }

    /// Iterate the `(character, value)` pairs of the body.
    ///
    /// Segments that do not parse are skipped; call [`Cipher::validate`]
    /// first when that matters.
    pub fn pairs(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.body.split(self.pair_separator).filter_map(|segment| {
            let (key, value) = segment.split_once(self.value_separator)?;
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some((c, value.parse().ok()?))
        })
    }

    fn body_pattern(&self) -> Result<Regex, ValidationError> {
        let value_sep = regex::escape(&self.value_separator.to_string());
        let pair_sep = regex::escape(&self.pair_separator.to_string());
        let pair = format!(
            r"[\p{{L}}\p{{Nl}}]{}[0-9]{{1,{}}}",
            value_sep, MAX_VALUE_DIGITS
        );
        Regex::new(&format!(r"(?i)^{pair}(?:{pair_sep}{pair})*$"))
            .map_err(|e| ValidationError::MalformedCipher(e.to_string()))
    }
}
