//! Gematria methods
//!
//! A method is a named scoring function built from one validated cipher, plus
//! optional character-count and word-count bonuses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::cipher::{Cipher, DEFAULT_PAIR_SEPARATOR, DEFAULT_VALUE_SEPARATOR};
use crate::core::error::ValidationError;
use crate::core::text::{letter_count, word_count};

/// An immutable, validated scoring method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GematriaMethod {
    id: i64,
    name: String,
    sort_order: i32,
    adds_character_count: bool,
    adds_word_count: bool,
    cipher: Cipher,
    value_mapper: HashMap<char, u32>,
}

impl GematriaMethod {
    /// Build a method from a cipher, failing if the cipher is invalid.
    ///
    /// The body is parsed once here; keys stay case-sensitive as written.
    pub fn new(id: i64, name: impl Into<String>, cipher: Cipher) -> Result<Self, ValidationError> {
        cipher.validate()?;
        let value_mapper = cipher.pairs().collect();

        Ok(Self {
            id,
            name: name.into(),
            sort_order: 0,
            adds_character_count: false,
            adds_word_count: false,
            cipher,
            value_mapper,
        })
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Add the number of letters to every value
    pub fn with_character_count(mut self, enabled: bool) -> Self {
        self.adds_character_count = enabled;
        self
    }

    /// Add the number of words to every value
    pub fn with_word_count(mut self, enabled: bool) -> Self {
        self.adds_word_count = enabled;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    pub fn adds_character_count(&self) -> bool {
        self.adds_character_count
    }

    pub fn adds_word_count(&self) -> bool {
        self.adds_word_count
    }

    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }

    pub fn value_mapper(&self) -> &HashMap<char, u32> {
        &self.value_mapper
    }

    /// Value of a single character; characters outside the cipher score 0
    pub fn char_value(&self, c: char) -> u32 {
        self.value_mapper.get(&c).copied().unwrap_or(0)
    }

    /// Compute the value of `text` under this method
    pub fn text_value(&self, text: &str) -> u64 {
        if text.trim().is_empty() {
            return 0;
        }

        let mut value: u64 = text.chars().map(|c| u64::from(self.char_value(c))).sum();
        if self.adds_character_count {
            value += letter_count(text) as u64;
        }
        if self.adds_word_count {
            value += word_count(text) as u64;
        }
        value
    }
}

/// Stored form of a method, as read from a method catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefinition {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    pub cipher: String,
    #[serde(default = "default_value_separator")]
    pub value_separator: char,
    #[serde(default = "default_pair_separator")]
    pub pair_separator: char,
    #[serde(default)]
    pub adds_character_count: bool,
    #[serde(default)]
    pub adds_word_count: bool,
}

fn default_value_separator() -> char {
    DEFAULT_VALUE_SEPARATOR
}

fn default_pair_separator() -> char {
    DEFAULT_PAIR_SEPARATOR
}

impl TryFrom<MethodDefinition> for GematriaMethod {
    type Error = ValidationError;

    fn try_from(def: MethodDefinition) -> Result<Self, Self::Error> {
        let cipher = Cipher::with_separators(def.cipher, def.value_separator, def.pair_separator);
        Ok(GematriaMethod::new(def.id, def.name, cipher)?
            .with_sort_order(def.sort_order)
            .with_character_count(def.adds_character_count)
            .with_word_count(def.adds_word_count))
    }
}

impl From<&GematriaMethod> for MethodDefinition {
    fn from(method: &GematriaMethod) -> Self {
        Self {
            id: method.id,
            name: method.name.clone(),
            sort_order: method.sort_order,
            cipher: method.cipher.body().to_string(),
            value_separator: method.cipher.value_separator(),
            pair_separator: method.cipher.pair_separator(),
            adds_character_count: method.adds_character_count,
            adds_word_count: method.adds_word_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> GematriaMethod {
        GematriaMethod::new(1, "ABC", Cipher::new("A=1,B=2,C=3")).unwrap()
    }

    #[test]
    fn test_text_value() {
        assert_eq!(abc().text_value("ABC"), 6);
    }

    #[test]
    fn test_text_value_is_deterministic() {
        let method = abc();
        let first = method.text_value("CAB CAB");
        for _ in 0..10 {
            assert_eq!(method.text_value("CAB CAB"), first);
        }
    }

    #[test]
    fn test_missing_characters_score_zero() {
        let method = abc();
        assert_eq!(method.text_value("A-Z?"), 1);
        assert_eq!(method.text_value("שלום"), 0);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let method = abc();
        assert_eq!(method.text_value("abc"), 0);
    }

    #[test]
    fn test_blank_text_is_zero() {
        let method = abc().with_character_count(true).with_word_count(true);
        assert_eq!(method.text_value(""), 0);
        assert_eq!(method.text_value("   "), 0);
    }

    #[test]
    fn test_character_and_word_bonus() {
        let method = abc().with_character_count(true);
        // 1 + 2 + 3 + 1 + 2 letters = 9 plus 5 letters
        assert_eq!(method.text_value("ABC AB"), 14);

        let method = abc().with_word_count(true);
        assert_eq!(method.text_value("ABC AB"), 11);

        let method = abc().with_character_count(true).with_word_count(true);
        assert_eq!(method.text_value("ABC, AB!"), 16);
    }

    #[test]
    fn test_invalid_cipher_fails() {
        let err = GematriaMethod::new(1, "bad", Cipher::new("A=1,A=2")).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateCharacter('A'));
        assert!(GematriaMethod::new(1, "empty", Cipher::new("")).is_err());
    }

    #[test]
    fn test_value_mapper_round_trip() {
        let body = "A=1,B=20,C=300,D=4000,E=50000,F=600000";
        let cipher = Cipher::new(body);
        assert!(cipher.is_valid());

        let method = GematriaMethod::new(1, "round", cipher).unwrap();
        let mapper = method.value_mapper();
        assert_eq!(mapper.len(), 6);
        for pair in body.split(',') {
            let (k, v) = pair.split_once('=').unwrap();
            let c = k.chars().next().unwrap();
            assert_eq!(mapper.get(&c), Some(&v.parse::<u32>().unwrap()));
        }
    }

    #[test]
    fn test_definition_conversion() {
        let json = r#"{"id":7,"name":"Custom","cipher":"X:5;Y:6","value_separator":":","pair_separator":";","adds_word_count":true}"#;
        let def: MethodDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.sort_order, 0);

        let method = GematriaMethod::try_from(def.clone()).unwrap();
        assert_eq!(method.id(), 7);
        assert_eq!(method.text_value("XY X"), 18);
        assert_eq!(MethodDefinition::from(&method), def);
    }

    #[test]
    fn test_definition_defaults_separators() {
        let json = r#"{"id":1,"name":"Plain","cipher":"A=1"}"#;
        let def: MethodDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.value_separator, '=');
        assert_eq!(def.pair_separator, ',');
        assert!(!def.adds_character_count);
    }
}
