//! Phrase value object

use serde::Serialize;
use std::hash::{Hash, Hasher};

use crate::core::alphabet::{classify_str, Alphabet};
use crate::core::method::GematriaMethod;
use crate::core::text::{normalize, word_count};

/// A phrase's value under one method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseValue {
    pub method_id: i64,
    pub method: String,
    pub value: u64,
}

/// Normalized text plus its alphabet and one value per method.
///
/// Two phrases are equal iff their normalized content is equal; values and
/// persistence ids do not take part in equality.
#[derive(Debug, Clone, Serialize)]
pub struct Phrase {
    content: String,
    alphabet: Alphabet,
    values: Vec<PhraseValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation_id: Option<i64>,
}

impl Phrase {
    /// Normalize `raw` and score it on every method, in the given order
    pub fn new(raw: &str, methods: &[GematriaMethod]) -> Self {
        let content = normalize(raw);
        let alphabet = classify_str(&content);
        let values = methods
            .iter()
            .map(|m| PhraseValue {
                method_id: m.id(),
                method: m.name().to_string(),
                value: m.text_value(&content),
            })
            .collect();

        Self {
            content,
            alphabet,
            values,
            id: None,
            operation_id: None,
        }
    }

    /// Attach persistence handles
    pub fn with_ids(mut self, id: Option<i64>, operation_id: Option<i64>) -> Self {
        self.id = id;
        self.operation_id = operation_id;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn values(&self) -> &[PhraseValue] {
        &self.values
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn operation_id(&self) -> Option<i64> {
        self.operation_id
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }

    pub fn value_of(&self, method_id: i64) -> Option<u64> {
        self.values
            .iter()
            .find(|v| v.method_id == method_id)
            .map(|v| v.value)
    }

    pub fn value_by_name(&self, method: &str) -> Option<u64> {
        self.values
            .iter()
            .find(|v| v.method == method)
            .map(|v| v.value)
    }
}

impl PartialEq for Phrase {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for Phrase {}

impl Hash for Phrase {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content.hash(state);
    }
}
