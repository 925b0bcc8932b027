//! Catalog module - The set of gematria methods in scope for a session
//!
//! Methods come from the built-in tables or from a JSON file holding an
//! array of method definitions:
//!
//! ```json
//! [{"id": 1, "name": "Simple", "cipher": "A=1,B=2,C=3", "adds_word_count": true}]
//! ```

pub mod builtin;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::error::ValidationError;
use crate::core::method::{GematriaMethod, MethodDefinition};
use crate::core::text::normalize;

pub use builtin::builtin_definitions;

/// Validated methods ordered by sort order, then id
#[derive(Debug, Clone)]
pub struct MethodCatalog {
    methods: Vec<GematriaMethod>,
}

impl MethodCatalog {
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = MethodDefinition>,
    ) -> Result<Self, ValidationError> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        let mut methods = Vec::new();
        for def in definitions {
            if !ids.insert(def.id) {
                return Err(ValidationError::DuplicateMethodId(def.id));
            }
            if !names.insert(fold_name(&def.name)) {
                return Err(ValidationError::DuplicateMethodName(def.name));
            }
            methods.push(GematriaMethod::try_from(def)?);
        }
        if methods.is_empty() {
            return Err(ValidationError::NoMethods);
        }
        methods.sort_by_key(|m| (m.sort_order(), m.id()));
        Ok(Self { methods })
    }

    pub fn builtin() -> Result<Self, ValidationError> {
        Self::from_definitions(builtin_definitions())
    }

    /// Load a catalog from a JSON definitions file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read methods file: {:?}", path))?;
        let definitions: Vec<MethodDefinition> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid methods file: {:?}", path))?;
        let catalog = Self::from_definitions(definitions)
            .with_context(|| format!("Invalid method in {:?}", path))?;
        tracing::debug!(path = %path.display(), methods = catalog.len(), "loaded method catalog");
        for method in catalog.unreachable_methods() {
            tracing::warn!(
                path = %path.display(),
                method = method.name(),
                "no cipher key survives normalization; method scores 0 on every phrase"
            );
        }
        Ok(catalog)
    }

    /// Load from `path` when given, else fall back to the built-in tables
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()?),
        }
    }

    pub fn methods(&self) -> &[GematriaMethod] {
        &self.methods
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Methods whose cipher has no key that normalized text can contain,
    /// e.g. a cipher keyed only in lowercase
    pub fn unreachable_methods(&self) -> Vec<&GematriaMethod> {
        self.methods
            .iter()
            .filter(|m| {
                !m.value_mapper().keys().any(|c| {
                    let key = c.to_string();
                    normalize(&key) == key
                })
            })
            .collect()
    }

    /// Find a method by id or by name, ignoring case and `-`/`_` vs space
    pub fn find(&self, key: &str) -> Option<&GematriaMethod> {
        let key = key.trim();
        if let Ok(id) = key.parse::<i64>() {
            if let Some(method) = self.methods.iter().find(|m| m.id() == id) {
                return Some(method);
            }
        }
        let key = fold_name(key);
        self.methods.iter().find(|m| fold_name(m.name()) == key)
    }

    /// Resolve method names/ids to ids; an empty selection means every method
    pub fn select(&self, keys: &[String]) -> Result<Vec<i64>, ValidationError> {
        if keys.is_empty() {
            return Ok(self.methods.iter().map(|m| m.id()).collect());
        }
        keys.iter()
            .map(|key| {
                self.find(key)
                    .map(|m| m.id())
                    .ok_or_else(|| ValidationError::UnknownMethod(key.clone()))
            })
            .collect()
    }
}

fn fold_name(name: &str) -> String {
    name.to_lowercase().replace(['-', '_'], " ")
}
