//! Phrase scanner
//!
//! Splits text into segments, grows word windows over them, scores every
//! window on every method and keeps the ones that satisfy the length
//! constraints and (optionally) hit one of the target values.

use std::collections::{BTreeSet, HashSet};

use crate::core::cancel::CancellationToken;
use crate::core::error::{ScanError, ValidationError};
use crate::core::method::GematriaMethod;
use crate::core::phrase::Phrase;
use crate::scan::separators::{default_separators, Splitter};

pub const DEFAULT_MINIMUM_CHARACTERS: usize = 3;
pub const DEFAULT_MINIMUM_WORDS: usize = 1;
pub const DEFAULT_MAXIMUM_WORDS: usize = 1;

/// Scan tunables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub minimum_characters_per_phrase: usize,
    pub minimum_words_per_phrase: usize,
    pub maximum_words_per_phrase: usize,
    /// Literal separators, in priority order
    pub separators: Vec<String>,
    /// When set, only phrases scoring one of these values on a selected
    /// method are returned
    pub values_to_look_for: Option<BTreeSet<u64>>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            minimum_characters_per_phrase: DEFAULT_MINIMUM_CHARACTERS,
            minimum_words_per_phrase: DEFAULT_MINIMUM_WORDS,
            maximum_words_per_phrase: DEFAULT_MAXIMUM_WORDS,
            separators: default_separators(),
            values_to_look_for: None,
        }
    }
}

/// A configured phrase scanner.
///
/// Every emitted phrase carries a value for each method in `methods`; only
/// the selected methods take part in value matching and pruning.
#[derive(Debug)]
pub struct Scanner<'m> {
    methods: &'m [GematriaMethod],
    /// Indices into `methods`
    selected: Vec<usize>,
    cancel: CancellationToken,
    options: ScanOptions,
    splitter: Splitter,
}

impl<'m> Scanner<'m> {
    pub fn new(
        methods: &'m [GematriaMethod],
        selected_ids: &[i64],
        cancel: CancellationToken,
        options: ScanOptions,
    ) -> Result<Self, ValidationError> {
        if methods.is_empty() {
            return Err(ValidationError::NoMethods);
        }
        if selected_ids.is_empty() {
            return Err(ValidationError::NoSelectedMethods);
        }

        let mut selected = Vec::with_capacity(selected_ids.len());
        for id in selected_ids {
            let index = methods
                .iter()
                .position(|m| m.id() == *id)
                .ok_or_else(|| ValidationError::UnknownMethod(id.to_string()))?;
            if !selected.contains(&index) {
                selected.push(index);
            }
        }

        let splitter = Splitter::new(&options.separators)?;

        Ok(Self {
            methods,
            selected,
            cancel,
            options,
            splitter,
        })
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Extract matching phrases from `text`.
    ///
    /// Cancellation is checked once per starting segment. A cancelled scan
    /// returns an empty list; callers tell it apart from "no matches" through
    /// the token.
    pub fn scan(&self, text: &str) -> Result<Vec<Phrase>, ScanError> {
        let min_words = self.options.minimum_words_per_phrase;
        let max_words = self.options.maximum_words_per_phrase;
        if min_words > max_words {
            return Err(ScanError::WordBounds {
                min: min_words,
                max: max_words,
            });
        }

        let segments = self.splitter.split(text);
        let windowed = self.options.separators.iter().any(|s| s == " ");
        let max_target = self
            .options
            .values_to_look_for
            .as_ref()
            .and_then(|values| values.last().copied());

        tracing::debug!(
            segments = segments.len(),
            windowed,
            max_words,
            targets = self.options.values_to_look_for.as_ref().map(|v| v.len()),
            "scan started"
        );

        let mut seen: HashSet<String> = HashSet::new();
        let mut results = Vec::new();
        let mut keep = |phrase: Phrase| {
            if seen.insert(phrase.content().to_string()) {
                results.push(phrase);
            }
        };

        for start in 0..segments.len() {
            if self.cancel.is_cancelled() {
                tracing::debug!(at_segment = start, "scan cancelled, discarding results");
                return Ok(Vec::new());
            }

            for phrase in self.phrases_from(&segments[start..], windowed, max_target) {
                keep(phrase);
            }
        }

        tracing::debug!(matches = results.len(), "scan finished");
        Ok(results)
    }

    /// Candidates starting at `segments[0]`, in window order.
    ///
    /// Never looks at the cancellation token: a window that has started
    /// growing runs to its end, and the flag is only seen before the next
    /// starting segment.
    fn phrases_from(&self, segments: &[&str], windowed: bool, max_target: Option<u64>) -> Vec<Phrase> {
        let max_words = self.options.maximum_words_per_phrase;
        let mut found = Vec::new();

        if !windowed {
            if let Some(segment) = segments.first() {
                let phrase = Phrase::new(segment, self.methods);
                if phrase.word_count() <= max_words
                    && self.meets_minimum(&phrase)
                    && self.matches_target(&phrase)
                {
                    found.push(phrase);
                }
            }
            return found;
        }

        let mut window = String::new();
        for segment in segments {
            if !window.is_empty() {
                window.push(' ');
            }
            window.push_str(segment);

            let phrase = Phrase::new(&window, self.methods);
            if phrase.word_count() > max_words {
                break;
            }

            let prune = max_target.is_some_and(|max| self.exceeds_all(&phrase, max));
            if self.meets_minimum(&phrase) && self.matches_target(&phrase) {
                found.push(phrase);
            }
            if prune {
                break;
            }
        }
        found
    }

    fn meets_minimum(&self, phrase: &Phrase) -> bool {
        !phrase.content().is_empty()
            && phrase.char_count() >= self.options.minimum_characters_per_phrase
            && phrase.word_count() >= self.options.minimum_words_per_phrase
    }

    /// First selected method whose value is a target wins
    fn matches_target(&self, phrase: &Phrase) -> bool {
        match &self.options.values_to_look_for {
            None => true,
            Some(targets) => self
                .selected
                .iter()
                .any(|&i| targets.contains(&phrase.values()[i].value)),
        }
    }

    /// Values never decrease as words are appended (cipher values are
    /// non-negative), so once every selected value passes the largest target
    /// no longer window can match.
    fn exceeds_all(&self, phrase: &Phrase, max_target: u64) -> bool {
        self.selected
            .iter()
            .all(|&i| phrase.values()[i].value > max_target)
    }
}

/// Scan several independent texts with one scanner each and merge the
/// results, deduplicated in input order.
///
/// With the `parallel` feature the texts are scanned on the rayon pool. If the
/// token is cancelled at any point the whole call yields an empty list.
pub fn scan_texts(
    methods: &[GematriaMethod],
    selected_ids: &[i64],
    cancel: &CancellationToken,
    options: &ScanOptions,
    texts: &[&str],
) -> Result<Vec<Phrase>, ScanError> {
    let run = |text: &&str| -> Result<Vec<Phrase>, ScanError> {
        Scanner::new(methods, selected_ids, cancel.clone(), options.clone())?.scan(text)
    };

    #[cfg(feature = "parallel")]
    let per_text: Vec<Result<Vec<Phrase>, ScanError>> = {
        use rayon::prelude::*;
        texts.par_iter().map(run).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let per_text: Vec<Result<Vec<Phrase>, ScanError>> = texts.iter().map(run).collect();

    if cancel.is_cancelled() {
        return Ok(Vec::new());
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();
    for phrases in per_text {
        for phrase in phrases? {
            if seen.insert(phrase.content().to_string()) {
                merged.push(phrase);
            }
        }
    }
    Ok(merged)
}
