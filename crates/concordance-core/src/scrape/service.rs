//! Request-facing entry points: input sanitization, limit clamping, and
//! the batch pipeline. The HTTP layer is a thin transcription of this
//! module's contract.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::adapter::{SourceId, SourceResult};
use super::aggregator::{AggregateResult, Aggregator, NO_SENTENCES_PLACEHOLDER};
use super::normalizer;
use crate::word::{InputError, Word};

pub const DEFAULT_LIMIT: usize = 20;
pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 50;
pub const MAX_BATCH_WORDS: usize = 10;

/// One word's entry in a batch response: display-numbered sentences from
/// the primary source, or the placeholder when that source came back
/// absent.
#[derive(Debug, Clone, Serialize)]
pub struct WordEntry {
    pub sentences: Vec<String>,
    pub image_url: Option<String>,
    pub source: Option<SourceId>,
}

impl WordEntry {
    fn from_source(result: SourceResult) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for sentence in result.sentences {
            if seen.insert(sentence.canonical()) {
                unique.push(sentence);
            }
        }

        Self {
            sentences: normalizer::number_sentences(&unique),
            image_url: result.image_url,
            source: Some(result.source),
        }
    }

    fn placeholder() -> Self {
        Self {
            sentences: vec![NO_SENTENCES_PLACEHOLDER.to_string()],
            image_url: None,
            source: None,
        }
    }
}

/// Batch outcome: a deterministic word-to-entry mapping.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutput {
    pub results: BTreeMap<String, WordEntry>,
}

/// Validates caller input and drives the [`Aggregator`].
pub struct QueryService {
    aggregator: Aggregator,
}

impl QueryService {
    #[must_use]
    pub fn new(aggregator: Aggregator) -> Self {
        Self { aggregator }
    }

    /// Full aggregation for one word.
    ///
    /// The limit defaults to [`DEFAULT_LIMIT`] when absent and is clamped
    /// to `[MIN_LIMIT, MAX_LIMIT]`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidWord`] when the word sanitizes to
    /// empty. Source failures never surface here.
    pub async fn lookup(
        &self,
        raw_word: &str,
        raw_limit: Option<i64>,
    ) -> Result<AggregateResult, InputError> {
        let word = Word::parse(raw_word)?;
        let limit = clamp_limit(raw_limit);

        tracing::info!(%word, limit, "fetching sentences");

        Ok(self.aggregator.aggregate(&word, limit).await)
    }

    /// Reduced per-word pipeline over the primary source only.
    ///
    /// Words that sanitize to empty are skipped. A per-word failure
    /// produces that word's placeholder entry and never aborts the batch.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptyBatch`] or [`InputError::BatchTooLarge`]
    /// for an out-of-range batch.
    pub async fn batch(&self, raw_words: &[String]) -> Result<BatchOutput, InputError> {
        if raw_words.is_empty() {
            return Err(InputError::EmptyBatch);
        }
        if raw_words.len() > MAX_BATCH_WORDS {
            return Err(InputError::BatchTooLarge(raw_words.len()));
        }

        let mut output = BatchOutput::default();

        for raw in raw_words {
            let Ok(word) = Word::parse(raw) else {
                tracing::debug!(%raw, "skipping word that sanitized to empty");
                continue;
            };

            let entry = match self.aggregator.scrape_primary(&word).await {
                Some(result) => WordEntry::from_source(result),
                None => WordEntry::placeholder(),
            };

            output.results.insert(word.into_string(), entry);
        }

        Ok(output)
    }
}

fn clamp_limit(raw: Option<i64>) -> usize {
    let requested = raw.unwrap_or(DEFAULT_LIMIT as i64);
    requested.clamp(MIN_LIMIT as i64, MAX_LIMIT as i64) as usize
}
