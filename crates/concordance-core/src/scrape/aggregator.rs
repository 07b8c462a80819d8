//! Cross-source merge: fan out to every adapter, combine contributions in
//! fixed priority order, dedupe case-insensitively, and bound the output.

use std::collections::HashSet;
use std::time::Duration;

use serde::Serialize;

use super::adapter::{SourceAdapter, SourceId, SourceResult};
use super::sources::{CambridgeAdapter, SentenceDictAdapter, YourDictionaryAdapter};
use crate::network::SiteFetcher;
use crate::word::Word;

/// Literal returned when every source comes back absent. Still a success.
pub const NO_SENTENCES_PLACEHOLDER: &str = "No sentences found for this word.";

/// Hard bound on one adapter call, over and above the fetch client's own
/// timeouts. A stuck source degrades to absent; it never stalls the request.
const ADAPTER_TIMEOUT: Duration = Duration::from_secs(15);

/// Merged outcome for one word. Built fresh per request, never cached.
///
/// For any non-placeholder result: `returned_sentences == sentences.len()
/// <= limit`, `total_sentences >= returned_sentences`, and `sources` holds
/// one entry per contributing source in priority order.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    pub word: Word,
    pub sentences: Vec<String>,
    pub image_url: Option<String>,
    pub sources: Vec<SourceId>,
    pub total_sentences: usize,
    pub returned_sentences: usize,
    pub limit: usize,
}

/// Runs the adapters and owns the merge policy.
///
/// Adapters are registered in priority order; the first is the primary
/// source used by the reduced batch pipeline.
pub struct Aggregator {
    fetcher: SiteFetcher,
    adapters: Vec<Box<dyn SourceAdapter>>,
}

impl Aggregator {
    #[must_use]
    pub fn new(fetcher: SiteFetcher) -> Self {
        Self::with_adapters(
            fetcher,
            vec![
                Box::new(SentenceDictAdapter),
                Box::new(CambridgeAdapter),
                Box::new(YourDictionaryAdapter),
            ],
        )
    }

    #[must_use]
    pub fn with_adapters(fetcher: SiteFetcher, adapters: Vec<Box<dyn SourceAdapter>>) -> Self {
        Self { fetcher, adapters }
    }

    /// Scrape every source for `word` and merge the contributions.
    ///
    /// Adapter calls run concurrently and are isolated: a failed or empty
    /// source never affects the others. Merge order is the fixed adapter
    /// priority order regardless of completion order.
    pub async fn aggregate(&self, word: &Word, limit: usize) -> AggregateResult {
        let scrapes = self
            .adapters
            .iter()
            .map(|adapter| self.scrape_with_timeout(adapter.as_ref(), word));

        let results: Vec<SourceResult> = futures::future::join_all(scrapes)
            .await
            .into_iter()
            .flatten()
            .collect();

        merge(word, results, limit)
    }

    /// Reduced pipeline: the primary source only. Used by batch mode.
    pub async fn scrape_primary(&self, word: &Word) -> Option<SourceResult> {
        let adapter = self.adapters.first()?;
        self.scrape_with_timeout(adapter.as_ref(), word).await
    }

    async fn scrape_with_timeout(
        &self,
        adapter: &dyn SourceAdapter,
        word: &Word,
    ) -> Option<SourceResult> {
        match tokio::time::timeout(ADAPTER_TIMEOUT, adapter.scrape(word, &self.fetcher)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(source = %adapter.source(), %word, "adapter timed out");
                None
            }
        }
    }
}

/// Merge per-source contributions into the final result.
///
/// Sentences are concatenated source-by-source (never interleaved), then
/// deduplicated in one pass: the first occurrence of a canonical form
/// wins, so earlier-priority sources win ties. The seen-set lives and
/// dies with this call.
fn merge(word: &Word, results: Vec<SourceResult>, limit: usize) -> AggregateResult {
    if results.is_empty() {
        tracing::info!(%word, "no source contributed sentences");
        return AggregateResult {
            word: word.clone(),
            sentences: vec![NO_SENTENCES_PLACEHOLDER.to_string()],
            image_url: None,
            sources: Vec::new(),
            total_sentences: 0,
            returned_sentences: 0,
            limit,
        };
    }

    let sources: Vec<SourceId> = results.iter().map(|r| r.source).collect();
    let image_url = results.iter().find_map(|r| r.image_url.clone());

    let mut seen = HashSet::new();
    let mut unique: Vec<String> = Vec::new();
    for sentence in results.into_iter().flat_map(|r| r.sentences) {
        if seen.insert(sentence.canonical()) {
            unique.push(sentence.into_string());
        }
    }

    let total_sentences = unique.len();
    unique.truncate(limit);

    tracing::debug!(%word, total_sentences, returned = unique.len(), "sources merged");

    AggregateResult {
        word: word.clone(),
        returned_sentences: unique.len(),
        sentences: unique,
        image_url,
        sources,
        total_sentences,
        limit,
    }
}
