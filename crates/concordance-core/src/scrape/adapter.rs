//! The seam between the aggregation pipeline and the external sites.
//!
//! Each site is one [`SourceAdapter`] variant: it knows the page URL for
//! a word and how to locate sentence fragments (and an optional
//! illustrative image) in that site's markup. Adapters never raise to the
//! caller; every failure degrades to an absent result.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::network::SiteFetcher;
use crate::scrape::normalizer::NormalizedSentence;
use crate::word::Word;

/// The external sites we scrape, in fixed priority order (primary first).
/// Serialized with the site's domain, matching the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceId {
    #[serde(rename = "sentencedict.com")]
    SentenceDict,
    #[serde(rename = "cambridge.org")]
    Cambridge,
    #[serde(rename = "yourdictionary.com")]
    YourDictionary,
}

impl SourceId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SentenceDict => "sentencedict.com",
            Self::Cambridge => "cambridge.org",
            Self::YourDictionary => "yourdictionary.com",
        }
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one adapter invocation contributed: normalized sentences in
/// document order, plus the first illustrative image found, if any.
/// Immutable once built; an adapter that has nothing to contribute
/// returns `None` instead of an empty result.
#[derive(Debug, Clone)]
pub struct SourceResult {
    pub source: SourceId,
    pub sentences: Vec<NormalizedSentence>,
    pub image_url: Option<String>,
}

/// One external sentence site.
///
/// `extract` is pure over fetched markup so each site's parsing can be
/// exercised with fixture HTML. The provided `scrape` drives the full
/// fetch-then-extract cycle and converts every failure — network, HTTP
/// status, unexpected markup — into an absent result, logged at warn
/// level. Callers can therefore run adapters without any error plumbing.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    fn source(&self) -> SourceId;

    /// Page URL carrying this word's example sentences.
    fn page_url(&self, word: &Word) -> String;

    /// Locate, normalize, and collect sentence fragments from fetched
    /// markup. Returns `None` when no fragment survives normalization.
    fn extract(&self, html: &str, base_url: &Url) -> Option<SourceResult>;

    async fn scrape(&self, word: &Word, fetcher: &SiteFetcher) -> Option<SourceResult> {
        let url = self.page_url(word);

        let html = match fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(source = %self.source(), %url, error = %err, "fetch failed");
                return None;
            }
        };

        let base_url = Url::parse(&url).ok()?;
        self.extract(&html, &base_url)
    }
}
