//! sentencedict.com — the primary source: dense example lists, no
//! account wall, tolerant of automated requests.

use scraper::Html;
use url::Url;

use super::{build_result, collect_fragments};
use crate::scrape::adapter::{SourceAdapter, SourceId, SourceResult};
use crate::word::Word;

/// Example sentences live in the `#all` and `#student` list containers.
const SENTENCE_SELECTORS: &[&str] = &["#all > div", "#student > div"];

/// The site injects its own name into the list as a promo row.
const BANNER_PREFIX: &str = "Sentencedict.com";

pub struct SentenceDictAdapter;

impl SourceAdapter for SentenceDictAdapter {
    fn source(&self) -> SourceId {
        SourceId::SentenceDict
    }

    fn page_url(&self, word: &Word) -> String {
        format!("https://sentencedict.com/{word}.html")
    }

    fn extract(&self, html: &str, _base_url: &Url) -> Option<SourceResult> {
        let doc = Html::parse_document(html);
        let fragments = collect_fragments(&doc, SENTENCE_SELECTORS, Some(BANNER_PREFIX));
        build_result(SourceId::SentenceDict, fragments, None)
    }
}
