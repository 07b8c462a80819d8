//! Cambridge Dictionary — curated dictionary examples, marked up with
//! the `.eg` class inside each sense block.

use scraper::Html;
use url::Url;

use super::{build_result, collect_fragments, first_image_url};
use crate::scrape::adapter::{SourceAdapter, SourceId, SourceResult};
use crate::word::Word;

const SENTENCE_SELECTORS: &[&str] = &[".eg"];

/// Headword illustration in the definition panel.
const IMAGE_SELECTOR: &str = ".dimg img";

pub struct CambridgeAdapter;

impl SourceAdapter for CambridgeAdapter {
    fn source(&self) -> SourceId {
        SourceId::Cambridge
    }

    fn page_url(&self, word: &Word) -> String {
        format!("https://dictionary.cambridge.org/dictionary/english/{word}")
    }

    fn extract(&self, html: &str, base_url: &Url) -> Option<SourceResult> {
        let doc = Html::parse_document(html);
        let fragments = collect_fragments(&doc, SENTENCE_SELECTORS, None);
        let image_url = first_image_url(&doc, IMAGE_SELECTOR, base_url);
        build_result(SourceId::Cambridge, fragments, image_url)
    }
}
