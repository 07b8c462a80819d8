//! YourDictionary — user-facing sentence lists; example rows appear both
//! as `.sentence-item .sentence` cards and legacy `.example-sentence`
//! paragraphs, interleaved in document order.

use scraper::Html;
use url::Url;

use super::{build_result, collect_fragments, first_image_url};
use crate::scrape::adapter::{SourceAdapter, SourceId, SourceResult};
use crate::word::Word;

// One combined selector so the two markup generations stay in document order.
const SENTENCE_SELECTORS: &[&str] = &[".sentence-item .sentence, .example-sentence"];

const IMAGE_SELECTOR: &str = ".sentence-item img";

pub struct YourDictionaryAdapter;

impl SourceAdapter for YourDictionaryAdapter {
    fn source(&self) -> SourceId {
        SourceId::YourDictionary
    }

    fn page_url(&self, word: &Word) -> String {
        format!("https://sentence.yourdictionary.com/{word}")
    }

    fn extract(&self, html: &str, base_url: &Url) -> Option<SourceResult> {
        let doc = Html::parse_document(html);
        let fragments = collect_fragments(&doc, SENTENCE_SELECTORS, None);
        let image_url = first_image_url(&doc, IMAGE_SELECTOR, base_url);
        build_result(SourceId::YourDictionary, fragments, image_url)
    }
}
