//! Site-specific sentence sources. One module per external site; shared
//! selector plumbing lives here.

mod cambridge;
mod sentencedict;
mod yourdictionary;

pub use cambridge::CambridgeAdapter;
pub use sentencedict::SentenceDictAdapter;
pub use yourdictionary::YourDictionaryAdapter;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::adapter::{SourceId, SourceResult};
use super::normalizer::{self, MAX_SENTENCES_PER_SOURCE};

/// Text content of a node with tag boundaries collapsed to single
/// spaces — matched text is joined, never concatenated.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Raw fragments for a selector set, in document order per selector,
/// excluding site-banner text.
fn collect_fragments(doc: &Html, selectors: &[&str], banner_prefix: Option<&str>) -> Vec<String> {
    let mut fragments = Vec::new();

    for &raw_selector in selectors {
        let Ok(selector) = Selector::parse(raw_selector) else {
            tracing::warn!(selector = raw_selector, "invalid sentence selector");
            continue;
        };

        for element in doc.select(&selector) {
            let text = element_text(element);
            if text.is_empty() {
                continue;
            }
            if banner_prefix.is_some_and(|prefix| text.starts_with(prefix)) {
                continue;
            }
            fragments.push(text);
        }
    }

    fragments
}

/// First image match's `src`, resolved against the page URL.
fn first_image_url(doc: &Html, selector: &str, base_url: &Url) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let src = doc.select(&selector).next()?.value().attr("src")?;
    base_url.join(src).ok().map(Into::into)
}

/// Normalize fragments in document order, apply the per-source cap, and
/// build the adapter's result. Empty means absent, not an empty result.
fn build_result(
    source: SourceId,
    fragments: Vec<String>,
    image_url: Option<String>,
) -> Option<SourceResult> {
    let sentences: Vec<_> = fragments
        .iter()
        .filter_map(|fragment| normalizer::normalize(fragment))
        .take(MAX_SENTENCES_PER_SOURCE)
        .collect();

    if sentences.is_empty() {
        return None;
    }

    Some(SourceResult {
        source,
        sentences,
        image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_text_collapses_tag_boundaries() {
        let html = Html::parse_fragment("<p>He is <b>happy</b> today.</p>");
        let selector = Selector::parse("p").unwrap();
        let element = html.select(&selector).next().unwrap();
        assert_eq!(element_text(element), "He is happy today.");
    }

    #[test]
    fn collect_fragments_skips_banner_text() {
        let html = Html::parse_document(
            "<div class=\"x\">Sentencedict.com shows sentences.</div>\
             <div class=\"x\">An actual example sentence.</div>",
        );
        let fragments = collect_fragments(&html, &[".x"], Some("Sentencedict.com"));
        assert_eq!(fragments, vec!["An actual example sentence."]);
    }

    #[test]
    fn collect_fragments_skips_invalid_selector() {
        let html = Html::parse_document("<div class=\"x\">An actual example sentence.</div>");
        let fragments = collect_fragments(&html, &["[[[", ".x"], None);
        assert_eq!(fragments.len(), 1);
    }

    #[test]
    fn first_image_resolves_relative_src() {
        let html = Html::parse_document("<img class=\"pic\" src=\"/img/cat.jpg\">");
        let base = Url::parse("https://example.com/dictionary/cat").unwrap();
        let url = first_image_url(&html, "img.pic", &base);
        assert_eq!(url.as_deref(), Some("https://example.com/img/cat.jpg"));
    }

    #[test]
    fn build_result_caps_per_source_contribution() {
        let fragments: Vec<String> = (0..40)
            .map(|i| format!("Example sentence number {i} is long enough."))
            .collect();
        let result = build_result(SourceId::SentenceDict, fragments, None).unwrap();
        assert_eq!(result.sentences.len(), MAX_SENTENCES_PER_SOURCE);
    }

    #[test]
    fn build_result_empty_is_absent() {
        assert!(build_result(SourceId::Cambridge, Vec::new(), None).is_none());
        assert!(build_result(SourceId::Cambridge, vec!["short".into()], None).is_none());
    }
}
