//! Sentence cleanup: strips decorative markup and enumeration from raw
//! site fragments and gates out fragments too short or too boilerplate
//! to be real example sentences.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A single source contributes at most this many sentences, independent
/// of the caller's result limit.
pub const MAX_SENTENCES_PER_SOURCE: usize = 30;

/// Anything shorter after cleanup is noise, not a sentence.
const MIN_SENTENCE_LEN: usize = 10;

/// Navigation text the sites interleave with their example lists.
const BOILERPLATE_PREFIXES: &[&str] = &["show all", "random good"];

/// Parenthesized numeric markers `(123)`, any parenthesized group, and
/// enumeration markers (`12.`, leading bare digits). Matches are replaced
/// with a single space so adjacent words stay separated.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\(\d+\)|\(.*?\)|\d+\.)|^\d+[.,]|^\d+").expect("marker regex compiles")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex compiles"));

/// Display-numbering prefix (`"3. "`) stripped before dedup comparison.
static NUMBERING_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("numbering regex compiles"));

/// A cleaned sentence: non-empty, single-spaced, at least
/// [`MIN_SENTENCE_LEN`] characters, free of enumeration markers and
/// boilerplate. Only [`normalize`] constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedSentence(String);

impl NormalizedSentence {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Canonical form used for dedup equality: lowercased, with any
    /// display-numbering prefix stripped.
    #[must_use]
    pub fn canonical(&self) -> String {
        canonical_form(&self.0)
    }
}

impl std::fmt::Display for NormalizedSentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clean one raw fragment into a [`NormalizedSentence`], or reject it.
///
/// Rejection returns `None`: empty input, too short after cleanup, or a
/// known boilerplate phrase.
#[must_use]
pub fn normalize(raw: &str) -> Option<NormalizedSentence> {
    if raw.trim().is_empty() {
        return None;
    }

    let cleaned = MARKER_RE.replace_all(raw, " ");
    let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    if cleaned.len() < MIN_SENTENCE_LEN {
        return None;
    }

    let lower = cleaned.to_lowercase();
    if BOILERPLATE_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return None;
    }

    Some(NormalizedSentence(cleaned.to_string()))
}

/// Canonical comparison form for arbitrary sentence text.
#[must_use]
pub fn canonical_form(text: &str) -> String {
    NUMBERING_PREFIX_RE.replace(text, "").to_lowercase()
}

/// Prefix each sentence with its 1-based display number (`"1. "`, `"2. "`, …).
#[must_use]
pub fn number_sentences(sentences: &[NormalizedSentence]) -> Vec<String> {
    sentences
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(normalize("").is_none());
        assert!(normalize("   \t\n ").is_none());
    }

    #[test]
    fn strips_parenthesized_numeric_marker() {
        let s = normalize("(1) She is happy too.").unwrap();
        assert_eq!(s.as_str(), "She is happy too.");
    }

    #[test]
    fn strips_any_parenthesized_group() {
        let s = normalize("He waved (rather stiffly) at the crowd.").unwrap();
        assert_eq!(s.as_str(), "He waved at the crowd.");
    }

    #[test]
    fn strips_leading_enumeration() {
        let s = normalize("12. The quick brown fox jumps.").unwrap();
        assert_eq!(s.as_str(), "The quick brown fox jumps.");
    }

    #[test]
    fn marker_removal_keeps_word_separation() {
        // The marker is replaced with a space, never spliced out.
        let s = normalize("one(2)two is not a real sentence here.").unwrap();
        assert!(s.as_str().contains("one two"));
    }

    #[test]
    fn collapses_whitespace_runs() {
        let s = normalize("He   is\t\thappy  today.").unwrap();
        assert_eq!(s.as_str(), "He is happy today.");
    }

    #[test]
    fn rejects_short_results() {
        assert!(normalize("too short").is_none());
        assert!(normalize("(1) (2) (3) ab").is_none());
    }

    #[test]
    fn rejects_boilerplate_prefixes() {
        assert!(normalize("Show all sentences for this word").is_none());
        assert!(normalize("Random good sentence picks").is_none());
        assert!(normalize("SHOW ALL results").is_none());
    }

    #[test]
    fn accepts_minimum_length() {
        assert!(normalize("0123456789").is_none()); // digits stripped, too short
        assert!(normalize("abcdefghij").is_some());
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("  (3) He is   happy.  Truly. ").unwrap();
        let twice = normalize(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn output_never_contains_numeric_markers() {
        for raw in ["(42) Plenty of examples here.", "7. Plenty of examples here."] {
            let s = normalize(raw).unwrap();
            assert!(!s.as_str().contains("(42)"));
            assert!(!s.as_str().starts_with(|c: char| c.is_ascii_digit()));
        }
    }

    #[test]
    fn canonical_ignores_case() {
        let a = normalize("He is happy.").unwrap();
        let b = normalize("HE IS HAPPY.").unwrap();
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn canonical_strips_display_numbering() {
        assert_eq!(canonical_form("3. He is happy."), "he is happy.");
        assert_eq!(canonical_form("He is happy."), "he is happy.");
    }

    #[test]
    fn numbering_is_one_based_and_ordered() {
        let sentences = vec![
            normalize("The first example sentence.").unwrap(),
            normalize("The second example sentence.").unwrap(),
        ];
        let numbered = number_sentences(&sentences);
        assert_eq!(numbered[0], "1. The first example sentence.");
        assert_eq!(numbered[1], "2. The second example sentence.");
    }
}
