use serde::Serialize;
use thiserror::Error;

/// Errors for caller-supplied input. Always surfaced as a 4xx, never retried.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid word format")]
    InvalidWord,

    #[error("At least one word is required")]
    EmptyBatch,

    #[error("Too many words: {0} (max: 10)")]
    BatchTooLarge(usize),
}

/// A sanitized lookup word: lowercase ASCII letters and hyphens only.
///
/// Construction goes through [`Word::parse`]; a `Word` never holds an
/// empty or unsanitized string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Sanitize raw caller input into a `Word`.
    ///
    /// Lowercases, trims, and drops every character outside `[a-z-]`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidWord`] when nothing survives sanitization.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let sanitized: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || *c == '-')
            .collect();

        if sanitized.is_empty() {
            return Err(InputError::InvalidWord);
        }

        Ok(Self(sanitized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Word {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_word() {
        let word = Word::parse("happy").unwrap();
        assert_eq!(word.as_str(), "happy");
    }

    #[test]
    fn parse_lowercases_and_trims() {
        let word = Word::parse("  HaPPy  ").unwrap();
        assert_eq!(word.as_str(), "happy");
    }

    #[test]
    fn parse_keeps_hyphens() {
        let word = Word::parse("well-known").unwrap();
        assert_eq!(word.as_str(), "well-known");
    }

    #[test]
    fn parse_strips_punctuation_and_digits() {
        let word = Word::parse("cat?!123").unwrap();
        assert_eq!(word.as_str(), "cat");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!(Word::parse(""), Err(InputError::InvalidWord)));
        assert!(matches!(Word::parse("   "), Err(InputError::InvalidWord)));
    }

    #[test]
    fn parse_rejects_fully_sanitized_away() {
        assert!(matches!(Word::parse("123?!"), Err(InputError::InvalidWord)));
        assert!(matches!(Word::parse("??"), Err(InputError::InvalidWord)));
    }

    #[test]
    fn word_serializes_as_plain_string() {
        let word = Word::parse("cat").unwrap();
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"cat\"");
    }

    #[test]
    fn from_str_round_trip() {
        let word: Word = "dog".parse().unwrap();
        assert_eq!(word.to_string(), "dog");
    }

    #[test]
    fn input_error_messages() {
        assert_eq!(InputError::InvalidWord.to_string(), "Invalid word format");
        assert_eq!(
            InputError::BatchTooLarge(12).to_string(),
            "Too many words: 12 (max: 10)"
        );
    }
}
