//! Combined prefix, suffix and length filter.

use crate::corpus::char_len;
use crate::filter::WordFilter;

/// Keeps words with a given prefix, a given suffix and an exact length.
///
/// Prefix and suffix are checked independently, so they may overlap: a
/// one-character word matches a filter whose prefix and suffix are both
/// that character. A length of zero never matches anything, the same rule
/// as [`LengthFilter`](crate::filter::LengthFilter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixFilter {
    prefix: String,
    suffix: String,
    length: usize,
}

impl AffixFilter {
    /// Create a new affix filter.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, length: usize) -> Self {
        AffixFilter {
            prefix: prefix.into(),
            suffix: suffix.into(),
            length,
        }
    }

    /// The required prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The required suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The required length in characters.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl WordFilter for AffixFilter {
    fn matches(&self, word: &str) -> bool {
        self.length > 0
            && char_len(word) == self.length
            && word.starts_with(&self.prefix)
            && word.ends_with(&self.suffix)
    }

    fn name(&self) -> &'static str {
        "affix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::WordSet;

    #[test]
    fn test_affix_filter() {
        let words = WordSet::from_words(["zinc", "zinguez", "zonerez", "zippiez", "zazou"]);
        let filter = AffixFilter::new("z", "z", 7);

        let result = filter.apply(&words);

        assert_eq!(result.len(), 3);
        assert!(result.contains("zinguez"));
        assert!(result.contains("zonerez"));
        assert!(result.contains("zippiez"));
    }

    #[test]
    fn test_length_must_match_exactly() {
        let filter = AffixFilter::new("z", "z", 7);

        assert!(!filter.matches("zez"));
        assert!(!filter.matches("zinzolinez"));
    }

    #[test]
    fn test_overlapping_prefix_and_suffix() {
        let filter = AffixFilter::new("a", "a", 1);

        assert!(filter.matches("a"));
    }

    #[test]
    fn test_length_zero_matches_nothing() {
        let words = WordSet::from_words(["", "zinc", "zazou"]);
        let filter = AffixFilter::new("", "", 0);

        assert!(filter.apply(&words).is_empty());
    }

    #[test]
    fn test_empty_affixes_reduce_to_length() {
        let words = WordSet::from_words(["zinc", "zazou"]);
        let filter = AffixFilter::new("", "", 5);

        let result = filter.apply(&words);

        assert_eq!(result.len(), 1);
        assert!(result.contains("zazou"));
    }

    #[test]
    fn test_multi_character_affixes() {
        let filter = AffixFilter::new("vai", "cre", 7);

        assert!(filter.matches("vaincre"));
        assert!(!filter.matches("vaincra"));
    }
}
