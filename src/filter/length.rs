//! Exact word length filter.

use crate::corpus::char_len;
use crate::filter::WordFilter;

/// Keeps words of exactly `length` characters.
///
/// A length of zero never matches anything, since a corpus has no empty
/// words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthFilter {
    length: usize,
}

impl LengthFilter {
    /// Create a new length filter.
    pub fn new(length: usize) -> Self {
        LengthFilter { length }
    }

    /// The length this filter keeps.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl WordFilter for LengthFilter {
    fn matches(&self, word: &str) -> bool {
        self.length > 0 && char_len(word) == self.length
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::WordSet;

    #[test]
    fn test_length_filter() {
        let words = WordSet::from_words(["zinc", "zazou", "kiwi", "wok"]);
        let filter = LengthFilter::new(4);

        let result = filter.apply(&words);

        assert_eq!(result.len(), 2);
        assert!(result.contains("zinc"));
        assert!(result.contains("kiwi"));
    }

    #[test]
    fn test_length_counts_characters() {
        // "hébétude" is 8 characters but 10 bytes in UTF-8.
        let words = WordSet::from_words(["hébétude"]);

        assert!(LengthFilter::new(8).matches("hébétude"));
        assert_eq!(LengthFilter::new(10).apply(&words).len(), 0);
    }

    #[test]
    fn test_length_zero_matches_nothing() {
        let words = WordSet::from_words(["", "zinc"]);
        let filter = LengthFilter::new(0);

        assert!(filter.apply(&words).is_empty());
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        let words = WordSet::from_words(["zinc", "kiwi"]);

        assert!(LengthFilter::new(12).apply(&words).is_empty());
    }
}
