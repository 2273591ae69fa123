//! Substring filter.

use crate::filter::WordFilter;

/// Keeps words containing a given substring anywhere, ends included.
///
/// The empty substring is contained in every word, so an empty infix keeps
/// the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsFilter {
    infix: String,
}

impl ContainsFilter {
    /// Create a new substring filter.
    pub fn new(infix: impl Into<String>) -> Self {
        ContainsFilter {
            infix: infix.into(),
        }
    }

    /// The substring this filter looks for.
    pub fn infix(&self) -> &str {
        &self.infix
    }
}

impl WordFilter for ContainsFilter {
    fn matches(&self, word: &str) -> bool {
        word.contains(&self.infix)
    }

    fn name(&self) -> &'static str {
        "contains"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::WordSet;

    #[test]
    fn test_contains_filter() {
        let words = WordSet::from_words(["zinc", "zazou", "vaincre", "wok"]);
        let filter = ContainsFilter::new("in");

        let result = filter.apply(&words);

        assert_eq!(result.len(), 2);
        assert!(result.contains("zinc"));
        assert!(result.contains("vaincre"));
    }

    #[test]
    fn test_contains_matches_at_either_end() {
        let filter = ContainsFilter::new("z");

        assert!(filter.matches("zinc"));
        assert!(filter.matches("zinguez"));
        assert!(filter.matches("azur"));
    }

    #[test]
    fn test_multi_character_substring() {
        let filter = ContainsFilter::new("oue");

        assert!(filter.matches("jouer"));
        assert!(!filter.matches("jour"));
    }

    #[test]
    fn test_empty_substring_keeps_everything() {
        let words = WordSet::from_words(["zinc", "kiwi"]);
        let filter = ContainsFilter::new("");

        assert_eq!(filter.apply(&words).len(), 2);
    }

    #[test]
    fn test_accented_substring() {
        let filter = ContainsFilter::new("é");

        assert!(filter.matches("glomérules"));
        assert!(!filter.matches("glomerules"));
    }
}
