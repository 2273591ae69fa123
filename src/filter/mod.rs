//! Word filters and the query operations built on them.
//!
//! Each filter is a per-word predicate behind the [`WordFilter`] trait;
//! applying one to a [`WordSet`] keeps the words that match. The free
//! functions in this module are the query surface most callers want.
//!
//! # Examples
//!
//! ```
//! use lexique::corpus::WordSet;
//! use lexique::filter::words_with_affixes;
//!
//! let words = WordSet::from_words(["zinc", "zinguez", "zonerez", "zippiez", "zazou"]);
//! let found = words_with_affixes(&words, "z", "z", 7);
//!
//! assert_eq!(found.len(), 3);
//! ```

pub mod affix;
pub mod contains;
pub mod criteria;
pub mod length;

pub use affix::AffixFilter;
pub use contains::ContainsFilter;
pub use criteria::{Criteria, CriteriaFilter};
pub use length::LengthFilter;

use crate::corpus::WordSet;

/// Trait for per-word predicates applied to word sets.
pub trait WordFilter: Send + Sync {
    /// Check a single word against the filter.
    fn matches(&self, word: &str) -> bool;

    /// Filter name for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Apply the filter to a word set, keeping the words that match.
    fn apply(&self, words: &WordSet) -> WordSet {
        words.filter(|word| self.matches(word))
    }
}

/// Words of exactly `length` characters.
pub fn words_of_length(words: &WordSet, length: usize) -> WordSet {
    LengthFilter::new(length).apply(words)
}

/// Words containing `infix` anywhere, ends included.
pub fn words_containing(words: &WordSet, infix: &str) -> WordSet {
    ContainsFilter::new(infix).apply(words)
}

/// Words starting with `prefix`, ending with `suffix` and exactly `length`
/// characters long.
pub fn words_with_affixes(words: &WordSet, prefix: &str, suffix: &str, length: usize) -> WordSet {
    AffixFilter::new(prefix, suffix, length).apply(words)
}

/// Words matching a compound [`Criteria`].
pub fn words_matching_criteria(words: &WordSet, criteria: &Criteria) -> WordSet {
    CriteriaFilter::new(criteria.clone()).apply(words)
}
