//! Deduplicated word sets with O(1) membership and set algebra.
//!
//! [`WordSet`] is the operand of every filter in this crate: the vocabulary
//! built from a corpus is a `WordSet`, and every filter returns a fresh
//! `WordSet`. Once constructed a set is never mutated; combining or
//! narrowing one always produces a new set.
//!
//! # Examples
//!
//! ```
//! use lexique::corpus::WordSet;
//!
//! let words = WordSet::from_words(["zinc", "zazou", "zinc"]);
//! assert_eq!(words.len(), 2);
//! assert!(words.contains("zazou"));
//! assert!(!words.contains("zonerez"));
//! ```

use ahash::AHashSet;

/// A deduplicated set of distinct words.
///
/// Backed by a hash set, so membership tests are O(1) average. Iteration
/// order is unspecified; use [`WordSet::sorted`] when a deterministic order
/// is needed. The set algebra methods (`union`, `intersection`,
/// `difference`) and the [`WordSet::filter`] combinator all leave their
/// operands untouched and return fresh sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: AHashSet<String>,
}

impl WordSet {
    /// Create a new empty word set.
    pub fn new() -> Self {
        WordSet {
            words: AHashSet::new(),
        }
    }

    /// Create a word set from an iterator of words, dropping duplicates.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordSet {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a word is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| word.as_str())
    }

    /// All words, sorted by Unicode scalar order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }

    /// The words present in `self` or `other` (set union).
    pub fn union(&self, other: &WordSet) -> WordSet {
        WordSet {
            words: self.words.union(&other.words).cloned().collect(),
        }
    }

    /// The words present in both `self` and `other` (set intersection).
    pub fn intersection(&self, other: &WordSet) -> WordSet {
        WordSet {
            words: self.words.intersection(&other.words).cloned().collect(),
        }
    }

    /// The words present in `self` but not in `other` (set difference).
    pub fn difference(&self, other: &WordSet) -> WordSet {
        WordSet {
            words: self.words.difference(&other.words).cloned().collect(),
        }
    }

    /// Build a new set containing the words that satisfy `predicate`.
    ///
    /// This is the one combinator every filter in [`crate::filter`] goes
    /// through; it never mutates `self`.
    pub fn filter<P>(&self, predicate: P) -> WordSet
    where
        P: Fn(&str) -> bool,
    {
        WordSet {
            words: self
                .words
                .iter()
                .filter(|word| predicate(word))
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<String> for WordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        WordSet {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        WordSet {
            words: iter.into_iter().map(str::to_string).collect(),
        }
    }
}
