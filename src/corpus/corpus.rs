//! The ordered corpus: every word as read from the source, duplicates kept.

use ahash::AHashSet;

use crate::corpus::char_len;
use crate::corpus::word_set::WordSet;

/// The full ordered list of words as read from a source.
///
/// Unlike [`WordSet`], a corpus preserves source order and duplicate tokens.
/// It is used for cardinality, positional access and statistics; queries
/// always run against the deduplicated [`WordSet`] derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    /// Create a corpus from an iterator of words, preserving order and
    /// duplicates.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Corpus {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the number of words, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the word at `index` in source order.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Iterate over the words in source order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Build the deduplicated [`WordSet`] over this corpus.
    pub fn to_word_set(&self) -> WordSet {
        self.words.iter().map(String::as_str).collect()
    }

    /// Consume the corpus and build its deduplicated [`WordSet`].
    pub fn into_word_set(self) -> WordSet {
        self.words.into_iter().collect()
    }

    /// Summary statistics over the corpus.
    pub fn stats(&self) -> CorpusStats {
        let total_words = self.words.len();
        let unique_words = self
            .words
            .iter()
            .map(String::as_str)
            .collect::<AHashSet<&str>>()
            .len();

        let mut min_length = usize::MAX;
        let mut max_length = 0;
        let mut total_length = 0;
        for word in &self.words {
            let length = char_len(word);
            min_length = min_length.min(length);
            max_length = max_length.max(length);
            total_length += length;
        }

        let (min_length, avg_length) = if total_words > 0 {
            (min_length, total_length as f64 / total_words as f64)
        } else {
            (0, 0.0)
        };

        CorpusStats {
            total_words,
            unique_words,
            min_length,
            max_length,
            avg_length,
        }
    }
}

impl FromIterator<String> for Corpus {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Corpus {
            words: iter.into_iter().collect(),
        }
    }
}

/// Summary statistics over a corpus.
///
/// Lengths are measured in characters, the same measure the filters use.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusStats {
    /// Number of words, duplicates included.
    pub total_words: usize,
    /// Number of distinct words.
    pub unique_words: usize,
    /// Shortest word length (0 for an empty corpus).
    pub min_length: usize,
    /// Longest word length.
    pub max_length: usize,
    /// Average word length.
    pub avg_length: f64,
}
