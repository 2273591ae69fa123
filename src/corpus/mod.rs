//! Corpus loading and word containers.
//!
//! A corpus is read from a one-word-per-line UTF-8 source into an ordered
//! [`Corpus`], then deduplicated into a [`WordSet`] that the filters and
//! set operations work over.

#[allow(clippy::module_inception)]
pub mod corpus;
pub mod loader;
pub mod word_set;

pub use corpus::{Corpus, CorpusStats};
pub use loader::{load_corpus, load_vocabulary, read_words};
pub use word_set::WordSet;

/// Length of a word in characters.
///
/// All word lengths in this crate count Unicode characters, not bytes, so
/// accented French words measure the way a reader would count them.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
