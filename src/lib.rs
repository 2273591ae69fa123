//! # Lexique
//!
//! A small, composable vocabulary query library for word corpora.
//!
//! ## Features
//!
//! - One-word-per-line corpus loading with a strict whitespace policy
//! - Membership tests over a deduplicated vocabulary
//! - Length, substring, affix and compound criteria filters
//! - Set algebra (union, intersection, difference) over query results
//! - Seedable random sampling of results
//!
//! ## Example
//!
//! ```
//! use lexique::corpus::WordSet;
//! use lexique::filter::{Criteria, words_matching_criteria};
//!
//! let words = WordSet::from_words(["zinc", "zinguez", "zazou"]);
//! let criteria = Criteria::new(4, 7)
//!     .with_prefix("z")
//!     .with_infix("in")
//!     .with_suffix("");
//!
//! let found = words_matching_criteria(&words, &criteria);
//! assert_eq!(found.len(), 2);
//! ```

pub mod alphabet;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod filter;
pub mod sample;

pub mod prelude {
    //! Convenient re-exports for the common query workflow.

    pub use crate::alphabet::Alphabet;
    pub use crate::corpus::{Corpus, WordSet, char_len, load_corpus, load_vocabulary};
    pub use crate::error::{LexiqueError, Result};
    pub use crate::filter::{
        AffixFilter, ContainsFilter, Criteria, CriteriaFilter, LengthFilter, WordFilter,
        words_containing, words_matching_criteria, words_of_length, words_with_affixes,
    };
    pub use crate::sample::{sample_words, seeded_rng};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
