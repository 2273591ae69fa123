//! Compound search criteria.
//!
//! A [`Criteria`] combines alternative prefixes, infixes and suffixes with
//! a length range. A word matches when its length falls inside the range
//! and at least one alternative from each list holds. An empty list has no
//! alternative to satisfy, so it matches nothing; use a list containing the
//! empty string to leave a position unconstrained.

use serde::{Deserialize, Serialize};

use crate::corpus::char_len;
use crate::error::Result;
use crate::filter::WordFilter;

/// A compound search criteria over prefixes, infixes, suffixes and length.
///
/// # Examples
///
/// ```
/// use lexique::filter::Criteria;
///
/// let criteria = Criteria::new(16, 16)
///     .with_prefix("a")
///     .with_infix("b")
///     .with_suffix("z");
///
/// assert!(criteria.matches("alphabétisassiez"));
/// assert!(!criteria.matches("zinc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// Alternative prefixes; a word must start with one of them.
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Alternative infixes; a word must contain one of them.
    #[serde(default)]
    pub infixes: Vec<String>,
    /// Alternative suffixes; a word must end with one of them.
    #[serde(default)]
    pub suffixes: Vec<String>,
    /// Minimum word length in characters, inclusive.
    pub min_length: usize,
    /// Maximum word length in characters, inclusive.
    pub max_length: usize,
}

impl Criteria {
    /// Create a criteria with the given length range and no alternatives.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Criteria {
            prefixes: Vec::new(),
            infixes: Vec::new(),
            suffixes: Vec::new(),
            min_length,
            max_length,
        }
    }

    /// Add an alternative prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    /// Add an alternative infix.
    pub fn with_infix(mut self, infix: impl Into<String>) -> Self {
        self.infixes.push(infix.into());
        self
    }

    /// Add an alternative suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffixes.push(suffix.into());
        self
    }

    /// Check a word against this criteria.
    ///
    /// Empty words never match, whatever the length range, the same rule
    /// as the plain length filter.
    pub fn matches(&self, word: &str) -> bool {
        let length = char_len(word);
        if length == 0 || length < self.min_length || length > self.max_length {
            return false;
        }
        self.prefixes.iter().any(|p| word.starts_with(p.as_str()))
            && self.infixes.iter().any(|i| word.contains(i.as_str()))
            && self.suffixes.iter().any(|s| word.ends_with(s.as_str()))
    }

    /// Whether any word could in principle match this criteria.
    ///
    /// A criteria with an empty alternative list or an inverted length
    /// range matches nothing. That is a valid query with an empty answer,
    /// not an error, but callers may want to warn about it.
    pub fn is_satisfiable(&self) -> bool {
        !self.prefixes.is_empty()
            && !self.infixes.is_empty()
            && !self.suffixes.is_empty()
            && self.min_length <= self.max_length
    }

    /// Parse a criteria from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this criteria to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// [`WordFilter`] adapter over a [`Criteria`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaFilter {
    criteria: Criteria,
}

impl CriteriaFilter {
    /// Create a filter from a criteria.
    pub fn new(criteria: Criteria) -> Self {
        CriteriaFilter { criteria }
    }

    /// The underlying criteria.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }
}

impl WordFilter for CriteriaFilter {
    fn matches(&self, word: &str) -> bool {
        self.criteria.matches(word)
    }

    fn name(&self) -> &'static str {
        "criteria"
    }
}
