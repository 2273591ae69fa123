//! Random sampling of words.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::corpus::WordSet;

/// Draw up to `count` distinct words from a set.
///
/// Candidates are sorted before shuffling, so two draws with identically
/// seeded generators return the same words in the same order regardless of
/// the set's internal iteration order. If `count` exceeds the set size the
/// whole set is returned, shuffled.
///
/// # Examples
///
/// ```
/// use lexique::corpus::WordSet;
/// use lexique::sample::{sample_words, seeded_rng};
///
/// let words = WordSet::from_words(["zinc", "zazou", "kiwi", "wok"]);
/// let mut rng = seeded_rng(Some(42));
///
/// let sample = sample_words(&words, 2, &mut rng);
/// assert_eq!(sample.len(), 2);
/// ```
pub fn sample_words<'a, R: Rng + ?Sized>(
    words: &'a WordSet,
    count: usize,
    rng: &mut R,
) -> Vec<&'a str> {
    let mut candidates = words.sorted();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

/// Build a generator from an optional seed.
///
/// A fixed seed gives reproducible draws; without one the generator is
/// seeded from the operating system.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> WordSet {
        WordSet::from_words(["zinc", "zazou", "kiwi", "wok", "sans", "vaincre", "glomérules"])
    }

    #[test]
    fn test_sample_is_deterministic_with_seed() {
        let words = sample_set();

        let first = sample_words(&words, 3, &mut seeded_rng(Some(7)));
        let second = sample_words(&words, 3, &mut seeded_rng(Some(7)));

        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_draws_from_the_set() {
        let words = sample_set();

        let sample = sample_words(&words, 5, &mut seeded_rng(Some(1)));

        assert_eq!(sample.len(), 5);
        for word in &sample {
            assert!(words.contains(word));
        }
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let words = sample_set();

        let mut sample = sample_words(&words, 7, &mut seeded_rng(Some(3)));
        sample.sort_unstable();
        sample.dedup();

        assert_eq!(sample.len(), 7);
    }

    #[test]
    fn test_count_capped_at_set_size() {
        let words = WordSet::from_words(["zinc", "kiwi"]);

        let sample = sample_words(&words, 10, &mut seeded_rng(Some(9)));

        assert_eq!(sample.len(), 2);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_zero_count_returns_nothing() {
        let words = sample_set();

        let sample = sample_words(&words, 0, &mut seeded_rng(Some(5)));

        assert!(sample.is_empty());
    }

    #[test]
    fn test_empty_set_returns_nothing() {
        let words = WordSet::new();

        let sample = sample_words(&words, 4, &mut seeded_rng(Some(5)));

        assert!(sample.is_empty());
    }
}
