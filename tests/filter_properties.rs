//! Integration tests for the filter semantics and set algebra

use lexique::prelude::*;

fn vocabulary() -> WordSet {
    WordSet::from_words([
        "a",
        "zinc",
        "zinguez",
        "zonerez",
        "zippiez",
        "zazou",
        "kiwi",
        "wok",
        "kayak",
        "whisky",
        "sans",
        "vaincre",
        "hébétude",
        "glomérules",
        "alphabétisassiez",
        "gaz",
        "azote",
    ])
}

#[test]
fn test_affix_query_example() {
    let words = WordSet::from_words(["zinc", "zinguez", "zonerez", "zippiez", "zazou"]);

    let found = words_with_affixes(&words, "z", "z", 7);

    assert_eq!(found.sorted(), vec!["zinguez", "zippiez", "zonerez"]);
}

#[test]
fn test_criteria_query_example() {
    let criteria = Criteria::new(16, 16)
        .with_prefix("a")
        .with_infix("b")
        .with_suffix("z");

    let found = words_matching_criteria(&vocabulary(), &criteria);

    assert_eq!(found.sorted(), vec!["alphabétisassiez"]);
}

#[test]
fn test_length_results_have_that_length() {
    let words = vocabulary();

    for length in 0..=20 {
        let found = words_of_length(&words, length);
        for word in found.iter() {
            assert_eq!(char_len(word), length);
        }
    }
}

#[test]
fn test_length_results_are_complete() {
    let words = vocabulary();

    let found = words_of_length(&words, 4);
    let by_hand: Vec<&str> = words.iter().filter(|w| char_len(w) == 4).collect();

    assert_eq!(found.len(), by_hand.len());
    for word in by_hand {
        assert!(found.contains(word));
    }
}

#[test]
fn test_length_results_are_disjoint_across_lengths() {
    let words = vocabulary();

    let four = words_of_length(&words, 4);
    let seven = words_of_length(&words, 7);

    assert!(!four.is_empty());
    assert!(!seven.is_empty());
    assert!(four.intersection(&seven).is_empty());
}

#[test]
fn test_length_filter_is_idempotent() {
    let words = vocabulary();

    let once = words_of_length(&words, 7);
    let twice = words_of_length(&once, 7);

    assert_eq!(once, twice);
}

#[test]
fn test_results_are_subsets_of_the_vocabulary() {
    let words = vocabulary();

    for found in [
        words_of_length(&words, 7),
        words_containing(&words, "z"),
        words_with_affixes(&words, "k", "k", 5),
    ] {
        for word in found.iter() {
            assert!(words.contains(word));
        }
    }
}

#[test]
fn test_contains_matches_ends_too() {
    let words = vocabulary();

    let found = words_containing(&words, "z");

    assert!(found.contains("zinc"));
    assert!(found.contains("gaz"));
    assert!(found.contains("azote"));
}

#[test]
fn test_empty_substring_keeps_the_whole_set() {
    let words = vocabulary();

    assert_eq!(words_containing(&words, "").len(), words.len());
}

#[test]
fn test_length_zero_is_empty() {
    assert!(words_of_length(&vocabulary(), 0).is_empty());
}

#[test]
fn test_length_zero_is_empty_for_every_filter() {
    // An empty token can only enter a hand-built set, never a loaded one;
    // the length-aware filters still agree that length 0 selects nothing.
    let words = WordSet::from_words(["", "zinc", "zazou"]);
    let zero = Criteria::new(0, 0)
        .with_prefix("")
        .with_infix("")
        .with_suffix("");

    assert!(words_of_length(&words, 0).is_empty());
    assert!(words_with_affixes(&words, "", "", 0).is_empty());
    assert!(words_matching_criteria(&words, &zero).is_empty());
}

#[test]
fn test_unsatisfiable_criteria_are_empty_not_errors() {
    let words = vocabulary();

    // Inverted length range.
    let inverted = Criteria::new(9, 3)
        .with_prefix("")
        .with_infix("")
        .with_suffix("");
    assert!(words_matching_criteria(&words, &inverted).is_empty());

    // No prefix alternative at all.
    let no_prefixes = Criteria::new(1, 20).with_infix("").with_suffix("");
    assert!(!no_prefixes.is_satisfiable());
    assert!(words_matching_criteria(&words, &no_prefixes).is_empty());
}

#[test]
fn test_criteria_agrees_with_affix_filter() {
    let words = vocabulary();

    let criteria = Criteria::new(7, 7)
        .with_prefix("z")
        .with_infix("")
        .with_suffix("z");

    assert_eq!(
        words_matching_criteria(&words, &criteria),
        words_with_affixes(&words, "z", "z", 7)
    );
}

#[test]
fn test_criteria_agrees_with_contains_filter() {
    let words = vocabulary();

    let criteria = Criteria::new(0, 100)
        .with_prefix("")
        .with_infix("in")
        .with_suffix("");

    assert_eq!(
        words_matching_criteria(&words, &criteria),
        words_containing(&words, "in")
    );
}

#[test]
fn test_singleton_criteria_equal_affix_intersect_contains() {
    let words = vocabulary();

    let criteria = Criteria::new(7, 7)
        .with_prefix("z")
        .with_infix("n")
        .with_suffix("z");

    let composed =
        words_with_affixes(&words, "z", "z", 7).intersection(&words_containing(&words, "n"));
    let found = words_matching_criteria(&words, &criteria);

    assert_eq!(found.sorted(), vec!["zinguez", "zonerez"]);
    assert_eq!(found, composed);
}

#[test]
fn test_affix_equals_independently_composed_filters() {
    let words = vocabulary();

    let right_length = words_of_length(&words, 7);
    let z_start = words.filter(|w| w.starts_with('z'));
    let z_end = words.filter(|w| w.ends_with('z'));
    let composed = right_length.intersection(&z_start).intersection(&z_end);

    assert_eq!(words_with_affixes(&words, "z", "z", 7), composed);
}

#[test]
fn test_set_algebra_over_query_results() {
    let words = vocabulary();
    let with_k = words_containing(&words, "k");
    let with_w = words_containing(&words, "w");

    let both = with_k.intersection(&with_w);
    let either = with_k.union(&with_w);
    let k_only = with_k.difference(&with_w);

    // kiwi, wok, kayak, whisky carry 'k' or 'w'; kayak alone has no 'w'.
    assert_eq!(both.sorted(), vec!["kiwi", "whisky", "wok"]);
    assert_eq!(either.len(), 4);
    assert_eq!(k_only.sorted(), vec!["kayak"]);

    // Union is commutative, intersection stays inside both operands.
    assert_eq!(either, with_w.union(&with_k));
    for word in both.iter() {
        assert!(with_k.contains(word));
        assert!(with_w.contains(word));
    }

    // Difference never keeps anything from the subtracted set.
    for word in k_only.iter() {
        assert!(!with_w.contains(word));
    }
}

#[test]
fn test_comprehension_style_filtering() {
    let words = vocabulary();
    let alphabet = Alphabet::french();

    let vowel_heavy = words.filter(|word| {
        word.chars().filter(|c| alphabet.is_vowel(*c)).count() >= 4
    });

    assert!(vowel_heavy.contains("alphabétisassiez"));
    assert!(!vowel_heavy.contains("zinc"));
}

#[test]
fn test_sampling_is_a_subset_with_stable_seed() {
    let words = vocabulary();

    let first = sample_words(&words, 6, &mut seeded_rng(Some(99)));
    let second = sample_words(&words, 6, &mut seeded_rng(Some(99)));

    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
    for word in &first {
        assert!(words.contains(word));
    }
}
