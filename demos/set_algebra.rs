//! Set algebra example: combining query results with union, intersection
//! and difference, plus ad-hoc predicates.

use lexique::prelude::*;

fn main() -> Result<()> {
    println!("=== Lexique Set Algebra Demo ===\n");

    let words = WordSet::from_words([
        "kiwi", "wok", "kayak", "whisky", "wagon", "zinc", "zinguez", "gaz", "azote", "zez",
        "zazou", "sans",
    ]);
    println!("Vocabulary of {} words", words.len());

    let with_k = words_containing(&words, "k");
    let with_w = words_containing(&words, "w");
    println!(
        "\nWords with 'k': {:?}\nWords with 'w': {:?}",
        with_k.sorted(),
        with_w.sorted()
    );

    // Example 1: Intersection
    println!("\n1. Words with both 'k' and 'w':");
    let both = with_k.intersection(&with_w);
    println!("   {:?}", both.sorted());

    // Example 2: Union
    println!("\n2. Words with 'k' or 'w':");
    let either = with_k.union(&with_w);
    println!("   {:?}", either.sorted());

    // Example 3: Difference
    println!("\n3. Words with 'k' but no 'w':");
    let k_only = with_k.difference(&with_w);
    println!("   {:?}", k_only.sorted());

    // Example 4: Difference against an ad-hoc predicate
    println!("\n4. Words with 'z' strictly inside:");
    let with_z = words_containing(&words, "z");
    let at_edges = words.filter(|word| word.starts_with('z') || word.ends_with('z'));
    let interior = with_z.difference(&at_edges);
    println!("   {:?}", interior.sorted());

    // Example 5: Chaining filters through the predicate combinator
    println!("\n5. Short words made only of alphabet letters:");
    let alphabet = Alphabet::french();
    let plain = words.filter(|word| {
        char_len(word) <= 4 && word.chars().all(|c| alphabet.contains(c))
    });
    println!("   {:?}", plain.sorted());

    println!("\nLexique version: {}", lexique::VERSION);

    Ok(())
}
