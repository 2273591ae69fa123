//! Compound criteria example: combining prefixes, infixes, suffixes and
//! a length range in one query.

use lexique::prelude::*;

fn main() -> Result<()> {
    println!("=== Lexique Compound Criteria Demo ===\n");

    let words = WordSet::from_words([
        "alphabétisassiez",
        "alphabétisassent",
        "abricotiez",
        "arrangez",
        "zinc",
        "zinguez",
        "zazou",
        "kiwi",
        "wok",
    ]);
    println!("Vocabulary of {} words", words.len());

    // Example 1: A fully constrained criteria
    println!("\n1. 16-character words starting 'a', containing 'b', ending 'z':");
    let criteria = Criteria::new(16, 16)
        .with_prefix("a")
        .with_infix("b")
        .with_suffix("z");
    let found = words_matching_criteria(&words, &criteria);
    println!("   Found {}: {:?}", found.len(), found.sorted());

    // Example 2: Alternatives within one position
    println!("\n2. Words starting with 'a' or 'z', any length up to 10:");
    let criteria = Criteria::new(1, 10)
        .with_prefix("a")
        .with_prefix("z")
        .with_infix("")
        .with_suffix("");
    let found = words_matching_criteria(&words, &criteria);
    println!("   Found {}: {:?}", found.len(), found.sorted());

    // Example 3: The JSON form used by criteria files
    println!("\n3. The same criteria as JSON:");
    let json = criteria.to_json()?;
    println!("{json}");
    let parsed = Criteria::from_json(&json)?;
    assert_eq!(parsed, criteria);
    println!("   Round-trips cleanly");

    // Example 4: An unsatisfiable criteria is a valid query
    println!("\n4. A criteria with no prefix alternatives:");
    let empty = Criteria::new(1, 20).with_infix("a").with_suffix("");
    println!("   Satisfiable: {}", empty.is_satisfiable());
    let found = words_matching_criteria(&words, &empty);
    println!("   Found {} words", found.len());

    println!("\nLexique version: {}", lexique::VERSION);

    Ok(())
}
