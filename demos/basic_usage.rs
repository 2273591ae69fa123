//! Basic usage example for the lexique vocabulary query library.

use std::io::Write;

use lexique::prelude::*;
use tempfile::NamedTempFile;

fn main() -> Result<()> {
    println!("=== Lexique Vocabulary Query Demo ===\n");

    // Write a small corpus to a temporary file
    let mut file = NamedTempFile::new().unwrap();
    for word in [
        "zinc", "zinguez", "zonerez", "zippiez", "zazou", "kiwi", "wok", "kayak", "whisky",
        "sans", "vaincre", "hébétude", "glomérules", "alphabétisassiez",
    ] {
        writeln!(file, "{word}").unwrap();
    }
    file.flush().unwrap();
    println!("Corpus written to: {:?}", file.path());

    // Load the corpus and derive the vocabulary
    let corpus = load_corpus(file.path())?;
    let words = corpus.to_word_set();
    println!(
        "Loaded {} words, {} unique\n",
        corpus.len(),
        words.len()
    );

    // Example 1: Corpus statistics
    println!("1. Corpus statistics:");
    let stats = corpus.stats();
    println!("   Shortest word: {} characters", stats.min_length);
    println!("   Longest word: {} characters", stats.max_length);
    println!("   Average length: {:.1} characters", stats.avg_length);

    // Example 2: Membership tests
    println!("\n2. Membership tests:");
    for probe in ["zinc", "zorglub"] {
        let verdict = if words.contains(probe) {
            "present"
        } else {
            "absent"
        };
        println!("   {probe}: {verdict}");
    }

    // Example 3: Words of an exact length
    println!("\n3. Words of 7 characters:");
    let seven = words_of_length(&words, 7);
    println!("   Found {}: {:?}", seven.len(), seven.sorted());

    // Example 4: Words containing a substring
    println!("\n4. Words containing \"in\":");
    let with_in = words_containing(&words, "in");
    println!("   Found {}: {:?}", with_in.len(), with_in.sorted());

    // Example 5: Affix query
    println!("\n5. Seven-character words wrapped in 'z':");
    let wrapped = words_with_affixes(&words, "z", "z", 7);
    println!("   Found {}: {:?}", wrapped.len(), wrapped.sorted());

    // Example 6: Reproducible sampling
    println!("\n6. Reproducible sample of 3 words (seed 42):");
    let mut rng = seeded_rng(Some(42));
    let sample = sample_words(&words, 3, &mut rng);
    println!("   {sample:?}");

    println!("\n=== Library Information ===");
    println!("Lexique version: {}", lexique::VERSION);

    Ok(())
}
