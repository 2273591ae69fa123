//! Command implementations for the lexique CLI.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::{debug, warn};
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{Corpus, WordSet, char_len, load_corpus};
use crate::error::Result;
use crate::filter::{
    Criteria, words_containing, words_matching_criteria, words_of_length, words_with_affixes,
};
use crate::sample::{sample_words, seeded_rng};

/// Execute a CLI command.
pub fn execute_command(args: LexiqueArgs) -> Result<()> {
    match &args.command {
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Lookup(lookup_args) => lookup_words(lookup_args.clone(), &args),
        Command::Length(length_args) => run_length(length_args.clone(), &args),
        Command::Contains(contains_args) => run_contains(contains_args.clone(), &args),
        Command::Affix(affix_args) => run_affix(affix_args.clone(), &args),
        Command::Criteria(criteria_args) => run_criteria(criteria_args.clone(), &args),
        Command::Letters(letters_args) => count_letters(letters_args.clone(), &args),
        Command::Report(report_args) => run_report(report_args.clone(), &args),
    }
}

/// Load the corpus and its deduplicated word set.
fn load_words(path: &Path) -> Result<(Corpus, WordSet)> {
    let corpus = load_corpus(path)?;
    let words = corpus.to_word_set();
    debug!(
        "loaded {} words ({} unique) from {}",
        corpus.len(),
        words.len(),
        path.display()
    );
    Ok((corpus, words))
}

/// Show corpus statistics.
fn show_stats(args: StatsArgs, cli_args: &LexiqueArgs) -> Result<()> {
    let (corpus, words) = load_words(&args.corpus)?;
    let stats = corpus.stats();

    let length_counts = if args.detailed {
        let mut counts: AHashMap<usize, usize> = AHashMap::new();
        for word in words.iter() {
            *counts.entry(char_len(word)).or_insert(0) += 1;
        }
        let mut length_counts: Vec<LengthCount> = counts
            .into_iter()
            .map(|(length, count)| LengthCount { length, count })
            .collect();
        length_counts.sort_unstable_by_key(|entry| entry.length);
        Some(length_counts)
    } else {
        None
    };

    output_result(
        "Corpus statistics computed",
        &StatsResult {
            corpus: args.corpus.to_string_lossy().to_string(),
            total_words: stats.total_words,
            unique_words: stats.unique_words,
            min_length: stats.min_length,
            max_length: stats.max_length,
            avg_length: stats.avg_length,
            length_counts,
        },
        cli_args,
    )
}

/// Check words against the vocabulary.
fn lookup_words(args: LookupArgs, cli_args: &LexiqueArgs) -> Result<()> {
    let (_, words) = load_words(&args.corpus)?;

    let entries = args
        .words
        .iter()
        .map(|word| LookupEntry {
            word: word.clone(),
            present: words.contains(word),
        })
        .collect();

    output_result(
        "Lookup finished",
        &LookupResult {
            corpus: args.corpus.to_string_lossy().to_string(),
            entries,
        },
        cli_args,
    )
}

/// Run the exact length query.
fn run_length(args: LengthArgs, cli_args: &LexiqueArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Query: words of {} characters", args.length);
    }

    let (_, words) = load_words(&args.corpus)?;
    let matches = words_of_length(&words, args.length);

    filter_output(
        &args.corpus,
        format!("length {}", args.length),
        matches,
        args.sample,
        args.all,
        args.seed,
        cli_args,
    )
}

/// Run the substring query.
fn run_contains(args: ContainsArgs, cli_args: &LexiqueArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Query: words containing \"{}\"", args.infix);
    }

    let (_, words) = load_words(&args.corpus)?;
    let matches = words_containing(&words, &args.infix);

    filter_output(
        &args.corpus,
        format!("contains \"{}\"", args.infix),
        matches,
        args.sample,
        args.all,
        args.seed,
        cli_args,
    )
}

/// Run the affix query.
fn run_affix(args: AffixArgs, cli_args: &LexiqueArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!(
            "Query: words \"{}\"..\"{}\" of {} characters",
            args.prefix, args.suffix, args.length
        );
    }

    let (_, words) = load_words(&args.corpus)?;
    let matches = words_with_affixes(&words, &args.prefix, &args.suffix, args.length);

    filter_output(
        &args.corpus,
        format!(
            "prefix \"{}\", suffix \"{}\", length {}",
            args.prefix, args.suffix, args.length
        ),
        matches,
        args.sample,
        args.all,
        args.seed,
        cli_args,
    )
}

/// Run the compound criteria query.
fn run_criteria(args: CriteriaArgs, cli_args: &LexiqueArgs) -> Result<()> {
    let criteria = if let Some(path) = &args.file {
        let json = fs::read_to_string(path)?;
        Criteria::from_json(&json)?
    } else {
        // An omitted flag leaves that position unconstrained.
        let mut criteria = Criteria::new(
            args.min_length.unwrap_or(0),
            args.max_length.unwrap_or(0),
        );
        criteria.prefixes = to_alternatives(&args.prefixes);
        criteria.infixes = to_alternatives(&args.infixes);
        criteria.suffixes = to_alternatives(&args.suffixes);
        criteria
    };

    if !criteria.is_satisfiable() {
        warn!("criteria cannot match any word");
    }

    if cli_args.verbosity() > 1 {
        println!(
            "Query: prefixes {:?}, infixes {:?}, suffixes {:?}, length {}..={}",
            criteria.prefixes,
            criteria.infixes,
            criteria.suffixes,
            criteria.min_length,
            criteria.max_length
        );
    }

    let (_, words) = load_words(&args.corpus)?;
    let matches = words_matching_criteria(&words, &criteria);

    filter_output(
        &args.corpus,
        describe_criteria(&criteria),
        matches,
        args.sample,
        args.all,
        args.seed,
        cli_args,
    )
}

fn to_alternatives(values: &[String]) -> Vec<String> {
    if values.is_empty() {
        vec![String::new()]
    } else {
        values.to_vec()
    }
}

fn describe_criteria(criteria: &Criteria) -> String {
    format!(
        "prefixes {:?}, infixes {:?}, suffixes {:?}, length {}..={}",
        criteria.prefixes,
        criteria.infixes,
        criteria.suffixes,
        criteria.min_length,
        criteria.max_length
    )
}

/// Count words carrying each letter of the selected group.
fn count_letters(args: LettersArgs, cli_args: &LexiqueArgs) -> Result<()> {
    let (_, words) = load_words(&args.corpus)?;
    let alphabet = Alphabet::french();

    let letters: Vec<char> = match args.group {
        LetterGroup::Vowels => alphabet.vowels().collect(),
        LetterGroup::Consonants => alphabet.consonants().collect(),
        LetterGroup::All => alphabet.letters().collect(),
    };

    let hit = |word: &str, letter: char| match args.position {
        LetterPosition::Any => word.contains(letter),
        LetterPosition::Start => word.starts_with(letter),
        LetterPosition::End => word.ends_with(letter),
    };

    let counts = letters
        .iter()
        .map(|&letter| LetterCount {
            letter,
            count: words.iter().filter(|w| hit(w, letter)).count(),
        })
        .collect();
    let covered = words
        .iter()
        .filter(|w| letters.iter().any(|&letter| hit(w, letter)))
        .count();

    output_result(
        "Letter counts computed",
        &LetterCountsResult {
            corpus: args.corpus.to_string_lossy().to_string(),
            group: args.group,
            position: args.position,
            counts,
            covered,
        },
        cli_args,
    )
}

/// Run the full analysis report.
fn run_report(args: ReportArgs, cli_args: &LexiqueArgs) -> Result<()> {
    let (corpus, words) = load_words(&args.corpus)?;
    let mut rng = seeded_rng(args.seed);

    output_result(
        "Analysis report generated",
        &ReportResult {
            corpus: args.corpus.to_string_lossy().to_string(),
            total_words: corpus.len(),
            unique_words: words.len(),
            sections: build_report_sections(&words, args.sample, &mut rng),
        },
        cli_args,
    )
}

/// Compose the report sections over a word set.
fn build_report_sections<R: Rng>(
    words: &WordSet,
    sample: usize,
    rng: &mut R,
) -> Vec<ReportSection> {
    let alphabet = Alphabet::french();
    let mut sections = Vec::new();

    // Vowel coverage.
    for vowel in alphabet.vowels() {
        let matching = words_containing(words, &vowel.to_string());
        sections.push(report_section(
            format!("Words containing '{vowel}'"),
            &matching,
            0,
            rng,
        ));
    }

    // A length slice of the vocabulary.
    let seven = words_of_length(words, 7);
    sections.push(report_section("Words of 7 characters", &seven, sample, rng));

    // Set algebra over two rare letters.
    let with_k = words_containing(words, "k");
    let with_w = words_containing(words, "w");
    sections.push(report_section(
        "Words containing 'k' and 'w'",
        &with_k.intersection(&with_w),
        sample,
        rng,
    ));
    sections.push(report_section(
        "Words containing 'k' or 'w'",
        &with_k.union(&with_w),
        0,
        rng,
    ));

    // Positional breakdown for 'z': starting, ending, both, strictly inside.
    let z_start = words.filter(|word| word.starts_with('z'));
    let z_end = words.filter(|word| word.ends_with('z'));
    sections.push(report_section("Words starting with 'z'", &z_start, 0, rng));
    sections.push(report_section("Words ending with 'z'", &z_end, 0, rng));
    sections.push(report_section(
        "Words starting and ending with 'z'",
        &z_start.intersection(&z_end),
        sample,
        rng,
    ));

    let with_z = words_containing(words, "z");
    sections.push(report_section(
        "Words with 'z' only inside",
        &with_z.difference(&z_start.union(&z_end)),
        sample,
        rng,
    ));

    // A compound criteria showcase.
    let criteria = Criteria::new(16, 16)
        .with_prefix("a")
        .with_infix("b")
        .with_suffix("z");
    sections.push(report_section(
        "16-character words starting 'a', containing 'b', ending 'z'",
        &words_matching_criteria(words, &criteria),
        sample,
        rng,
    ));

    sections
}

fn report_section<R: Rng>(
    title: impl Into<String>,
    matches: &WordSet,
    example_count: usize,
    rng: &mut R,
) -> ReportSection {
    let examples = sample_words(matches, example_count, rng)
        .into_iter()
        .map(String::from)
        .collect();
    ReportSection {
        title: title.into(),
        count: matches.len(),
        examples,
    }
}

/// Shared tail of the filter commands: count, then list or sample.
fn filter_output(
    corpus_path: &Path,
    query: String,
    matches: WordSet,
    sample: usize,
    all: bool,
    seed: Option<u64>,
    cli_args: &LexiqueArgs,
) -> Result<()> {
    let total_matches = matches.len();
    let (words, listed_all) = if all {
        let listed: Vec<String> = matches.sorted().into_iter().map(String::from).collect();
        (listed, true)
    } else {
        let mut rng = seeded_rng(seed);
        let sampled: Vec<String> = sample_words(&matches, sample, &mut rng)
            .into_iter()
            .map(String::from)
            .collect();
        (sampled, false)
    };

    output_result(
        "Query finished",
        &FilterResult {
            corpus: corpus_path.to_string_lossy().to_string(),
            query,
            total_matches,
            listed_all,
            words,
        },
        cli_args,
    )
}
