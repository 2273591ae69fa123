//! Command line argument parsing for the lexique CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexique - query a word corpus from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "lexique")]
#[command(about = "A vocabulary query tool for word corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexiqueArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiqueArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show corpus statistics
    Stats(StatsArgs),

    /// Check whether words belong to the vocabulary
    Lookup(LookupArgs),

    /// List words of an exact length
    Length(LengthArgs),

    /// List words containing a substring
    Contains(ContainsArgs),

    /// List words with a given prefix, suffix and length
    Affix(AffixArgs),

    /// List words matching a compound criteria
    Criteria(CriteriaArgs),

    /// Count words carrying each letter of a group
    Letters(LettersArgs),

    /// Run the full corpus analysis report
    Report(ReportArgs),
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus file (one word per line)
    #[arg(value_name = "CORPUS_FILE", env = "LEXIQUE_CORPUS")]
    pub corpus: PathBuf,

    /// Include the word count for every length
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for vocabulary lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Path to the corpus file (one word per line)
    #[arg(value_name = "CORPUS_FILE", env = "LEXIQUE_CORPUS")]
    pub corpus: PathBuf,

    /// Words to look up
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,
}

/// Arguments for the exact length query
#[derive(Parser, Debug, Clone)]
pub struct LengthArgs {
    /// Path to the corpus file (one word per line)
    #[arg(value_name = "CORPUS_FILE", env = "LEXIQUE_CORPUS")]
    pub corpus: PathBuf,

    /// Word length in characters
    #[arg(value_name = "LENGTH")]
    pub length: usize,

    /// Number of matching words to show
    #[arg(short, long, default_value = "5")]
    pub sample: usize,

    /// Show every matching word instead of a sample
    #[arg(short, long)]
    pub all: bool,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the substring query
#[derive(Parser, Debug, Clone)]
pub struct ContainsArgs {
    /// Path to the corpus file (one word per line)
    #[arg(value_name = "CORPUS_FILE", env = "LEXIQUE_CORPUS")]
    pub corpus: PathBuf,

    /// Substring to look for
    #[arg(value_name = "SUBSTRING")]
    pub infix: String,

    /// Number of matching words to show
    #[arg(short, long, default_value = "5")]
    pub sample: usize,

    /// Show every matching word instead of a sample
    #[arg(short, long)]
    pub all: bool,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the affix query
#[derive(Parser, Debug, Clone)]
pub struct AffixArgs {
    /// Path to the corpus file (one word per line)
    #[arg(value_name = "CORPUS_FILE", env = "LEXIQUE_CORPUS")]
    pub corpus: PathBuf,

    /// Exact word length in characters
    #[arg(short, long, value_name = "LENGTH")]
    pub length: usize,

    /// Required prefix
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Required suffix
    #[arg(short = 'x', long, default_value = "")]
    pub suffix: String,

    /// Number of matching words to show
    #[arg(short, long, default_value = "5")]
    pub sample: usize,

    /// Show every matching word instead of a sample
    #[arg(short, long)]
    pub all: bool,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the compound criteria query
#[derive(Parser, Debug, Clone)]
pub struct CriteriaArgs {
    /// Path to the corpus file (one word per line)
    #[arg(value_name = "CORPUS_FILE", env = "LEXIQUE_CORPUS")]
    pub corpus: PathBuf,

    /// Criteria definition file (JSON)
    #[arg(short = 'c', long, value_name = "CRITERIA_FILE")]
    pub file: Option<PathBuf>,

    /// Alternative prefix (repeatable)
    #[arg(long = "prefix", conflicts_with = "file")]
    pub prefixes: Vec<String>,

    /// Alternative infix (repeatable)
    #[arg(long = "infix", conflicts_with = "file")]
    pub infixes: Vec<String>,

    /// Alternative suffix (repeatable)
    #[arg(long = "suffix", conflicts_with = "file")]
    pub suffixes: Vec<String>,

    /// Minimum word length, inclusive
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub min_length: Option<usize>,

    /// Maximum word length, inclusive
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub max_length: Option<usize>,

    /// Number of matching words to show
    #[arg(short, long, default_value = "5")]
    pub sample: usize,

    /// Show every matching word instead of a sample
    #[arg(short, long)]
    pub all: bool,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CriteriaArgs {
    /// Check if the criteria comes from a file
    pub fn uses_file(&self) -> bool {
        self.file.is_some()
    }
}

/// Arguments for the per-letter counts
#[derive(Parser, Debug, Clone)]
pub struct LettersArgs {
    /// Path to the corpus file (one word per line)
    #[arg(value_name = "CORPUS_FILE", env = "LEXIQUE_CORPUS")]
    pub corpus: PathBuf,

    /// Letter group to count
    #[arg(short, long, default_value = "all")]
    pub group: LetterGroup,

    /// Where the letter must appear
    #[arg(short = 'p', long, default_value = "any")]
    pub position: LetterPosition,
}

/// Arguments for the analysis report
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Path to the corpus file (one word per line)
    #[arg(value_name = "CORPUS_FILE", env = "LEXIQUE_CORPUS")]
    pub corpus: PathBuf,

    /// Number of example words per section
    #[arg(short, long, default_value = "5")]
    pub sample: usize,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Letter groups for per-letter counts
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterGroup {
    /// Vowels only
    Vowels,
    /// Consonants only
    Consonants,
    /// The whole alphabet
    All,
}

/// Positions a letter can be required at
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterPosition {
    /// Anywhere in the word
    Any,
    /// At the start of the word
    Start,
    /// At the end of the word
    End,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
