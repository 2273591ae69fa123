//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LetterGroup, LetterPosition, LexiqueArgs, OutputFormat};
use crate::error::Result;

/// Result structure for corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub corpus: String,
    pub total_words: usize,
    pub unique_words: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub avg_length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_counts: Option<Vec<LengthCount>>,
}

/// Word count for a single length.
#[derive(Debug, Serialize, Deserialize)]
pub struct LengthCount {
    pub length: usize,
    pub count: usize,
}

/// Result structure for vocabulary lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub corpus: String,
    pub entries: Vec<LookupEntry>,
}

/// Lookup outcome for a single word.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupEntry {
    pub word: String,
    pub present: bool,
}

/// Result structure for the filter commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterResult {
    pub corpus: String,
    pub query: String,
    pub total_matches: usize,
    pub listed_all: bool,
    pub words: Vec<String>,
}

/// Result structure for per-letter counts.
#[derive(Debug, Serialize, Deserialize)]
pub struct LetterCountsResult {
    pub corpus: String,
    pub group: LetterGroup,
    pub position: LetterPosition,
    pub counts: Vec<LetterCount>,
    /// Size of the union: words matching at least one analysis letter.
    pub covered: usize,
}

/// Word count for a single letter.
#[derive(Debug, Serialize, Deserialize)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
}

/// Human rendering for command results.
pub trait Render {
    /// Render the result as human-readable text.
    fn render_human(&self) -> String;
}

impl Render for StatsResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str("Corpus Statistics:\n");
        out.push_str("══════════════════\n");
        out.push_str(&format!("Source: {}\n", self.corpus));
        out.push_str(&format!("Total words: {}\n", self.total_words));
        out.push_str(&format!("Unique words: {}\n", self.unique_words));
        out.push_str(&format!("Shortest word: {} characters\n", self.min_length));
        out.push_str(&format!("Longest word: {} characters\n", self.max_length));
        out.push_str(&format!("Average length: {:.1} characters\n", self.avg_length));

        if let Some(counts) = &self.length_counts {
            out.push_str("\nWords by length:\n");
            out.push_str("────────────────\n");
            for entry in counts {
                out.push_str(&format!("{:>3}: {}\n", entry.length, entry.count));
            }
        }
        out
    }
}

impl Render for LookupResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str("Vocabulary Lookup:\n");
        out.push_str("══════════════════\n");
        for entry in &self.entries {
            let status = if entry.present { "present" } else { "absent" };
            out.push_str(&format!("{}: {status}\n", entry.word));
        }
        out
    }
}

impl Render for FilterResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str("Matching Words:\n");
        out.push_str("═══════════════\n");
        out.push_str(&format!("Query: {}\n", self.query));
        out.push_str(&format!("Matches: {}\n", self.total_matches));
        if !self.words.is_empty() {
            if self.listed_all {
                out.push_str("\nAll matches:\n");
            } else {
                out.push_str(&format!("\nSample of {}:\n", self.words.len()));
            }
            for word in &self.words {
                out.push_str(&format!("  {word}\n"));
            }
        }
        out
    }
}

impl Render for LetterCountsResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str("Letter Counts:\n");
        out.push_str("══════════════\n");
        let phrase = position_phrase(self.position);
        for entry in &self.counts {
            out.push_str(&format!(
                "Words {phrase} '{}': {}\n",
                entry.letter, entry.count
            ));
        }
        out.push_str(&format!("Words {phrase} any of them: {}\n", self.covered));
        out
    }
}

/// Describe a letter position requirement in words.
fn position_phrase(position: LetterPosition) -> &'static str {
    match position {
        LetterPosition::Any => "containing",
        LetterPosition::Start => "starting with",
        LetterPosition::End => "ending with",
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + Render>(
    message: &str,
    result: &T,
    args: &LexiqueArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Render>(message: &str, result: &T, args: &LexiqueArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexiqueArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}


/// One section of the analysis report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub count: usize,
    pub examples: Vec<String>,
}

/// Result structure for the analysis report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportResult {
    pub corpus: String,
    pub total_words: usize,
    pub unique_words: usize,
    pub sections: Vec<ReportSection>,
}

impl Render for ReportResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str("Corpus Analysis:\n");
        out.push_str("════════════════\n");
        out.push_str(&format!("Source: {}\n", self.corpus));
        out.push_str(&format!("Total words: {}\n", self.total_words));
        out.push_str(&format!("Unique words: {}\n", self.unique_words));
        for section in &self.sections {
            out.push_str(&format!("\n{}: {}\n", section.title, section.count));
            if !section.examples.is_empty() {
                out.push_str(&format!("    {}\n", section.examples.join(", ")));
            }
        }
        out
    }
}
