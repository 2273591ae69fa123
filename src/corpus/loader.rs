//! Loading word lists from files and readers.
//!
//! A source is a UTF-8 text file with one word per line. Lines are trimmed
//! of surrounding whitespace (including Windows line endings) and lines that
//! are empty after trimming are skipped, so a trailing newline never turns
//! into an empty word.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::corpus::corpus::Corpus;
use crate::corpus::word_set::WordSet;
use crate::error::{LexiqueError, Result};

/// Read a corpus from any buffered reader, one word per line.
///
/// Invalid UTF-8 input is reported as a decoding error naming the offending
/// line; other I/O failures are passed through unchanged.
pub fn read_words<R: BufRead>(reader: R) -> Result<Corpus> {
    let mut words = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                LexiqueError::decoding(format!("line {} is not valid UTF-8", index + 1))
            }
            _ => LexiqueError::Io(e),
        })?;

        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        words.push(word.to_string());
    }

    Ok(Corpus::from_words(words))
}

/// Load the ordered corpus from a file.
///
/// # Examples
///
/// ```no_run
/// use lexique::corpus::load_corpus;
///
/// let corpus = load_corpus("corpus/mots.txt")?;
/// println!("{} words", corpus.len());
/// # Ok::<(), lexique::error::LexiqueError>(())
/// ```
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}

/// Load a file straight into the deduplicated [`WordSet`].
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<WordSet> {
    Ok(load_corpus(path)?.into_word_set())
}
