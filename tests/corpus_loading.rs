//! Integration tests for corpus loading and the word containers

use std::io::Write;

use lexique::prelude::*;
use tempfile::NamedTempFile;

fn write_corpus(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_deduplicate() -> Result<()> {
    let file = write_corpus("zinc\nzazou\n\n  kiwi  \nzinc\n   \nwok\n");

    let corpus = load_corpus(file.path())?;
    let words = corpus.to_word_set();

    // Blank lines dropped, padding trimmed, duplicates kept in the corpus.
    assert_eq!(corpus.len(), 5);
    assert_eq!(corpus.get(2), Some("kiwi"));

    // The word set deduplicates.
    assert_eq!(words.len(), 4);
    assert!(words.contains("zinc"));
    assert!(words.contains("kiwi"));
    assert!(!words.contains("zorglub"));

    Ok(())
}

#[test]
fn test_corpus_stats_after_load() -> Result<()> {
    let file = write_corpus("wok\nzinc\nzazou\nvaincre\n");

    let corpus = load_corpus(file.path())?;
    let stats = corpus.stats();

    assert_eq!(stats.total_words, 4);
    assert_eq!(stats.unique_words, 4);
    assert_eq!(stats.min_length, 3);
    assert_eq!(stats.max_length, 7);
    assert!((stats.avg_length - 19.0 / 4.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_unicode_lengths_after_load() -> Result<()> {
    let file = write_corpus("alphabétisassiez\nhébétude\nà\n");

    let corpus = load_corpus(file.path())?;

    assert_eq!(char_len(corpus.get(0).unwrap()), 16);
    assert_eq!(corpus.stats().max_length, 16);
    assert_eq!(corpus.stats().min_length, 1);

    Ok(())
}

#[test]
fn test_load_vocabulary_skips_the_corpus_step() -> Result<()> {
    let file = write_corpus("sans\nsans\nvaincre\n");

    let words = load_vocabulary(file.path())?;

    assert_eq!(words.len(), 2);
    assert!(words.contains("sans"));

    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_corpus("definitely/not/here.txt");

    match result {
        Err(LexiqueError::Io(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_is_decoding_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"zinc\n\xc3\x28\n").unwrap();
    file.flush().unwrap();

    let result = load_corpus(file.path());

    assert!(matches!(result, Err(LexiqueError::Decoding(_))));
}

#[test]
fn test_empty_file_yields_empty_containers() -> Result<()> {
    let file = write_corpus("");

    let corpus = load_corpus(file.path())?;

    assert!(corpus.is_empty());
    assert!(corpus.to_word_set().is_empty());
    assert_eq!(corpus.stats().min_length, 0);

    Ok(())
}
