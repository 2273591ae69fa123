//! Alphabet and letter classification.

/// An alphabet split into vowels and consonants.
///
/// The per-letter report iterates over these letters, and classification
/// only knows the base letters: accented characters are not members even
/// though they appear inside corpus words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: String,
    vowels: String,
    consonants: String,
}

impl Alphabet {
    /// Create an alphabet from its letters and vowels. Every letter not
    /// listed as a vowel is a consonant.
    pub fn new(letters: impl Into<String>, vowels: impl Into<String>) -> Self {
        let letters = letters.into();
        let vowels: String = vowels.into();
        let consonants = letters.chars().filter(|c| !vowels.contains(*c)).collect();
        Alphabet {
            letters,
            vowels,
            consonants,
        }
    }

    /// The 26-letter French base alphabet, with "y" among the vowels.
    pub fn french() -> Self {
        Alphabet::new("abcdefghijklmnopqrstuvwxyz", "aeiouy")
    }

    /// Iterate over all letters in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.chars()
    }

    /// Iterate over the vowels.
    pub fn vowels(&self) -> impl Iterator<Item = char> + '_ {
        self.vowels.chars()
    }

    /// Iterate over the consonants.
    pub fn consonants(&self) -> impl Iterator<Item = char> + '_ {
        self.consonants.chars()
    }

    /// Check whether `c` is a letter of this alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(c)
    }

    /// Check whether `c` is a vowel.
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(c)
    }

    /// Check whether `c` is a consonant.
    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::french()
    }
}
