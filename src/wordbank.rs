use crate::error::{EmptyPoolError, GameError};
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

pub const EMBEDDED_WORDS: &str = include_str!("resources/long_words.txt");

/// Generated words are at least this long.
pub const MIN_GENERATED_WORD_LENGTH: usize = 10;

/// A secret word: lowercase, no whitespace, no separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Normalise a raw token into a word. Whitespace is stripped and the
    /// text lowercased; returns `None` for empty tokens or tokens that still
    /// contain a separator.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let text: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        if text.is_empty() || text.contains(',') {
            None
        } else {
            Some(Self(text))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the word.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Number of occurrences of `letter`.
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.0.chars().filter(|&c| c == letter).count()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keep the first occurrence of each word, in order.
fn dedup_words(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Parse a comma-separated word list, dropping empty and repeated tokens.
#[must_use]
pub fn parse_word_list(data: &str) -> Vec<Word> {
    dedup_words(data.split(',').filter_map(Word::new))
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, GameError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| GameError::WordSource {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_list(&data))
}

/// Keep a uniform random subset of exactly `max_count` words when the list
/// is longer than that.
pub fn cap_words<R: Rng + ?Sized>(words: Vec<Word>, max_count: usize, rng: &mut R) -> Vec<Word> {
    if words.len() <= max_count {
        return words;
    }
    words.choose_multiple(rng, max_count).cloned().collect()
}

/// Source of random words used when no word file is supplied.
pub trait RandomWordProvider {
    /// Produce up to `count` distinct words of at least `min_length`
    /// characters. Fewer are returned when the provider runs out.
    fn generate<R: Rng + ?Sized>(&self, count: usize, min_length: usize, rng: &mut R) -> Vec<Word>;
}

/// Provider backed by the word list compiled into the binary.
#[derive(Debug, Clone)]
pub struct EmbeddedWordProvider {
    words: Vec<Word>,
}

impl EmbeddedWordProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::from_lines(EMBEDDED_WORDS)
    }

    /// Build a provider from a newline-delimited list.
    #[must_use]
    pub fn from_lines(data: &str) -> Self {
        Self {
            words: dedup_words(data.lines().filter_map(Word::new)),
        }
    }
}

impl Default for EmbeddedWordProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomWordProvider for EmbeddedWordProvider {
    fn generate<R: Rng + ?Sized>(&self, count: usize, min_length: usize, rng: &mut R) -> Vec<Word> {
        let candidates: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| w.char_count() >= min_length)
            .collect();
        if candidates.len() < count {
            log::warn!(
                "Asked for {count} words but only {} are at least {min_length} letters long",
                candidates.len()
            );
        }
        candidates
            .choose_multiple(rng, count)
            .map(|w| (*w).clone())
            .collect()
    }
}

/// The words still available for rounds in this game.
#[derive(Debug)]
pub struct WordPool {
    words: Vec<Word>,
    rng: StdRng,
}

impl WordPool {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Self {
        Self { words, rng }
    }

    /// Build the pool for a game: read and cap the word file when one is
    /// given, otherwise generate up to `word_count` distinct long words.
    pub fn load(
        word_file: Option<&Path>,
        word_count: usize,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let words = match word_file {
            Some(path) => {
                let words = load_words_from_file(path)?;
                info_log!("Read {} words from {}", words.len(), path.display());
                cap_words(words, word_count, &mut rng)
            }
            None => EmbeddedWordProvider::new().generate(
                word_count,
                MIN_GENERATED_WORD_LENGTH,
                &mut rng,
            ),
        };

        info_log!("Word pool ready with {} words", words.len());
        Ok(Self::with_rng(words, rng))
    }

    /// Remove and return a uniformly chosen word.
    pub fn draw(&mut self) -> Result<Word, EmptyPoolError> {
        if self.words.is_empty() {
            return Err(EmptyPoolError);
        }
        let index = self.rng.random_range(0..self.words.len());
        let word = self.words.swap_remove(index);
        debug_log!("Drew word '{}', {} left", word, self.words.len());
        Ok(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn remaining(&self) -> &[Word] {
        &self.words
    }
}
