//! Guess resolution: turns one line of player input into a round outcome.

use crate::wordbank::Word;
use std::collections::BTreeSet;

/// Letters guessed so far in the current round. Ordered so the state
/// display lists them alphabetically.
pub type GuessedSet = BTreeSet<char>;

pub const EXIT_COMMAND: &str = "exit";
pub const PASS_COMMAND: &str = "pass";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The whole secret word was typed.
    WordGuessed,
    /// A letter occurring in the word.
    LetterHit(char),
    /// A letter not in the word; the turn passes.
    Miss(char),
    /// A hit letter guessed before, when repeated hits do not score.
    Repeated(char),
    Pass,
    Exit,
    /// Multi-character input that is neither the word nor a command.
    Invalid,
}

/// A turn input is accepted only when it is non-empty and every character,
/// surrounding whitespace included, is alphabetic.
#[must_use]
pub fn is_valid_turn_input(input: &str) -> bool {
    !input.is_empty() && input.chars().all(char::is_alphabetic)
}

/// Resolve `input` against the secret word.
///
/// A single-character guess is recorded in `guessed` whether or not it hits.
/// With `repeat_hits_score` set, guessing an already-known hit letter scores
/// again; otherwise it resolves to [`RoundOutcome::Repeated`].
pub fn resolve(
    input: &str,
    word: &Word,
    guessed: &mut GuessedSet,
    repeat_hits_score: bool,
) -> RoundOutcome {
    let input = input.trim().to_lowercase();
    let mut chars = input.chars();

    match (chars.next(), chars.next()) {
        (None, _) => RoundOutcome::Invalid,
        (Some(letter), None) => {
            let newly_guessed = guessed.insert(letter);
            if !word.contains(letter) {
                RoundOutcome::Miss(letter)
            } else if newly_guessed || repeat_hits_score {
                RoundOutcome::LetterHit(letter)
            } else {
                RoundOutcome::Repeated(letter)
            }
        }
        _ if input == word.as_str() => RoundOutcome::WordGuessed,
        _ if input == EXIT_COMMAND => RoundOutcome::Exit,
        _ if input == PASS_COMMAND => RoundOutcome::Pass,
        _ => RoundOutcome::Invalid,
    }
}
