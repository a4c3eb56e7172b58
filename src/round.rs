use crate::debug_log;
use crate::guess::{self, GuessedSet, RoundOutcome};
use crate::player::Player;
use crate::wordbank::Word;

/// Awarded to the player who completes a round.
pub const ROUND_BONUS: u32 = 5;

pub const HIDDEN_LETTER: char = '_';

/// What the game loop should do after an outcome was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnResult {
    pub points: u32,
    pub round_won: bool,
    /// The turn passes to the next player.
    pub next_player: bool,
    pub exit_game: bool,
}

fn to_points(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// State of one round: the secret word and the letters guessed against it.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    word: Word,
    guessed: GuessedSet,
    won: bool,
    repeat_hits_score: bool,
}

impl RoundEngine {
    #[must_use]
    pub fn new(word: Word, repeat_hits_score: bool) -> Self {
        Self {
            word,
            guessed: GuessedSet::new(),
            won: false,
            repeat_hits_score,
        }
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn guessed(&self) -> &GuessedSet {
        &self.guessed
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Resolve one validated line of input, recording single letters.
    pub fn resolve(&mut self, input: &str) -> RoundOutcome {
        let outcome = guess::resolve(input, &self.word, &mut self.guessed, self.repeat_hits_score);
        debug_log!("Resolved input '{}' to {:?}", input.trim(), outcome);
        outcome
    }

    /// The word with every unguessed letter replaced by `_`. Non-letters are
    /// always shown; a won round shows the whole word.
    #[must_use]
    pub fn display_word(&self) -> String {
        if self.won {
            return self.word.to_string();
        }
        self.word
            .as_str()
            .chars()
            .map(|c| {
                if c.is_alphabetic() && !self.guessed.contains(&c) {
                    HIDDEN_LETTER
                } else {
                    c
                }
            })
            .collect()
    }

    /// Word and guessed letters as shown between turns.
    #[must_use]
    pub fn state_display(&self) -> String {
        let guessed: Vec<String> = self.guessed.iter().map(char::to_string).collect();
        format!(
            "Word:     {}\nGuessed:  {}\n",
            self.display_word(),
            guessed.join(", ")
        )
    }

    /// Points for typing the whole word: one per character not yet revealed.
    #[must_use]
    pub fn word_guess_points(&self) -> u32 {
        let revealed: usize = self
            .guessed
            .iter()
            .filter(|&&c| self.word.contains(c))
            .map(|&c| self.word.occurrences(c))
            .sum();
        to_points(self.word.char_count().saturating_sub(revealed))
    }

    fn is_fully_revealed(&self) -> bool {
        !self.display_word().contains(HIDDEN_LETTER)
    }

    /// Apply a resolved outcome, scoring `player` for hits and word guesses.
    pub fn apply_outcome(&mut self, outcome: RoundOutcome, player: &mut Player) -> TurnResult {
        let mut result = TurnResult::default();
        match outcome {
            RoundOutcome::WordGuessed => {
                result.points = self.word_guess_points();
                player.add_points(result.points);
                self.won = true;
                result.round_won = true;
            }
            RoundOutcome::LetterHit(letter) => {
                result.points = to_points(self.word.occurrences(letter));
                player.add_points(result.points);
                if self.is_fully_revealed() {
                    self.won = true;
                    result.round_won = true;
                }
            }
            RoundOutcome::Miss(_) | RoundOutcome::Repeated(_) | RoundOutcome::Pass => {
                result.next_player = true;
            }
            RoundOutcome::Exit => result.exit_game = true,
            RoundOutcome::Invalid => {}
        }
        result
    }
}

/// Close a won round: the winner gets the bonus, then every player's round
/// points are folded into their totals.
pub fn settle_round(players: &mut [Player], winner: usize) {
    if let Some(player) = players.get_mut(winner) {
        player.add_points(ROUND_BONUS);
    }
    for player in players.iter_mut() {
        player.fold_round();
    }
}
