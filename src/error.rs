//! Error types for the game.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Raised when a word is requested from a pool with no words left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the word pool is exhausted")]
pub struct EmptyPoolError;

/// Errors that end a game before a winner can be announced.
#[derive(Debug, Error)]
pub enum GameError {
    /// No word was available for the first round.
    #[error(transparent)]
    EmptyPool(#[from] EmptyPoolError),

    /// The word source file could not be read.
    #[error("failed to read word pool from '{}': {source}", path.display())]
    WordSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input ended while the game was still being set up.
    #[error("input closed before the game could start")]
    InputClosed,
}

/// Why a player-count answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerCountError {
    #[error("{0} is not a number.")]
    NotANumber(String),

    #[error("Must be at least 1")]
    TooFew,

    #[error("Must be at most {0}")]
    TooMany(usize),
}
