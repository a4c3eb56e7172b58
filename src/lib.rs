// Library interface for fortune-wheel
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod logging;
pub mod player;
pub mod round;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{EmptyPoolError, GameError};
pub use game_state::{Game, GameConfig, GameInterface, winner};
pub use guess::{GuessedSet, RoundOutcome, resolve};
pub use player::Player;
pub use round::{ROUND_BONUS, RoundEngine, TurnResult};
pub use wordbank::{Word, WordPool, load_words_from_file, parse_word_list};
