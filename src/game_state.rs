use crate::error::{GameError, PlayerCountError};
use crate::guess::{RoundOutcome, is_valid_turn_input};
use crate::player::Player;
use crate::round::{ROUND_BONUS, RoundEngine, settle_round};
use crate::wordbank::WordPool;
use crate::{debug_log, info_log};

const TITLE: &str = "WHEEL OF FORTUNE";
const PLAYER_COUNT_QUESTION: &str = "How many players?";
const CONTINUE_QUESTION: &str = "Do you want to continue to next word? (yes/no)";
const WRONG_YES_NO: &str = "Wrong user input";
const INVALID_TURN_INPUT: &str = "Inserted value is not valid please try again";
const UNRECOGNIZED_INPUT: &str = "Unrecognized input, guess a letter or the whole word, or type 'exit' or 'pass'";
const POOL_EXHAUSTED: &str = "The word pool is exhausted";

/// Input/output seam between the game and whoever is playing it.
///
/// The console implementation lives in [`crate::cli::CliInterface`]; tests
/// substitute scripted input.
pub trait GameInterface {
    /// Show `message` and read one line. `None` means input has ended.
    fn prompt_line(&mut self, message: &str) -> Option<String>;

    fn display(&mut self, text: &str);

    fn display_heading(&mut self, text: &str) {
        self.display(text);
    }

    fn display_error(&mut self, text: &str) {
        self.display(text);
    }

    /// Ask until a yes/no answer is given. Ended input counts as "no".
    fn prompt_yes_no(&mut self, message: &str) -> bool {
        loop {
            let Some(line) = self.prompt_line(message) else {
                return false;
            };
            match parse_yes_no(&line) {
                Some(answer) => return answer,
                None => self.display_error(WRONG_YES_NO),
            }
        }
    }
}

/// Case-insensitive yes/no parsing: `1/y/yes/true` and `0/n/no/false`.
#[must_use]
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "1" | "y" | "yes" | "true" => Some(true),
        "0" | "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

pub fn parse_player_count(input: &str, max_players: usize) -> Result<usize, PlayerCountError> {
    let input = input.trim();
    let count: i64 = input
        .parse()
        .map_err(|_| PlayerCountError::NotANumber(input.to_string()))?;
    if count < 1 {
        return Err(PlayerCountError::TooFew);
    }
    match usize::try_from(count) {
        Ok(count) if count <= max_players => Ok(count),
        _ => Err(PlayerCountError::TooMany(max_players)),
    }
}

/// The player with the highest total. Ties go to the earliest registered.
#[must_use]
pub fn winner(players: &[Player]) -> Option<&Player> {
    players.iter().fold(None, |best: Option<&Player>, player| match best {
        Some(best) if best.total_points() >= player.total_points() => Some(best),
        _ => Some(player),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_count: usize,
    /// Carried for future use; guesses are not limited.
    pub player_tries: u32,
    pub max_players: usize,
    /// Whether guessing an already-guessed hit letter scores again.
    pub repeat_hits_score: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_count: 15,
            player_tries: 5,
            max_players: 2,
            repeat_hits_score: true,
        }
    }
}

/// Owns the players and the word pool and drives rounds until the players
/// stop, someone types `exit`, or the words run out.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    pool: WordPool,
    players: Vec<Player>,
}

impl Game {
    #[must_use]
    pub fn new(pool: WordPool, config: GameConfig) -> Self {
        Self::with_players(pool, config, Vec::new())
    }

    /// Start with players already registered; setup prompts are skipped.
    #[must_use]
    pub fn with_players(pool: WordPool, config: GameConfig, players: Vec<Player>) -> Self {
        Self {
            config,
            pool,
            players,
        }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        winner(&self.players)
    }

    /// Play a whole game: register players if needed, play rounds, then
    /// announce the winner.
    pub fn run<I: GameInterface>(&mut self, ui: &mut I) -> Result<(), GameError> {
        if self.players.is_empty() {
            self.setup_players(ui)?;
        }
        self.play_rounds(ui)?;
        self.end_game(ui);
        Ok(())
    }

    fn setup_players<I: GameInterface>(&mut self, ui: &mut I) -> Result<(), GameError> {
        let count = self.prompt_player_count(ui)?;
        for i in 0..count {
            let name = ui
                .prompt_line(&format!("Enter the name player #{}", i + 1))
                .ok_or(GameError::InputClosed)?;
            self.players.push(Player::new(name.trim()));
        }
        info_log!("Registered {} players", self.players.len());
        Ok(())
    }

    fn prompt_player_count<I: GameInterface>(&self, ui: &mut I) -> Result<usize, GameError> {
        let mut prompt = PLAYER_COUNT_QUESTION.to_string();
        loop {
            let input = ui.prompt_line(&prompt).ok_or(GameError::InputClosed)?;
            match parse_player_count(&input, self.config.max_players) {
                Ok(count) => return Ok(count),
                Err(err) => prompt = format!("{err}\n{PLAYER_COUNT_QUESTION}"),
            }
        }
    }

    /// Ask the player for a guess until the input is alphabetic.
    fn read_turn_input<I: GameInterface>(&self, ui: &mut I, current: usize) -> Option<String> {
        let player = &self.players[current];
        let prompt = format!(
            "{} turn\nPoints:   {} \nGuess a letter, word, or type 'exit' or 'pass':\n",
            player.name(),
            player.round_points()
        );
        loop {
            let input = ui.prompt_line(&prompt)?;
            if is_valid_turn_input(&input) {
                return Some(input);
            }
            ui.display_error(INVALID_TURN_INPUT);
        }
    }

    fn show_state<I: GameInterface>(ui: &mut I, round: &RoundEngine) {
        let rule = "-".repeat(45);
        ui.display("");
        ui.display(&rule);
        ui.display(&round.state_display());
        ui.display(&rule);
        ui.display("");
    }

    fn play_rounds<I: GameInterface>(&mut self, ui: &mut I) -> Result<(), GameError> {
        let rule = "=".repeat(15);
        ui.display_heading(&rule);
        ui.display_heading(TITLE);
        ui.display_heading(&rule);
        ui.display("");

        let mut round = RoundEngine::new(self.pool.draw()?, self.config.repeat_hits_score);
        let mut current = 0;

        loop {
            Self::show_state(ui, &round);

            let Some(input) = self.read_turn_input(ui, current) else {
                info_log!("Input closed during {}'s turn", self.players[current].name());
                break;
            };
            let outcome = round.resolve(&input);
            let result = round.apply_outcome(outcome, &mut self.players[current]);

            match outcome {
                RoundOutcome::Invalid => ui.display_error(UNRECOGNIZED_INPUT),
                RoundOutcome::Repeated(letter) => {
                    ui.display(&format!("Letter '{letter}' was already guessed"));
                }
                _ => {}
            }

            if result.exit_game {
                info_log!("{} left the game", self.players[current].name());
                break;
            }

            if result.round_won {
                self.finish_round(ui, &round, current);
                if !ui.prompt_yes_no(CONTINUE_QUESTION) {
                    break;
                }
                match self.pool.draw() {
                    Ok(word) => round = RoundEngine::new(word, self.config.repeat_hits_score),
                    Err(err) => {
                        log::warn!("Cannot start another round: {err}");
                        ui.display_error(POOL_EXHAUSTED);
                        break;
                    }
                }
                continue;
            }

            if result.next_player {
                current = (current + 1) % self.players.len();
                debug_log!("Turn passes to {}", self.players[current].name());
            }
        }
        Ok(())
    }

    fn finish_round<I: GameInterface>(&mut self, ui: &mut I, round: &RoundEngine, winner: usize) {
        info_log!(
            "{} won the round on '{}'",
            self.players[winner].name(),
            round.word()
        );
        ui.display(&format!(
            "Congratulation you found the word {}",
            self.players[winner].name()
        ));
        ui.display(&format!("You get bonus {ROUND_BONUS} points"));
        settle_round(&mut self.players, winner);
        ui.display(&round.display_word());
        for player in &self.players {
            ui.display(&player.to_string());
        }
    }

    fn end_game<I: GameInterface>(&mut self, ui: &mut I) {
        let rule = "=".repeat(30);
        ui.display(&rule);
        for player in &mut self.players {
            player.fold_round();
            ui.display(&player.to_string());
        }
        ui.display(&rule);
        if let Some(best) = winner(&self.players) {
            info_log!("Game over, {} won with {} points", best.name(), best.total_points());
            ui.display_heading(&format!(
                "Player {} won the game with {} points",
                best.name(),
                best.total_points()
            ));
        }
        ui.display("Game is over !!!!");
        ui.display("Hope to see you next time !!!!");
        ui.display(&rule);
    }
}
