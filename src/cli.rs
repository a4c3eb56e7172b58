use crate::game_state::{GameConfig, GameInterface};
use clap::Parser;
use crossterm::style::{Stylize, style};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Wheel of Fortune word guessing game for one or two players
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a comma-separated word pool file; random long words are used when omitted
    #[arg(short = 'f', long = "word-pool-file")]
    pub word_pool_file: Option<PathBuf>,

    /// Maximum number of words in the game
    #[arg(short = 'w', long, default_value_t = 15)]
    pub word_count: usize,

    /// Tries per player (reserved, not enforced)
    #[arg(short = 't', long, default_value_t = 5)]
    pub player_tries: u32,

    /// Maximum number of players
    #[arg(short = 'p', long = "player-count", default_value_t = 2)]
    pub player_count: usize,

    /// Do not score an already-guessed letter again
    #[arg(long)]
    pub no_repeat_scoring: bool,

    /// Seed for word selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plain console output without colours
    #[arg(long)]
    pub no_color: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl From<&Cli> for GameConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            word_count: cli.word_count,
            player_tries: cli.player_tries,
            max_players: cli.player_count.max(1),
            repeat_hits_score: !cli.no_repeat_scoring,
        }
    }
}

/// Console implementation of [`GameInterface`]: prompts go to stdout and
/// answers are read line by line from `reader`.
pub struct CliInterface<R: BufRead> {
    reader: R,
    styled: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            styled: false,
        }
    }

    /// Enable or disable coloured headings and errors.
    #[must_use]
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn prompt_line(&mut self, message: &str) -> Option<String> {
        print!("{message}");
        if let Err(e) = io::stdout().flush() {
            log::warn!("Failed to flush prompt: {e}");
        }

        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                None
            }
        }
    }

    fn display(&mut self, text: &str) {
        println!("{text}");
    }

    fn display_heading(&mut self, text: &str) {
        if self.styled {
            println!("{}", style(text).cyan().bold());
        } else {
            println!("{text}");
        }
    }

    fn display_error(&mut self, text: &str) {
        if self.styled {
            println!("{}", style(text).red());
        } else {
            println!("{text}");
        }
    }
}
