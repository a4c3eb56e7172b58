// Integration tests for the fortune-wheel game
// These tests drive whole games through the public API

use fortune_wheel::cli::CliInterface;
use fortune_wheel::*;
use std::collections::VecDeque;
use std::io::Cursor;

/// Scripted input with a recorded transcript, standing in for the console.
struct Recorder {
    inputs: VecDeque<String>,
    lines: Vec<String>,
}

impl Recorder {
    fn new(inputs: &str) -> Self {
        Self {
            inputs: inputs.lines().map(str::to_string).collect(),
            lines: Vec::new(),
        }
    }

    fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

impl GameInterface for Recorder {
    fn prompt_line(&mut self, message: &str) -> Option<String> {
        self.lines.push(message.to_string());
        self.inputs.pop_front()
    }

    fn display(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

fn single_word_pool(word: &str) -> WordPool {
    WordPool::with_seed(parse_word_list(word), 3)
}

#[test]
fn test_full_game_over_console_interface() {
    // Setup, a round won by letters, then stop
    let input = "2\nAda\nBob\nc\na\nt\nno\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut game = Game::new(single_word_pool("cat"), GameConfig::default());

    game.run(&mut interface).unwrap();

    assert_eq!(game.players()[0].name(), "Ada");
    assert_eq!(game.players()[0].total_points(), 3 + ROUND_BONUS);
    assert_eq!(game.players()[1].total_points(), 0);
    assert_eq!(game.winner().map(Player::name), Some("Ada"));
}

#[test]
fn test_console_interface_rejects_bad_setup_input() {
    let input = "none\n3\n1\nSolo\ncat\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut game = Game::new(single_word_pool("cat"), GameConfig::default());

    game.run(&mut interface).unwrap();

    assert_eq!(game.players().len(), 1);
    assert_eq!(game.players()[0].total_points(), 3 + ROUND_BONUS);
}

#[test]
fn test_console_interface_end_of_input_ends_game() {
    // Input stops mid-round; points so far still count
    let input = "1\nSolo\na\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut game = Game::new(single_word_pool("banana"), GameConfig::default());

    game.run(&mut interface).unwrap();

    assert_eq!(game.players()[0].total_points(), 3);
}

#[test]
fn test_exit_announces_winner_from_current_totals() {
    let players = vec![Player::new("P1"), Player::new("P2")];
    let pool = WordPool::with_seed(parse_word_list("cat, dog"), 5);
    let mut game = Game::with_players(pool, GameConfig::default(), players);

    // P1 wins a round by typing the word, then exits in the next
    let mut ui = Recorder::new("cat\ndog\nyes\nexit\n");
    game.run(&mut ui).unwrap();

    let transcript = ui.transcript();
    assert!(transcript.contains("Player P1 won the game with 8 points"));
    assert!(transcript.contains("P1 total points: 8"));
    assert!(transcript.contains("P2 total points: 0"));
    assert!(transcript.contains("Game is over !!!!"));
}

#[test]
fn test_two_players_alternate_on_misses() {
    let players = vec![Player::new("P1"), Player::new("P2")];
    let mut game = Game::with_players(single_word_pool("banana"), GameConfig::default(), players);

    // P1 misses, P2 hits twice then misses, P1 guesses the word
    let mut ui = Recorder::new("z\na\nn\nq\nbanana\nno\n");
    game.run(&mut ui).unwrap();

    // P2: a (3) + n (2); P1: word with b left unrevealed (1) + bonus
    assert_eq!(game.players()[1].total_points(), 5);
    assert_eq!(game.players()[0].total_points(), 1 + ROUND_BONUS);
    assert_eq!(game.winner().map(Player::name), Some("P1"));
}

#[test]
fn test_winner_of_twelve_over_nine() {
    let mut players = vec![Player::new("P1"), Player::new("P2")];
    players[0].add_points(12);
    players[1].add_points(9);
    for player in &mut players {
        player.fold_round();
    }

    let best = winner(&players).unwrap();
    assert_eq!(best.name(), "P1");
    assert_eq!(best.total_points(), 12);
}

#[test]
fn test_round_engine_banana_scenario() {
    let mut round = RoundEngine::new(Word::new("banana").unwrap(), true);
    let mut player = Player::new("P1");

    let outcome = round.resolve("a");
    assert_eq!(outcome, RoundOutcome::LetterHit('a'));
    let result = round.apply_outcome(outcome, &mut player);

    assert_eq!(result.points, 3);
    assert_eq!(round.guessed(), &GuessedSet::from(['a']));
    assert_eq!(round.display_word(), "_a_a_a");
}

#[test]
fn test_revealing_every_letter_leaves_no_blanks() {
    let mut round = RoundEngine::new(Word::new("mississippi").unwrap(), true);
    let mut player = Player::new("P1");
    for letter in ["m", "i", "s", "p"] {
        let outcome = round.resolve(letter);
        round.apply_outcome(outcome, &mut player);
    }
    assert!(round.is_won());
    assert!(!round.display_word().contains('_'));
    assert_eq!(player.round_points(), 11);
}

#[test]
fn test_word_file_to_game() {
    // Integration test: word file -> pool -> game
    let path = std::env::temp_dir().join("fortune_wheel_integration_words.txt");
    std::fs::write(&path, "Rust, ,cargo,\n").unwrap();

    let pool = WordPool::load(Some(path.as_path()), 15, Some(1)).unwrap();
    assert_eq!(pool.len(), 2);

    let players = vec![Player::new("Solo")];
    let mut game = Game::with_players(pool, GameConfig::default(), players);
    // Each word is typed in full; whichever comes first, both rounds settle
    let mut ui = Recorder::new("rust\ncargo\ny\nrust\ncargo\nn\n");
    game.run(&mut ui).unwrap();

    assert!(game.pool().is_empty());
    assert_eq!(game.players()[0].total_points(), 4 + 5 + 2 * ROUND_BONUS);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_generated_pool_never_repeats() {
    let mut pool = WordPool::load(None, 10, Some(21)).unwrap();
    let mut drawn = Vec::new();
    while let Ok(word) = pool.draw() {
        assert!(!drawn.contains(&word));
        assert!(word.char_count() >= 10);
        drawn.push(word);
    }
    assert_eq!(drawn.len(), 10);
    assert_eq!(pool.draw(), Err(EmptyPoolError));
}
