use fortune_wheel::cli::{CliInterface, parse_cli};
use fortune_wheel::logging::init_logging;
use fortune_wheel::{Game, GameConfig, WordPool};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    if let Some(path) = init_logging(cli.verbose) {
        log::debug!("Logging to {}", path.display());
    }

    let config = GameConfig::from(&cli);
    let pool = match WordPool::load(cli.word_pool_file.as_deref(), config.word_count, cli.seed) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut interface = CliInterface::new(io::stdin().lock()).styled(!cli.no_color);
    let mut game = Game::new(pool, config);
    match game.run(&mut interface) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
