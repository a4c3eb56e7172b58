// Logging setup and conditional logging macros - the macros are only active in debug builds

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_DIR_NAME: &str = "fortune-wheel";
const LOG_FILE_NAME: &str = "fortune-wheel.log";

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Location of the log file, if the platform has a cache directory.
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Initialise the global logger.
///
/// Records are written to the log file so they never interleave with the
/// console prompts; stderr is used when the file cannot be opened.
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) -> Option<PathBuf> {
    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let path = log_file_path();
    let file = path.as_deref().and_then(open_log_file);
    let used_path = match file {
        Some(file) => {
            builder.target(Target::Pipe(Box::new(file)));
            path
        }
        None => {
            builder.target(Target::Stderr);
            None
        }
    };

    // A logger may already be installed (e.g. by a test harness).
    let _ = builder.try_init();
    used_path
}
