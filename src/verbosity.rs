// Verbosity levels and log sink setup.
// stdout carries the game protocol, so log output never goes there.
use crate::error::BotResult;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Map the 0/1/2 verbosity scale (0=quiet, 1=basic, 2=full) onto a tracing level
pub fn level_for_verbosity(level: u8) -> &'static str {
    match level {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn filter_for(level: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("halite_admiral={}", level_for_verbosity(level))))
}

/// Per-game log file name, `<player id>-<bot name>.log`
pub fn log_file_path(log_dir: &str, player_id: i32, bot_name: &str) -> PathBuf {
    Path::new(log_dir).join(format!("{}-{}.log", player_id, bot_name))
}

/// Send all log output to `path`. Called once, after the handshake has told
/// us our player id.
pub fn init_file_logging(path: &Path, level: u8) -> BotResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;

    // A second init (tests, replays inside one process) keeps the first sink
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// Send all log output to stderr, used by offline tooling
pub fn init_stderr_logging(level: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
