// client/src/logging.rs

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn log_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".marquee_client.log")
}

/// Initialize tracing with a file writer. The terminal owns stdout while the
/// UI is up, so everything goes to `~/.marquee_client.log` instead.
/// Calling this multiple times is safe (subsequent attempts are ignored).
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match OpenOptions::new().create(true).append(true).open(log_path()) {
        Ok(f) => f,
        Err(_) => return, // no log sink available, run silent
    };

    // Use try_init so calling this multiple times (e.g., in tests) doesn't panic
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok();
}
