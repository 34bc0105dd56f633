use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "MONCO_LOG";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Sends logs to `path`, appending.
///
/// The terminal UI owns stdout and stderr, so interactive sessions only log
/// when a file is given.
pub fn init_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::options().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)?;
    Ok(())
}

/// Sends warnings and errors to stderr
pub fn init_stderr() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)?;
    Ok(())
}
