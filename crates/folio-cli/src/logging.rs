use std::env;
use std::fs;
use std::fs::OpenOptions;
use std::path::PathBuf;

use env_logger::Env;
use env_logger::Target;

pub const LOG_ENV: &str = "FOLIO_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The TUI owns the terminal, so records go to a file.
    File,
    Stderr,
}

pub fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join("folio")
        .join("folio.log")
}

pub fn init(target: LogTarget) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"));
    if target == LogTarget::File {
        let path = log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}
