//! File-based logging using simplelog
//!
//! The demo draws to the terminal, so logs go to a timestamped file in the
//! current directory instead of stdout.

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Initialize file-based logging
///
/// Creates a log file with timestamp and returns its path.
pub fn init() -> anyhow::Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let log_file = PathBuf::from(format!("term-console-demo-{}.log", timestamp));

    let level = std::env::var("RUST_LOG")
        .map(|v| match v.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        })
        .unwrap_or(LevelFilter::Info);

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    WriteLogger::init(level, config, File::create(&log_file)?)?;

    Ok(log_file)
}
