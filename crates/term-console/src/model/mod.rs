//! Data model for the console: bounded history buffers and navigation.

mod history;

pub use history::{TerminalHistory, ECHO_PREFIX};
