//! State management for the console widget.

mod console;
mod input_line;

pub use console::TerminalState;
pub use input_line::InputLine;
