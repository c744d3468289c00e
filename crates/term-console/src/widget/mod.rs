//! Widgets for rendering the console.

mod console;

pub use console::TerminalWidget;
