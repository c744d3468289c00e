//! # term-console
//!
//! A standalone, reusable console widget for ratatui applications: a bounded,
//! scrollable output log above a single-line command input with up/down
//! history recall.
//!
//! ## Design Principles
//!
//! This crate is designed to be **instrumented** — it receives text and emits
//! events without interpreting commands or performing side effects. This
//! enables:
//!
//! - Testability without a terminal or an interpreter
//! - Reusability in any host (a debug overlay, a REPL pane, a chat box)
//! - Clear separation of concerns
//!
//! ## Action-Based Architecture
//!
//! The console uses a tagged action pattern. Instead of handling key events
//! directly, the orchestrating application maps key events to
//! [`TerminalAction`] variants and dispatches them to the console state. The
//! returned [`TerminalEvent`]s tell the host what happened (a command was
//! submitted, the console was cleared); the host runs the command and feeds
//! the result back in.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use term_console::{TerminalAction, TerminalEvent, TerminalState, TerminalWidget};
//! use term_console::traits::DefaultTheme;
//!
//! // Create state with bounded output and command history
//! let mut state = TerminalState::new(500, 100);
//!
//! // Render the widget
//! let theme = DefaultTheme;
//! let widget = TerminalWidget::new(&theme);
//! frame.render_stateful_widget(widget, area, &mut state);
//!
//! // Handle actions (mapped from key events by the orchestrator)
//! for event in state.handle_action(TerminalAction::Submit) {
//!     match event {
//!         TerminalEvent::CommandSubmitted(command) => {
//!             state.append_output_line(run_command(&command));
//!         }
//!         TerminalEvent::Cleared => {}
//!     }
//! }
//! ```

pub mod action;
pub mod event;
pub mod model;
pub mod state;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::TerminalAction;
pub use event::TerminalEvent;
pub use model::{TerminalHistory, ECHO_PREFIX};
pub use state::{InputLine, TerminalState};
pub use traits::{DefaultTheme, ThemeProvider};
pub use widget::TerminalWidget;
