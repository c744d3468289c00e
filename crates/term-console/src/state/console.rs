//! Top-level console state: history, input line, and output scrolling.

use crate::action::TerminalAction;
use crate::event::TerminalEvent;
use crate::model::TerminalHistory;
use crate::state::InputLine;

/// Complete state for the console widget.
///
/// Owns the bounded history buffers, the input line, and the output scroll
/// position. Actions are dispatched via [`handle_action`](Self::handle_action),
/// which returns the events the host must react to.
#[derive(Debug, Clone)]
pub struct TerminalState {
    /// Bounded output/command history and recall state.
    pub history: TerminalHistory,
    /// The command input line.
    pub input: InputLine,
    /// Scroll offset into the output pane (0 = bottom/newest).
    pub scroll_offset: usize,
    /// Visible output height, written back by the widget on render.
    pub visible_height: usize,
}

impl TerminalState {
    /// Create console state with the given history bounds.
    pub fn new(max_output_lines: usize, max_command_lines: usize) -> Self {
        Self {
            history: TerminalHistory::new(max_output_lines, max_command_lines),
            input: InputLine::new(),
            scroll_offset: 0,
            visible_height: 0,
        }
    }

    /// Handle an action, returning the events the host must process.
    pub fn handle_action(&mut self, action: TerminalAction) -> Vec<TerminalEvent> {
        match action {
            TerminalAction::InsertChar(c) => {
                self.input.insert_char(c);
            }
            TerminalAction::DeleteBackward => {
                self.input.delete_backward();
            }
            TerminalAction::DeleteForward => {
                self.input.delete_forward();
            }
            TerminalAction::CursorLeft => {
                self.input.cursor_left();
            }
            TerminalAction::CursorRight => {
                self.input.cursor_right();
            }
            TerminalAction::CursorHome => {
                self.input.cursor_home();
            }
            TerminalAction::CursorEnd => {
                self.input.cursor_end();
            }
            TerminalAction::Submit => {
                let command = self.input.take();
                if self.history.submit_command(&command) {
                    // New output belongs at the bottom of the pane.
                    self.scroll_offset = 0;
                    return vec![TerminalEvent::CommandSubmitted(command)];
                }
            }
            TerminalAction::HistoryPrevious => {
                if let Some(text) = self.history.navigate_previous(self.input.text()) {
                    self.input.set_text(text);
                }
            }
            TerminalAction::HistoryNext => {
                if let Some(text) = self.history.navigate_next() {
                    self.input.set_text(text);
                }
            }
            TerminalAction::ScrollUp => {
                if self.scroll_offset < self.max_scroll() {
                    self.scroll_offset += 1;
                }
            }
            TerminalAction::ScrollDown => {
                self.scroll_offset = self.scroll_offset.min(self.max_scroll());
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            TerminalAction::ScrollToTop => {
                self.scroll_offset = self.max_scroll();
            }
            TerminalAction::ScrollToBottom => {
                self.scroll_offset = 0;
            }
            TerminalAction::Clear => {
                self.history.clear();
                self.scroll_offset = 0;
                return vec![TerminalEvent::Cleared];
            }
        }
        Vec::new()
    }

    /// Append a line to the output, keeping the scroll position valid.
    ///
    /// This is how the host feeds command results (and any other text) into
    /// the console.
    pub fn append_output_line(&mut self, line: impl Into<String>) {
        self.history.append_output_line(line);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Largest valid scroll offset for the current output length.
    fn max_scroll(&self) -> usize {
        if self.visible_height > 0 {
            self.history.output_len().saturating_sub(self.visible_height)
        } else {
            self.history.output_len()
        }
    }
}
