//! Actions dispatched to the console by the orchestrating application.

/// Actions the console state knows how to handle.
///
/// The console uses a tagged action pattern: instead of reading key events
/// directly, the orchestrating application maps its key events to
/// `TerminalAction` variants and dispatches them via
/// [`TerminalState::handle_action`](crate::TerminalState::handle_action). This
/// keeps the widget independent of any particular key handling system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalAction {
    // Input line editing
    /// Insert a character at the input cursor.
    InsertChar(char),
    /// Delete the character before the input cursor (backspace).
    DeleteBackward,
    /// Delete the character at the input cursor (delete key).
    DeleteForward,
    /// Move the input cursor one character left.
    CursorLeft,
    /// Move the input cursor one character right.
    CursorRight,
    /// Move the input cursor to the start of the line.
    CursorHome,
    /// Move the input cursor to the end of the line.
    CursorEnd,

    // Submission and history recall
    /// Submit the current input as a command.
    Submit,
    /// Recall an older command (up arrow).
    HistoryPrevious,
    /// Recall a newer command, restoring in-progress input past the newest
    /// entry (down arrow).
    HistoryNext,

    // Output scrolling
    /// Scroll the output pane toward older lines.
    ScrollUp,
    /// Scroll the output pane toward newer lines.
    ScrollDown,
    /// Jump to the oldest output line.
    ScrollToTop,
    /// Jump to the newest output line.
    ScrollToBottom,

    /// Clear the output and command history.
    Clear,
}
