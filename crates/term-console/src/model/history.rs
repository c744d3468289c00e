//! Bounded output/command history with readline-style recall.

use std::collections::VecDeque;

/// Prefix used when echoing a submitted command into the output buffer.
///
/// This mirrors the input prompt, so the output log reads like a transcript.
pub const ECHO_PREFIX: &str = "> ";

/// Bounded output and command history with up/down navigation.
///
/// Two FIFO buffers back the console: the output buffer holds every line the
/// console has displayed, the command buffer holds every command the user has
/// submitted. Both evict from the front once they reach their configured bound.
///
/// History recall works like a shell: browsing starts at the most recent
/// command, `navigate_previous` walks toward older entries (clamped at the
/// oldest, no wraparound), and `navigate_next` walks back toward newer ones.
/// Stepping past the newest entry ends browsing and restores whatever the user
/// had typed before browsing began.
#[derive(Debug, Clone)]
pub struct TerminalHistory {
    /// Displayed lines, oldest first.
    output: VecDeque<String>,
    /// Submitted commands, oldest first.
    commands: VecDeque<String>,
    /// Maximum number of output lines kept.
    max_output_lines: usize,
    /// Maximum number of commands kept.
    max_command_lines: usize,
    /// Current position while browsing history. `None` means not browsing.
    cursor: Option<usize>,
    /// Input text saved when browsing started, restored when browsing ends.
    pending_input: String,
}

impl TerminalHistory {
    /// Create an empty history with the given bounds.
    ///
    /// Both bounds must be positive; the behavior for zero bounds is
    /// unspecified.
    pub fn new(max_output_lines: usize, max_command_lines: usize) -> Self {
        Self {
            output: VecDeque::new(),
            commands: VecDeque::new(),
            max_output_lines,
            max_command_lines,
            cursor: None,
            pending_input: String::new(),
        }
    }

    /// Append a line to the output buffer, evicting the oldest line if the
    /// buffer is full.
    pub fn append_output_line(&mut self, line: impl Into<String>) {
        self.output.push_back(line.into());
        while self.output.len() > self.max_output_lines {
            self.output.pop_front();
        }
    }

    /// Record a submitted command.
    ///
    /// Empty input is never recorded: the call is a no-op and returns `false`.
    /// Otherwise the command is echoed into the output buffer (prefixed with
    /// [`ECHO_PREFIX`]), appended to the command buffer, history browsing is
    /// reset, and the call returns `true`.
    pub fn submit_command(&mut self, command: &str) -> bool {
        if command.is_empty() {
            return false;
        }

        self.append_output_line(format!("{ECHO_PREFIX}{command}"));

        self.commands.push_back(command.to_string());
        while self.commands.len() > self.max_command_lines {
            self.commands.pop_front();
        }

        self.cursor = None;
        self.pending_input.clear();
        true
    }

    /// Empty both buffers and reset browsing state.
    pub fn clear(&mut self) {
        self.output.clear();
        self.commands.clear();
        self.cursor = None;
        self.pending_input.clear();
    }

    /// Step to an older command (up arrow).
    ///
    /// On the first step the current input text is saved so it can be restored
    /// when browsing ends. Returns the command to display, or `None` when the
    /// command buffer is empty and the input should stay unchanged. Repeated
    /// steps at the oldest entry keep returning it.
    pub fn navigate_previous(&mut self, current_input: &str) -> Option<String> {
        if self.commands.is_empty() {
            return None;
        }

        match self.cursor {
            None => {
                self.pending_input = current_input.to_string();
                self.cursor = Some(self.commands.len() - 1);
            }
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
            }
            Some(_) => {} // Already at the oldest entry.
        }

        self.cursor.map(|index| self.commands[index].clone())
    }

    /// Step to a newer command (down arrow).
    ///
    /// Returns the command to display, or the saved input text when stepping
    /// past the newest entry (which also ends browsing). Returns `None` when
    /// not browsing, in which case the input stays unchanged.
    pub fn navigate_next(&mut self) -> Option<String> {
        let index = self.cursor?;

        if index + 1 >= self.commands.len() {
            self.cursor = None;
            Some(std::mem::take(&mut self.pending_input))
        } else {
            self.cursor = Some(index + 1);
            Some(self.commands[index + 1].clone())
        }
    }

    /// Whether the user is currently browsing history.
    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    /// Output lines, oldest first.
    pub fn output_lines(&self) -> impl Iterator<Item = &str> {
        self.output.iter().map(String::as_str)
    }

    /// Number of lines currently in the output buffer.
    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    /// Submitted commands, oldest first.
    pub fn command_lines(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }

    /// Number of commands currently in the command buffer.
    pub fn command_len(&self) -> usize {
        self.commands.len()
    }

    /// Snapshot of the output buffer, oldest first.
    pub fn output_snapshot(&self) -> Vec<String> {
        self.output.iter().cloned().collect()
    }

    /// Snapshot of the command buffer, oldest first.
    pub fn command_snapshot(&self) -> Vec<String> {
        self.commands.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_buffer_bounded() {
        let mut history = TerminalHistory::new(3, 10);

        for i in 0..5 {
            history.append_output_line(format!("line {i}"));
        }

        assert_eq!(history.output_snapshot(), vec!["line 2", "line 3", "line 4"]);
        assert_eq!(history.output_len(), 3);
    }

    #[test]
    fn test_output_keeps_append_order_below_bound() {
        let mut history = TerminalHistory::new(10, 10);

        history.append_output_line("first");
        history.append_output_line("second");

        assert_eq!(history.output_snapshot(), vec!["first", "second"]);
    }

    #[test]
    fn test_command_buffer_bounded() {
        let mut history = TerminalHistory::new(100, 3);

        for cmd in ["a", "b", "c", "d"] {
            assert!(history.submit_command(cmd));
        }

        assert_eq!(history.command_snapshot(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_submit_echoes_into_output() {
        let mut history = TerminalHistory::new(100, 100);

        history.submit_command("status");

        assert_eq!(history.output_snapshot(), vec!["> status"]);
        assert_eq!(history.command_snapshot(), vec!["status"]);
    }

    #[test]
    fn test_echo_obeys_output_bound_independently() {
        // Command bound is large, output bound is tiny: echoes must still
        // evict from the output buffer without touching the command buffer.
        let mut history = TerminalHistory::new(2, 100);

        history.submit_command("one");
        history.submit_command("two");
        history.submit_command("three");

        assert_eq!(history.output_snapshot(), vec!["> two", "> three"]);
        assert_eq!(history.command_len(), 3);
    }

    #[test]
    fn test_empty_command_is_never_recorded() {
        let mut history = TerminalHistory::new(10, 10);
        history.submit_command("real");
        history.navigate_previous("typing");

        assert!(!history.submit_command(""));

        assert_eq!(history.output_snapshot(), vec!["> real"]);
        assert_eq!(history.command_snapshot(), vec!["real"]);
        // Browsing state is untouched by the rejected submission.
        assert!(history.is_browsing());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut history = TerminalHistory::new(10, 10);
        history.append_output_line("noise");
        history.submit_command("cmd");
        history.navigate_previous("typing");

        history.clear();

        assert_eq!(history.output_len(), 0);
        assert_eq!(history.command_len(), 0);
        assert!(!history.is_browsing());
        // Buffer is empty again, so navigation is a no-op.
        assert_eq!(history.navigate_previous("x"), None);
    }

    #[test]
    fn test_navigate_previous_on_empty_history() {
        let mut history = TerminalHistory::new(10, 10);

        assert_eq!(history.navigate_previous("hello"), None);
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_navigation_round_trip_restores_pending_input() {
        let mut history = TerminalHistory::new(10, 10);
        for cmd in ["a", "b", "c"] {
            history.submit_command(cmd);
        }

        assert_eq!(history.navigate_previous("xyz").as_deref(), Some("c"));
        assert_eq!(history.navigate_previous("c").as_deref(), Some("b"));
        assert_eq!(history.navigate_next().as_deref(), Some("c"));
        // Stepping past the newest entry restores the saved input.
        assert_eq!(history.navigate_next().as_deref(), Some("xyz"));
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_navigate_previous_clamps_at_oldest() {
        let mut history = TerminalHistory::new(10, 10);
        history.submit_command("only");

        assert_eq!(history.navigate_previous("").as_deref(), Some("only"));
        assert_eq!(history.navigate_previous("only").as_deref(), Some("only"));
        assert_eq!(history.navigate_previous("only").as_deref(), Some("only"));
        assert!(history.is_browsing());
    }

    #[test]
    fn test_navigate_next_while_idle_is_noop() {
        let mut history = TerminalHistory::new(10, 10);
        history.submit_command("a");

        assert_eq!(history.navigate_next(), None);
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_submit_resets_browsing() {
        let mut history = TerminalHistory::new(10, 10);
        history.submit_command("a");
        history.submit_command("b");

        history.navigate_previous("draft");
        assert!(history.is_browsing());

        history.submit_command("c");
        assert!(!history.is_browsing());

        // A fresh browse starts from the newest command again.
        assert_eq!(history.navigate_previous("").as_deref(), Some("c"));
    }

    #[test]
    fn test_pending_input_survives_full_walk() {
        let mut history = TerminalHistory::new(10, 10);
        for cmd in ["a", "b", "c"] {
            history.submit_command(cmd);
        }

        history.navigate_previous("draft");
        history.navigate_previous("c");
        history.navigate_previous("b");
        // Clamped at "a"; walk back down to the snapshot.
        assert_eq!(history.navigate_next().as_deref(), Some("b"));
        assert_eq!(history.navigate_next().as_deref(), Some("c"));
        assert_eq!(history.navigate_next().as_deref(), Some("draft"));
    }
}
