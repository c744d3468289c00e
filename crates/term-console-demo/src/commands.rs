//! The demo's toy command interpreter.
//!
//! The console widget never interprets command text; this module is the host
//! side of that contract. It turns a submitted command into an outcome the
//! main loop applies.

use term_console::TerminalHistory;

/// What the main loop should do with a submitted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Append these lines to the console output.
    Reply(Vec<String>),
    /// Clear the console.
    Clear,
    /// Exit the application.
    Quit,
}

/// Interpret a submitted command.
///
/// `history` is read-only here; the `history` command lists previously
/// submitted commands from it.
pub fn run_command(input: &str, history: &TerminalHistory) -> CommandOutcome {
    let mut parts = input.split_whitespace();
    let Some(name) = parts.next() else {
        return CommandOutcome::Reply(Vec::new());
    };

    match name {
        "help" => CommandOutcome::Reply(vec![
            "available commands:".to_string(),
            "  help           show this help".to_string(),
            "  echo <text>    print <text>".to_string(),
            "  history        list submitted commands".to_string(),
            "  clear          clear the console".to_string(),
            "  quit           exit the demo".to_string(),
        ]),
        "echo" => {
            let rest: Vec<&str> = parts.collect();
            CommandOutcome::Reply(vec![rest.join(" ")])
        }
        "history" => {
            let lines: Vec<String> = history
                .command_lines()
                .enumerate()
                .map(|(i, cmd)| format!("{:3}  {}", i + 1, cmd))
                .collect();
            if lines.is_empty() {
                CommandOutcome::Reply(vec!["history is empty".to_string()])
            } else {
                CommandOutcome::Reply(lines)
            }
        }
        "clear" => CommandOutcome::Clear,
        "quit" | "exit" => CommandOutcome::Quit,
        _ => CommandOutcome::Reply(vec![format!(
            "unknown command: {} (try 'help')",
            name
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_history() -> TerminalHistory {
        TerminalHistory::new(10, 10)
    }

    #[test]
    fn test_echo_joins_arguments() {
        let outcome = run_command("echo hello   world", &empty_history());
        assert_eq!(outcome, CommandOutcome::Reply(vec!["hello world".into()]));
    }

    #[test]
    fn test_clear_and_quit() {
        assert_eq!(run_command("clear", &empty_history()), CommandOutcome::Clear);
        assert_eq!(run_command("quit", &empty_history()), CommandOutcome::Quit);
        assert_eq!(run_command("exit", &empty_history()), CommandOutcome::Quit);
    }

    #[test]
    fn test_unknown_command_suggests_help() {
        let outcome = run_command("frobnicate", &empty_history());
        assert_eq!(
            outcome,
            CommandOutcome::Reply(vec!["unknown command: frobnicate (try 'help')".into()])
        );
    }

    #[test]
    fn test_history_lists_submitted_commands() {
        let mut history = empty_history();
        history.submit_command("echo one");
        history.submit_command("help");

        let outcome = run_command("history", &history);

        assert_eq!(
            outcome,
            CommandOutcome::Reply(vec![
                "  1  echo one".to_string(),
                "  2  help".to_string(),
            ])
        );
    }

    #[test]
    fn test_history_on_empty_buffer() {
        let outcome = run_command("history", &empty_history());
        assert_eq!(
            outcome,
            CommandOutcome::Reply(vec!["history is empty".into()])
        );
    }
}
