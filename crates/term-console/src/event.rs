//! Events emitted by the console for the parent application to handle.

/// Events emitted by the console state.
///
/// The console is designed to be instrumented - it emits events instead of
/// performing side effects directly. The parent application is responsible for
/// handling them: interpreting submitted commands, appending their results back
/// via [`TerminalState::append_output_line`](crate::TerminalState::append_output_line),
/// reacting to clears, and so on. The console itself never interprets command
/// text.
///
/// # Example
///
/// ```ignore
/// for event in state.handle_action(TerminalAction::Submit) {
///     match event {
///         TerminalEvent::CommandSubmitted(command) => {
///             let result = interpreter.run(&command);
///             state.append_output_line(result);
///         }
///         TerminalEvent::Cleared => {
///             log::info!("console cleared");
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// The user submitted a non-empty command. Carries the raw command text,
    /// without the echo prefix. Emitted exactly once per submission.
    CommandSubmitted(String),

    /// The console history was cleared. Emitted exactly once per clear.
    Cleared,
}
