use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;

mod commands;
mod logger;

use commands::CommandOutcome;
use term_console::{DefaultTheme, TerminalAction, TerminalEvent, TerminalState, TerminalWidget};

const MAX_OUTPUT_LINES: usize = 500;
const MAX_COMMAND_LINES: usize = 100;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting term-console-demo, logging to {:?}", log_file);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TerminalState::new(MAX_OUTPUT_LINES, MAX_COMMAND_LINES);
    state.append_output_line("term-console demo - type 'help' for commands, Esc to exit");

    // Main event loop
    let result = run_app(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting term-console-demo");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TerminalState,
) -> anyhow::Result<()> {
    let theme = DefaultTheme;

    loop {
        // Render
        terminal.draw(|frame| {
            let widget = TerminalWidget::new(&theme).with_title(" term-console demo ");
            frame.render_stateful_widget(widget, frame.area(), state);
        })?;

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Esc {
                    return Ok(());
                }

                let Some(action) = map_key(key) else {
                    continue;
                };

                for event in state.handle_action(action) {
                    match event {
                        TerminalEvent::CommandSubmitted(command) => {
                            log::info!("command submitted: {}", command);
                            match commands::run_command(&command, &state.history) {
                                CommandOutcome::Reply(lines) => {
                                    for line in lines {
                                        state.append_output_line(line);
                                    }
                                }
                                CommandOutcome::Clear => {
                                    state.handle_action(TerminalAction::Clear);
                                    log::info!("console cleared");
                                }
                                CommandOutcome::Quit => return Ok(()),
                            }
                        }
                        TerminalEvent::Cleared => {
                            log::info!("console cleared");
                        }
                    }
                }
            }
        }
    }
}

/// Map a key event to a console action.
fn map_key(key: KeyEvent) -> Option<TerminalAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') => Some(TerminalAction::Clear),
            KeyCode::Char('a') => Some(TerminalAction::CursorHome),
            KeyCode::Char('e') => Some(TerminalAction::CursorEnd),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(TerminalAction::InsertChar(c)),
        KeyCode::Enter => Some(TerminalAction::Submit),
        KeyCode::Backspace => Some(TerminalAction::DeleteBackward),
        KeyCode::Delete => Some(TerminalAction::DeleteForward),
        KeyCode::Left => Some(TerminalAction::CursorLeft),
        KeyCode::Right => Some(TerminalAction::CursorRight),
        KeyCode::Home => Some(TerminalAction::CursorHome),
        KeyCode::End => Some(TerminalAction::CursorEnd),
        KeyCode::Up => Some(TerminalAction::HistoryPrevious),
        KeyCode::Down => Some(TerminalAction::HistoryNext),
        KeyCode::PageUp => Some(TerminalAction::ScrollUp),
        KeyCode::PageDown => Some(TerminalAction::ScrollDown),
        _ => None,
    }
}
