//! The console widget: scrollable output pane above a prompt input row.

use crate::model::ECHO_PREFIX;
use crate::state::TerminalState;
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};

/// The console widget.
///
/// Renders a bordered, scrollable output pane (newest lines at the bottom)
/// above a single input row with a `>` prompt and a visible cursor.
///
/// # Example
///
/// ```ignore
/// use term_console::{TerminalState, TerminalWidget};
/// use term_console::traits::DefaultTheme;
///
/// let theme = DefaultTheme;
/// let widget = TerminalWidget::new(&theme).with_title(" Console ");
/// frame.render_stateful_widget(widget, area, &mut state);
/// ```
pub struct TerminalWidget<'a, T: ThemeProvider> {
    /// Theme provider.
    theme: &'a T,
    /// Title shown on the output pane border.
    title: &'a str,
}

impl<'a, T: ThemeProvider> TerminalWidget<'a, T> {
    /// Create a new console widget.
    pub fn new(theme: &'a T) -> Self {
        Self {
            theme,
            title: " Console ",
        }
    }

    /// Set the title shown on the output pane border.
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn render_output(&self, area: Rect, buf: &mut Buffer, state: &mut TerminalState) {
        let block = Block::default()
            .title(self.title)
            .title_style(Style::default().fg(self.theme.title_foreground()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_foreground()));
        let inner = block.inner(area);
        block.render(area, buf);

        // The state needs the real pane height for scroll bounds.
        state.visible_height = inner.height as usize;
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let total = state.history.output_len();
        let end = total.saturating_sub(state.scroll_offset.min(total));
        let start = end.saturating_sub(inner.height as usize);

        let output_style = Style::default().fg(self.theme.output_foreground());
        let echo_style = Style::default().fg(self.theme.echo_foreground());

        for (row, line) in state
            .history
            .output_lines()
            .skip(start)
            .take(end - start)
            .enumerate()
        {
            let style = if line.starts_with(ECHO_PREFIX) {
                echo_style
            } else {
                output_style
            };
            buf.set_stringn(
                inner.x,
                inner.y + row as u16,
                line,
                inner.width as usize,
                style,
            );
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer, state: &TerminalState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_foreground()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width <= 2 {
            return;
        }

        buf.set_string(
            inner.x,
            inner.y,
            "> ",
            Style::default().fg(self.theme.prompt_foreground()),
        );

        let text_area_width = inner.width as usize - 2;
        let cursor_column = state.input.cursor_column();

        // Keep the cursor in view when the text is wider than the row.
        let window_start = (cursor_column + 1).saturating_sub(text_area_width);
        let visible: String = state
            .input
            .text()
            .chars()
            .skip(window_start)
            .take(text_area_width)
            .collect();

        let text_x = inner.x + 2;
        buf.set_stringn(
            text_x,
            inner.y,
            &visible,
            text_area_width,
            Style::default().fg(self.theme.input_foreground()),
        );

        let cursor_x = text_x + (cursor_column - window_start) as u16;
        if cursor_x < inner.x + inner.width {
            buf.set_style(
                Rect::new(cursor_x, inner.y, 1, 1),
                Style::default().bg(Color::White).fg(Color::Black),
            );
        }
    }
}

impl<T: ThemeProvider> StatefulWidget for TerminalWidget<'_, T> {
    type State = TerminalState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [output_area, input_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

        self.render_output(output_area, buf, state);
        self.render_input(input_area, buf, state);
    }
}
