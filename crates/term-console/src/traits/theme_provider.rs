//! Trait for providing theme configuration to the console widget.

use ratatui::style::Color;

/// Provides colors for the console widget.
///
/// Implement this trait to integrate the console with your application's theme
/// system. There is one widget; each host styles it through this seam instead
/// of wrapping it in a host-specific subclass. All methods have defaults
/// matching [`DefaultTheme`], so an implementation only overrides what it
/// changes.
///
/// # Example
///
/// ```ignore
/// use term_console::ThemeProvider;
/// use ratatui::style::Color;
///
/// struct MyAppTheme;
///
/// impl ThemeProvider for MyAppTheme {
///     fn prompt_foreground(&self) -> Color {
///         Color::Cyan
///     }
/// }
/// ```
pub trait ThemeProvider: Send + Sync {
    /// Foreground color for output lines.
    fn output_foreground(&self) -> Color {
        Color::Gray
    }

    /// Foreground color for echoed command lines in the output pane.
    fn echo_foreground(&self) -> Color {
        Color::White
    }

    /// Foreground color for the input prompt.
    fn prompt_foreground(&self) -> Color {
        Color::Green
    }

    /// Foreground color for the input text.
    fn input_foreground(&self) -> Color {
        Color::White
    }

    /// Foreground color for pane borders.
    fn border_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for the output pane title.
    fn title_foreground(&self) -> Color {
        Color::Gray
    }
}

/// Default console palette.
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {}
