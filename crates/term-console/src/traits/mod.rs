//! Extension traits for customizing console behavior.

mod theme_provider;

pub use theme_provider::{DefaultTheme, ThemeProvider};
