//! Consistent styling utilities for CLI output.
//!
//! Every helper returns plain text when colors are disabled
//! (`--no-color` or `NO_COLOR`).

use owo_colors::{OwoColorize, Style as Paint};
use std::fmt::Display;

use crate::output;

fn paint<T: Display>(text: T, style: Paint) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        format!("{}", text.style(style))
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers (e.g., "Current configuration")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, Paint::new().bold())
    }

    /// Labels/keys (e.g., "endpoint", "model")
    pub fn label<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }

    /// Primary values (e.g., model names)
    pub fn value<T: Display>(text: T) -> String {
        paint(text, Paint::new().cyan())
    }

    /// Secondary info (e.g., paths, language names)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }

    /// Headings around a translated block ("Original:", "Translation (zh):")
    pub fn section<T: Display>(text: T) -> String {
        paint(text, Paint::new().green().bold())
    }

    /// The translated text itself
    pub fn translation<T: Display>(text: T) -> String {
        paint(text, Paint::new().bright_white())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, Paint::new().green())
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, Paint::new().red().bold())
    }

    pub fn warning<T: Display>(text: T) -> String {
        paint(text, Paint::new().yellow())
    }

    /// Language codes
    pub fn code<T: Display>(text: T) -> String {
        paint(text, Paint::new().yellow())
    }

    /// Hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed().italic())
    }

    pub fn version<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }
}
