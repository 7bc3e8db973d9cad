//! Global output configuration and translation rendering.
//!
//! - Translations go to stdout (for piping)
//! - Status messages and errors go to stderr
//! - Quiet mode suppresses status messages
//! - Colors can be disabled via flag or `NO_COLOR`

use std::io::{self, Write};
use std::sync::OnceLock;

use crate::ui::Style;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the config from CLI flags; `NO_COLOR` also disables colors.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || Self::default().no_color,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Sets the global output configuration. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// How a translation is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Only the translated text, one line per translation.
    Plain,
    /// Original and translation under colored headings.
    Decorated,
}

impl OutputFormat {
    pub const fn from_plain_flag(plain: bool) -> Self {
        if plain { Self::Plain } else { Self::Decorated }
    }
}

/// Writes one translation in the given format.
pub fn write_translation(
    out: &mut impl Write,
    format: OutputFormat,
    original: &str,
    translation: &str,
    target_language: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{translation}")?,
        OutputFormat::Decorated => {
            writeln!(out)?;
            writeln!(out, "{}", Style::section("Original:"))?;
            writeln!(out, "{original}")?;
            writeln!(
                out,
                "{}",
                Style::section(format!("Translation ({target_language}):"))
            )?;
            writeln!(out, "{}", Style::translation(translation))?;
        }
    }
    out.flush()
}

/// Writes the placeholder for a blank input line in streaming mode.
pub fn write_blank(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    out.flush()
}
