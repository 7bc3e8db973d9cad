//! # tzh - AI translation from the command line
//!
//! `tzh` sends text to an OpenAI-compatible chat completion endpoint and
//! prints the translation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Save endpoint, model and key
//! tzh c --endpoint https://api.deepseek.com/v1 --model deepseek-chat --api-key sk-...
//!
//! # Translate an argument (Chinese by default)
//! tzh t "Hello World"
//!
//! # Translate stdin line by line, printing only the results
//! cat notes.txt | tzh t -s -p --to ja
//! ```
//!
//! Settings are stored in `~/.config/tzh/config.toml`.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Saved endpoint, model, key and tuning values.
pub mod config;

/// Error kinds and their exit codes.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input from arguments and stdin.
pub mod input;

/// Global output configuration and translation rendering.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client for OpenAI-compatible APIs.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
