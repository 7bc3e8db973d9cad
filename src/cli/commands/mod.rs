//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Interactive line-by-line translation.
pub mod interactive;

/// Status command handler.
pub mod status;

/// Translation command handler.
pub mod translate;
