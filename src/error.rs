//! Error kinds surfaced by the library layers.
//!
//! Each variant maps to a sysexits-style exit code so the binary can report
//! what went wrong without parsing messages.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TzhError {
    /// No configuration file has been saved yet.
    #[error(
        "No configuration found at {}\n\n\
         Run 'tzh c --endpoint <url> --model <name> --api-key <key>' first.",
        path.display()
    )]
    ConfigMissing { path: PathBuf },

    /// The configuration file exists but cannot be used.
    #[error("Invalid configuration file {}: {message}", path.display())]
    ConfigInvalid { path: PathBuf, message: String },

    /// A file or stream could not be read or written.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The request never produced an HTTP response.
    #[error("Failed to reach {url}: {message}")]
    Network { url: String, message: String },

    /// The provider answered with a non-success status.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// The provider answered 2xx but the body is unusable.
    #[error("Unexpected API response: {0}")]
    InvalidResponse(String),

    /// There is nothing to translate.
    #[error("No text provided to translate")]
    EmptyInput,

    /// Command-line values failed validation.
    #[error("{0}")]
    Usage(String),
}

impl TzhError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigMissing { .. } | Self::ConfigInvalid { .. } => exitcode::CONFIG,
            Self::Io { .. } => exitcode::IOERR,
            Self::Network { .. } => exitcode::UNAVAILABLE,
            Self::Api { .. } => exitcode::PROTOCOL,
            Self::InvalidResponse(_) => exitcode::DATAERR,
            Self::EmptyInput => exitcode::NOINPUT,
            Self::Usage(_) => exitcode::USAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, TzhError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let missing = TzhError::ConfigMissing {
            path: PathBuf::from("/tmp/config.toml"),
        };
        let api = TzhError::Api {
            status: 500,
            body: "boom".to_string(),
        };
        let network = TzhError::Network {
            url: "http://localhost".to_string(),
            message: "refused".to_string(),
        };

        assert_eq!(missing.exit_code(), exitcode::CONFIG);
        assert_eq!(api.exit_code(), exitcode::PROTOCOL);
        assert_eq!(network.exit_code(), exitcode::UNAVAILABLE);
        assert_eq!(TzhError::EmptyInput.exit_code(), exitcode::NOINPUT);
        assert_ne!(api.exit_code(), 0);
    }

    #[test]
    fn test_config_missing_message_points_to_configure() {
        let err = TzhError::ConfigMissing {
            path: PathBuf::from("/home/u/.config/tzh/config.toml"),
        };
        let message = err.to_string();
        assert!(message.contains("/home/u/.config/tzh/config.toml"));
        assert!(message.contains("tzh c"));
    }

    #[test]
    fn test_api_error_keeps_status_and_body() {
        let err = TzhError::Api {
            status: 401,
            body: "invalid api key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed with status 401: invalid api key"
        );
    }
}
