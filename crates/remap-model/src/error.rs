//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating a pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for the expected shape.
    #[error("cannot parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A separator is not exactly one ASCII character.
    #[error("{field} must be a single ASCII character, got {value:?}")]
    Separator { field: &'static str, value: String },
}
