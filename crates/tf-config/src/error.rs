// error.rs — Error types for the configuration subsystem.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while applying configuration side effects.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest file could not be parsed.
    #[error("manifest parse error: {0}")]
    ManifestError(#[from] toml::de::Error),
}
