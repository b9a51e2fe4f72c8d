//! Error type definitions for the playlist regrouper

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level application error type
///
/// Every variant is fatal: the run stops and no partial output is promised.
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading, creating or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file is not valid TOML for the expected shape
    #[error("Configuration parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration could not be rendered back to TOML
    #[error("Configuration render error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Wrap an I/O failure together with the path it happened on
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
