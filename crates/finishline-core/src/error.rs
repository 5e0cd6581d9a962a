//! Core error types for finishline-core.
//!
//! Construction-time problems surface as [`ConfigError`]; scene files add
//! their own I/O and TOML failures on top via [`SceneError`]. Run-time
//! irregularities (narrow viewport, missing reference elements) are not
//! errors at all and never appear here.

use std::path::PathBuf;
use thiserror::Error;

/// Zone configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The options were not a record at all
    #[error("Finish line options set incorrectly: expected a record, got {found}")]
    NotARecord { found: &'static str },

    /// The record could not be read into zone options
    #[error("Failed to parse zone options: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// A field was present but unusable
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Scene file errors.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to access scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize scene TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid zone in scene: {0}")]
    Config(#[from] ConfigError),

    #[error("Duplicate element selector in scene: {0}")]
    DuplicateElement(String),

    #[error("Invalid geometry for element '{selector}': {message}")]
    InvalidGeometry { selector: String, message: String },
}

