//! Error types for manifest and embed output.
//!
//! Covers every failure mode of the writers: I/O on the destination,
//! serialization of the manifest or documents, and invalid embed options.

use thiserror::Error;

/// Errors that can occur while writing artifacts.
#[derive(Debug, Error)]
pub enum EmitError {
    /// File or sink I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The package name cannot be used in the generated source.
    #[error("invalid package name {0:?}: must be an identifier")]
    InvalidPackageName(String),
}

/// Convenience alias for results with [`EmitError`].
pub type Result<T> = std::result::Result<T, EmitError>;
