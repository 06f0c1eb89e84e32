//! Error types for loading manifests and documents.

use std::path::PathBuf;

use openapi_index_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading from a [`Loader`](crate::Loader).
#[derive(Debug, Error)]
pub enum LoaderError {
    /// No source holds a file with this name.
    #[error("open {0}: no such file or directory")]
    NotFound(String),

    /// A file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    IoError {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A manifest or document is not valid YAML.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The manifest parsed but breaks an index invariant.
    #[error("invalid index: {}", join_problems(.0))]
    InvalidIndex(Vec<ValidationError>),

    /// The manifest lists no module with this name.
    #[error("unknown module {0:?}")]
    UnknownModule(String),
}

fn join_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for results with [`LoaderError`].
pub type Result<T> = std::result::Result<T, LoaderError>;
