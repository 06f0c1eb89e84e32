//! Error type for discovery runs.

use std::path::PathBuf;

use openapi_index_core::IndexError;

/// Typed error for document loading and module discovery.
///
/// Every variant is fatal for the run; tolerated conditions (non-matching
/// filenames) are reported through
/// [`DiscoverOutcome::ignored`](crate::DiscoverOutcome::ignored) instead.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    /// Listing the source directory failed.
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading a schema document failed.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A schema document is not valid YAML (or not representable as JSON).
    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        /// Document path.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// A document could not be turned into a module.
    #[error("invalid module document '{}': {source}", path.display())]
    Index {
        /// Document path.
        path: PathBuf,
        /// Underlying index error.
        source: IndexError,
    },

    /// The current directory could not be resolved for relative paths.
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Convenience alias for results with [`DiscoverError`].
pub type Result<T> = std::result::Result<T, DiscoverError>;
