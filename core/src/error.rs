//! Error type for index assembly.

use thiserror::Error;

/// Errors raised while turning schema documents into an index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A required document field is absent or has the wrong shape.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// Two documents map to the same module name.
    #[error("duplicate module `{name}` (from {filename})")]
    DuplicateModule {
        /// Colliding module name.
        name: String,
        /// Filename of the second document claiming the name.
        filename: String,
    },

    /// The same filename was pushed twice.
    #[error("duplicate document {0}")]
    DuplicateDocument(String),
}
