//! Embed source generation.
//!
//! Joins the payload from [`payload`](crate::payload) with a host-language
//! [`EmbedTarget`] template and writes the result to any byte sink.

use std::io::Write;

use openapi_index_core::{FullModuleMap, IndexFile};
use tracing::debug;

use crate::error::Result;
use crate::payload::embed_entries;
use crate::template::{DEFAULT_PACKAGE, EmbedTarget};

/// Options for the embed artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Host language of the generated source.
    pub target: EmbedTarget,
    /// Package clause for Go output.
    pub package: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            target: EmbedTarget::Go,
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl EmbedOptions {
    /// Options for `target` with the default package name.
    pub fn new(target: EmbedTarget) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Sets the package name.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }
}

/// Writes the embed source for `index` and `documents` to `sink`.
///
/// The manifest entry comes first, then one entry per document in filename
/// order. The sink is flushed but never closed.
///
/// # Errors
///
/// Returns [`InvalidPackageName`](crate::EmitError::InvalidPackageName)
/// before anything is written if the package name is unusable, otherwise
/// any serialization or I/O failure.
///
/// # Examples
///
/// ```
/// use openapi_index_core::{FullModuleMap, IndexFile};
/// use openapi_index_emit::{EmbedOptions, write_embed};
///
/// let mut out = Vec::new();
/// write_embed(
///     &IndexFile::new(Vec::new()),
///     &FullModuleMap::new(),
///     &EmbedOptions::default(),
///     &mut out,
/// )
/// .unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.ends_with("\t\"index.openapi.yaml\": ([]byte)(\"{\\\"modules\\\":[],\\\"version\\\":\\\"1.0.0\\\"}\"),\n}\n"));
/// ```
pub fn write_embed<W: Write>(
    index: &IndexFile,
    documents: &FullModuleMap,
    options: &EmbedOptions,
    sink: &mut W,
) -> Result<()> {
    let target = options.target;
    target.check_package(&options.package)?;
    let entries = embed_entries(index, documents)?;

    sink.write_all(target.header(&options.package).as_bytes())?;
    for entry in &entries {
        sink.write_all(target.entry(entry)?.as_bytes())?;
    }
    sink.write_all(target.footer().as_bytes())?;
    sink.flush()?;

    debug!(%target, entries = entries.len(), "wrote embed source");
    Ok(())
}

/// Renders the embed source to a string.
///
/// # Errors
///
/// Same as [`write_embed`].
pub fn render_embed(
    index: &IndexFile,
    documents: &FullModuleMap,
    options: &EmbedOptions,
) -> Result<String> {
    let mut out = Vec::new();
    write_embed(index, documents, options, &mut out)?;
    // Every piece written above is a Rust `String`.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
