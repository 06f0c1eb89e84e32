//! Manifest file output.
//!
//! The manifest is written as YAML to [`INDEX_FILENAME`] inside the output
//! directory. Non-ASCII text is written verbatim and the layout is fixed by
//! the serializer, so identical indexes always produce identical files.
//!
//! The layout is `serde_yaml`'s: two-space indentation, `modules` entries
//! flush with their key, and fields in declaration order (`version` before
//! `modules`; `name`, `url`, `path`, `version`, `description`, `summary`
//! per module) rather than sorted. Manifests written by four-space,
//! key-sorting emitters differ in bytes but read back to the same
//! [`IndexFile`].
//!
//! # Examples
//!
//! ```no_run
//! use openapi_index_core::IndexFile;
//! use openapi_index_emit::{read_index, write_index};
//!
//! let index = write_index(IndexFile::new(Vec::new()), "generated").unwrap();
//! let loaded = read_index("generated/index.openapi.yaml").unwrap();
//! assert_eq!(loaded, index);
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use openapi_index_core::{INDEX_FILENAME, IndexFile};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::Result;

/// Path of the manifest inside `dir`.
pub fn index_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(INDEX_FILENAME)
}

/// Serializes the manifest to YAML text.
///
/// # Errors
///
/// Returns [`YamlError`](crate::EmitError::YamlError) if serialization
/// fails.
pub fn render_index(index: &IndexFile) -> Result<String> {
    Ok(serde_yaml::to_string(index)?)
}

/// Writes the manifest to `dir/index.openapi.yaml`.
///
/// Any existing file at that path is overwritten. The index is handed back
/// so the caller can feed it to the embed writer without reading the file
/// again.
///
/// # Errors
///
/// Returns [`IoError`](crate::EmitError::IoError) if the file cannot be
/// written, or [`YamlError`](crate::EmitError::YamlError) if serialization
/// fails.
pub fn write_index(index: IndexFile, dir: impl AsRef<Path>) -> Result<IndexFile> {
    let rendered = render_index(&index)?;
    write_rendered_index(&rendered, dir)?;
    Ok(index)
}

/// Writes manifest text from [`render_index`] to `dir/index.openapi.yaml`
/// and returns the path written.
///
/// Lets a caller that already holds the rendered text write and checksum
/// the same bytes.
///
/// # Errors
///
/// Returns [`IoError`](crate::EmitError::IoError) if the file cannot be
/// written.
pub fn write_rendered_index(rendered: &str, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = index_path(dir);

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;

    debug!(path = %path.display(), bytes = rendered.len(), "wrote index");
    Ok(path)
}

/// Reads a manifest back from a YAML file.
///
/// # Errors
///
/// Returns [`IoError`](crate::EmitError::IoError) if the file cannot be
/// read, or [`YamlError`](crate::EmitError::YamlError) if the content is not
/// a valid manifest.
pub fn read_index(path: impl AsRef<Path>) -> Result<IndexFile> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}

/// Computes the SHA-256 hex digest of an artifact.
///
/// # Examples
///
/// ```
/// use openapi_index_emit::checksum;
///
/// assert_eq!(
///     checksum(b"hello world"),
///     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
/// );
/// ```
pub fn checksum(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
