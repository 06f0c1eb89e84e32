//! Artifact writers for the OpenAPI module index.
//!
//! Two artifacts are produced from a discovered index:
//!
//! - the **manifest** ([`write_index`]), a YAML file listing every module;
//! - the **embed source** ([`write_embed`]), a host-language source file
//!   that carries the manifest and every document as compact JSON string
//!   literals together with a small lookup loader.
//!
//! Both are deterministic: the same index and documents always yield the
//! same bytes, which [`checksum`] makes easy to compare.
//!
//! # Example
//!
//! ```
//! use openapi_index_core::{FullModuleMap, IndexFile};
//! use openapi_index_emit::{EmbedOptions, EmbedTarget, render_embed, render_index};
//!
//! let index = IndexFile::new(Vec::new());
//! let yaml = render_index(&index).unwrap();
//! assert!(yaml.starts_with("version: 1.0.0"));
//!
//! let source = render_embed(&index, &FullModuleMap::new(), &EmbedOptions::new(EmbedTarget::Rust))
//!     .unwrap();
//! assert!(source.contains("EMBEDDED_FILES"));
//! ```

mod embed;
mod error;
mod manifest;
mod payload;
mod template;

pub use embed::{EmbedOptions, render_embed, write_embed};
pub use error::{EmitError, Result};
pub use manifest::{
    checksum, index_path, read_index, render_index, write_index, write_rendered_index,
};
pub use payload::{EmbedEntry, compact_json, embed_entries};
pub use template::{DEFAULT_PACKAGE, EmbedTarget};
