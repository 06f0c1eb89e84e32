//! Core types for OpenAPI module indexes.
//!
//! This crate defines the manifest data model and the pure steps of index
//! generation:
//!
//! - [`IndexFile`] and [`ModuleDescriptor`]: the manifest written to
//!   [`INDEX_FILENAME`].
//! - [`SchemaHeader`] and [`SchemaInfo`]: the typed view of the `$id` and
//!   `info` fields read from each schema document, with documented fallbacks.
//! - [`module_name`]: the `<name>.openapi.yaml` filename convention.
//! - [`IndexBuilder`]: assembles descriptors and full documents, rejecting
//!   name collisions.
//! - [`validate_index`]: structural checks for manifests read back in.
//!
//! Filesystem access lives in `openapi-index-discovery` (reading) and
//! `openapi-index-emit` (writing).
//!
//! # Example
//!
//! ```
//! use openapi_index_core::*;
//! use serde_json::json;
//!
//! let filename = "widget.openapi.yaml";
//! let doc = json!({
//!     "$id": "https://x/widget",
//!     "info": {"version": "2.0", "description": "Widget API"}
//! });
//!
//! let name = module_name(filename).unwrap();
//! let header = SchemaHeader::from_document(&doc, DEFAULT_EXTENSION_PREFIX).unwrap();
//!
//! let mut builder = IndexBuilder::new();
//! builder
//!     .push(filename, doc.clone(), ModuleDescriptor::new(name, filename, &header))
//!     .unwrap();
//! let (index, _documents) = builder.build();
//!
//! assert_eq!(index.modules[0].summary, "Widget API");
//! assert!(validate_index(&index).is_empty());
//! ```

mod error;
mod index;
mod naming;
mod types;
mod validate;

pub use error::IndexError;
pub use index::IndexBuilder;
pub use naming::{is_index_file, is_valid_module_name, module_name};
pub use types::*;
pub use validate::{ValidationError, validate_index};
