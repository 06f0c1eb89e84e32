//! Discovery of OpenAPI schema documents.
//!
//! This crate reads a directory of `<name>.openapi.yaml` documents and
//! assembles the module index described by `openapi-index-core`.
//!
//! # Main entry points
//!
//! - [`discover_modules`]: scan a directory, load every conforming
//!   document and build the [`IndexFile`](openapi_index_core::IndexFile)
//!   plus the full document map.
//! - [`load_document`]: parse a single YAML document.
//! - [`relative_path`]: the lexical path computation used for module
//!   `path` fields.
//!
//! # Example
//!
//! ```no_run
//! use openapi_index_discovery::{DiscoverConfig, discover_modules};
//!
//! let config = DiscoverConfig::new("openapis").with_output_dir("generated");
//! let outcome = discover_modules(&config).unwrap();
//! for file in &outcome.ignored {
//!     println!("ignored file: {file}");
//! }
//! println!("{} module(s)", outcome.index.module_count());
//! ```

mod discover;
mod error;
mod loader;
mod paths;

pub use discover::{DiscoverConfig, DiscoverOutcome, discover_modules};
pub use error::{DiscoverError, Result};
pub use loader::{load_document, parse_document};
pub use paths::relative_path;
