//! Host-side access to OpenAPI module manifests and documents.
//!
//! Programs that consume the generated index read it through a [`Loader`]:
//! a directory on disk, the table compiled in from a Rust embed source, or a
//! [`MergeLoader`] that prefers the first and falls back to the second.
//! [`ModuleCatalog`] sits on top and exposes the validated manifest and the
//! parsed documents.
//!
//! # Quick start
//!
//! ```no_run
//! use openapi_index_loader::{FileLoader, MergeLoader, ModuleCatalog};
//!
//! static EMBEDDED: &[(&str, &[u8])] = &[];
//!
//! let loader = MergeLoader::builder()
//!     .with_loader(FileLoader::from_env("MGC_SDK_OPENAPI_DIR", "openapis"))
//!     .with_static("embedLoader", EMBEDDED)
//!     .build();
//! let catalog = ModuleCatalog::open(loader).unwrap();
//! println!("{} modules", catalog.modules().len());
//! ```

mod catalog;
mod error;
mod source;

pub use catalog::ModuleCatalog;
pub use error::{LoaderError, Result};
pub use source::{FileLoader, Loader, MergeLoader, MergeLoaderBuilder, StaticLoader};
