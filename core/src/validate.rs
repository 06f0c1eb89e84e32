//! Manifest validation.
//!
//! Checks the structural invariants of an [`IndexFile`] read back from disk
//! or from an embedded artifact: the format version, module naming, unique
//! names and a usable document path for every entry.
//!
//! # Examples
//!
//! ```
//! use openapi_index_core::*;
//!
//! let module = ModuleDescriptor {
//!     name: "widget".into(),
//!     url: "https://x/widget".into(),
//!     path: "widget.openapi.yaml".into(),
//!     version: "2.0".into(),
//!     description: "Widget API".into(),
//!     summary: "Widget API".into(),
//! };
//! let mut index = IndexFile::new(vec![module.clone()]);
//! assert!(validate_index(&index).is_empty());
//!
//! index.modules.push(module);
//! let errors = validate_index(&index);
//! assert!(errors.iter().any(|e| matches!(e, ValidationError::DuplicateModule(_))));
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::naming::is_valid_module_name;
use crate::types::{INDEX_VERSION, IndexFile, MODULE_SUFFIX, ModuleDescriptor};

/// Manifest validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The manifest declares a format version this crate does not write.
    #[error("unsupported index version {found:?} (expected \"1.0.0\")")]
    UnsupportedVersion {
        /// Version found in the manifest.
        found: String,
    },
    /// Module name contains characters outside `[a-z0-9-]` or is empty.
    #[error("invalid module name: {0:?}")]
    InvalidModuleName(String),
    /// Two entries share a module name.
    #[error("duplicate module in index: {0}")]
    DuplicateModule(String),
    /// Module has an empty `url`.
    #[error("module {0} has an empty url")]
    EmptyUrl(String),
    /// Module `path` does not point at `<name>.openapi.yaml`.
    #[error("module {name} has unexpected path {path:?}")]
    InvalidPath {
        /// Module name.
        name: String,
        /// Offending path.
        path: String,
    },
}

/// Validates a manifest.
///
/// A version mismatch is reported alone since the remaining checks assume
/// the current format. Otherwise every problem found is reported.
pub fn validate_index(index: &IndexFile) -> Vec<ValidationError> {
    if index.version != INDEX_VERSION {
        return vec![ValidationError::UnsupportedVersion {
            found: index.version.clone(),
        }];
    }

    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for module in &index.modules {
        if !is_valid_module_name(&module.name) {
            errors.push(ValidationError::InvalidModuleName(module.name.clone()));
            continue;
        }
        if !seen.insert(module.name.as_str()) {
            errors.push(ValidationError::DuplicateModule(module.name.clone()));
        }
        if module.url.trim().is_empty() {
            errors.push(ValidationError::EmptyUrl(module.name.clone()));
        }
        if !path_matches_name(module) {
            errors.push(ValidationError::InvalidPath {
                name: module.name.clone(),
                path: module.path.clone(),
            });
        }
    }

    errors
}

fn path_matches_name(module: &ModuleDescriptor) -> bool {
    let filename = module.path.rsplit('/').next().unwrap_or_default();
    filename.strip_suffix(MODULE_SUFFIX) == Some(module.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str, path: &str) -> ModuleDescriptor {
        ModuleDescriptor {
            name: name.into(),
            url: format!("https://x/{name}"),
            path: path.into(),
            version: "1".into(),
            description: String::new(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_accepts_relative_paths_outside_output_dir() {
        let index = IndexFile::new(vec![
            module("a", "a.openapi.yaml"),
            module("b", "../specs/b.openapi.yaml"),
        ]);
        assert!(validate_index(&index).is_empty());
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut index = IndexFile::new(vec![module("A", "A.openapi.yaml")]);
        index.version = "2.0.0".into();
        assert_eq!(
            validate_index(&index),
            vec![ValidationError::UnsupportedVersion {
                found: "2.0.0".into()
            }]
        );
    }

    #[test]
    fn test_reports_every_problem() {
        let mut no_url = module("c", "c.openapi.yaml");
        no_url.url = " ".into();
        let index = IndexFile::new(vec![
            module("Bad", "Bad.openapi.yaml"),
            module("a", "a.openapi.yaml"),
            module("a", "a.openapi.yaml"),
            no_url,
            module("d", "e.openapi.yaml"),
        ]);
        assert_eq!(
            validate_index(&index),
            vec![
                ValidationError::InvalidModuleName("Bad".into()),
                ValidationError::DuplicateModule("a".into()),
                ValidationError::EmptyUrl("c".into()),
                ValidationError::InvalidPath {
                    name: "d".into(),
                    path: "e.openapi.yaml".into()
                },
            ]
        );
    }
}
