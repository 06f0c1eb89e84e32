//! Index assembly.
//!
//! [`IndexBuilder`] collects one descriptor and one parsed document per
//! module and produces the manifest plus the full document map. Both outputs
//! always cover the same set of modules: a collision on module name or
//! filename is rejected instead of silently overwriting an earlier entry.

use std::collections::BTreeSet;

use crate::error::IndexError;
use crate::types::{FullModuleMap, IndexFile, ModuleDescriptor, SchemaDocument};

/// Accumulates modules in discovery order.
///
/// # Examples
///
/// ```
/// use openapi_index_core::*;
/// use serde_json::json;
///
/// let doc = json!({"$id": "https://x/widget", "info": {"description": "Widgets"}});
/// let header = SchemaHeader::from_document(&doc, DEFAULT_EXTENSION_PREFIX).unwrap();
///
/// let mut builder = IndexBuilder::new();
/// builder
///     .push(
///         "widget.openapi.yaml",
///         doc.clone(),
///         ModuleDescriptor::new("widget", "widget.openapi.yaml", &header),
///     )
///     .unwrap();
///
/// let (index, documents) = builder.build();
/// assert_eq!(index.modules[0].name, "widget");
/// assert!(documents.contains_key("widget.openapi.yaml"));
/// ```
#[derive(Debug, Default)]
pub struct IndexBuilder {
    modules: Vec<ModuleDescriptor>,
    names: BTreeSet<String>,
    documents: FullModuleMap,
}

impl IndexBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::DuplicateDocument`] if `filename` was already
    /// added, or [`IndexError::DuplicateModule`] if another document already
    /// produced `descriptor.name`. The builder is left unchanged on error.
    pub fn push(
        &mut self,
        filename: impl Into<String>,
        document: SchemaDocument,
        descriptor: ModuleDescriptor,
    ) -> Result<(), IndexError> {
        let filename = filename.into();
        if self.documents.contains_key(&filename) {
            return Err(IndexError::DuplicateDocument(filename));
        }
        if self.names.contains(&descriptor.name) {
            return Err(IndexError::DuplicateModule {
                name: descriptor.name,
                filename,
            });
        }

        self.names.insert(descriptor.name.clone());
        self.documents.insert(filename, document);
        self.modules.push(descriptor);
        Ok(())
    }

    /// Number of modules added so far.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if no module was added.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Finishes the index.
    pub fn build(self) -> (IndexFile, FullModuleMap) {
        (IndexFile::new(self.modules), self.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::INDEX_VERSION;
    use serde_json::json;

    fn descriptor(name: &str) -> ModuleDescriptor {
        ModuleDescriptor {
            name: name.into(),
            url: format!("https://x/{name}"),
            path: format!("{name}.openapi.yaml"),
            version: "1.0".into(),
            description: String::new(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_build_preserves_push_order() {
        let mut builder = IndexBuilder::new();
        builder
            .push("a.openapi.yaml", json!({"a": 1}), descriptor("a"))
            .unwrap();
        builder
            .push("b.openapi.yaml", json!({"b": 2}), descriptor("b"))
            .unwrap();
        assert_eq!(builder.len(), 2);

        let (index, documents) = builder.build();
        assert_eq!(index.version, INDEX_VERSION);
        let names: Vec<&str> = index.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn test_duplicate_module_name_rejected() {
        let mut builder = IndexBuilder::new();
        builder
            .push("a.openapi.yaml", json!({}), descriptor("a"))
            .unwrap();
        let err = builder
            .push("other.openapi.yaml", json!({}), descriptor("a"))
            .unwrap_err();
        assert_eq!(
            err,
            IndexError::DuplicateModule {
                name: "a".into(),
                filename: "other.openapi.yaml".into(),
            }
        );

        let (index, documents) = builder.build();
        assert_eq!(index.module_count(), 1);
        assert_eq!(documents.len(), 1);
        assert!(!documents.contains_key("other.openapi.yaml"));
    }

    #[test]
    fn test_duplicate_filename_rejected() {
        let mut builder = IndexBuilder::new();
        builder
            .push("a.openapi.yaml", json!({}), descriptor("a"))
            .unwrap();
        let err = builder
            .push("a.openapi.yaml", json!({}), descriptor("b"))
            .unwrap_err();
        assert!(matches!(err, IndexError::DuplicateDocument(_)));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_every_module_has_a_document() {
        let mut builder = IndexBuilder::new();
        for name in ["x", "y", "z"] {
            builder
                .push(format!("{name}.openapi.yaml"), json!({}), descriptor(name))
                .unwrap();
        }
        let (index, documents) = builder.build();
        for module in &index.modules {
            assert!(documents.contains_key(&format!("{}.openapi.yaml", module.name)));
        }
    }

    #[test]
    fn test_empty_builder() {
        let builder = IndexBuilder::new();
        assert!(builder.is_empty());
        let (index, documents) = builder.build();
        assert!(index.modules.is_empty());
        assert!(documents.is_empty());
    }
}
