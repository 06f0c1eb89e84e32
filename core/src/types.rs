//! Manifest data model for OpenAPI module indexes.
//!
//! The types here describe the generated manifest (`index.openapi.yaml`) and
//! the small slice of each schema document the indexer actually reads. Full
//! documents stay untyped ([`SchemaDocument`]) because the indexer never
//! interprets them beyond the header fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::IndexError;

/// Fixed filename of the generated manifest.
pub const INDEX_FILENAME: &str = "index.openapi.yaml";

/// Format version written into every manifest.
pub const INDEX_VERSION: &str = "1.0.0";

/// Filename suffix shared by all indexable schema documents.
pub const MODULE_SUFFIX: &str = ".openapi.yaml";

/// Default prefix of the vendor extension fields inside `info`.
pub const DEFAULT_EXTENSION_PREFIX: &str = "x-mgc";

/// A parsed schema document, kept as a loosely structured value.
pub type SchemaDocument = Value;

/// Parsed documents keyed by their original filename.
///
/// Ordered so that iteration yields filenames in lexicographic order.
pub type FullModuleMap = BTreeMap<String, SchemaDocument>;

/// The `info` fields used to describe a module.
///
/// Every field is optional. The resolved values follow a fixed fallback
/// order:
///
/// | Field | Order |
/// |-------|-------|
/// | version | `<prefix>-version`, `version`, `""` |
/// | description | `<prefix>-description`, `description`, `""` |
/// | summary | `summary`, resolved description |
///
/// # Examples
///
/// ```
/// use openapi_index_core::SchemaInfo;
///
/// let info = SchemaInfo {
///     description: Some("Widget API".into()),
///     ..Default::default()
/// };
/// assert_eq!(info.resolved_description(), "Widget API");
/// assert_eq!(info.resolved_summary(), "Widget API");
/// assert_eq!(info.resolved_version(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaInfo {
    /// `info.version`.
    pub version: Option<String>,
    /// `info.description`.
    pub description: Option<String>,
    /// `info.summary`.
    pub summary: Option<String>,
    /// `info.<prefix>-version`, preferred over `version`.
    pub extended_version: Option<String>,
    /// `info.<prefix>-description`, preferred over `description`.
    pub extended_description: Option<String>,
}

impl SchemaInfo {
    /// Reads the known fields from an `info` mapping.
    ///
    /// Numbers and booleans are accepted and rendered as text, so an
    /// unquoted `version: 2.0` yields `"2.0"`. Other value kinds are treated
    /// as absent.
    pub fn from_mapping(info: &serde_json::Map<String, Value>, extension_prefix: &str) -> Self {
        let field = |key: &str| info.get(key).and_then(scalar_text);
        Self {
            version: field("version"),
            description: field("description"),
            summary: field("summary"),
            extended_version: field(format!("{extension_prefix}-version").as_str()),
            extended_description: field(format!("{extension_prefix}-description").as_str()),
        }
    }

    /// Version with extension fallback applied.
    pub fn resolved_version(&self) -> String {
        self.extended_version
            .as_ref()
            .or(self.version.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Description with extension fallback applied.
    pub fn resolved_description(&self) -> String {
        self.extended_description
            .as_ref()
            .or(self.description.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Summary, falling back to the resolved description.
    pub fn resolved_summary(&self) -> String {
        self.summary
            .clone()
            .unwrap_or_else(|| self.resolved_description())
    }
}

/// Identifying header of a schema document: its `$id` and `info` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaHeader {
    /// Canonical URL of the document (`$id`).
    pub id: String,
    /// Descriptive metadata from `info`.
    pub info: SchemaInfo,
}

impl SchemaHeader {
    /// Extracts the header from a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::MissingField`] when `$id` is absent, blank or
    /// not a scalar, or when `info` is absent or not a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use openapi_index_core::SchemaHeader;
    /// use serde_json::json;
    ///
    /// let doc = json!({
    ///     "$id": "https://x/widget",
    ///     "info": {"version": "2.0", "x-mgc-description": "Widgets"}
    /// });
    /// let header = SchemaHeader::from_document(&doc, "x-mgc").unwrap();
    /// assert_eq!(header.id, "https://x/widget");
    /// assert_eq!(header.info.resolved_description(), "Widgets");
    ///
    /// assert!(SchemaHeader::from_document(&json!({"info": {}}), "x-mgc").is_err());
    /// ```
    pub fn from_document(document: &Value, extension_prefix: &str) -> Result<Self, IndexError> {
        let id = document
            .get("$id")
            .and_then(scalar_text)
            .filter(|id| !id.trim().is_empty())
            .ok_or(IndexError::MissingField("$id"))?;
        let info = document
            .get("info")
            .and_then(Value::as_object)
            .ok_or(IndexError::MissingField("info"))?;

        Ok(Self {
            id,
            info: SchemaInfo::from_mapping(info, extension_prefix),
        })
    }
}

/// One entry of the manifest's `modules` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Short module name derived from the filename.
    pub name: String,
    /// Canonical URL from the document's `$id`.
    pub url: String,
    /// Path of the document relative to the manifest directory.
    pub path: String,
    /// Resolved API version.
    pub version: String,
    /// Resolved description.
    pub description: String,
    /// Resolved summary.
    pub summary: String,
}

impl ModuleDescriptor {
    /// Builds a descriptor from a module name, its relative path and the
    /// document header.
    pub fn new(name: impl Into<String>, path: impl Into<String>, header: &SchemaHeader) -> Self {
        Self {
            name: name.into(),
            url: header.id.clone(),
            path: path.into(),
            version: header.info.resolved_version(),
            description: header.info.resolved_description(),
            summary: header.info.resolved_summary(),
        }
    }
}

/// The manifest written to [`INDEX_FILENAME`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFile {
    /// Manifest format version, always [`INDEX_VERSION`] when generated.
    pub version: String,
    /// Modules in source filename order.
    pub modules: Vec<ModuleDescriptor>,
}

impl IndexFile {
    /// Wraps descriptors with the fixed format version.
    ///
    /// # Examples
    ///
    /// ```
    /// use openapi_index_core::{IndexFile, INDEX_VERSION};
    ///
    /// let index = IndexFile::new(Vec::new());
    /// assert_eq!(index.version, INDEX_VERSION);
    /// assert!(index.modules.is_empty());
    /// ```
    pub fn new(modules: Vec<ModuleDescriptor>) -> Self {
        Self {
            version: INDEX_VERSION.to_string(),
            modules,
        }
    }

    /// Looks up a module by name.
    pub fn find_module(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.iter().find(|module| module.name == name)
    }

    /// Returns the number of indexed modules.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn info(value: Value) -> SchemaInfo {
        SchemaInfo::from_mapping(value.as_object().unwrap(), DEFAULT_EXTENSION_PREFIX)
    }

    #[test]
    fn test_standard_description_used_without_extension() {
        let info = info(json!({"version": "2.0", "description": "Widget API"}));
        assert_eq!(info.resolved_version(), "2.0");
        assert_eq!(info.resolved_description(), "Widget API");
        assert_eq!(info.resolved_summary(), "Widget API");
    }

    #[test]
    fn test_extension_fields_take_precedence() {
        let info = info(json!({
            "version": "1.0",
            "x-mgc-version": "1.2",
            "description": "plain",
            "x-mgc-description": "extended",
            "summary": "short"
        }));
        assert_eq!(info.resolved_version(), "1.2");
        assert_eq!(info.resolved_description(), "extended");
        assert_eq!(info.resolved_summary(), "short");
    }

    #[test]
    fn test_summary_falls_back_to_extended_description() {
        let info = info(json!({"x-mgc-description": "extended"}));
        assert_eq!(info.resolved_summary(), "extended");
    }

    #[test]
    fn test_missing_fields_resolve_to_empty() {
        let info = info(json!({}));
        assert_eq!(info.resolved_version(), "");
        assert_eq!(info.resolved_description(), "");
        assert_eq!(info.resolved_summary(), "");
    }

    #[test]
    fn test_numeric_version_rendered_as_text() {
        let info = info(json!({"version": 3}));
        assert_eq!(info.resolved_version(), "3");
    }

    #[test]
    fn test_custom_extension_prefix() {
        let raw = json!({"description": "plain", "x-acme-description": "acme"});
        let info = SchemaInfo::from_mapping(raw.as_object().unwrap(), "x-acme");
        assert_eq!(info.resolved_description(), "acme");
    }

    #[test]
    fn test_header_requires_id_and_info() {
        let missing_id = json!({"info": {"version": "1"}});
        assert!(matches!(
            SchemaHeader::from_document(&missing_id, "x-mgc"),
            Err(IndexError::MissingField("$id"))
        ));

        let missing_info = json!({"$id": "https://x/y"});
        assert!(matches!(
            SchemaHeader::from_document(&missing_info, "x-mgc"),
            Err(IndexError::MissingField("info"))
        ));

        for blank in ["", "   "] {
            let blank_id = json!({"$id": blank, "info": {}});
            assert!(matches!(
                SchemaHeader::from_document(&blank_id, "x-mgc"),
                Err(IndexError::MissingField("$id"))
            ));
        }

        let info_not_mapping = json!({"$id": "https://x/y", "info": "nope"});
        assert!(SchemaHeader::from_document(&info_not_mapping, "x-mgc").is_err());
    }

    #[test]
    fn test_descriptor_from_header() {
        let doc = json!({
            "$id": "https://x/widget",
            "info": {"version": "2.0", "description": "Widget API"}
        });
        let header = SchemaHeader::from_document(&doc, DEFAULT_EXTENSION_PREFIX).unwrap();
        let module = ModuleDescriptor::new("widget", "widget.openapi.yaml", &header);
        assert_eq!(
            module,
            ModuleDescriptor {
                name: "widget".into(),
                url: "https://x/widget".into(),
                path: "widget.openapi.yaml".into(),
                version: "2.0".into(),
                description: "Widget API".into(),
                summary: "Widget API".into(),
            }
        );
    }

    #[test]
    fn test_find_module() {
        let doc = json!({"$id": "u", "info": {}});
        let header = SchemaHeader::from_document(&doc, DEFAULT_EXTENSION_PREFIX).unwrap();
        let index = IndexFile::new(vec![ModuleDescriptor::new("a", "a.openapi.yaml", &header)]);
        assert_eq!(index.module_count(), 1);
        assert!(index.find_module("a").is_some());
        assert!(index.find_module("b").is_none());
    }
}
