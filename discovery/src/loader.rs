//! Schema document loading.

use std::fs;
use std::path::Path;

use openapi_index_core::SchemaDocument;
use serde_yaml::Value as YamlValue;
use tracing::debug;

use crate::error::{DiscoverError, Result};

/// Reads and parses a YAML schema document.
///
/// The whole file is parsed into a [`SchemaDocument`]. Mapping keys that are
/// YAML scalars but not strings (such as response codes written as `200:`)
/// are kept as their text. There is no recovery: any I/O or parse error is
/// returned as is, with the offending path attached.
///
/// # Errors
///
/// Returns [`DiscoverError::Io`] if the file cannot be read, or
/// [`DiscoverError::Parse`] if it is not a valid YAML document.
///
/// # Examples
///
/// ```no_run
/// use openapi_index_discovery::load_document;
///
/// let doc = load_document("openapis/widget.openapi.yaml").unwrap();
/// println!("{}", doc["$id"]);
/// ```
pub fn load_document(path: impl AsRef<Path>) -> Result<SchemaDocument> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DiscoverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&raw).map_err(|source| DiscoverError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "loaded schema document");
    Ok(document)
}

/// Parses YAML text into a [`SchemaDocument`].
///
/// Anchors are resolved and merge keys (`<<: *anchor`) are applied before
/// the document is converted, so shared blocks appear inline. Scalar
/// mapping keys become their text (`200:` turns into `"200"`).
pub fn parse_document(raw: &str) -> std::result::Result<SchemaDocument, serde_yaml::Error> {
    let mut value: YamlValue = serde_yaml::from_str(raw)?;
    value.apply_merge()?;
    stringify_keys(&mut value);
    serde_yaml::from_value(value)
}

fn stringify_keys(value: &mut YamlValue) {
    match value {
        YamlValue::Mapping(map) => {
            for (key, mut item) in std::mem::take(map) {
                stringify_keys(&mut item);
                map.insert(key_text(key), item);
            }
        }
        YamlValue::Sequence(items) => items.iter_mut().for_each(stringify_keys),
        YamlValue::Tagged(tagged) => stringify_keys(&mut tagged.value),
        _ => {}
    }
}

fn key_text(key: YamlValue) -> YamlValue {
    match key {
        YamlValue::Number(number) => YamlValue::String(number.to_string()),
        YamlValue::Bool(flag) => YamlValue::String(flag.to_string()),
        YamlValue::Null => YamlValue::String("null".to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_nested_document() {
        let doc = parse_document(
            r#"
$id: https://x/widget
info:
  version: "2.0"
  description: Widget API
paths:
  /widgets:
    get:
      responses:
        "200":
          description: ok
tags: [a, b]
"#,
        )
        .unwrap();
        assert_eq!(doc["$id"], "https://x/widget");
        assert_eq!(doc["info"]["version"], "2.0");
        assert_eq!(
            doc["paths"]["/widgets"]["get"]["responses"]["200"]["description"],
            "ok"
        );
        assert_eq!(doc["tags"], json!(["a", "b"]));
    }

    #[test]
    fn test_parse_applies_merge_keys() {
        let doc = parse_document(concat!(
            "components:\n",
            "  base: &base\n",
            "    description: shared\n",
            "    type: object\n",
            "  derived:\n",
            "    <<: *base\n",
            "    type: array\n",
        ))
        .unwrap();
        assert_eq!(
            doc["components"]["derived"],
            json!({"description": "shared", "type": "array"})
        );
        assert!(doc["components"]["derived"].get("<<").is_none());
    }

    #[test]
    fn test_parse_unquoted_numeric_keys() {
        let doc = parse_document("responses:\n  200:\n    description: ok\n  404: {}\n").unwrap();
        assert_eq!(doc["responses"]["200"]["description"], "ok");
        assert_eq!(doc["responses"]["404"], json!({}));
    }

    #[test]
    fn test_parse_keeps_non_ascii() {
        let doc = parse_document("info:\n  description: Máquinas virtuais ☁\n").unwrap();
        assert_eq!(doc["info"]["description"], "Máquinas virtuais ☁");
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(parse_document("info: [unclosed").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path().join("absent.openapi.yaml")).unwrap_err();
        assert!(matches!(err, DiscoverError::Io { .. }));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.openapi.yaml");
        std::fs::write(&path, "info: {").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, DiscoverError::Parse { .. }));
        assert!(err.to_string().contains("broken.openapi.yaml"));
    }
}
