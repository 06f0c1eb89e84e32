//! Embed payload serialization.
//!
//! The payload is the data half of the embed artifact: the manifest followed
//! by every document, each serialized as compact JSON. Compact here means no
//! whitespace between tokens, object keys in ascending order at every depth
//! and non-ASCII text kept literal. Equal inputs therefore always yield the
//! same bytes.

use openapi_index_core::{FullModuleMap, INDEX_FILENAME, IndexFile};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// One file of the embed artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedEntry {
    /// Lookup key (the original filename).
    pub name: String,
    /// Compact JSON text of the file.
    pub data: String,
}

/// Serializes a value as compact JSON with sorted object keys.
///
/// # Errors
///
/// Returns [`JsonError`](crate::EmitError::JsonError) if the value cannot be
/// represented as JSON.
///
/// # Examples
///
/// ```
/// use openapi_index_emit::compact_json;
/// use serde_json::json;
///
/// let text = compact_json(&json!({"b": [1, 2], "a": {"z": "ç", "y": null}})).unwrap();
/// assert_eq!(text, r#"{"a":{"y":null,"z":"ç"},"b":[1,2]}"#);
/// ```
pub fn compact_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = sort_keys(serde_json::to_value(value)?);
    Ok(serde_json::to_string(&value)?)
}

/// Builds the ordered entries of the embed artifact.
///
/// The manifest comes first under [`INDEX_FILENAME`], followed by every
/// document in filename order.
///
/// # Errors
///
/// Returns [`JsonError`](crate::EmitError::JsonError) if a document cannot
/// be serialized.
pub fn embed_entries(index: &IndexFile, documents: &FullModuleMap) -> Result<Vec<EmbedEntry>> {
    let mut entries = Vec::with_capacity(documents.len() + 1);
    entries.push(EmbedEntry {
        name: INDEX_FILENAME.to_string(),
        data: compact_json(index)?,
    });
    for (filename, document) in documents {
        entries.push(EmbedEntry {
            name: filename.clone(),
            data: compact_json(document)?,
        });
    }
    Ok(entries)
}

/// Rebuilds every object with its keys in ascending order.
///
/// `serde_json` already keeps maps sorted unless its `preserve_order`
/// feature is enabled somewhere in the build; this makes the order hold
/// either way.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut pairs: Vec<(String, Value)> = map.into_iter().collect();
            pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
            let sorted: Map<String, Value> = pairs
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
