//! Filename convention for indexable documents.
//!
//! A schema document is indexed only when its filename has the form
//! `<name>.openapi.yaml`, where `<name>` is made of lowercase ASCII letters,
//! digits and hyphens. The manifest's own filename is never a module even
//! though it fits the pattern.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::INDEX_FILENAME;

static MODULE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[a-z0-9-]+)[.]openapi[.]yaml$").expect("static regex must compile")
});

/// Returns the module name encoded in `filename`, if it follows the
/// convention.
///
/// # Examples
///
/// ```
/// use openapi_index_core::module_name;
///
/// assert_eq!(module_name("block-storage.openapi.yaml"), Some("block-storage"));
/// assert_eq!(module_name("Widget.openapi.yaml"), None);
/// assert_eq!(module_name("widget.openapi.yml"), None);
/// ```
pub fn module_name(filename: &str) -> Option<&str> {
    MODULE_NAME_RE
        .captures(filename)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

/// Returns `true` if `filename` is the manifest itself.
pub fn is_index_file(filename: &str) -> bool {
    filename == INDEX_FILENAME
}

/// Returns `true` if `name` is a valid module name on its own.
pub fn is_valid_module_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_conventional_names() {
        assert_eq!(module_name("widget.openapi.yaml"), Some("widget"));
        assert_eq!(module_name("a.openapi.yaml"), Some("a"));
        assert_eq!(module_name("vm-2.openapi.yaml"), Some("vm-2"));
        assert_eq!(module_name("-.openapi.yaml"), Some("-"));
    }

    #[test]
    fn test_rejects_nonconforming_names() {
        for filename in [
            "NOTREADME.txt",
            "Widget.openapi.yaml",
            "widget_v2.openapi.yaml",
            "widget.openapi.yml",
            "widget.openapi.json",
            "widget.yaml",
            ".openapi.yaml",
            "widget.openapi.yaml.bak",
            "sub/widget.openapi.yaml",
            "widget.v1.openapi.yaml",
        ] {
            assert_eq!(module_name(filename), None, "{filename} should not match");
        }
    }

    #[test]
    fn test_index_filename_matches_pattern_but_is_flagged() {
        assert_eq!(module_name(INDEX_FILENAME), Some("index"));
        assert!(is_index_file(INDEX_FILENAME));
        assert!(!is_index_file("widget.openapi.yaml"));
    }

    #[test]
    fn test_valid_module_name() {
        assert!(is_valid_module_name("block-storage"));
        assert!(!is_valid_module_name(""));
        assert!(!is_valid_module_name("Block"));
        assert!(!is_valid_module_name("a_b"));
    }
}
