//! Host-language templates for the embed artifact.
//!
//! A template owns everything in the generated file that does not depend on
//! the input documents: the header, the loader scaffolding and the closing
//! delimiter. It also knows how to spell one payload entry as a string
//! literal of its host language. The payload itself comes from
//! [`payload`](crate::payload), so a new host language only needs a new
//! [`EmbedTarget`] arm here.

use serde::Deserialize;

use crate::error::{EmitError, Result};
use crate::payload::EmbedEntry;

/// Package name used for Go output unless overridden.
pub const DEFAULT_PACKAGE: &str = "openapi";

/// Host language of the generated embed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedTarget {
    /// Go source for the `embed` build tag, loaded through `dataloader`.
    #[default]
    Go,
    /// Self-contained Rust module with a static lookup table.
    Rust,
}

impl EmbedTarget {
    /// Header and loader scaffolding, up to the opening of the data table.
    pub fn header(self, package: &str) -> String {
        match self {
            Self::Go => format!("{GO_PREAMBLE}{package}{GO_SCAFFOLDING}"),
            Self::Rust => RUST_SCAFFOLDING.to_string(),
        }
    }

    /// One line of the data table.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError`](crate::EmitError::JsonError) if a Go string
    /// literal cannot be produced.
    pub fn entry(self, entry: &EmbedEntry) -> Result<String> {
        match self {
            Self::Go => Ok(format!(
                "\t{}: ([]byte)({}),\n",
                go_string(&entry.name)?,
                go_string(&entry.data)?
            )),
            Self::Rust => Ok(format!(
                "    ({}, {}.as_bytes()),\n",
                rust_string(&entry.name),
                rust_string(&entry.data)
            )),
        }
    }

    /// Closing delimiter of the data table.
    pub fn footer(self) -> &'static str {
        match self {
            Self::Go => "}\n",
            Self::Rust => "];\n",
        }
    }

    /// Checks that `package` can be used with this target.
    ///
    /// Rust output has no package clause, so any name is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidPackageName`] for a Go package name that
    /// is not an identifier.
    pub fn check_package(self, package: &str) -> Result<()> {
        match self {
            Self::Go if !is_identifier(package) => {
                Err(EmitError::InvalidPackageName(package.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for EmbedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Go => f.write_str("go"),
            Self::Rust => f.write_str("rust"),
        }
    }
}

const GO_PREAMBLE: &str = concat!(
    "// Code generated by oapi_index_gen. DO NOT EDIT.\n",
    "\n",
    "//go:build embed\n",
    "\n",
    "//nolint\n",
    "\n",
    "package ",
);

const GO_SCAFFOLDING: &str = concat!(
    "\n",
    "\n",
    "import (\n",
    "\t\"os\"\n",
    "\t\"syscall\"\n",
    "\t\"magalu.cloud/core/dataloader\"\n",
    ")\n",
    "\n",
    "type embedLoader map[string][]byte\n",
    "\n",
    "func GetEmbedLoader() dataloader.Loader {\n",
    "\treturn embedLoaderInstance\n",
    "}\n",
    "\n",
    "func (f embedLoader) Load(name string) ([]byte, error) {\n",
    "\tif data, ok := embedLoaderInstance[name]; ok {\n",
    "\t\treturn data, nil\n",
    "\t}\n",
    "\treturn nil, &os.PathError{Op: \"open\", Path: name, Err: syscall.ENOENT}\n",
    "}\n",
    "\n",
    "func (f embedLoader) String() string {\n",
    "\treturn \"embedLoader\"\n",
    "}\n",
    "\n",
    "var embedLoaderInstance = embedLoader{\n",
);

const RUST_SCAFFOLDING: &str = r#"// Code generated by oapi_index_gen. DO NOT EDIT.
//
// Compile behind the host's `embed` feature, e.g.
// `#[cfg(feature = "embed")] mod embedded_openapi;`

/// Loader over the embedded documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbedLoader;

/// Returns the embedded document loader.
pub fn embed_loader() -> EmbedLoader {
    EmbedLoader
}

impl EmbedLoader {
    /// Returns the bytes embedded under `name`.
    pub fn load(&self, name: &str) -> ::std::io::Result<&'static [u8]> {
        EMBEDDED_FILES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, data)| *data)
            .ok_or_else(|| {
                ::std::io::Error::new(
                    ::std::io::ErrorKind::NotFound,
                    format!("open {name}: no such file or directory"),
                )
            })
    }

    /// Every embedded `(name, bytes)` pair, manifest first.
    pub fn entries(&self) -> &'static [(&'static str, &'static [u8])] {
        EMBEDDED_FILES
    }
}

impl ::std::fmt::Display for EmbedLoader {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str("embedLoader")
    }
}

#[rustfmt::skip]
#[allow(clippy::all)]
pub static EMBEDDED_FILES: &[(&str, &[u8])] = &[
"#;

/// Go interpreted string literal. JSON string syntax is a subset of it.
fn go_string(text: &str) -> Result<String> {
    Ok(serde_json::to_string(text)?)
}

/// Rust string literal with only the characters that need it escaped.
///
/// Bidirectional control codepoints are escaped as well since rustc rejects
/// them inside literals.
fn rust_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() || is_bidi_control(c) => {
                out.push_str(&format!("\\u{{{:x}}}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
