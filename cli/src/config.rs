//! Generator settings file.
//!
//! # Example YAML
//!
//! ```yaml
//! target: rust
//! package: openapi
//! extension_prefix: x-acme
//! ```
//!
//! Every key is optional. Command-line flags win over the file, and the
//! built-in defaults fill whatever neither sets.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use openapi_index_core::DEFAULT_EXTENSION_PREFIX;
use openapi_index_emit::{DEFAULT_PACKAGE, EmbedOptions, EmbedTarget};
use serde::Deserialize;

/// Settings as read from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Host language of the embed source.
    pub target: Option<EmbedTarget>,
    /// Go package clause of the embed source.
    pub package: Option<String>,
    /// Prefix of the `info` extension fields.
    pub extension_prefix: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub embed: EmbedOptions,
    pub extension_prefix: String,
}

impl GeneratorConfig {
    /// Loads a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|err| format!("failed to open config {}: {err}", path.display()))?;
        serde_yaml::from_reader(BufReader::new(file))
            .map_err(|err| format!("invalid config {}: {err}", path.display()))
    }

    /// Layers `overrides` on top of this file and fills the rest with
    /// defaults.
    pub fn resolve(self, overrides: GeneratorConfig) -> Settings {
        let target = overrides.target.or(self.target).unwrap_or_default();
        let package = overrides
            .package
            .or(self.package)
            .unwrap_or_else(|| DEFAULT_PACKAGE.to_string());
        let extension_prefix = overrides
            .extension_prefix
            .or(self.extension_prefix)
            .unwrap_or_else(|| DEFAULT_EXTENSION_PREFIX.to_string());

        Settings {
            embed: EmbedOptions::new(target).with_package(package),
            extension_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let settings = GeneratorConfig::default().resolve(GeneratorConfig::default());
        assert_eq!(settings.embed, EmbedOptions::default());
        assert_eq!(settings.extension_prefix, "x-mgc");
    }

    #[test]
    fn test_flags_override_file() {
        let file = GeneratorConfig {
            target: Some(EmbedTarget::Rust),
            package: Some("fromfile".into()),
            extension_prefix: Some("x-file".into()),
        };
        let flags = GeneratorConfig {
            package: Some("fromflag".into()),
            ..GeneratorConfig::default()
        };

        let settings = file.resolve(flags);
        assert_eq!(settings.embed.target, EmbedTarget::Rust);
        assert_eq!(settings.embed.package, "fromflag");
        assert_eq!(settings.extension_prefix, "x-file");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen.yaml");
        std::fs::write(&path, "target: rust\n").unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.target, Some(EmbedTarget::Rust));
        assert_eq!(config.package, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen.yaml");
        std::fs::write(&path, "targt: rust\n").unwrap();

        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(err.starts_with("invalid config"));
    }
}
