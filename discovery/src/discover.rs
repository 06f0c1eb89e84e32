//! Module discovery for a directory of schema documents.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use openapi_index_core::{
    DEFAULT_EXTENSION_PREFIX, FullModuleMap, IndexBuilder, IndexFile, ModuleDescriptor,
    SchemaHeader, is_index_file, module_name,
};
use tracing::{debug, info};

use crate::error::{DiscoverError, Result};
use crate::loader::load_document;
use crate::paths::relative_path;

/// Discovery configuration.
#[derive(Debug, Clone)]
pub struct DiscoverConfig {
    /// Directory scanned for `<name>.openapi.yaml` documents.
    pub source_dir: PathBuf,
    /// Directory the manifest is written to. Module paths are relative to
    /// it. `None` means the source directory.
    pub output_dir: Option<PathBuf>,
    /// Prefix of the extension fields read from `info`.
    pub extension_prefix: String,
}

impl DiscoverConfig {
    /// Creates a config for `source_dir` with default settings.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: None,
            extension_prefix: DEFAULT_EXTENSION_PREFIX.to_string(),
        }
    }

    /// Sets the manifest directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Sets the extension field prefix.
    pub fn with_extension_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.extension_prefix = prefix.into();
        self
    }

    /// Resolved manifest directory.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.source_dir)
    }
}

/// Result of a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoverOutcome {
    /// Manifest describing every discovered module, in filename order.
    pub index: IndexFile,
    /// Parsed documents keyed by filename.
    pub documents: FullModuleMap,
    /// Directory entries skipped because they do not follow the naming
    /// convention, in listing order.
    pub ignored: Vec<String>,
}

/// Scans the source directory and builds the module index.
///
/// Entries are processed in lexicographic filename order. The manifest's
/// own filename is skipped silently; any other entry not named
/// `<name>.openapi.yaml` is recorded in [`DiscoverOutcome::ignored`]. Every
/// matching entry must load and carry `$id` and `info`.
///
/// # Errors
///
/// Fails on the first problem: the directory cannot be listed, a matching
/// document cannot be read or parsed, a required field is missing, or two
/// documents claim the same module name.
///
/// # Examples
///
/// ```no_run
/// use openapi_index_discovery::{DiscoverConfig, discover_modules};
///
/// let outcome = discover_modules(&DiscoverConfig::new("openapis")).unwrap();
/// for module in &outcome.index.modules {
///     println!("{} -> {}", module.name, module.path);
/// }
/// ```
pub fn discover_modules(config: &DiscoverConfig) -> Result<DiscoverOutcome> {
    let source_dir = &config.source_dir;
    let output_dir = config.output_dir();
    let cwd = env::current_dir().map_err(DiscoverError::CurrentDir)?;

    let mut builder = IndexBuilder::new();
    let mut ignored = Vec::new();

    for filename in list_filenames(source_dir)? {
        if is_index_file(&filename) {
            continue;
        }
        let Some(name) = module_name(&filename) else {
            info!(file = %filename, "ignored file");
            ignored.push(filename);
            continue;
        };

        let file_path = source_dir.join(&filename);
        let document = load_document(&file_path)?;
        let header = SchemaHeader::from_document(&document, &config.extension_prefix)
            .map_err(|source| DiscoverError::Index {
                path: file_path.clone(),
                source,
            })?;
        let path = relative_path(&file_path, output_dir, &cwd);
        let descriptor = ModuleDescriptor::new(name, path, &header);

        debug!(module = %descriptor.name, url = %descriptor.url, "indexed module");
        builder
            .push(filename, document, descriptor)
            .map_err(|source| DiscoverError::Index {
                path: file_path,
                source,
            })?;
    }

    let (index, documents) = builder.build();
    Ok(DiscoverOutcome {
        index,
        documents,
        ignored,
    })
}

/// Lists directory entry names sorted lexicographically.
///
/// Names that are not valid UTF-8 are kept in lossy form so they end up
/// reported as ignored rather than silently dropped.
fn list_filenames(dir: &Path) -> Result<Vec<String>> {
    let read_dir_error = |source: std::io::Error| DiscoverError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
