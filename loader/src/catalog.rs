//! Module catalog backed by a [`Loader`].

use openapi_index_core::{
    INDEX_FILENAME, IndexFile, MODULE_SUFFIX, ModuleDescriptor, SchemaDocument, validate_index,
};
use tracing::debug;

use crate::error::{LoaderError, Result};
use crate::source::Loader;

/// Validated manifest plus the loader its documents come from.
///
/// # Examples
///
/// ```no_run
/// use openapi_index_loader::{FileLoader, ModuleCatalog};
///
/// let catalog = ModuleCatalog::open(FileLoader::new("openapis")).unwrap();
/// for module in catalog.modules() {
///     let document = catalog.document(&module.name).unwrap();
///     println!("{} {}", module.name, document["info"]["title"]);
/// }
/// ```
#[derive(Debug)]
pub struct ModuleCatalog<L> {
    loader: L,
    index: IndexFile,
}

impl<L: Loader> ModuleCatalog<L> {
    /// Loads and validates `index.openapi.yaml` from `loader`.
    ///
    /// Both the YAML manifest and the compact JSON form stored in embed
    /// artifacts are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::NotFound`] if no manifest is available,
    /// [`LoaderError::YamlError`] if it does not parse and
    /// [`LoaderError::InvalidIndex`] listing every broken invariant.
    pub fn open(loader: L) -> Result<Self> {
        let bytes = loader.load(INDEX_FILENAME)?;
        let index: IndexFile = serde_yaml::from_slice(&bytes)?;

        let problems = validate_index(&index);
        if !problems.is_empty() {
            return Err(LoaderError::InvalidIndex(problems));
        }

        debug!(loader = %loader.label(), modules = index.module_count(), "opened catalog");
        Ok(Self { loader, index })
    }

    /// The manifest.
    pub fn index(&self) -> &IndexFile {
        &self.index
    }

    /// Every module, in manifest order.
    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.index.modules
    }

    /// Looks a module up by name.
    pub fn module(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.index.find_module(name)
    }

    /// Loads and parses the document of module `name`.
    ///
    /// The descriptor's `path` is tried first. When the loader has nothing
    /// there, the bare `<name>.openapi.yaml` filename is tried, which is the
    /// key used by embedded tables.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::UnknownModule`] if the manifest has no such
    /// module, otherwise any load or parse failure.
    pub fn document(&self, name: &str) -> Result<SchemaDocument> {
        let module = self
            .module(name)
            .ok_or_else(|| LoaderError::UnknownModule(name.to_string()))?;

        let bytes = match self.loader.load(&module.path) {
            Err(LoaderError::NotFound(_)) => {
                let filename = format!("{}{MODULE_SUFFIX}", module.name);
                self.loader.load(&filename)?
            }
            other => other?,
        };
        Ok(serde_yaml::from_slice(&bytes)?)
    }

    /// Consumes the catalog and returns its loader.
    pub fn into_loader(self) -> L {
        self.loader
    }
}
