//! Byte sources for manifests and documents.
//!
//! A [`Loader`] maps a file name to its bytes. [`FileLoader`] reads from a
//! directory, [`StaticLoader`] wraps a table compiled into the binary (the
//! `EMBEDDED_FILES` table of a generated Rust embed source) and
//! [`MergeLoader`] chains several of them so a local directory can shadow
//! the embedded copies.
//!
//! ```no_run
//! use openapi_index_loader::{FileLoader, Loader, MergeLoader};
//!
//! static EMBEDDED: &[(&str, &[u8])] = &[("index.openapi.yaml", b"version: 1.0.0\nmodules: []\n")];
//!
//! let loader = MergeLoader::builder()
//!     .with_loader(FileLoader::from_env("OPENAPI_DIR", "openapis"))
//!     .with_static("embedLoader", EMBEDDED)
//!     .build();
//! let index = loader.load("index.openapi.yaml").unwrap();
//! assert!(!index.is_empty());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LoaderError, Result};

/// A named source of file contents.
pub trait Loader: fmt::Debug {
    /// Returns the bytes stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::NotFound`] when the source has no such file.
    /// Other variants mean the file exists but could not be read.
    fn load(&self, name: &str) -> Result<Cow<'static, [u8]>>;

    /// Short human-readable description of the source.
    fn label(&self) -> String;
}

impl<L: Loader + ?Sized> Loader for Box<L> {
    fn load(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        (**self).load(name)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

/// Reads files relative to a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLoader {
    dir: PathBuf,
}

impl FileLoader {
    /// Creates a loader rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a loader rooted at the directory named by environment
    /// variable `var`, or at `fallback` under the current directory when
    /// the variable is unset or empty.
    pub fn from_env(var: &str, fallback: impl AsRef<Path>) -> Self {
        match std::env::var_os(var) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => {
                let cwd = std::env::current_dir().unwrap_or_default();
                Self::new(cwd.join(fallback))
            }
        }
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Loader for FileLoader {
    fn load(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        let path = self.dir.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "loaded file");
                Ok(Cow::Owned(bytes))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(LoaderError::NotFound(name.to_string()))
            }
            Err(source) => Err(LoaderError::IoError { path, source }),
        }
    }

    fn label(&self) -> String {
        format!("fileLoader({})", self.dir.display())
    }
}

/// Looks files up in a `(name, bytes)` table compiled into the binary.
#[derive(Clone)]
pub struct StaticLoader {
    label: String,
    entries: &'static [(&'static str, &'static [u8])],
}

impl StaticLoader {
    /// Wraps `entries` under the given label.
    pub fn new(label: impl Into<String>, entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self {
            label: label.into(),
            entries,
        }
    }

    /// Names of every entry, in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl fmt::Debug for StaticLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticLoader")
            .field("label", &self.label)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl Loader for StaticLoader {
    fn load(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, data)| Cow::Borrowed(*data))
            .ok_or_else(|| LoaderError::NotFound(name.to_string()))
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Tries several loaders in order; the first one holding the file wins.
///
/// A miss in one loader falls through to the next. Any other failure stops
/// the search and is returned as is.
#[derive(Debug, Default)]
pub struct MergeLoader {
    loaders: Vec<Box<dyn Loader>>,
}

impl MergeLoader {
    /// Returns a new [`MergeLoaderBuilder`].
    pub fn builder() -> MergeLoaderBuilder {
        MergeLoaderBuilder::new()
    }

    /// Number of chained loaders.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Returns `true` if no loader is chained.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl Loader for MergeLoader {
    fn load(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        for loader in &self.loaders {
            match loader.load(name) {
                Err(LoaderError::NotFound(_)) => {
                    debug!(loader = %loader.label(), file = name, "not found, trying next");
                }
                found => return found,
            }
        }
        Err(LoaderError::NotFound(name.to_string()))
    }

    fn label(&self) -> String {
        let labels: Vec<String> = self.loaders.iter().map(|l| l.label()).collect();
        format!("mergeLoader({})", labels.join(", "))
    }
}

/// Builder for a [`MergeLoader`]. Loaders are consulted in the order they
/// are added.
#[derive(Debug, Default)]
pub struct MergeLoaderBuilder {
    loaders: Vec<Box<dyn Loader>>,
}

impl MergeLoaderBuilder {
    /// Creates a builder with no loaders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory source.
    pub fn with_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.with_loader(FileLoader::new(dir))
    }

    /// Adds an embedded table source.
    pub fn with_static(
        self,
        label: impl Into<String>,
        entries: &'static [(&'static str, &'static [u8])],
    ) -> Self {
        self.with_loader(StaticLoader::new(label, entries))
    }

    /// Adds any loader.
    pub fn with_loader(mut self, loader: impl Loader + 'static) -> Self {
        self.loaders.push(Box::new(loader));
        self
    }

    /// Finishes the chain.
    pub fn build(self) -> MergeLoader {
        MergeLoader {
            loaders: self.loaders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[(&str, &[u8])] = &[("a.txt", b"embedded a"), ("b.txt", b"embedded b")];

    #[test]
    fn test_file_loader_reads_and_misses() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "disk a").unwrap();

        let loader = FileLoader::new(dir.path());
        assert_eq!(loader.load("a.txt").unwrap().as_ref(), b"disk a");
        assert!(matches!(loader.load("zzz.txt"), Err(LoaderError::NotFound(n)) if n == "zzz.txt"));
    }

    #[test]
    fn test_file_loader_directory_is_not_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let err = FileLoader::new(dir.path()).load("sub").unwrap_err();
        assert!(!matches!(err, LoaderError::NotFound(_)));
    }

    #[test]
    fn test_static_loader_exact_lookup() {
        let loader = StaticLoader::new("embedLoader", TABLE);
        let data = loader.load("a.txt").unwrap();
        assert!(matches!(data, Cow::Borrowed(_)));
        assert_eq!(data.as_ref(), b"embedded a");
        assert!(matches!(loader.load("A.txt"), Err(LoaderError::NotFound(_))));
        assert_eq!(loader.names().collect::<Vec<_>>(), vec!["a.txt", "b.txt"]);
        assert_eq!(loader.label(), "embedLoader");
    }

    #[test]
    fn test_merge_first_hit_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "disk a").unwrap();

        let loader = MergeLoader::builder()
            .with_dir(dir.path())
            .with_static("embedLoader", TABLE)
            .build();
        assert_eq!(loader.len(), 2);
        assert_eq!(loader.load("a.txt").unwrap().as_ref(), b"disk a");
        assert_eq!(loader.load("b.txt").unwrap().as_ref(), b"embedded b");
        assert!(matches!(loader.load("c.txt"), Err(LoaderError::NotFound(_))));
    }

    #[test]
    fn test_merge_propagates_other_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("a.txt")).unwrap();

        let loader = MergeLoader::builder()
            .with_dir(dir.path())
            .with_static("embedLoader", TABLE)
            .build();
        assert!(matches!(loader.load("a.txt"), Err(LoaderError::IoError { .. })));
    }

    #[test]
    fn test_empty_merge_misses() {
        let loader = MergeLoader::builder().build();
        assert!(loader.is_empty());
        assert!(matches!(loader.load("a.txt"), Err(LoaderError::NotFound(_))));
        assert_eq!(loader.label(), "mergeLoader()");
    }

    #[test]
    fn test_from_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let var = "OPENAPI_INDEX_LOADER_TEST_DIR";
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var(var, dir.path()) };
        let loader = FileLoader::from_env(var, "openapis");
        unsafe { std::env::remove_var(var) };
        assert_eq!(loader.dir(), dir.path());

        let fallback = FileLoader::from_env(var, "openapis");
        assert!(fallback.dir().ends_with("openapis"));
    }
}
