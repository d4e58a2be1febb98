//! Content factory for loading gear data from a data directory.

use std::path::{Path, PathBuf};

use gear_core::{Catalog, ChartConfig};

use crate::guidebook::{AreaDocument, BookPath};
use crate::loaders::{CatalogLoader, ConfigLoader, GuidebookLoader, LoadResult};

/// Content factory that loads all site content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── catalog.ron
/// └── book/
///     ├── data.json
///     └── cascades/
///         └── data.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load chart configuration from `config.toml`.
    ///
    /// A missing file yields the built-in defaults.
    pub fn load_config(&self) -> LoadResult<ChartConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No chart config, using defaults");
            return Ok(ChartConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the gear catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join("catalog.ron");
        CatalogLoader::load(&path)
    }

    /// Load one guidebook area from `book/`.
    pub fn load_area(&self, path: &BookPath) -> LoadResult<AreaDocument> {
        GuidebookLoader::load(&self.book_dir(), path)
    }

    /// Returns the guidebook root directory.
    pub fn book_dir(&self) -> PathBuf {
        self.data_dir.join("book")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.book_dir(), PathBuf::from("/tmp/data/book"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), ChartConfig::default());
        assert!(factory.load_catalog().is_err());
    }

    #[test]
    fn bundled_data_directory_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        assert_eq!(factory.load_config().unwrap(), ChartConfig::default());
        assert_eq!(factory.load_catalog().unwrap().len(), 149);
        let book = factory.load_area(&BookPath::root()).unwrap();
        assert_eq!(book.name.as_deref(), Some("Guidebook"));
    }
}
