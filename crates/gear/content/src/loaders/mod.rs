//! Content loaders for reading catalog, configuration and guidebook files.
//!
//! Catalogs are RON, chart configuration is TOML and guidebook documents are
//! JSON. Every loader returns fully validated gear-core values.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod guidebook;

pub use catalog::{CatalogFile, CatalogLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use guidebook::GuidebookLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
