//! Data-driven gear content and loaders.
//!
//! This crate houses the bundled gear catalog and provides loaders for the
//! site's data files:
//! - Gear catalog (data-driven via RON)
//! - Chart configuration (data-driven via TOML)
//! - Guidebook area documents (data-driven via JSON)
//!
//! All loaders produce validated gear-core types; nothing here touches the
//! filter or chart pipeline.

pub mod guidebook;

#[cfg(feature = "loaders")]
pub mod embedded;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use guidebook::{Area, AreaDocument, BookPath, BookPathError, DOCUMENT_FILE};

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogFile, CatalogLoader, ConfigLoader, ContentFactory, GuidebookLoader, LoadResult,
};
