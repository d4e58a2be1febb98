//! Catalog bundled into the binary.

use std::sync::OnceLock;

use gear_core::Catalog;

use crate::loaders::{CatalogLoader, LoadResult};

/// RON source of the bundled catalog.
pub const CATALOG_RON: &str = include_str!("../data/catalog.ron");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The bundled catalog, parsed and validated on first use.
pub fn catalog() -> LoadResult<&'static Catalog> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let parsed = CatalogLoader::parse(CATALOG_RON)?;
    Ok(CATALOG.get_or_init(|| parsed))
}
