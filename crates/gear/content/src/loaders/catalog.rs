//! Gear catalog loader.

use std::path::Path;

use gear_core::{
    Catalog, CatalogBuilder, CatalogError, Color, GearBrand, GearError, GearModel, GearSpec,
    GearType, Grams, RangeSpec, Stem, StrengthSpec,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Brand row of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short: Option<String>,
}

/// Model row of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    /// Id of the owning brand.
    pub brand: String,
    pub name: String,
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

/// Gear row of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearEntry {
    #[serde(rename = "type")]
    pub gear_type: GearType,
    pub brand: String,
    #[serde(default)]
    pub model: Option<String>,
    pub color: Color,
    pub size: String,
    pub weight: Grams,
    pub stem: Stem,
    #[serde(default)]
    pub range: RangeSpec,
    #[serde(default)]
    pub strength: StrengthSpec,
}

impl GearEntry {
    fn spec(&self) -> GearSpec {
        GearSpec {
            gear_type: self.gear_type,
            color: self.color,
            size: self.size.clone(),
            weight: self.weight,
            stem: self.stem,
            range: self.range,
            strength: self.strength,
        }
    }
}

/// Catalog file structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub brands: Vec<BrandEntry>,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
    #[serde(default)]
    pub gear: Vec<GearEntry>,
}

impl CatalogFile {
    /// Resolves ids and validates every entry, in file order.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let mut builder = CatalogBuilder::new();
        for brand in self.brands {
            builder.brand(brand.id, GearBrand::new(brand.name, brand.short))?;
        }
        for model in self.models {
            builder.model(
                model.id,
                &model.brand,
                GearModel::new(model.name, model.short, model.available),
            )?;
        }
        for entry in &self.gear {
            builder.gear(&entry.brand, entry.model.as_deref(), entry.spec())?;
        }
        Ok(builder.build())
    }
}

/// Loader for the gear catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a [`CatalogFile`]
    ///
    /// # Returns
    ///
    /// Returns the assembled catalog. The first invalid entry aborts the load.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("Catalog {}", path.display())))
    }

    /// Parse and validate catalog RON held in memory.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let catalog = file.into_catalog().map_err(|e| {
            tracing::warn!(
                code = e.error_code(),
                severity = e.severity().as_str(),
                "Rejected catalog: {}",
                e
            );
            anyhow::anyhow!("Invalid catalog ({}): {}", e.error_code(), e)
        })?;

        tracing::info!(
            records = catalog.len(),
            brands = catalog.brands().len(),
            models = catalog.models().len(),
            "Loaded gear catalog"
        );
        Ok(catalog)
    }
}
