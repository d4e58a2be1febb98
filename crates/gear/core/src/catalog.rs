//! The gear catalog and its assembly.
//!
//! A [`Catalog`] is assembled once through [`CatalogBuilder`] and is read-only
//! afterwards. Consumers take derived selections (`Vec<&GearRecord>`), never
//! mutable access to the records.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use crate::error::{CatalogError, RecordContext};
use crate::gear::{GearBrand, GearModel, GearRecord, GearSpec};

/// Read-only collection of validated gear records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    brands: Vec<Arc<GearBrand>>,
    models: Vec<Arc<GearModel>>,
    records: Vec<GearRecord>,
}

impl Catalog {
    /// All records in catalog order.
    pub fn all(&self) -> &[GearRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GearRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registered brands in registration order.
    pub fn brands(&self) -> &[Arc<GearBrand>] {
        &self.brands
    }

    /// Registered models in registration order.
    pub fn models(&self) -> &[Arc<GearModel>] {
        &self.models
    }

    /// Brand to model index over the records.
    pub fn index(&self) -> BrandModelIndex {
        BrandModelIndex::from_records(&self.records)
    }

    /// SHA-256 commitment to the catalog contents.
    ///
    /// Each record is hashed as one canonical text line in catalog order, so
    /// replacing or reordering records changes the digest.
    pub fn digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        for record in &self.records {
            hasher.update(canonical_line(record).as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize().into()
    }

    /// Hex-encoded [`digest`](Self::digest).
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a GearRecord;
    type IntoIter = std::slice::Iter<'a, GearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn canonical_line(record: &GearRecord) -> String {
    let opt = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
    let expansion = record.expansion();
    let passive = record.passive();
    let strength = record.strength();

    [
        record.gear_type().name().to_string(),
        record.brand().name().to_string(),
        record
            .model()
            .map(|m| m.name().to_string())
            .unwrap_or_else(|| "-".into()),
        record.color().to_string(),
        record.size().to_string(),
        record.weight().to_string(),
        record.stem().to_string(),
        opt(expansion.map(|e| e.min)),
        opt(expansion.map(|e| e.max)),
        opt(passive.map(|p| p.p1)),
        opt(passive.and_then(|p| p.p1_5)),
        opt(passive.map(|p| p.p2)),
        opt(strength.active),
        opt(strength.p1),
        opt(strength.p1_5),
        opt(strength.p2),
    ]
    .join("|")
}

/// Assembles a [`Catalog`] from id-keyed brands, models and gear specs.
///
/// Ids are the short keys used by catalog files (`"bd"`, `"bd-c4"`); they
/// only exist during assembly.
///
/// # Examples
///
/// ```
/// use gear_core::{CatalogBuilder, GearBrand, GearModel};
///
/// let mut builder = CatalogBuilder::new();
/// builder.brand("totem", GearBrand::new("Totem", None)).unwrap();
/// builder
///     .model("totem-cam", "totem", GearModel::new("Cam", None, true))
///     .unwrap();
/// let catalog = builder.build();
/// assert!(catalog.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    brands: HashMap<String, Arc<GearBrand>>,
    brand_order: Vec<Arc<GearBrand>>,
    models: HashMap<String, (String, Arc<GearModel>)>,
    model_order: Vec<Arc<GearModel>>,
    records: Vec<GearRecord>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a brand under `id`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateId`] if `id` is already taken.
    pub fn brand(
        &mut self,
        id: impl Into<String>,
        brand: GearBrand,
    ) -> Result<&mut Self, CatalogError> {
        let id = id.into();
        if self.brands.contains_key(&id) {
            return Err(CatalogError::DuplicateId { kind: "brand", id });
        }
        let brand = Arc::new(brand);
        self.brand_order.push(Arc::clone(&brand));
        self.brands.insert(id, brand);
        Ok(self)
    }

    /// Registers a model under `id`, owned by the brand registered as `brand_id`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateId`] if `id` is taken, or
    /// [`CatalogError::UnknownBrand`] if `brand_id` was never registered.
    pub fn model(
        &mut self,
        id: impl Into<String>,
        brand_id: &str,
        model: GearModel,
    ) -> Result<&mut Self, CatalogError> {
        let id = id.into();
        if self.models.contains_key(&id) {
            return Err(CatalogError::DuplicateId { kind: "model", id });
        }
        if !self.brands.contains_key(brand_id) {
            return Err(CatalogError::UnknownBrand {
                brand: brand_id.to_string(),
                size: format!("(model {})", model.name()),
            });
        }
        let model = Arc::new(model);
        self.model_order.push(Arc::clone(&model));
        self.models.insert(id, (brand_id.to_string(), model));
        Ok(self)
    }

    /// Validates `spec` and appends the resulting record.
    ///
    /// # Errors
    ///
    /// Unknown ids, a model owned by another brand, or any validation failure
    /// from [`GearRecord::new`].
    pub fn gear(
        &mut self,
        brand_id: &str,
        model_id: Option<&str>,
        spec: GearSpec,
    ) -> Result<&mut Self, CatalogError> {
        let brand = self
            .brands
            .get(brand_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownBrand {
                brand: brand_id.to_string(),
                size: spec.size.clone(),
            })?;

        let model = match model_id {
            None => None,
            Some(model_id) => {
                let context = RecordContext::new(brand.name(), None, spec.size.clone());
                let (owner, model) =
                    self.models
                        .get(model_id)
                        .ok_or_else(|| CatalogError::UnknownModel {
                            context: context.clone(),
                            model: model_id.to_string(),
                        })?;
                if owner != brand_id {
                    return Err(CatalogError::ModelBrandMismatch {
                        context,
                        model: model_id.to_string(),
                        owner: owner.clone(),
                    });
                }
                Some(Arc::clone(model))
            }
        };

        self.records.push(GearRecord::new(brand, model, spec)?);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn build(self) -> Catalog {
        Catalog {
            brands: self.brand_order,
            models: self.model_order,
            records: self.records,
        }
    }
}

/// Which models appear under which brand, keyed by display name.
///
/// Used by the brand/model filter stage to find sibling models.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrandModelIndex {
    models: BTreeMap<String, BTreeSet<String>>,
}

impl BrandModelIndex {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a GearRecord>,
    {
        let mut models: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for record in records {
            let entry = models.entry(record.brand().name().to_string()).or_default();
            if let Some(model) = record.model() {
                entry.insert(model.name().to_string());
            }
        }
        Self { models }
    }

    /// Brand names in alphabetical order.
    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Model names of `brand` in alphabetical order.
    pub fn models_of(&self, brand: &str) -> impl Iterator<Item = &str> {
        self.models
            .get(brand)
            .into_iter()
            .flat_map(|models| models.iter().map(String::as_str))
    }

    /// Whether any model of `brand` is in `selected`.
    pub fn any_model_in(&self, brand: &str, selected: &BTreeSet<String>) -> bool {
        self.models_of(brand).any(|model| selected.contains(model))
    }
}
