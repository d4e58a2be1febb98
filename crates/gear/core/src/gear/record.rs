//! Validated gear records.

use std::sync::Arc;

use super::range::{ExpansionRange, OperationalRange, PassiveRange};
use super::spec::GearSpec;
use super::{Color, GearBrand, GearModel, GearType, Grams, Kilonewtons, Millimeters, Stem};
use crate::error::{CatalogError, RecordContext};

/// Data shared by every expanding device.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSpec {
    pub expansion: ExpansionRange,
    pub operational: OperationalRange,
    pub strength: Kilonewtons,
}

/// Placement strengths of a passive device, one per placement.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveStrength {
    pub p1: Kilonewtons,
    pub p1_5: Option<Kilonewtons>,
    pub p2: Kilonewtons,
}

/// Data shared by every wedging device.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveSpec {
    pub range: PassiveRange,
    pub strength: PassiveStrength,
}

/// Type-specific payload of a record.
///
/// Each variant carries only the fields its gear type supports.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GearProfile {
    BallNut(ActiveSpec),
    BigBro(ActiveSpec),
    Cam {
        active: ActiveSpec,
        /// Some cams are rated for passive (umbrella) placement.
        passive_strength: Option<Kilonewtons>,
    },
    Hex(PassiveSpec),
    Nut(PassiveSpec),
    Tricam {
        active: ActiveSpec,
        passive: PassiveSpec,
    },
}

impl GearProfile {
    pub fn gear_type(&self) -> GearType {
        match self {
            Self::BallNut(_) => GearType::BallNut,
            Self::BigBro(_) => GearType::BigBro,
            Self::Cam { .. } => GearType::Cam,
            Self::Hex(_) => GearType::Hex,
            Self::Nut(_) => GearType::Nut,
            Self::Tricam { .. } => GearType::Tricam,
        }
    }

    pub fn active(&self) -> Option<&ActiveSpec> {
        match self {
            Self::BallNut(active) | Self::BigBro(active) => Some(active),
            Self::Cam { active, .. } | Self::Tricam { active, .. } => Some(active),
            Self::Hex(_) | Self::Nut(_) => None,
        }
    }

    pub fn passive(&self) -> Option<&PassiveSpec> {
        match self {
            Self::Hex(passive) | Self::Nut(passive) => Some(passive),
            Self::Tricam { passive, .. } => Some(passive),
            _ => None,
        }
    }
}

/// Strength ratings in the flat shape used by the catalog file.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrengthTable {
    pub active: Option<Kilonewtons>,
    pub p1: Option<Kilonewtons>,
    pub p1_5: Option<Kilonewtons>,
    pub p2: Option<Kilonewtons>,
}

impl StrengthTable {
    pub fn values(&self) -> impl Iterator<Item = Kilonewtons> + '_ {
        [self.active, self.p1, self.p1_5, self.p2].into_iter().flatten()
    }
}

/// Semantic axes a record can be measured along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measure {
    /// Expansion min and max.
    Expansion,
    /// Operational min and max.
    Operation,
    /// Passive placements p1, p1_5 and p2.
    Passive,
    /// Every strength rating.
    Strength,
}

impl Measure {
    /// Size axes used by the range filter.
    pub const SIZE: [Measure; 2] = [Measure::Expansion, Measure::Passive];
}

/// One physical product size of a brand/model.
///
/// Built once by catalog assembly and never mutated. Brand and model are
/// shared with every other record of the same brand/model.
#[derive(Clone, Debug, PartialEq)]
pub struct GearRecord {
    brand: Arc<GearBrand>,
    model: Option<Arc<GearModel>>,
    color: Color,
    size: String,
    weight: Grams,
    stem: Stem,
    profile: GearProfile,
}

impl GearRecord {
    /// Validates `spec` and builds the record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when `spec` violates the per-type field rules
    /// (see [`GearSpec::validate`]).
    pub fn new(
        brand: Arc<GearBrand>,
        model: Option<Arc<GearModel>>,
        spec: GearSpec,
    ) -> Result<Self, CatalogError> {
        let context = RecordContext::new(
            brand.name(),
            model.as_ref().map(|m| m.name().to_string()),
            spec.size.clone(),
        );
        let profile = spec.validate(&context)?;

        Ok(Self {
            brand,
            model,
            color: spec.color,
            size: spec.size,
            weight: spec.weight,
            stem: spec.stem,
            profile,
        })
    }

    pub fn gear_type(&self) -> GearType {
        self.profile.gear_type()
    }

    pub fn brand(&self) -> &Arc<GearBrand> {
        &self.brand
    }

    pub fn model(&self) -> Option<&Arc<GearModel>> {
        self.model.as_ref()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn weight(&self) -> Grams {
        self.weight
    }

    pub fn stem(&self) -> Stem {
        self.stem
    }

    pub fn profile(&self) -> &GearProfile {
        &self.profile
    }

    pub fn expansion(&self) -> Option<ExpansionRange> {
        self.profile.active().map(|a| a.expansion)
    }

    pub fn operational(&self) -> Option<OperationalRange> {
        self.profile.active().map(|a| a.operational)
    }

    pub fn passive(&self) -> Option<PassiveRange> {
        self.profile.passive().map(|p| p.range)
    }

    /// Strength ratings, `None` where the field does not apply.
    pub fn strength(&self) -> StrengthTable {
        let active = self.profile.active().map(|a| a.strength);
        match &self.profile {
            GearProfile::Cam {
                passive_strength, ..
            } => StrengthTable {
                active,
                p1: *passive_strength,
                ..Default::default()
            },
            profile => {
                let passive = profile.passive().map(|p| p.strength);
                StrengthTable {
                    active,
                    p1: passive.map(|s| s.p1),
                    p1_5: passive.and_then(|s| s.p1_5),
                    p2: passive.map(|s| s.p2),
                }
            }
        }
    }

    /// All values this record has along `measure`.
    pub fn values(&self, measure: Measure) -> Vec<f64> {
        match measure {
            Measure::Expansion => self
                .expansion()
                .map(|e| vec![e.min, e.max])
                .unwrap_or_default(),
            Measure::Operation => self
                .operational()
                .map(|o| vec![o.min, o.max])
                .unwrap_or_default(),
            Measure::Passive => self
                .passive()
                .map(|p| p.placements().collect())
                .unwrap_or_default(),
            Measure::Strength => self.strength().values().collect(),
        }
    }

    /// Smallest value across `measures`, `None` if no field applies.
    pub fn min_of(&self, measures: &[Measure]) -> Option<f64> {
        measures
            .iter()
            .flat_map(|m| self.values(*m))
            .reduce(f64::min)
    }

    /// Largest value across `measures`, `None` if no field applies.
    pub fn max_of(&self, measures: &[Measure]) -> Option<f64> {
        measures
            .iter()
            .flat_map(|m| self.values(*m))
            .reduce(f64::max)
    }

    /// Lower sort bound: operational min, falling back to the passive minimum.
    pub fn lower_size(&self) -> Option<Millimeters> {
        self.operational()
            .map(|o| o.min)
            .or_else(|| self.passive().map(|p| p.min()))
    }

    /// Upper sort bound: operational max, falling back to the passive maximum.
    pub fn upper_size(&self) -> Option<Millimeters> {
        self.operational()
            .map(|o| o.max)
            .or_else(|| self.passive().map(|p| p.max()))
    }

    /// `brand [model] size`, using shorthand names when asked.
    pub fn label(&self, shorthand: bool) -> String {
        let mut parts = vec![self.brand.label(shorthand)];
        if let Some(model) = &self.model {
            parts.push(model.label(shorthand));
        }
        parts.push(&self.size);
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::{RangeSpec, StrengthSpec};

    fn bd() -> Arc<GearBrand> {
        Arc::new(GearBrand::new("Black Diamond", Some("BD".into())))
    }

    fn c4() -> Arc<GearModel> {
        Arc::new(GearModel::new("Camalot C4", Some("C4".into()), true))
    }

    fn cam_spec(size: &str, min: f64, max: f64, active: f64, p1: Option<f64>) -> GearSpec {
        GearSpec {
            gear_type: GearType::Cam,
            color: Color::Blue,
            size: size.into(),
            weight: 101.0,
            stem: Stem::Flex,
            range: RangeSpec {
                min: Some(min),
                max: Some(max),
                ..Default::default()
            },
            strength: StrengthSpec {
                active: Some(active),
                p1,
                ..Default::default()
            },
        }
    }

    #[test]
    fn cam_record_exposes_flat_accessors() {
        let record = GearRecord::new(bd(), Some(c4()), cam_spec(".5", 19.6, 33.5, 12.0, Some(8.0)))
            .unwrap();

        assert_eq!(record.gear_type(), GearType::Cam);
        assert_eq!(record.expansion(), Some(ExpansionRange::new(19.6, 33.5)));
        assert_eq!(record.operational(), Some(OperationalRange { min: 21.0, max: 30.0 }));
        assert_eq!(record.passive(), None);
        assert_eq!(
            record.strength(),
            StrengthTable {
                active: Some(12.0),
                p1: Some(8.0),
                p1_5: None,
                p2: None,
            }
        );
        assert_eq!(record.min_of(&[Measure::Strength]), Some(8.0));
        assert_eq!(record.max_of(&Measure::SIZE), Some(33.5));
        assert_eq!(record.lower_size(), Some(21.0));
    }

    #[test]
    fn labels_follow_shorthand_flag() {
        let record = GearRecord::new(bd(), Some(c4()), cam_spec(".5", 19.6, 33.5, 12.0, None))
            .unwrap();
        assert_eq!(record.label(false), "Black Diamond Camalot C4 .5");
        assert_eq!(record.label(true), "BD C4 .5");

        let totem = Arc::new(GearBrand::new("Totem", None));
        let record = GearRecord::new(totem, None, cam_spec("1.25", 26.0, 40.0, 13.0, None))
            .unwrap();
        assert_eq!(record.label(true), "Totem 1.25");
    }

    #[test]
    fn nut_falls_back_to_passive_bounds() {
        let spec = GearSpec {
            gear_type: GearType::Nut,
            color: Color::Silver,
            size: "7".into(),
            weight: 28.0,
            stem: Stem::Wired,
            range: RangeSpec {
                p1: Some(11.0),
                p2: Some(19.0),
                ..Default::default()
            },
            strength: StrengthSpec {
                p1: Some(10.0),
                p2: Some(10.0),
                ..Default::default()
            },
        };
        let record = GearRecord::new(bd(), None, spec).unwrap();

        assert_eq!(record.operational(), None);
        assert_eq!(record.lower_size(), Some(11.0));
        assert_eq!(record.upper_size(), Some(19.0));
        assert_eq!(record.values(Measure::Expansion), Vec::<f64>::new());
        assert_eq!(record.min_of(&[Measure::Operation]), None);
    }

    #[test]
    fn invalid_spec_error_names_brand_model_and_size() {
        let mut spec = cam_spec("2", 30.0, 50.0, 14.0, None);
        spec.strength.active = None;
        let err = GearRecord::new(bd(), Some(c4()), spec).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Black Diamond Camalot C4 2: Cam requires active strength"
        );
    }
}
