//! Flat gear specifications as written in catalog files.
//!
//! A [`GearSpec`] has every range and strength field optional; which ones must
//! be present depends on the gear type. [`GearSpec::validate`] checks the
//! combination and produces the type-specific [`GearProfile`].

use super::range::{ExpansionRange, OperationalRange, PassiveRange};
use super::record::{ActiveSpec, GearProfile, PassiveSpec, PassiveStrength};
use super::{Color, GearType, Grams, Kilonewtons, Millimeters, Stem};
use crate::error::{CatalogError, RecordContext};

/// Size fields of a catalog entry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangeSpec {
    /// Expansion minimum (active devices).
    pub min: Option<Millimeters>,
    /// Expansion maximum (active devices).
    pub max: Option<Millimeters>,
    pub p1: Option<Millimeters>,
    pub p1_5: Option<Millimeters>,
    pub p2: Option<Millimeters>,
}

/// Strength fields of a catalog entry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrengthSpec {
    pub active: Option<Kilonewtons>,
    pub p1: Option<Kilonewtons>,
    pub p1_5: Option<Kilonewtons>,
    pub p2: Option<Kilonewtons>,
}

/// One catalog entry before validation.
///
/// Brand and model are resolved by the caller (see [`crate::CatalogBuilder`]);
/// this struct only carries the per-record measurements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearSpec {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub gear_type: GearType,
    pub color: Color,
    pub size: String,
    pub weight: Grams,
    pub stem: Stem,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: RangeSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strength: StrengthSpec,
}

/// Field requirement for one gear type.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Rule {
    Required,
    Optional,
    Absent,
}

impl GearSpec {
    /// Validates the spec against the per-type field table and builds the profile.
    ///
    /// ```text
    ///          | expansion | p1/p2 range | p1_5 range | active | p1 str | p2 str | p1_5 str
    ///  BallNut |     R     |      -      |     -      |   R    |   -    |   -    |    -
    ///   BigBro |     R     |      -      |     -      |   R    |   -    |   -    |    -
    ///      Cam |     R     |      -      |     -      |   R    |   O    |   -    |    -
    ///      Hex |     -     |      R      |     O      |   -    |   R    |   R    | iff range
    ///      Nut |     -     |      R      |     -      |   -    |   R    |   R    |    -
    ///   Tricam |     R     |      R      |     -      |   R    |   R    |   R    |    -
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, naming the record through
    /// `context`.
    pub fn validate(&self, context: &RecordContext) -> Result<GearProfile, CatalogError> {
        if self.size.trim().is_empty() {
            return Err(CatalogError::EmptySize {
                context: context.clone(),
            });
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(CatalogError::InvalidWeight {
                context: context.clone(),
                weight: self.weight,
            });
        }

        let check = Checker {
            context,
            gear_type: self.gear_type,
        };
        let t = self.gear_type;
        let expansion_rule = if t.is_active() { Rule::Required } else { Rule::Absent };
        let passive_rule = if t.is_passive() { Rule::Required } else { Rule::Absent };
        let offset_rule = if t == GearType::Hex { Rule::Optional } else { Rule::Absent };
        let cam_p1_rule = match t {
            GearType::Cam => Rule::Optional,
            _ => passive_rule,
        };

        let min = check.field("expansion min", self.range.min, expansion_rule)?;
        let max = check.field("expansion max", self.range.max, expansion_rule)?;
        let p1 = check.field("p1 range", self.range.p1, passive_rule)?;
        let p1_5 = check.field("p1_5 range", self.range.p1_5, offset_rule)?;
        let p2 = check.field("p2 range", self.range.p2, passive_rule)?;

        let active = check.field("active strength", self.strength.active, expansion_rule)?;
        let p1_strength = check.field("p1 strength", self.strength.p1, cam_p1_rule)?;
        let p2_strength = check.field("p2 strength", self.strength.p2, passive_rule)?;
        let p1_5_rule = if p1_5.is_some() { Rule::Required } else { Rule::Absent };
        let p1_5_strength = check.field("p1_5 strength", self.strength.p1_5, p1_5_rule)?;

        let active_spec = match (min, max, active) {
            (Some(min), Some(max), Some(strength)) => {
                if max <= min {
                    return Err(CatalogError::InvertedRange {
                        context: context.clone(),
                        field: "expansion range",
                        min,
                        max,
                    });
                }
                let expansion = ExpansionRange::new(min, max);
                let operational = OperationalRange::derive(t, expansion).ok_or_else(|| {
                    CatalogError::UnexpectedField {
                        context: context.clone(),
                        gear_type: t.name(),
                        field: "expansion range",
                    }
                })?;
                Some(ActiveSpec {
                    expansion,
                    operational,
                    strength,
                })
            }
            _ => None,
        };

        let passive_spec = match (p1, p2, p1_strength, p2_strength) {
            (Some(p1), Some(p2), Some(s1), Some(s2)) if t.is_passive() => {
                if p2 < p1 {
                    return Err(CatalogError::InvertedRange {
                        context: context.clone(),
                        field: "passive range",
                        min: p1,
                        max: p2,
                    });
                }
                Some(PassiveSpec {
                    range: PassiveRange { p1, p1_5, p2 },
                    strength: PassiveStrength {
                        p1: s1,
                        p1_5: p1_5_strength,
                        p2: s2,
                    },
                })
            }
            _ => None,
        };

        // The rules above guarantee the required halves are present.
        let profile = match (t, active_spec, passive_spec) {
            (GearType::BallNut, Some(active), None) => GearProfile::BallNut(active),
            (GearType::BigBro, Some(active), None) => GearProfile::BigBro(active),
            (GearType::Cam, Some(active), None) => GearProfile::Cam {
                active,
                passive_strength: p1_strength,
            },
            (GearType::Hex, None, Some(passive)) => GearProfile::Hex(passive),
            (GearType::Nut, None, Some(passive)) => GearProfile::Nut(passive),
            (GearType::Tricam, Some(active), Some(passive)) => {
                GearProfile::Tricam { active, passive }
            }
            _ => {
                return Err(CatalogError::MissingField {
                    context: context.clone(),
                    gear_type: t.name(),
                    field: "range and strength data",
                });
            }
        };

        Ok(profile)
    }
}

struct Checker<'a> {
    context: &'a RecordContext,
    gear_type: GearType,
}

impl Checker<'_> {
    fn field(
        &self,
        field: &'static str,
        value: Option<f64>,
        rule: Rule,
    ) -> Result<Option<f64>, CatalogError> {
        match (value, rule) {
            (None, Rule::Required) => Err(CatalogError::MissingField {
                context: self.context.clone(),
                gear_type: self.gear_type.name(),
                field,
            }),
            (Some(_), Rule::Absent) => Err(CatalogError::UnexpectedField {
                context: self.context.clone(),
                gear_type: self.gear_type.name(),
                field,
            }),
            (Some(v), _) if !v.is_finite() || v < 0.0 => Err(CatalogError::InvalidNumber {
                context: self.context.clone(),
                field,
                value: v,
            }),
            (value, _) => Ok(value),
        }
    }
}
