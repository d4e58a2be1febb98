//! Filter engine.
//!
//! [`apply_filters`] runs a fixed pipeline over a record selection. Each stage
//! can only reject; the order is part of the contract:
//!
//! 1. type: exclude set, then include set
//! 2. brand/model: exclude sets, then include sets with the sibling-model rule
//! 3. strength: weakest rating must reach `strength_min` (inclusive)
//! 4. range: smallest and largest size must fit in `range_min..=range_max`
//!
//! An empty include set never restricts anything.

mod bounds;

pub use bounds::FilterBounds;

use std::collections::BTreeSet;

use crate::catalog::BrandModelIndex;
use crate::gear::{GearRecord, GearType, Kilonewtons, Measure, Millimeters};

/// State of one value in a [`SetFilter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    #[default]
    Unset,
    Include,
    Exclude,
}

/// Include/exclude sets over one attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SetFilter<T: Ord> {
    pub include: BTreeSet<T>,
    pub exclude: BTreeSet<T>,
}

impl<T: Ord> Default for SetFilter<T> {
    fn default() -> Self {
        Self {
            include: BTreeSet::new(),
            exclude: BTreeSet::new(),
        }
    }
}

impl<T: Ord> SetFilter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn including(mut self, value: impl Into<T>) -> Self {
        self.set(value.into(), Selection::Include);
        self
    }

    pub fn excluding(mut self, value: impl Into<T>) -> Self {
        self.set(value.into(), Selection::Exclude);
        self
    }

    /// True when neither set holds anything.
    pub fn is_unrestricted(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn selection(&self, value: &T) -> Selection {
        if self.include.contains(value) {
            Selection::Include
        } else if self.exclude.contains(value) {
            Selection::Exclude
        } else {
            Selection::Unset
        }
    }

    /// Moves `value` to the given state; a value is never in both sets.
    pub fn set(&mut self, value: T, selection: Selection) {
        self.include.remove(&value);
        self.exclude.remove(&value);
        match selection {
            Selection::Unset => {}
            Selection::Include => {
                self.include.insert(value);
            }
            Selection::Exclude => {
                self.exclude.insert(value);
            }
        }
    }

    /// Advances `value` through unset → include → exclude → unset.
    pub fn toggle(&mut self, value: T) -> Selection {
        let next = match self.selection(&value) {
            Selection::Unset => Selection::Include,
            Selection::Include => Selection::Exclude,
            Selection::Exclude => Selection::Unset,
        };
        self.set(value, next);
        next
    }

    /// Plain include/exclude test used by the type stage.
    pub fn admits(&self, value: &T) -> bool {
        if self.exclude.contains(value) {
            return false;
        }
        self.include.is_empty() || self.include.contains(value)
    }
}

/// Complete filter state of one chart.
///
/// A plain value: change it and call [`apply_filters`] again.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterConfig {
    pub types: SetFilter<GearType>,
    /// Brand display names.
    pub brands: SetFilter<String>,
    /// Model display names.
    pub models: SetFilter<String>,
    pub strength_min: Kilonewtons,
    pub range_min: Millimeters,
    pub range_max: Millimeters,
}

impl Default for FilterConfig {
    /// Admits every valid record.
    fn default() -> Self {
        Self {
            types: SetFilter::default(),
            brands: SetFilter::default(),
            models: SetFilter::default(),
            strength_min: 0.0,
            range_min: 0.0,
            range_max: f64::MAX,
        }
    }
}

impl FilterConfig {
    /// Runs all four stages on one record.
    pub fn admits(&self, record: &GearRecord, index: &BrandModelIndex) -> bool {
        self.admits_type(record)
            && self.admits_brand_model(record, index)
            && self.admits_strength(record)
            && self.admits_range(record)
    }

    fn admits_type(&self, record: &GearRecord) -> bool {
        self.types.admits(&record.gear_type())
    }

    fn admits_brand_model(&self, record: &GearRecord, index: &BrandModelIndex) -> bool {
        let brand = record.brand().name();
        let model = record.model().map(|m| m.name());

        if self.brands.exclude.contains(brand)
            || model.is_some_and(|m| self.models.exclude.contains(m))
        {
            return false;
        }
        if self.brands.include.is_empty() && self.models.include.is_empty() {
            return true;
        }
        if model.is_some_and(|m| self.models.include.contains(m)) {
            return true;
        }
        if self.brands.include.contains(brand) {
            // An included sibling model narrows the brand selection to that model.
            return self.models.include.is_empty()
                || !index.any_model_in(brand, &self.models.include);
        }
        false
    }

    fn admits_strength(&self, record: &GearRecord) -> bool {
        record
            .min_of(&[Measure::Strength])
            .is_none_or(|weakest| weakest >= self.strength_min)
    }

    fn admits_range(&self, record: &GearRecord) -> bool {
        let too_small = record
            .min_of(&Measure::SIZE)
            .is_some_and(|min| min < self.range_min);
        let too_large = record
            .max_of(&Measure::SIZE)
            .is_some_and(|max| max > self.range_max);
        !too_small && !too_large
    }
}

/// Returns the records admitted by `config`, in input order.
///
/// The sibling-model rule uses a brand/model index built from `records`
/// itself. For a pre-filtered subset, use [`apply_filters_indexed`] with the
/// index of the full selection.
pub fn apply_filters<'a, I>(records: I, config: &FilterConfig) -> Vec<&'a GearRecord>
where
    I: IntoIterator<Item = &'a GearRecord>,
{
    let records: Vec<&GearRecord> = records.into_iter().collect();
    let index = BrandModelIndex::from_records(records.iter().copied());
    apply_filters_indexed(records, config, &index)
}

/// Same as [`apply_filters`], resolving sibling models through `index`.
pub fn apply_filters_indexed<'a, I>(
    records: I,
    config: &FilterConfig,
    index: &BrandModelIndex,
) -> Vec<&'a GearRecord>
where
    I: IntoIterator<Item = &'a GearRecord>,
{
    records
        .into_iter()
        .filter(|record| config.admits(record, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogBuilder};
    use crate::gear::{Color, GearBrand, GearModel, GearSpec, RangeSpec, Stem, StrengthSpec};

    fn cam(size: &str, min: f64, max: f64, active: f64) -> GearSpec {
        GearSpec {
            gear_type: GearType::Cam,
            color: Color::Green,
            size: size.into(),
            weight: 100.0,
            stem: Stem::Flex,
            range: RangeSpec {
                min: Some(min),
                max: Some(max),
                ..Default::default()
            },
            strength: StrengthSpec {
                active: Some(active),
                ..Default::default()
            },
        }
    }

    fn nut(size: &str, p1: f64, p2: f64, strength: f64) -> GearSpec {
        GearSpec {
            gear_type: GearType::Nut,
            color: Color::Silver,
            size: size.into(),
            weight: 20.0,
            stem: Stem::Wired,
            range: RangeSpec {
                p1: Some(p1),
                p2: Some(p2),
                ..Default::default()
            },
            strength: StrengthSpec {
                p1: Some(strength),
                p2: Some(strength),
                ..Default::default()
            },
        }
    }

    /// BD: C4 (2 sizes), Z4 (1 size), Stopper nut; Totem: one brand-only cam.
    fn catalog() -> Catalog {
        let mut b = CatalogBuilder::new();
        b.brand("bd", GearBrand::new("Black Diamond", Some("BD".into())))
            .unwrap()
            .brand("totem", GearBrand::new("Totem", None))
            .unwrap()
            .model("c4", "bd", GearModel::new("Camalot C4", None, true))
            .unwrap()
            .model("z4", "bd", GearModel::new("Camalot Z4", None, true))
            .unwrap()
            .model("stopper", "bd", GearModel::new("Stopper", None, true))
            .unwrap();
        b.gear("bd", Some("c4"), cam("1", 30.2, 52.1, 12.0))
            .unwrap()
            .gear("bd", Some("c4"), cam("2", 37.2, 64.9, 12.0))
            .unwrap()
            .gear("bd", Some("z4"), cam(".3", 12.4, 18.9, 8.0))
            .unwrap()
            .gear("bd", Some("stopper"), nut("7", 11.0, 19.0, 10.0))
            .unwrap()
            .gear("totem", None, cam("1.25", 25.9, 42.1, 13.0))
            .unwrap();
        b.build()
    }

    fn labels(records: &[&GearRecord]) -> Vec<String> {
        records.iter().map(|r| r.label(false)).collect()
    }

    #[test]
    fn default_config_admits_everything() {
        let catalog = catalog();
        let kept = apply_filters(catalog.all(), &FilterConfig::default());
        assert_eq!(kept.len(), catalog.len());
    }

    #[test]
    fn toggle_cycles_through_states() {
        let mut filter = SetFilter::<String>::new();
        assert_eq!(filter.toggle("BD".into()), Selection::Include);
        assert!(filter.include.contains("BD"));
        assert_eq!(filter.toggle("BD".into()), Selection::Exclude);
        assert!(filter.include.is_empty());
        assert!(filter.exclude.contains("BD"));
        assert_eq!(filter.toggle("BD".into()), Selection::Unset);
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn type_exclusion_wins_over_inclusion() {
        let catalog = catalog();
        let config = FilterConfig {
            types: SetFilter::new()
                .including(GearType::Nut)
                .including(GearType::Cam),
            ..Default::default()
        };
        assert_eq!(apply_filters(catalog.all(), &config).len(), 5);

        let mut config = config;
        config.types.set(GearType::Cam, Selection::Exclude);
        let kept = apply_filters(catalog.all(), &config);
        assert_eq!(labels(&kept), ["Black Diamond Stopper 7"]);
    }

    #[test]
    fn brand_include_keeps_all_models_of_the_brand() {
        let catalog = catalog();
        let config = FilterConfig {
            brands: SetFilter::new().including("Black Diamond"),
            ..Default::default()
        };
        assert_eq!(apply_filters(catalog.all(), &config).len(), 4);
    }

    #[test]
    fn included_model_narrows_its_brand() {
        let catalog = catalog();
        let config = FilterConfig {
            brands: SetFilter::new().including("Black Diamond").including("Totem"),
            models: SetFilter::new().including("Camalot Z4"),
            ..Default::default()
        };
        let kept = apply_filters(catalog.all(), &config);
        // BD siblings of Z4 are dropped; Totem has no included model so stays.
        assert_eq!(
            labels(&kept),
            ["Black Diamond Camalot Z4 .3", "Totem 1.25"]
        );
    }

    #[test]
    fn model_include_alone_selects_only_that_model() {
        let catalog = catalog();
        let config = FilterConfig {
            models: SetFilter::new().including("Camalot C4"),
            ..Default::default()
        };
        assert_eq!(
            labels(&apply_filters(catalog.all(), &config)),
            ["Black Diamond Camalot C4 1", "Black Diamond Camalot C4 2"]
        );
    }

    #[test]
    fn model_exclude_beats_brand_include() {
        let catalog = catalog();
        let config = FilterConfig {
            brands: SetFilter::new().including("Black Diamond"),
            models: SetFilter::new().excluding("Camalot C4"),
            ..Default::default()
        };
        assert_eq!(
            labels(&apply_filters(catalog.all(), &config)),
            ["Black Diamond Camalot Z4 .3", "Black Diamond Stopper 7"]
        );
    }

    #[test]
    fn empty_brand_include_matches_no_brand_filter() {
        let catalog = catalog();
        let explicit = FilterConfig {
            brands: SetFilter {
                include: BTreeSet::new(),
                exclude: BTreeSet::new(),
            },
            ..Default::default()
        };
        assert_eq!(
            apply_filters(catalog.all(), &explicit),
            apply_filters(catalog.all(), &FilterConfig::default())
        );
    }

    #[test]
    fn strength_bound_is_inclusive() {
        let catalog = catalog();
        let config = FilterConfig {
            strength_min: 12.0,
            ..Default::default()
        };
        let kept = apply_filters(catalog.all(), &config);
        assert_eq!(
            labels(&kept),
            [
                "Black Diamond Camalot C4 1",
                "Black Diamond Camalot C4 2",
                "Totem 1.25"
            ]
        );
    }

    #[test]
    fn range_uses_expansion_and_passive_sizes() {
        let catalog = catalog();
        let config = FilterConfig {
            range_min: 11.0,
            range_max: 45.0,
            ..Default::default()
        };
        let kept = apply_filters(catalog.all(), &config);
        assert_eq!(
            labels(&kept),
            [
                "Black Diamond Camalot Z4 .3",
                "Black Diamond Stopper 7",
                "Totem 1.25"
            ]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = catalog();
        let config = FilterConfig {
            strength_min: 9.0,
            ..Default::default()
        };
        let once = apply_filters(catalog.all(), &config);
        let twice = apply_filters(catalog.all(), &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn strength_stage_keeps_input_order() {
        let strengths = [12.0, 4.0, 10.0, 9.0, 14.0, 6.0, 11.0, 13.0, 8.0, 10.0];
        let mut b = CatalogBuilder::new();
        b.brand("trango", GearBrand::new("Trango", None)).unwrap();
        for (i, strength) in strengths.iter().enumerate() {
            b.gear("trango", None, cam(&i.to_string(), 20.0, 30.0, *strength))
                .unwrap();
        }
        let catalog = b.build();

        let config = FilterConfig {
            strength_min: 10.0,
            ..Default::default()
        };
        let sizes: Vec<&str> = apply_filters(catalog.all(), &config)
            .into_iter()
            .map(|r| r.size())
            .collect();
        assert_eq!(sizes, ["0", "2", "4", "6", "7", "9"]);
    }

    #[test]
    fn subset_uses_the_supplied_index() {
        let catalog = catalog();
        let config = FilterConfig {
            brands: SetFilter::new().including("Black Diamond"),
            models: SetFilter::new().including("Camalot Z4"),
            ..Default::default()
        };
        let without_z4: Vec<&GearRecord> = catalog
            .iter()
            .filter(|r| r.model().map(|m| m.name()) != Some("Camalot Z4"))
            .collect();

        // a subset index no longer knows Z4 is a Black Diamond model
        let local = apply_filters(without_z4.iter().copied(), &config);
        assert_eq!(
            labels(&local),
            [
                "Black Diamond Camalot C4 1",
                "Black Diamond Camalot C4 2",
                "Black Diamond Stopper 7"
            ]
        );

        let global = apply_filters_indexed(without_z4.iter().copied(), &config, &catalog.index());
        assert!(global.is_empty());

        let full = apply_filters_indexed(catalog.all(), &config, &catalog.index());
        assert_eq!(labels(&full), labels(&apply_filters(catalog.all(), &config)));
        assert_eq!(labels(&full), ["Black Diamond Camalot Z4 .3"]);
    }

    #[test]
    fn modelless_record_of_a_narrowed_brand_is_rejected() {
        let mut b = CatalogBuilder::new();
        b.brand("bd", GearBrand::new("Black Diamond", None))
            .unwrap()
            .model("c4", "bd", GearModel::new("Camalot C4", None, true))
            .unwrap();
        b.gear("bd", Some("c4"), cam("1", 30.2, 52.1, 12.0))
            .unwrap()
            .gear("bd", None, cam("3", 50.7, 87.9, 12.0))
            .unwrap();
        let catalog = b.build();

        let brand_only = FilterConfig {
            brands: SetFilter::new().including("Black Diamond"),
            ..Default::default()
        };
        assert_eq!(apply_filters(catalog.all(), &brand_only).len(), 2);

        let narrowed = FilterConfig {
            models: SetFilter::new().including("Camalot C4"),
            ..brand_only.clone()
        };
        assert_eq!(
            labels(&apply_filters(catalog.all(), &narrowed)),
            ["Black Diamond Camalot C4 1"]
        );

        let model_only = FilterConfig {
            models: SetFilter::new().including("Camalot C4"),
            ..Default::default()
        };
        assert_eq!(
            labels(&apply_filters(catalog.all(), &model_only)),
            ["Black Diamond Camalot C4 1"]
        );
    }
}
