use core::cmp::Ordering;

use crate::gear::GearRecord;

/// Chart comparator: lower size, then upper size, then weight, all ascending.
///
/// Sizes are the operational range for active devices and the passive
/// extremes for the rest.
pub fn chart_order(a: &GearRecord, b: &GearRecord) -> Ordering {
    let lower = |r: &GearRecord| r.lower_size().unwrap_or(f64::INFINITY);
    let upper = |r: &GearRecord| r.upper_size().unwrap_or(f64::INFINITY);

    lower(a)
        .total_cmp(&lower(b))
        .then_with(|| upper(a).total_cmp(&upper(b)))
        .then_with(|| a.weight().total_cmp(&b.weight()))
}

/// Stable in-place sort with [`chart_order`].
pub fn sort_for_chart(records: &mut [&GearRecord]) {
    records.sort_by(|a, b| chart_order(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::{Color, GearBrand, GearSpec, GearType, RangeSpec, Stem, StrengthSpec};
    use std::sync::Arc;

    fn cam(size: &str, min: f64, max: f64, weight: f64) -> GearRecord {
        let spec = GearSpec {
            gear_type: GearType::Cam,
            color: Color::Yellow,
            size: size.into(),
            weight,
            stem: Stem::Flex,
            range: RangeSpec {
                min: Some(min),
                max: Some(max),
                ..Default::default()
            },
            strength: StrengthSpec {
                active: Some(10.0),
                ..Default::default()
            },
        };
        GearRecord::new(Arc::new(GearBrand::new("DMM", None)), None, spec).unwrap()
    }

    fn nut(size: &str, p1: f64, p2: f64, weight: f64) -> GearRecord {
        let spec = GearSpec {
            gear_type: GearType::Nut,
            color: Color::Silver,
            size: size.into(),
            weight,
            stem: Stem::Wired,
            range: RangeSpec {
                p1: Some(p1),
                p2: Some(p2),
                ..Default::default()
            },
            strength: StrengthSpec {
                p1: Some(8.0),
                p2: Some(8.0),
                ..Default::default()
            },
        };
        GearRecord::new(Arc::new(GearBrand::new("DMM", None)), None, spec).unwrap()
    }

    #[test]
    fn ties_on_size_break_by_weight() {
        let large = cam("3", 29.0, 41.0, 124.0);
        let medium = cam("2", 14.0, 29.0, 78.0);
        let light = cam("2", 14.0, 29.0, 70.0);
        assert_eq!(large.lower_size(), Some(30.2));
        assert_eq!(medium.lower_size(), Some(15.5));

        let mut records = vec![&large, &medium, &light];
        sort_for_chart(&mut records);
        let weights: Vec<_> = records.iter().map(|r| r.weight()).collect();
        assert_eq!(weights, [70.0, 78.0, 124.0]);
    }

    #[test]
    fn upper_size_breaks_ties_before_weight() {
        let short = cam("a", 10.0, 20.0, 90.0);
        let long = cam("b", 9.0, 29.0, 50.0);
        assert_eq!(short.lower_size(), long.lower_size());

        let mut records = vec![&long, &short];
        sort_for_chart(&mut records);
        assert_eq!(records[0].size(), "a");
    }

    #[test]
    fn passive_gear_sorts_by_placement_extremes() {
        let nut = nut("9", 16.0, 25.0, 40.0);
        let cam = cam("1", 14.0, 28.0, 80.0);

        let mut records = vec![&nut, &cam];
        sort_for_chart(&mut records);
        assert_eq!(records[0].size(), "1");
        assert_eq!(chart_order(&nut, &nut), Ordering::Equal);
    }

    #[test]
    fn sort_is_stable_for_identical_keys() {
        let first = cam("x", 10.0, 20.0, 50.0);
        let second = cam("y", 10.0, 20.0, 50.0);
        let mut records = vec![&first, &second];
        sort_for_chart(&mut records);
        assert_eq!(records[0].size(), "x");
        assert_eq!(records[1].size(), "y");
    }
}
