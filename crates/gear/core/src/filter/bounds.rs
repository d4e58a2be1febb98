use crate::gear::{GearRecord, Kilonewtons, Measure, Millimeters};

/// Slider limits for the numeric filters, computed over a chart's library.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterBounds {
    /// Weakest and strongest rating of any record.
    pub strength_min: Kilonewtons,
    pub strength_max: Kilonewtons,
    /// Smallest size floored to `step`, largest size ceiled to `step`.
    pub range_min: Millimeters,
    pub range_max: Millimeters,
    pub step: Millimeters,
}

impl FilterBounds {
    /// Returns `None` for an empty selection or a non-positive `step`.
    pub fn from_records<'a, I>(records: I, step: Millimeters) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GearRecord>,
    {
        if step.is_nan() || step <= 0.0 {
            return None;
        }

        let mut strength: Option<(f64, f64)> = None;
        let mut range: Option<(f64, f64)> = None;
        for record in records {
            if let (Some(lo), Some(hi)) = (
                record.min_of(&[Measure::Strength]),
                record.max_of(&[Measure::Strength]),
            ) {
                strength = Some(widen(strength, lo, hi));
            }
            if let (Some(lo), Some(hi)) =
                (record.min_of(&Measure::SIZE), record.max_of(&Measure::SIZE))
            {
                range = Some(widen(range, lo, hi));
            }
        }

        let (strength_min, strength_max) = strength?;
        let (range_min, range_max) = range?;
        Some(Self {
            strength_min,
            strength_max,
            range_min: (range_min / step).floor() * step,
            range_max: (range_max / step).ceil() * step,
            step,
        })
    }
}

fn widen(current: Option<(f64, f64)>, lo: f64, hi: f64) -> (f64, f64) {
    match current {
        Some((min, max)) => (min.min(lo), max.max(hi)),
        None => (lo, hi),
    }
}
