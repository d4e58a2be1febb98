use crate::config::ChartConfig;
use crate::gear::{GearRecord, Measure};

/// Semantic axis a scale is computed along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleAxis {
    /// Expansion and passive sizes, in mm.
    Range,
    /// Weight, in grams.
    Weight,
}

/// Integer axis limits handed to the chart renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisBounds {
    pub min: i64,
    pub max: i64,
}

impl AxisBounds {
    /// Bounds used when there is nothing to plot.
    pub const FALLBACK: Self = Self { min: 0, max: 10 };
}

/// Padded `{min, max}` of `axis` over `records`.
///
/// The raw extent is widened by `(max - min) * pad` on both sides, then the
/// lower bound is floored and the upper bound ceiled. An empty selection
/// returns [`AxisBounds::FALLBACK`].
pub fn scale(records: &[&GearRecord], axis: ScaleAxis, pad: f64) -> AxisBounds {
    let extent = records
        .iter()
        .filter_map(|record| match axis {
            ScaleAxis::Range => record
                .min_of(&Measure::SIZE)
                .zip(record.max_of(&Measure::SIZE)),
            ScaleAxis::Weight => Some((record.weight(), record.weight())),
        })
        .reduce(|(lo, hi), (min, max)| (lo.min(min), hi.max(max)));

    let Some((min, max)) = extent else {
        return AxisBounds::FALLBACK;
    };

    let pad = (max - min) * pad;
    AxisBounds {
        min: (min - pad).floor() as i64,
        max: (max + pad).ceil() as i64,
    }
}

/// Both axes of the comparison chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartAxes {
    pub range: AxisBounds,
    pub weight: AxisBounds,
}

impl ChartAxes {
    /// Range axis pads its low and high ends differently to leave room for
    /// labels; the weight axis always starts at zero.
    pub fn compute(records: &[&GearRecord], config: &ChartConfig) -> Self {
        let range = AxisBounds {
            min: scale(records, ScaleAxis::Range, config.range_pad_low).min,
            max: scale(records, ScaleAxis::Range, config.range_pad_high).max,
        };
        let weight = AxisBounds {
            min: ChartConfig::WEIGHT_AXIS_FLOOR,
            max: scale(records, ScaleAxis::Weight, config.weight_pad).max,
        };
        Self { range, weight }
    }
}
