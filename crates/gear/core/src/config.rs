use crate::error::ConfigError;
use crate::filter::FilterConfig;

/// Chart configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    /// Use brand/model shorthand in the primary labels.
    pub shorthand: bool,
    /// Initial strength threshold in kN.
    pub strength_min: f64,
    /// Initial size window in mm.
    pub range_min: f64,
    pub range_max: f64,
    /// Granularity of the range sliders in mm.
    pub range_step: f64,
    /// Padding fractions for the axis scales.
    pub range_pad_low: f64,
    pub range_pad_high: f64,
    pub weight_pad: f64,
}

impl ChartConfig {
    // ===== layout constants =====
    /// Pixel height of one chart row.
    pub const ROW_HEIGHT: u32 = 32;
    /// Pixel height of axes, legend and padding around the rows.
    pub const CHROME_HEIGHT: u32 = 103;
    /// Weight axis always starts at zero.
    pub const WEIGHT_AXIS_FLOOR: i64 = 0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STRENGTH_MIN: f64 = 5.0;
    pub const DEFAULT_RANGE_MIN: f64 = 20.0;
    pub const DEFAULT_RANGE_MAX: f64 = 70.0;
    pub const DEFAULT_RANGE_STEP: f64 = 5.0;
    pub const DEFAULT_RANGE_PAD_LOW: f64 = 0.08;
    pub const DEFAULT_RANGE_PAD_HIGH: f64 = 0.16;
    pub const DEFAULT_WEIGHT_PAD: f64 = 0.02;

    pub fn new() -> Self {
        Self {
            shorthand: false,
            strength_min: Self::DEFAULT_STRENGTH_MIN,
            range_min: Self::DEFAULT_RANGE_MIN,
            range_max: Self::DEFAULT_RANGE_MAX,
            range_step: Self::DEFAULT_RANGE_STEP,
            range_pad_low: Self::DEFAULT_RANGE_PAD_LOW,
            range_pad_high: Self::DEFAULT_RANGE_PAD_HIGH,
            weight_pad: Self::DEFAULT_WEIGHT_PAD,
        }
    }

    /// Initial filter for a chart: no set restrictions, configured thresholds.
    pub fn initial_filter(&self) -> FilterConfig {
        FilterConfig {
            strength_min: self.strength_min,
            range_min: self.range_min,
            range_max: self.range_max,
            ..FilterConfig::default()
        }
    }

    /// Checks thresholds, step and pads.
    ///
    /// Every threshold must be finite: a NaN compares false against every
    /// record. The initial window must satisfy `range_min <= range_max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("strength_min", self.strength_min),
            ("range_min", self.range_min),
            ("range_max", self.range_max),
            ("range_step", self.range_step),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.range_step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.range_step));
        }
        if self.range_min > self.range_max {
            return Err(ConfigError::InvertedWindow {
                min: self.range_min,
                max: self.range_max,
            });
        }
        for (field, value) in [
            ("range_pad_low", self.range_pad_low),
            ("range_pad_high", self.range_pad_high),
            ("weight_pad", self.weight_pad),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativePad { field, value });
            }
        }
        Ok(())
    }

    /// Total chart height in pixels for `rows` rows.
    pub fn chart_height(&self, rows: usize) -> u32 {
        let rows = u32::try_from(rows).unwrap_or(u32::MAX);
        rows.saturating_mul(Self::ROW_HEIGHT)
            .saturating_add(Self::CHROME_HEIGHT)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new()
    }
}
