//! Build configuration from environment variables.
use std::env;
use std::path::PathBuf;

use gear_core::ChartConfig;

/// Static site build configuration.
///
/// Paths come from the environment; the chart overrides, when set, win over
/// the values in `config.toml`.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Directory holding `config.toml`, `catalog.ron` and `book/`.
    pub data_dir: PathBuf,
    /// Chart JSON destination.
    pub output: PathBuf,
    pub shorthand: Option<bool>,
    pub strength_min: Option<f64>,
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
}

impl SiteConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/gear/content/data";
    pub const DEFAULT_OUTPUT: &'static str = "public/chart.json";

    /// Construct site configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GEAR_DATA_DIR` - Content directory (default: `crates/gear/content/data`)
    /// - `GEAR_OUTPUT` - Chart JSON path (default: `public/chart.json`)
    /// - `GEAR_SHORTHAND` - Use shorthand labels (`true`/`false`)
    /// - `GEAR_STRENGTH_MIN` - Initial strength threshold in kN
    /// - `GEAR_RANGE_MIN`, `GEAR_RANGE_MAX` - Initial size window in mm
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            data_dir: read("GEAR_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR)),
            output: read("GEAR_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_OUTPUT)),
            shorthand: read("GEAR_SHORTHAND").and_then(|v| parse(&v)),
            strength_min: read("GEAR_STRENGTH_MIN").and_then(|v| parse_finite(&v)),
            range_min: read("GEAR_RANGE_MIN").and_then(|v| parse_finite(&v)),
            range_max: read("GEAR_RANGE_MAX").and_then(|v| parse_finite(&v)),
        }
    }

    /// Applies the environment overrides on top of a loaded chart config.
    pub fn chart_config(&self, mut config: ChartConfig) -> ChartConfig {
        if let Some(shorthand) = self.shorthand {
            config.shorthand = shorthand;
        }
        if let Some(strength_min) = self.strength_min {
            config.strength_min = strength_min;
        }
        if let Some(range_min) = self.range_min {
            config.range_min = range_min;
        }
        if let Some(range_max) = self.range_max {
            config.range_max = range_max;
        }
        config
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    value.trim().parse().ok()
}

fn parse_finite(value: &str) -> Option<f64> {
    parse::<f64>(value).filter(|v| v.is_finite())
}
