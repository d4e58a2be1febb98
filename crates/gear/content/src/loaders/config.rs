//! Chart configuration loader.

use std::path::Path;

use gear_core::{ChartConfig, GearError};

use crate::loaders::{LoadResult, read_file};

/// Loader for chart configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing ChartConfig
    ///
    /// # Returns
    ///
    /// Returns a ChartConfig. Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<ChartConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config TOML held in memory.
    pub fn parse(content: &str) -> LoadResult<ChartConfig> {
        let config: ChartConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config.validate().map_err(|e| {
            anyhow::anyhow!("Invalid chart config ({}): {}", e.error_code(), e)
        })?;

        tracing::debug!(?config, "Loaded chart config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("shorthand = true\nstrength_min = 8.0\n").unwrap();
        assert!(config.shorthand);
        assert_eq!(config.strength_min, 8.0);
        assert_eq!(config.range_min, ChartConfig::DEFAULT_RANGE_MIN);
        assert_eq!(config.weight_pad, ChartConfig::DEFAULT_WEIGHT_PAD);
    }

    #[test]
    fn empty_file_is_the_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn rejects_inconsistent_values() {
        assert!(ConfigLoader::parse("range_step = 0.0").is_err());
        assert!(ConfigLoader::parse("range_min = 80.0").is_err());
        assert!(ConfigLoader::parse("weight_pad = -0.1").is_err());
        assert!(ConfigLoader::parse("shorthand = \"yes\"").is_err());
    }

    #[test]
    fn rejects_non_finite_thresholds() {
        for content in [
            "strength_min = nan",
            "strength_min = inf",
            "range_min = nan\nrange_max = nan",
            "range_max = -inf",
        ] {
            let err = ConfigLoader::parse(content).unwrap_err();
            assert!(err.to_string().contains("CONFIG_NON_FINITE"), "{content}: {err}");
        }
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "range_min = 10.0\nrange_max = 40.0").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.range_min, 10.0);
        assert_eq!(config.range_max, 40.0);
        assert_eq!(config.initial_filter().range_max, 40.0);
    }
}
