//! Static build steps: chart page data and guidebook walk.

use std::collections::VecDeque;
use std::path::Path;

use anyhow::Result;
use gear_content::{BookPath, ContentFactory, embedded};
use gear_core::{
    Catalog, ChartConfig, ChartRender, ChartView, FilterBounds, FilterConfig, GearError,
};
use serde::Serialize;

use crate::config::SiteConfig;

/// Everything the chart page script needs, written as one JSON document.
#[derive(Clone, Debug, Serialize)]
pub struct ChartPage {
    /// Catalog fingerprint for cache busting.
    pub digest: String,
    pub config: ChartConfig,
    /// Initial filter state of the controls.
    pub filter: FilterConfig,
    /// Slider limits, absent for an empty catalog.
    pub bounds: Option<FilterBounds>,
    /// Brand name to model names, for the brand/model buttons.
    pub brands: Vec<(String, Vec<String>)>,
    pub chart: ChartRender,
}

impl ChartPage {
    /// Runs the chart pipeline over `catalog` with the initial filter.
    pub fn build(catalog: &Catalog, config: ChartConfig) -> Self {
        let mut view = ChartView::new(catalog, config);
        let index = view.index();
        let brands = index
            .brands()
            .map(|brand| {
                let models = index.models_of(brand).map(str::to_string).collect();
                (brand.to_string(), models)
            })
            .collect();

        let chart = view.render();
        tracing::info!(
            library = view.library().len(),
            rows = chart.data.len(),
            height = chart.height,
            "Rendered comparison chart"
        );

        Self {
            digest: catalog.digest_hex(),
            config: view.config().clone(),
            filter: view.filter().clone(),
            bounds: view.bounds(),
            brands,
            chart,
        }
    }

    /// Writes the page as pretty JSON, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", parent.display(), e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
        tracing::info!(path = %path.display(), "Wrote chart data");
        Ok(())
    }
}

/// Loads the catalog from the data directory, or the bundled one when the
/// directory has no `catalog.ron`.
fn with_catalog<T>(factory: &ContentFactory, f: impl FnOnce(&Catalog) -> T) -> Result<T> {
    let path = factory.data_dir().join("catalog.ron");
    if path.exists() {
        let catalog = factory.load_catalog()?;
        Ok(f(&catalog))
    } else {
        tracing::debug!(path = %path.display(), "No catalog file, using bundled catalog");
        Ok(f(embedded::catalog()?))
    }
}

/// Builds and writes the chart page described by `site`.
pub fn build_chart(site: &SiteConfig) -> Result<ChartPage> {
    let factory = ContentFactory::new(&site.data_dir);
    let config = site.chart_config(factory.load_config()?);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid chart overrides ({}): {}", e.error_code(), e))?;
    tracing::debug!(?config, "Chart configuration");

    let page = with_catalog(&factory, |catalog| ChartPage::build(catalog, config))?;
    page.write(&site.output)?;
    Ok(page)
}

/// Visits every reachable guidebook document, breadth first.
///
/// Returns the paths that loaded. A linked area without a document is logged
/// and skipped; a missing root means the site has no guidebook.
pub fn walk_guidebook(factory: &ContentFactory) -> Vec<BookPath> {
    let mut visited = Vec::new();
    let mut queue = VecDeque::from([BookPath::root()]);

    while let Some(path) = queue.pop_front() {
        let document = match factory.load_area(&path) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(area = %path, "Skipping guidebook area: {:#}", e);
                continue;
            }
        };
        for area in document.ordered_areas() {
            let Some(link) = area.link() else {
                continue;
            };
            match path.child(link) {
                Ok(child) => queue.push_back(child),
                Err(e) => tracing::warn!(area = %path, link, "Invalid area link: {}", e),
            }
        }
        visited.push(path);
    }

    tracing::info!(areas = visited.len(), "Walked guidebook");
    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_data() -> &'static str {
        concat!(env!("CARGO_MANIFEST_DIR"), "/../gear/content/data")
    }

    #[test]
    fn builds_chart_page_from_bundled_data() {
        let out = tempfile::tempdir().unwrap();
        let site = SiteConfig {
            data_dir: bundled_data().into(),
            output: out.path().join("nested").join("chart.json"),
            ..SiteConfig::default()
        };

        let page = build_chart(&site).unwrap();
        assert_eq!(page.chart.data.len(), 48);
        assert_eq!(page.digest.len(), 64);
        assert_eq!(page.brands.len(), 7);

        let written = std::fs::read_to_string(&site.output).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["digest"], page.digest.as_str());
        assert_eq!(json["chart"]["data"]["labels"].as_array().unwrap().len(), 48);
    }

    #[test]
    fn empty_data_dir_uses_bundled_catalog() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let site = SiteConfig {
            data_dir: data.path().into(),
            output: out.path().join("chart.json"),
            strength_min: Some(10.0),
            range_min: Some(0.0),
            range_max: Some(1000.0),
            ..SiteConfig::default()
        };

        let page = build_chart(&site).unwrap();
        assert_eq!(page.filter.strength_min, 10.0);
        assert_eq!(page.chart.data.len(), 88);
    }

    #[test]
    fn inverted_override_window_is_rejected() {
        let out = tempfile::tempdir().unwrap();
        let site = SiteConfig {
            data_dir: bundled_data().into(),
            output: out.path().join("chart.json"),
            range_min: Some(80.0),
            ..SiteConfig::default()
        };

        let err = build_chart(&site).unwrap_err();
        assert!(err.to_string().contains("CONFIG_INVERTED_WINDOW"), "{err}");
        assert!(!site.output.exists());
    }

    #[test]
    fn walks_reachable_areas() {
        let factory = ContentFactory::new(bundled_data());
        let visited: Vec<String> = walk_guidebook(&factory)
            .iter()
            .map(|p| p.to_string())
            .collect();
        // leavenworth is linked but has no document yet
        assert_eq!(visited, ["", "cascades"]);
    }

    #[test]
    fn missing_guidebook_walks_nothing() {
        let data = tempfile::tempdir().unwrap();
        assert!(walk_guidebook(&ContentFactory::new(data.path())).is_empty());
    }
}
