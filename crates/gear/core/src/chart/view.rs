use crate::catalog::BrandModelIndex;
use crate::config::ChartConfig;
use crate::filter::{FilterBounds, FilterConfig, Selection, apply_filters};
use crate::gear::{GearRecord, GearType, Kilonewtons, Millimeters};

use super::{ChartAxes, ChartData, sort_for_chart};

/// Everything the renderer needs for one redraw.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartRender {
    pub data: ChartData,
    pub axes: ChartAxes,
    /// Canvas height in pixels.
    pub height: u32,
}

/// One comparison chart.
///
/// Owns its library (the records this chart may ever show), its filter state
/// and the working list derived from them. Views never share state, so several
/// charts over the same catalog are independent.
#[derive(Clone, Debug)]
pub struct ChartView<'a> {
    library: Vec<&'a GearRecord>,
    config: ChartConfig,
    filter: FilterConfig,
    list: Vec<&'a GearRecord>,
    rendered: bool,
}

impl<'a> ChartView<'a> {
    /// Creates a view over `records` with the initial filter from `config`.
    pub fn new<I>(records: I, config: ChartConfig) -> Self
    where
        I: IntoIterator<Item = &'a GearRecord>,
    {
        let filter = config.initial_filter();
        let mut view = Self {
            library: records.into_iter().collect(),
            config,
            filter,
            list: Vec::new(),
            rendered: false,
        };
        view.refresh();
        view
    }

    /// Narrows the library to records matching `keep`.
    ///
    /// Only allowed before the first render; returns `false` (and changes
    /// nothing) afterwards. The sibling-model rule then sees the pruned
    /// library only: a model pruned away no longer narrows its brand.
    pub fn prune<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&GearRecord) -> bool,
    {
        if self.rendered {
            return false;
        }
        self.library.retain(|record| keep(*record));
        self.refresh();
        true
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn library(&self) -> &[&'a GearRecord] {
        &self.library
    }

    /// Current filtered and sorted selection.
    pub fn records(&self) -> &[&'a GearRecord] {
        &self.list
    }

    /// Brand/model grouping of the library, for building filter controls.
    pub fn index(&self) -> BrandModelIndex {
        BrandModelIndex::from_records(self.library.iter().copied())
    }

    /// Slider limits over the library.
    pub fn bounds(&self) -> Option<FilterBounds> {
        FilterBounds::from_records(self.library.iter().copied(), self.config.range_step)
    }

    /// Replaces the whole filter and recomputes.
    pub fn set_filter(&mut self, filter: FilterConfig) {
        self.filter = filter;
        self.refresh();
    }

    pub fn toggle_type(&mut self, gear_type: GearType) -> Selection {
        let selection = self.filter.types.toggle(gear_type);
        self.refresh();
        selection
    }

    pub fn toggle_brand(&mut self, brand: impl Into<String>) -> Selection {
        let selection = self.filter.brands.toggle(brand.into());
        self.refresh();
        selection
    }

    pub fn toggle_model(&mut self, model: impl Into<String>) -> Selection {
        let selection = self.filter.models.toggle(model.into());
        self.refresh();
        selection
    }

    pub fn set_strength_min(&mut self, strength_min: Kilonewtons) {
        self.filter.strength_min = strength_min;
        self.refresh();
    }

    pub fn set_range(&mut self, range_min: Millimeters, range_max: Millimeters) {
        self.filter.range_min = range_min;
        self.filter.range_max = range_max;
        self.refresh();
    }

    /// Recomputes the working list: filter, then sort.
    pub fn refresh(&mut self) {
        let mut list = apply_filters(self.library.iter().copied(), &self.filter);
        sort_for_chart(&mut list);
        self.list = list;
    }

    /// Projects the working list for the renderer.
    pub fn render(&mut self) -> ChartRender {
        self.rendered = true;
        ChartRender {
            data: ChartData::project(&self.list, self.config.shorthand),
            axes: ChartAxes::compute(&self.list, &self.config),
            height: self.config.chart_height(self.list.len()),
        }
    }
}
