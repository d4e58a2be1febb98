//! Climbing protection catalog and comparison-chart pipeline.
//!
//! `gear-core` defines the canonical gear records (cams, nuts, hexes, ...) and
//! the pure functions that turn a catalog into chart-ready data:
//!
//! ```text
//! Catalog ─▶ filter::apply_filters ─▶ chart::sort_for_chart ─▶ chart::scale
//!                                                           └─▶ chart::ChartData
//! ```
//!
//! Nothing in this crate performs I/O. Catalog files, configuration files and
//! guidebook documents are read by `gear-content`; the static site binary wires
//! everything together.
pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod filter;
pub mod gear;

pub use catalog::{BrandModelIndex, Catalog, CatalogBuilder};
pub use chart::{
    AxisBounds, ChartAxes, ChartData, ChartRender, ChartView, ScaleAxis, chart_order, scale,
    sort_for_chart,
};
pub use config::ChartConfig;
pub use error::{CatalogError, ConfigError, ErrorSeverity, GearError, RecordContext};
pub use filter::{
    FilterBounds, FilterConfig, Selection, SetFilter, apply_filters, apply_filters_indexed,
};
pub use gear::{
    ActiveSpec, Color, ExpansionRange, GearBrand, GearModel, GearProfile, GearRecord, GearSpec,
    GearType, Grams, Kilonewtons, Measure, Millimeters, OperationalRange, PassiveRange,
    PassiveSpec, PassiveStrength, RangeSpec, Stem, StrengthSpec, StrengthTable, round1,
};
