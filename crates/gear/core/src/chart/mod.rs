//! Comparison chart pipeline.
//!
//! - [`sort_for_chart`]: smallest and lightest protection first
//! - [`scale`] / [`ChartAxes`]: padded integer axis bounds
//! - [`ChartData`]: parallel label and series arrays for the renderer
//! - [`ChartView`]: one chart instance with its own filter state

mod project;
mod scale;
mod sort;
mod view;

pub use project::ChartData;
pub use scale::{AxisBounds, ChartAxes, ScaleAxis, scale};
pub use sort::{chart_order, sort_for_chart};
pub use view::{ChartRender, ChartView};
