// Trend charts: year-indexed salary and job-opening series rendered as
// neutral `ChartDescription` values for any front end to draw.

pub mod description;
pub mod handlers;
pub mod trends;

pub use description::ChartDescription;
pub use trends::TrendChartBuilder;
