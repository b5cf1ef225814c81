//! Configuration module for the admin dashboard.

// Can all be private because we have a public re-export.
mod chart;
mod debug;
mod kpi;
mod layout;
mod persistence;

// Re-export commonly used items
pub use chart::{CHART, ChartConfig};
pub use debug::{DF, LogFlags};
pub use kpi::{IntMetricConfig, KPI, KpiConfig, RateMetricConfig};
pub use layout::{LAYOUT, LayoutConfig};
pub use persistence::PERSISTENCE;
