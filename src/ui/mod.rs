mod activity;
mod chart;
mod header;
mod kpi_cards;
mod notifications;
mod orders_table;
mod sidebar;
mod styles;
mod ui_config;
mod ui_text;

pub use chart::{BarChartLayout, BarGeometry, ChartColors, ChartView};
pub use header::theme_icon;
pub use styles::trend_icon;
pub use ui_config::{DARK, LIGHT, Palette, UI_TEXT};

pub(crate) use activity::render_activity;
pub(crate) use header::render_header;
pub(crate) use kpi_cards::render_kpi_cards;
pub(crate) use notifications::render_dropdown;
pub(crate) use orders_table::render_orders;
pub(crate) use sidebar::{render_overlay, render_side_panel};
pub(crate) use styles::UiStyleExt;
