//! Dashboard data and the pure transforms over it (no rendering here).

pub mod activity;
pub mod chart_data;
pub mod kpi;
pub mod notifications;
pub mod orders;
pub mod theme;

pub use activity::{ACTIVITY, ActivityItem};
pub use chart_data::{ChartDataset, ChartRange};
pub use kpi::{KpiState, KpiTick, KpiTrends, Trend, TrendDirection};
pub use notifications::{ALERTS, NotificationState};
pub use orders::{
    ORDERS, Order, OrderStatus, OrdersTable, SortDirection, SortIndicator, SortKey, SortState,
    filter_orders, sort_orders,
};
pub use theme::{Theme, ThemeController};
