//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every KPI tick with the new values
    pub log_kpi_ticks: bool,

    /// Log chart layout recomputation (resize / range change)
    pub log_chart_redraw: bool,

    /// Search and sort events on the orders table
    pub log_table_events: bool,

    pub log_theme: bool,

    /// Sidebar and dropdown open/close transitions
    pub log_layout: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_theme: true,

    log_kpi_ticks: false,
    log_chart_redraw: false,
    log_table_events: false,
    log_layout: false,
    log_performance: false,
};
