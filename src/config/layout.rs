//! Page layout configuration

pub struct LayoutConfig {
    /// Viewport widths at or below this are treated as mobile
    pub mobile_breakpoint: f32,
    pub sidebar_width: f32,
    pub sidebar_collapsed_width: f32,
    pub header_height: f32,
}

pub const LAYOUT: LayoutConfig = LayoutConfig {
    mobile_breakpoint: 768.0,
    sidebar_width: 220.0,
    sidebar_collapsed_width: 56.0,
    header_height: 48.0,
};
