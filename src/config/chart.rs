//! Bar chart geometry configuration

use std::time::Duration;

pub struct ChartConfig {
    /// Space between the surface edge and the axis frame, all four sides
    pub padding: f32,
    /// Horizontal gap subtracted from each bar's slot
    pub bar_gap: f32,
    /// Left inset of every bar inside its slot
    pub bar_inset: f32,
    /// Radius of the two top corners of each bar
    pub bar_corner_radius: u8,
    /// Distance of the category label below the x axis
    pub label_offset: f32,
    pub label_font_size: f32,
    pub axis_stroke_width: f32,
    /// Delay before the very first draw so the visuals are settled
    pub initial_draw_delay: Duration,
    pub min_height: f32,
}

pub const CHART: ChartConfig = ChartConfig {
    padding: 40.0,
    bar_gap: 20.0,
    bar_inset: 10.0,
    bar_corner_radius: 4,
    label_offset: 20.0,
    label_font_size: 12.0,
    axis_stroke_width: 1.0,
    initial_draw_delay: Duration::from_millis(100),
    min_height: 300.0,
};
