use eframe::egui::{
    Align, Align2, Color32, ComboBox, CornerRadius, FontId, Layout, Pos2, Rect, Sense, Stroke, Ui,
    Vec2, pos2,
};
use strum::IntoEnumIterator;

use crate::{
    config::{CHART, DF},
    domain::{ChartDataset, ChartRange},
    ui::{Palette, UI_TEXT},
    utils::AppInstant,
};

/// One bar of the chart, in surface-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub rect: Rect,
    pub label: &'static str,
    pub label_pos: Pos2,
    pub value: f64,
}

/// Everything needed to paint one frame of the chart, origin at the surface's top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub size: Vec2,
    /// Polyline: top of y axis, origin, end of x axis
    pub axis: [Pos2; 3],
    pub bars: Vec<BarGeometry>,
}

impl BarChartLayout {
    pub fn compute(size: Vec2, dataset: &ChartDataset) -> Self {
        let (width, height) = (size.x, size.y);
        let padding = CHART.padding;
        let chart_height = (height - padding * 2.0).max(0.0);
        let chart_width = (width - padding * 2.0).max(0.0);
        let baseline = height - padding;

        let axis = [
            pos2(padding, padding),
            pos2(padding, baseline),
            pos2(width - padding, baseline),
        ];

        let n = dataset.len();
        if n == 0 {
            return Self {
                size,
                axis,
                bars: Vec::new(),
            };
        }

        let slot = chart_width / n as f32;
        let bar_width = (slot - CHART.bar_gap).max(0.0);
        let max = dataset.max_value();

        let bars = dataset
            .values
            .iter()
            .zip(dataset.labels)
            .enumerate()
            .map(|(i, (&value, &label))| {
                let bar_height = if max > 0.0 {
                    ((value / max) as f32 * chart_height).max(0.0)
                } else {
                    0.0
                };
                let x = padding + CHART.bar_inset + i as f32 * slot;
                let y = baseline - bar_height;
                BarGeometry {
                    rect: Rect::from_min_size(pos2(x, y), Vec2::new(bar_width, bar_height)),
                    label,
                    label_pos: pos2(x + bar_width / 2.0, baseline + CHART.label_offset),
                    value,
                }
            })
            .collect();

        Self { size, axis, bars }
    }
}

/// Colors captured from the palette when the layout was (re)computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartColors {
    pub bar: Color32,
    pub axis: Color32,
    pub label: Color32,
}

impl From<&Palette> for ChartColors {
    fn from(p: &Palette) -> Self {
        Self {
            bar: p.primary,
            axis: p.border,
            label: p.text_muted,
        }
    }
}

/// Range selection plus the cached drawing.
///
/// The cache only refreshes when the surface size or the range changes, so a
/// theme switch shows up on the next resize or selection.
pub struct ChartView {
    range: ChartRange,
    armed_at: AppInstant,
    cached: Option<(BarChartLayout, ChartColors, ChartRange)>,
    redraws: u64,
}

impl ChartView {
    pub fn new(armed_at: AppInstant) -> Self {
        Self {
            range: ChartRange::default(),
            armed_at,
            cached: None,
            redraws: 0,
        }
    }

    pub fn range(&self) -> ChartRange {
        self.range
    }

    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    pub fn layout(&self) -> Option<&BarChartLayout> {
        self.cached.as_ref().map(|(layout, _, _)| layout)
    }

    pub fn colors(&self) -> Option<ChartColors> {
        self.cached.as_ref().map(|(_, colors, _)| *colors)
    }

    /// Selector change. Unknown names leave the chart as it is.
    pub fn select_range(&mut self, name: &str) {
        match ChartRange::parse(name) {
            Ok(range) => self.range = range,
            Err(e) => log::debug!("Ignoring chart selection: {}", e),
        }
    }

    pub fn is_ready(&self, now: AppInstant) -> bool {
        now.saturating_duration_since(self.armed_at) >= CHART.initial_draw_delay
    }

    /// Recomputes the cached layout when size or range differ from the cached one.
    /// Returns whether a redraw happened.
    pub fn refresh(&mut self, size: Vec2, palette: &Palette) -> bool {
        let stale = match &self.cached {
            Some((layout, _, range)) => layout.size != size || *range != self.range,
            None => true,
        };
        if stale {
            let layout = crate::trace_time!("chart layout", 500, {
                BarChartLayout::compute(size, self.range.dataset())
            });
            self.cached = Some((layout, ChartColors::from(palette), self.range));
            self.redraws += 1;
            if DF.log_chart_redraw {
                log::info!(
                    "Chart redraw #{} ({} at {:.0}x{:.0})",
                    self.redraws,
                    self.range,
                    size.x,
                    size.y
                );
            }
        }
        stale
    }

    pub fn render(&mut self, ui: &mut Ui, palette: &Palette, now: AppInstant) {
        ui.horizontal(|ui| {
            ui.heading(&UI_TEXT.chart_title);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let mut selected = self.range;
                ComboBox::from_id_salt("chart_range")
                    .selected_text(selected.to_string())
                    .show_ui(ui, |ui| {
                        for range in ChartRange::iter() {
                            ui.selectable_value(&mut selected, range, range.to_string());
                        }
                    });
                if selected != self.range {
                    self.select_range(&selected.to_string());
                }
            });
        });

        let width = ui.available_width();
        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(width, CHART.min_height), Sense::hover());

        if !self.is_ready(now) {
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                &UI_TEXT.chart_loading,
                FontId::proportional(CHART.label_font_size),
                palette.text_muted,
            );
            ui.ctx()
                .request_repaint_after(CHART.initial_draw_delay.saturating_sub(
                    now.saturating_duration_since(self.armed_at),
                ));
            return;
        }

        self.refresh(rect.size(), palette);
        if let Some((layout, colors, _)) = &self.cached {
            paint_layout(ui, rect.min, layout, colors);
        }
    }
}

fn paint_layout(ui: &Ui, origin: Pos2, layout: &BarChartLayout, colors: &ChartColors) {
    let painter = ui.painter();
    let offset = origin.to_vec2();

    painter.line(
        layout.axis.iter().map(|p| *p + offset).collect(),
        Stroke::new(CHART.axis_stroke_width, colors.axis),
    );

    let radius = CHART.bar_corner_radius;
    let corners = CornerRadius {
        nw: radius,
        ne: radius,
        sw: 0,
        se: 0,
    };
    for bar in &layout.bars {
        painter.rect_filled(bar.rect.translate(offset), corners, colors.bar);
        painter.text(
            bar.label_pos + offset,
            Align2::CENTER_CENTER,
            bar.label,
            FontId::proportional(CHART.label_font_size),
            colors.label,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{DARK, LIGHT};
    use std::time::Duration;

    const SIZE: Vec2 = Vec2::new(600.0, 300.0);

    #[test]
    fn test_daily_layout() {
        let layout = BarChartLayout::compute(SIZE, ChartRange::Daily.dataset());
        assert_eq!(layout.bars.len(), 5);

        let heights: Vec<f32> = layout.bars.iter().map(|b| b.rect.height()).collect();
        let tallest = heights.iter().cloned().fold(f32::MIN, f32::max);
        let shortest = heights.iter().cloned().fold(f32::MAX, f32::min);
        assert_eq!(heights[4], tallest); // 2000
        assert_eq!(heights[0], shortest); // 500
        // Full height for the max value.
        assert!((heights[4] - (300.0 - 80.0)).abs() < 1e-3);
        // Heights follow value order.
        assert!(heights[0] < heights[2] && heights[2] < heights[1] && heights[1] < heights[3]);
    }

    #[test]
    fn test_bar_geometry() {
        let layout = BarChartLayout::compute(SIZE, ChartRange::Monthly.dataset());
        let slot = (600.0 - 80.0) / 4.0;
        for (i, bar) in layout.bars.iter().enumerate() {
            assert!((bar.rect.min.x - (50.0 + i as f32 * slot)).abs() < 1e-3);
            assert!((bar.rect.width() - (slot - 20.0)).abs() < 1e-3);
            assert!((bar.rect.max.y - 260.0).abs() < 1e-3);
            assert!((bar.label_pos.x - bar.rect.center().x).abs() < 1e-3);
            assert!((bar.label_pos.y - 280.0).abs() < 1e-3);
        }
        assert_eq!(layout.axis, [pos2(40.0, 40.0), pos2(40.0, 260.0), pos2(560.0, 260.0)]);
    }

    #[test]
    fn test_narrow_surface_clamps() {
        let layout = BarChartLayout::compute(Vec2::new(90.0, 60.0), ChartRange::Weekly.dataset());
        assert_eq!(layout.bars.len(), 7);
        assert!(layout.bars.iter().all(|b| b.rect.width() == 0.0 && b.rect.height() == 0.0));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = BarChartLayout::compute(SIZE, ChartRange::Weekly.dataset());
        let b = BarChartLayout::compute(SIZE, ChartRange::Weekly.dataset());
        assert_eq!(a, b);
    }

    #[test]
    fn test_refresh_only_on_change() {
        let mut view = ChartView::new(AppInstant::now());
        assert!(view.refresh(SIZE, &LIGHT));
        assert!(!view.refresh(SIZE, &LIGHT));
        assert_eq!(view.redraw_count(), 1);

        assert!(view.refresh(Vec2::new(800.0, 300.0), &LIGHT));
        view.select_range("Daily");
        assert!(view.refresh(Vec2::new(800.0, 300.0), &LIGHT));
        assert_eq!(view.layout().map(|l| l.bars.len()), Some(5));
        assert_eq!(view.redraw_count(), 3);
    }

    #[test]
    fn test_theme_change_waits_for_next_redraw() {
        let mut view = ChartView::new(AppInstant::now());
        view.refresh(SIZE, &LIGHT);
        view.refresh(SIZE, &DARK);
        assert_eq!(view.colors().map(|c| c.bar), Some(LIGHT.primary));
        view.refresh(Vec2::new(640.0, 300.0), &DARK);
        assert_eq!(view.colors().map(|c| c.bar), Some(DARK.primary));
    }

    #[test]
    fn test_unknown_range_is_noop() {
        let mut view = ChartView::new(AppInstant::now());
        view.refresh(SIZE, &LIGHT);
        view.select_range("Hourly");
        assert_eq!(view.range(), ChartRange::Weekly);
        assert!(!view.refresh(SIZE, &LIGHT));
    }

    #[test]
    fn test_initial_draw_delay() {
        let t0 = AppInstant::now();
        let view = ChartView::new(t0);
        assert!(!view.is_ready(t0));
        assert!(!view.is_ready(t0 + Duration::from_millis(99)));
        assert!(view.is_ready(t0 + Duration::from_millis(100)));
    }
}
