use eframe::egui::{Button, Color32, Response, RichText, Ui};

use crate::{
    domain::{OrderStatus, Trend, TrendDirection},
    ui::{
        Palette,
        ui_text::{ICON_TREND_DOWN, ICON_TREND_FLAT, ICON_TREND_UP},
    },
};

pub fn trend_icon(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => ICON_TREND_UP,
        TrendDirection::Down => ICON_TREND_DOWN,
        TrendDirection::Flat => ICON_TREND_FLAT,
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>, palette: &Palette);
    fn trend_badge(&mut self, trend: &Trend, palette: &Palette);
    fn status_badge(&mut self, status: OrderStatus, palette: &Palette);
    /// Frameless glyph button used in the header and sidebar.
    fn icon_button(&mut self, icon: &str, hover: &str) -> Response;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>, palette: &Palette) {
        self.label(RichText::new(text).small().color(palette.text_muted));
    }

    fn trend_badge(&mut self, trend: &Trend, palette: &Palette) {
        let color = palette.trend_color(trend.direction);
        self.label(
            RichText::new(format!("{} {}", trend_icon(trend.direction), trend))
                .small()
                .strong()
                .color(color),
        );
    }

    fn status_badge(&mut self, status: OrderStatus, palette: &Palette) {
        let color = palette.status_color(status);
        self.label(
            RichText::new(status.to_string())
                .small()
                .strong()
                .color(color)
                .background_color(apply_opacity(color, 0.15)),
        );
    }

    fn icon_button(&mut self, icon: &str, hover: &str) -> Response {
        self.add(Button::new(RichText::new(icon).size(18.0)).frame(false))
            .on_hover_text(hover)
    }
}
