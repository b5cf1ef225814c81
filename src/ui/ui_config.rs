use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke, Visuals};

use crate::domain::{OrderStatus, Theme, TrendDirection};

pub use crate::ui::ui_text::UI_TEXT;

/// Theme variables read by the renderers at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Color32,
    pub body_bg: Color32,
    pub card_bg: Color32,
    pub sidebar_bg: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
}

pub static LIGHT: Palette = Palette {
    primary: Color32::from_rgb(0x6c, 0x5c, 0xe7),
    body_bg: Color32::from_rgb(0xf5, 0xf6, 0xfa),
    card_bg: Color32::from_rgb(0xff, 0xff, 0xff),
    sidebar_bg: Color32::from_rgb(0xff, 0xff, 0xff),
    text: Color32::from_rgb(0x2d, 0x34, 0x36),
    text_muted: Color32::from_rgb(0x63, 0x6e, 0x72),
    border: Color32::from_rgb(0xdd, 0xdd, 0xdd),
    success: Color32::from_rgb(0x00, 0xb8, 0x94),
    warning: Color32::from_rgb(0xfd, 0xcb, 0x6e),
    danger: Color32::from_rgb(0xd6, 0x30, 0x31),
};

pub static DARK: Palette = Palette {
    primary: Color32::from_rgb(0xa2, 0x9b, 0xfe),
    body_bg: Color32::from_rgb(0x1e, 0x1e, 0x2f),
    card_bg: Color32::from_rgb(0x27, 0x29, 0x3d),
    sidebar_bg: Color32::from_rgb(0x27, 0x29, 0x3d),
    text: Color32::from_rgb(0xdf, 0xe6, 0xe9),
    text_muted: Color32::from_rgb(0xb2, 0xbe, 0xc3),
    border: Color32::from_rgb(0x3d, 0x3f, 0x55),
    success: Color32::from_rgb(0x55, 0xef, 0xc4),
    warning: Color32::from_rgb(0xff, 0xea, 0xa7),
    danger: Color32::from_rgb(0xff, 0x76, 0x75),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn trend_color(&self, direction: TrendDirection) -> Color32 {
        match direction {
            TrendDirection::Up => self.success,
            TrendDirection::Down => self.danger,
            TrendDirection::Flat => self.text_muted,
        }
    }

    pub fn status_color(&self, status: OrderStatus) -> Color32 {
        match status {
            OrderStatus::Completed => self.success,
            OrderStatus::Pending => self.warning,
            OrderStatus::Cancelled => self.danger,
        }
    }

    pub fn visuals(&self, theme: Theme) -> Visuals {
        let mut visuals = if theme.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.panel_fill = self.body_bg;
        visuals.window_fill = self.card_bg;
        visuals.extreme_bg_color = self.card_bg;
        visuals.selection.bg_fill = self.primary;
        visuals.hyperlink_color = self.primary;
        visuals.widgets.noninteractive.fg_stroke.color = self.text;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.fg_stroke.color = self.text;
        visuals.widgets.hovered.fg_stroke.color = self.primary;
        visuals.widgets.active.fg_stroke.color = self.primary;
        visuals
    }

    /// Frame for dashboard cards (KPIs, chart, table, activity)
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.card_bg,
            stroke: Stroke::new(1.0, self.border),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame for the sidebar panel / mobile overlay
    pub fn sidebar_frame(&self) -> Frame {
        Frame {
            fill: self.sidebar_bg,
            stroke: Stroke::new(1.0, self.border),
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the top header bar (tighter vertical padding)
    pub fn header_frame(&self) -> Frame {
        Frame {
            fill: self.card_bg,
            stroke: Stroke::new(1.0, self.border),
            inner_margin: Margin::symmetric(16, 8),
            ..Default::default()
        }
    }

    pub fn central_frame(&self) -> Frame {
        Frame {
            fill: self.body_bg,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_per_theme() {
        assert_eq!(*Palette::for_theme(Theme::Light), LIGHT);
        assert_eq!(*Palette::for_theme(Theme::Dark), DARK);
        assert_ne!(LIGHT.primary, DARK.primary);
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let p = &LIGHT;
        assert_ne!(p.status_color(OrderStatus::Completed), p.status_color(OrderStatus::Pending));
        assert_ne!(p.status_color(OrderStatus::Pending), p.status_color(OrderStatus::Cancelled));
    }
}
