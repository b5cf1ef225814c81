use eframe::egui::{Align, Context, Layout, Rect, RichText, TopBottomPanel};

use crate::{
    config::LAYOUT,
    domain::{NotificationState, Theme},
    ui::{
        Palette, UI_TEXT, UiStyleExt,
        notifications::render_bell,
        ui_text::{ICON_MENU, ICON_MOON, ICON_SUN},
    },
};

/// What happened in the header this frame.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HeaderEvents {
    pub(crate) theme_clicked: bool,
    pub(crate) mobile_toggle_clicked: bool,
    pub(crate) mobile_toggle_rect: Option<Rect>,
    pub(crate) bell_clicked: bool,
    pub(crate) bell_rect: Option<Rect>,
}

/// Moon while light, sun while dark.
pub fn theme_icon(theme: Theme) -> &'static str {
    if theme.is_dark() { ICON_SUN } else { ICON_MOON }
}

pub(crate) fn render_header(
    ctx: &Context,
    theme: Theme,
    notifications: &NotificationState,
    palette: &Palette,
    mobile: bool,
) -> HeaderEvents {
    let mut events = HeaderEvents::default();
    TopBottomPanel::top("header")
        .frame(palette.header_frame())
        .exact_height(LAYOUT.header_height)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                if mobile {
                    let toggle = ui.icon_button(ICON_MENU, &UI_TEXT.hover_mobile_menu);
                    events.mobile_toggle_clicked = toggle.clicked();
                    events.mobile_toggle_rect = Some(toggle.rect);
                }
                ui.label(
                    RichText::new(&UI_TEXT.header_title)
                        .size(18.0)
                        .strong()
                        .color(palette.text),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let bell = render_bell(ui, notifications, palette);
                    events.bell_clicked = bell.clicked();
                    events.bell_rect = Some(bell.rect);

                    events.theme_clicked = ui
                        .icon_button(theme_icon(theme), &UI_TEXT.hover_theme_switch)
                        .clicked();
                });
            });
        });
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_icon_swaps() {
        assert_eq!(theme_icon(Theme::Light), ICON_MOON);
        assert_eq!(theme_icon(Theme::Dark), ICON_SUN);
        assert_eq!(theme_icon(Theme::Light.toggled().toggled()), ICON_MOON);
    }
}
