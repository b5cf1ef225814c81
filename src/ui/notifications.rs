use eframe::egui::{
    Align2, Area, Color32, Context, FontId, Frame, Id, Order, Rect, Response, RichText, Stroke, Ui,
    vec2,
};

use crate::{
    domain::NotificationState,
    ui::{
        Palette, UI_TEXT, UiStyleExt,
        ui_text::{ICON_BELL, ICON_DOT},
    },
};

/// Bell button with the alert-count badge painted on its corner.
pub(crate) fn render_bell(ui: &mut Ui, state: &NotificationState, palette: &Palette) -> Response {
    let response = ui.icon_button(ICON_BELL, &UI_TEXT.hover_notifications);
    let count = state.badge_count();
    if count > 0 {
        let center = response.rect.right_top() + vec2(-2.0, 4.0);
        ui.painter().circle_filled(center, 7.0, palette.danger);
        ui.painter().text(
            center,
            Align2::CENTER_CENTER,
            count.to_string(),
            FontId::proportional(10.0),
            Color32::WHITE,
        );
    }
    response
}

/// Dropdown panel under the bell. Returns the panel rect when it is open.
pub(crate) fn render_dropdown(
    ctx: &Context,
    state: &NotificationState,
    anchor: Rect,
    palette: &Palette,
) -> Option<Rect> {
    if !state.is_open() {
        return None;
    }
    let area = Area::new(Id::new("notification_dropdown"))
        .order(Order::Foreground)
        .pivot(Align2::RIGHT_TOP)
        .fixed_pos(anchor.right_bottom() + vec2(0.0, 6.0))
        .show(ctx, |ui| {
            Frame::popup(ui.style())
                .fill(palette.card_bg)
                .stroke(Stroke::new(1.0, palette.border))
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_min_width(260.0);
                    ui.style_mut().interaction.selectable_labels = false;
                    let title = RichText::new(&UI_TEXT.notifications_title).strong();
                    ui.label(title.color(palette.text));
                    ui.separator();
                    for item in state.items() {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(ICON_DOT).small().color(palette.primary));
                            ui.label(RichText::new(item).color(palette.text));
                        });
                    }
                });
        });
    Some(area.response.rect)
}
