use eframe::egui::{RichText, Ui};

use crate::{
    domain::ACTIVITY,
    ui::{Palette, UI_TEXT, UiStyleExt, ui_text::ICON_CLOCK},
};

pub(crate) fn render_activity(ui: &mut Ui, palette: &Palette) {
    palette.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading(&UI_TEXT.activity_title);
        ui.add_space(8.0);
        for item in &ACTIVITY {
            ui.horizontal(|ui| {
                ui.label(RichText::new(ICON_CLOCK).color(palette.primary));
                ui.vertical(|ui| {
                    ui.label(RichText::new(item.message).color(palette.text));
                    ui.label_subdued(item.time_label(), palette);
                });
            });
            ui.add_space(6.0);
        }
    });
}
