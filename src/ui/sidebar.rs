use eframe::egui::{Align, Area, Context, Id, Layout, Order, Rect, RichText, SidePanel, Ui, pos2};

use crate::{
    app::SidebarState,
    config::LAYOUT,
    ui::{
        Palette, UI_TEXT, UiStyleExt,
        ui_text::{ICON_COLLAPSE, ICON_EXPAND},
    },
};

fn nav_list(ui: &mut Ui, palette: &Palette, icons_only: bool) {
    for (i, (icon, label)) in UI_TEXT.nav_items.iter().enumerate() {
        let text = if icons_only {
            RichText::new(*icon).size(18.0)
        } else {
            RichText::new(format!("{}  {}", icon, label))
        };
        let selected = i == 0;
        let text = if selected {
            text.color(palette.primary).strong()
        } else {
            text.color(palette.text)
        };
        let response = ui.selectable_label(selected, text);
        if icons_only {
            response.on_hover_text(*label);
        }
        ui.add_space(4.0);
    }
}

/// Desktop side panel. Returns its rect and whether the collapse toggle was clicked.
pub(crate) fn render_side_panel(
    ctx: &Context,
    sidebar: &SidebarState,
    palette: &Palette,
) -> (Rect, bool) {
    let width = if sidebar.collapsed {
        LAYOUT.sidebar_collapsed_width
    } else {
        LAYOUT.sidebar_width
    };
    let mut toggled = false;
    let panel = SidePanel::left("sidebar")
        .exact_width(width)
        .resizable(false)
        .frame(palette.sidebar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if !sidebar.collapsed {
                    ui.label(
                        RichText::new(&UI_TEXT.brand)
                            .strong()
                            .size(18.0)
                            .color(palette.primary),
                    );
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let icon = if sidebar.collapsed { ICON_EXPAND } else { ICON_COLLAPSE };
                    toggled = ui.icon_button(icon, &UI_TEXT.hover_sidebar_toggle).clicked();
                });
            });
            ui.separator();
            nav_list(ui, palette, sidebar.collapsed);
        });
    (panel.response.rect, toggled)
}

/// Mobile overlay, drawn only while the sidebar is active.
pub(crate) fn render_overlay(ctx: &Context, palette: &Palette) -> Rect {
    let area = Area::new(Id::new("sidebar_overlay"))
        .order(Order::Foreground)
        .fixed_pos(pos2(0.0, LAYOUT.header_height))
        .show(ctx, |ui| {
            palette.sidebar_frame().show(ui, |ui| {
                ui.set_width(LAYOUT.sidebar_width);
                ui.label(RichText::new(&UI_TEXT.brand).strong().size(18.0).color(palette.primary));
                ui.separator();
                nav_list(ui, palette, false);
            });
        });
    area.response.rect
}
