use eframe::egui::{Align, Button, Layout, RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::{
    config::DF,
    domain::{OrdersTable, SortIndicator, SortKey},
    ui::{
        Palette, UI_TEXT, UiStyleExt,
        ui_text::{ICON_SORT, ICON_SORT_ASC, ICON_SORT_DESC},
    },
    utils::format_amount,
};

fn indicator_icon(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Neutral => ICON_SORT,
        SortIndicator::Up => ICON_SORT_ASC,
        SortIndicator::Down => ICON_SORT_DESC,
    }
}

pub(crate) fn render_orders(ui: &mut Ui, table: &mut OrdersTable, palette: &Palette) {
    palette.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.heading(&UI_TEXT.orders_title);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let response = ui.add(
                    TextEdit::singleline(&mut table.search)
                        .hint_text(UI_TEXT.orders_search_hint.as_str())
                        .desired_width(200.0),
                );
                if response.changed() {
                    table.apply_search();
                    if DF.log_table_events {
                        log::info!(
                            "Order search '{}' -> {} rows",
                            table.search,
                            table.rows().len()
                        );
                    }
                }
            });
        });
        ui.add_space(8.0);

        let mut clicked: Option<SortKey> = None;
        let sort_state = table.sort_state().clone();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(Column::auto().at_least(80.0), 5)
            .column(Column::remainder())
            .header(24.0, |mut header| {
                for key in SortKey::iter() {
                    header.col(|ui| {
                        let icon = indicator_icon(sort_state.indicator(key));
                        let text = format!("{} {}", key.title(), icon);
                        let label = RichText::new(text).strong().color(palette.text_muted);
                        let button = Button::new(label).frame(false);
                        if ui.add(button).clicked() {
                            clicked = Some(key);
                        }
                    });
                }
            })
            .body(|mut body| {
                for order in table.rows() {
                    body.row(24.0, |mut row| {
                        row.col(|ui| {
                            ui.label(order.id);
                        });
                        row.col(|ui| {
                            ui.label(order.user);
                        });
                        row.col(|ui| {
                            ui.label(order.product);
                        });
                        row.col(|ui| {
                            ui.label(order.date.format("%Y-%m-%d").to_string());
                        });
                        row.col(|ui| {
                            ui.label(format_amount(order.amount));
                        });
                        row.col(|ui| {
                            ui.status_badge(order.status, palette);
                        });
                    });
                }
            });

        if table.rows().is_empty() {
            ui.label_subdued(&UI_TEXT.orders_empty, palette);
        }

        if let Some(key) = clicked {
            let direction = table.click_header(key);
            if DF.log_table_events {
                log::info!("Orders sorted by {} ({:?})", key, direction);
            }
        }
    });
}
