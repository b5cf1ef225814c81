use eframe::egui::{RichText, Ui};

use crate::{
    domain::{KpiState, Trend},
    engine::KpiSimulator,
    ui::{Palette, UI_TEXT, UiStyleExt},
};

fn kpi_card(ui: &mut Ui, palette: &Palette, title: &str, value: String, trend: Option<&Trend>) {
    palette.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label_subdued(title, palette);
        ui.label(RichText::new(value).size(24.0).strong().color(palette.text));
        match trend {
            Some(trend) => ui.trend_badge(trend, palette),
            None => ui.label_subdued(&UI_TEXT.kpi_waiting, palette),
        }
    });
}

/// The four KPI cards. Stacks vertically when `narrow`.
pub(crate) fn render_kpi_cards(ui: &mut Ui, sim: &KpiSimulator, palette: &Palette, narrow: bool) {
    let state: &KpiState = sim.state();
    let trends = sim.trends();
    let cards = [
        (
            &UI_TEXT.kpi_revenue,
            state.revenue_text(),
            trends.map(|t| &t.revenue),
        ),
        (
            &UI_TEXT.kpi_orders,
            state.orders_text(),
            trends.map(|t| &t.orders),
        ),
        (
            &UI_TEXT.kpi_users,
            state.users_text(),
            trends.map(|t| &t.users),
        ),
        (
            &UI_TEXT.kpi_conversion,
            state.conversion_text(),
            trends.map(|t| &t.conversion),
        ),
    ];

    if narrow {
        for (title, value, trend) in cards {
            kpi_card(ui, palette, title, value, trend);
            ui.add_space(8.0);
        }
    } else {
        ui.columns(cards.len(), |cols| {
            for (col, (title, value, trend)) in cols.iter_mut().zip(cards) {
                kpi_card(col, palette, title, value, trend);
            }
        });
    }
}
