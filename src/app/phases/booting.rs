use eframe::{Frame, egui::Context};

use crate::app::{
    App,
    phases::PhaseView,
    state::{AppState, BootState},
};

impl PhaseView for BootState {
    fn tick(&mut self, app: &mut App, ctx: &Context, _frame: &mut Frame) -> AppState {
        app.boot(ctx)
    }
}
