use eframe::{Frame, egui::Context};

use crate::app::{
    App,
    phases::phase_view::PhaseView,
    state::{AppState, RunningState},
};

impl PhaseView for RunningState {
    fn tick(&mut self, app: &mut App, ctx: &Context, frame: &mut Frame) -> AppState {
        app.tick_running_state(ctx, frame);
        AppState::Running(RunningState)
    }
}
