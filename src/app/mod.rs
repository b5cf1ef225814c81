mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, HitAreas, RunningState, route_page_click};
pub use state::{PageClick, SidebarState};

pub use root::App;
