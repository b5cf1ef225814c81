pub(super) mod booting;
pub(super) mod phase_view;
pub(super) mod running;

pub(crate) use phase_view::PhaseView;
