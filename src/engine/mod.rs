//! Timer-driven simulation behind the KPI cards.

mod scheduler;
mod simulator;

pub use scheduler::KpiScheduler;
pub use simulator::KpiSimulator;
