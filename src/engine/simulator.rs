use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::{DF, KPI},
    domain::{KpiState, KpiTrends},
    engine::KpiScheduler,
    utils::AppInstant,
};

/// KPI random walk driven by its own scheduler.
pub struct KpiSimulator {
    state: KpiState,
    trends: Option<KpiTrends>,
    ticks: u64,
    rng: StdRng,
    scheduler: KpiScheduler,
}

impl Default for KpiSimulator {
    fn default() -> Self {
        Self::new(None, KPI.tick_period)
    }
}

impl KpiSimulator {
    /// `seed` fixes the random walk; `None` seeds from the OS.
    pub fn new(seed: Option<u64>, period: Duration) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            state: KpiState::default(),
            trends: None,
            ticks: 0,
            rng,
            scheduler: KpiScheduler::new(period),
        }
    }

    pub fn state(&self) -> &KpiState {
        &self.state
    }

    /// Trends of the latest tick; `None` before the first one.
    pub fn trends(&self) -> Option<&KpiTrends> {
        self.trends.as_ref()
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn scheduler(&self) -> &KpiScheduler {
        &self.scheduler
    }

    pub fn start(&mut self, now: AppInstant) {
        self.scheduler.start(now);
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Runs one step unconditionally.
    pub fn tick(&mut self) {
        let tick = self.state.step(&mut self.rng);
        self.state = tick.next;
        self.trends = Some(tick.trends);
        self.ticks += 1;
        if DF.log_kpi_ticks {
            log::info!(
                "KPI tick #{}: revenue {} ({}), orders {} ({}), users {} ({}), conversion {} ({})",
                self.ticks,
                self.state.revenue_text(),
                tick.trends.revenue,
                self.state.orders,
                tick.trends.orders,
                self.state.users,
                tick.trends.users,
                self.state.conversion_text(),
                tick.trends.conversion,
            );
        }
    }

    /// Ticks if the scheduler says one is due. Returns whether it ticked.
    pub fn update(&mut self, now: AppInstant) -> bool {
        if self.scheduler.poll(now) {
            self.tick();
            true
        } else {
            false
        }
    }

    pub fn time_until_next(&self, now: AppInstant) -> Option<Duration> {
        self.scheduler.time_until_next(now)
    }
}
