use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    config::{IntMetricConfig, KPI, RateMetricConfig},
    utils::{format_currency, format_percent, round1},
};

/// The four simulated dashboard metrics at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiState {
    /// Whole dollars
    pub revenue: i64,
    pub orders: i64,
    pub users: i64,
    /// Percent, one decimal place
    pub conversion: f64,
}

impl Default for KpiState {
    fn default() -> Self {
        Self {
            revenue: KPI.revenue.seed,
            orders: KPI.orders.seed,
            users: KPI.users.seed,
            conversion: KPI.conversion.seed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Up/down/flat marker derived from the percent change between two consecutive values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub direction: TrendDirection,
    pub change_pct: f64,
}

impl Trend {
    pub fn between(previous: f64, current: f64) -> Self {
        let change_pct = if previous == 0.0 {
            0.0
        } else {
            (current - previous) / previous * 100.0
        };
        let direction = if change_pct > KPI.flat_threshold_pct {
            TrendDirection::Up
        } else if change_pct < -KPI.flat_threshold_pct {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };
        Self {
            direction,
            change_pct,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            TrendDirection::Up => write!(f, "+{:.1}%", self.change_pct.abs()),
            TrendDirection::Down => write!(f, "-{:.1}%", self.change_pct.abs()),
            TrendDirection::Flat => write!(f, "0.0%"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiTrends {
    pub revenue: Trend,
    pub orders: Trend,
    pub users: Trend,
    pub conversion: Trend,
}

/// Output of one simulator step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiTick {
    pub next: KpiState,
    pub trends: KpiTrends,
}

impl KpiState {
    /// Perturbs every metric once and classifies the trends against `self`.
    pub fn step<R: Rng>(&self, rng: &mut R) -> KpiTick {
        let next = KpiState {
            revenue: perturb_count(self.revenue, &KPI.revenue, rng),
            orders: perturb_count(self.orders, &KPI.orders, rng),
            users: perturb_count(self.users, &KPI.users, rng),
            conversion: perturb_rate(self.conversion, &KPI.conversion, rng),
        };
        KpiTick {
            next,
            trends: self.trends_to(&next),
        }
    }

    pub fn trends_to(&self, next: &KpiState) -> KpiTrends {
        KpiTrends {
            revenue: Trend::between(self.revenue as f64, next.revenue as f64),
            orders: Trend::between(self.orders as f64, next.orders as f64),
            users: Trend::between(self.users as f64, next.users as f64),
            conversion: Trend::between(self.conversion, next.conversion),
        }
    }

    pub fn revenue_text(&self) -> String {
        format_currency(self.revenue)
    }

    pub fn orders_text(&self) -> String {
        self.orders.to_string()
    }

    pub fn users_text(&self) -> String {
        self.users.to_string()
    }

    pub fn conversion_text(&self) -> String {
        format_percent(self.conversion)
    }
}

pub fn perturb_count<R: Rng>(previous: i64, cfg: &IntMetricConfig, rng: &mut R) -> i64 {
    let delta = rng.random_range(-cfg.spread..=cfg.spread);
    (previous + delta).max(cfg.floor)
}

pub fn perturb_rate<R: Rng>(previous: f64, cfg: &RateMetricConfig, rng: &mut R) -> f64 {
    let delta = rng.random_range(-cfg.spread..cfg.spread);
    round1(previous + delta).max(cfg.floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_trend_thresholds() {
        assert_eq!(Trend::between(100.0, 100.06).direction, TrendDirection::Up);
        assert_eq!(Trend::between(100.0, 99.94).direction, TrendDirection::Down);
        assert_eq!(Trend::between(100.0, 100.0).direction, TrendDirection::Flat);
        assert_eq!(Trend::between(100.0, 100.04).direction, TrendDirection::Flat);
    }

    #[test]
    fn test_trend_from_zero_is_flat() {
        let trend = Trend::between(0.0, 250.0);
        assert_eq!(trend.direction, TrendDirection::Flat);
        assert_eq!(trend.change_pct, 0.0);
    }

    #[test]
    fn test_trend_labels() {
        assert_eq!(Trend::between(100.0, 112.0).to_string(), "+12.0%");
        assert_eq!(Trend::between(200.0, 150.0).to_string(), "-25.0%");
        assert_eq!(Trend::between(50.0, 50.0).to_string(), "0.0%");
    }

    #[test]
    fn test_seed_values() {
        let state = KpiState::default();
        assert_eq!(state.revenue, 10_000);
        assert_eq!(state.orders, 100);
        assert_eq!(state.users, 700);
        assert_eq!(state.conversion, 2.5);
        assert_eq!(state.revenue_text(), "$10,000");
        assert_eq!(state.conversion_text(), "2.5%");
    }

    #[test]
    fn test_step_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = KpiState::default();
        for _ in 0..2_000 {
            let tick = state.step(&mut rng);
            let next = tick.next;

            assert!(next.revenue >= 0);
            assert!(next.orders >= 0);
            assert!(next.users >= 0);
            assert!(next.conversion >= 0.1);

            assert!(next.revenue == 0 || (next.revenue - state.revenue).abs() <= 4_000);
            assert!(next.orders == 0 || (next.orders - state.orders).abs() <= 20);
            assert!(next.users == 0 || (next.users - state.users).abs() <= 50);
            assert!(next.conversion == 0.1 || (next.conversion - state.conversion).abs() <= 0.55);

            assert_eq!(tick.trends, state.trends_to(&next));
            state = next;
        }
    }

    #[test]
    fn test_floor_clips_large_drops() {
        let mut rng = StdRng::seed_from_u64(42);
        let near_zero = KpiState {
            revenue: 0,
            orders: 0,
            users: 0,
            conversion: 0.1,
        };
        for _ in 0..200 {
            let next = near_zero.step(&mut rng).next;
            assert!(next.revenue >= 0 && next.revenue <= 4_000);
            assert!(next.orders >= 0 && next.orders <= 20);
            assert!(next.users >= 0 && next.users <= 50);
            assert!(next.conversion >= 0.1 && next.conversion <= 0.6);
        }
    }

    #[test]
    fn test_conversion_has_one_decimal() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = KpiState::default();
        for _ in 0..100 {
            state = state.step(&mut rng).next;
            let scaled = state.conversion * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_walk() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let start = KpiState::default();
        assert_eq!(start.step(&mut a), start.step(&mut b));
    }
}
