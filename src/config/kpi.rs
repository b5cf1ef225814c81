//! KPI simulator configuration

use std::time::Duration;

/// Random walk parameters for one integer metric.
pub struct IntMetricConfig {
    pub seed: i64,
    /// Perturbation is drawn uniformly from `-spread..=spread`
    pub spread: i64,
    pub floor: i64,
}

/// Random walk parameters for the conversion rate (percent).
pub struct RateMetricConfig {
    pub seed: f64,
    /// Perturbation is drawn uniformly from `[-spread, spread)`
    pub spread: f64,
    pub floor: f64,
}

pub struct KpiConfig {
    pub revenue: IntMetricConfig,
    pub orders: IntMetricConfig,
    pub users: IntMetricConfig,
    pub conversion: RateMetricConfig,
    /// Percent change (absolute) below which a trend reads as flat
    pub flat_threshold_pct: f64,
    pub tick_period: Duration,
}

pub const KPI: KpiConfig = KpiConfig {
    revenue: IntMetricConfig {
        seed: 10_000,
        spread: 4_000,
        floor: 0,
    },
    orders: IntMetricConfig {
        seed: 100,
        spread: 20,
        floor: 0,
    },
    users: IntMetricConfig {
        seed: 700,
        spread: 50,
        floor: 0,
    },
    conversion: RateMetricConfig {
        seed: 2.5,
        spread: 0.5,
        floor: 0.1,
    },
    flat_threshold_pct: 0.05,
    tick_period: Duration::from_secs(5),
};
